// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::Deref,
};

mod diagnostic;
mod export;

pub use diagnostic::{Diagnostic, IntoDiagnostic};
pub use export::ExportError;

/// The three failure classes a caller has to tell apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// Fatal to the call, never to the process: released handles, indices
	/// outside the declared bounds, unknown or mismatching type codes.
	Usage,
	/// An output buffer could not be allocated.
	ResourceExhaustion,
	/// The storage engine reported a failure; its message is carried verbatim.
	Upstream,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
	kind: ErrorKind,
	diagnostic: Box<Diagnostic>,
}

impl Error {
	pub fn new(kind: ErrorKind, diagnostic: Diagnostic) -> Self {
		Self {
			kind,
			diagnostic: Box::new(diagnostic),
		}
	}

	pub fn kind(&self) -> ErrorKind {
		self.kind
	}

	pub fn is_usage(&self) -> bool {
		self.kind == ErrorKind::Usage
	}

	pub fn diagnostic(self) -> Diagnostic {
		*self.diagnostic
	}
}

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.diagnostic
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&*self.diagnostic, f)
	}
}

impl std::error::Error for Error {}

impl From<ExportError> for Error {
	fn from(err: ExportError) -> Self {
		let kind = err.kind();
		Error::new(kind, err.into_diagnostic())
	}
}
