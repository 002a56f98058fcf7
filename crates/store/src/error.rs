// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use colexport_type::ExportError;

/// A failure reported by the store, passed on to callers verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct StoreError(pub String);

impl StoreError {
	pub fn new(message: impl Into<String>) -> Self {
		Self(message.into())
	}

	pub fn message(&self) -> &str {
		&self.0
	}
}

impl From<StoreError> for ExportError {
	fn from(err: StoreError) -> Self {
		ExportError::Upstream {
			message: err.0,
		}
	}
}

impl From<StoreError> for colexport_type::Error {
	fn from(err: StoreError) -> Self {
		ExportError::from(err).into()
	}
}

#[cfg(test)]
mod tests {
	use colexport_type::ErrorKind;

	use super::*;

	#[test]
	fn test_upstream_message_verbatim() {
		let err = colexport_type::Error::from(StoreError::new("statement 7 was never prepared"));
		assert_eq!(err.kind(), ErrorKind::Upstream);
		assert_eq!(err.message, "statement 7 was never prepared");
	}
}
