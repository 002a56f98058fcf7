// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Object identifier of a stored row. Rendered with the `@0` suffix the
/// store uses for oids in text form.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Oid(pub u64);

impl Oid {
	pub fn value(&self) -> u64 {
		self.0
	}
}

impl From<u64> for Oid {
	fn from(value: u64) -> Self {
		Self(value)
	}
}

impl Display for Oid {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}@0", self.0)
	}
}
