// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use serde::{Serialize, Serializer};

/// A fixed-point number handed out as the raw stored integer plus its
/// scale, so no precision is lost on the way to the caller.
///
/// The represented number is `unscaled / 10^scale`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Decimal {
	unscaled: i64,
	scale: u32,
}

impl Decimal {
	pub fn new(unscaled: i64, scale: u32) -> Self {
		Self {
			unscaled,
			scale,
		}
	}

	pub fn unscaled(&self) -> i64 {
		self.unscaled
	}

	pub fn scale(&self) -> u32 {
		self.scale
	}

	pub fn to_big_decimal(&self) -> BigDecimal {
		BigDecimal::new(BigInt::from(self.unscaled), self.scale as i64)
	}
}

impl From<Decimal> for BigDecimal {
	fn from(value: Decimal) -> Self {
		value.to_big_decimal()
	}
}

impl Display for Decimal {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let digits = self.unscaled.unsigned_abs().to_string();
		let sign = if self.unscaled < 0 {
			"-"
		} else {
			""
		};
		let scale = self.scale as usize;
		if scale == 0 {
			return write!(f, "{}{}", sign, digits);
		}

		let padded = if digits.len() <= scale {
			format!("{}{}", "0".repeat(scale + 1 - digits.len()), digits)
		} else {
			digits
		};
		let (int_part, frac_part) = padded.split_at(padded.len() - scale);
		write!(f, "{}{}.{}", sign, int_part, frac_part)
	}
}

impl Serialize for Decimal {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.to_string())
	}
}
