// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

pub(crate) const MICROS_PER_SECOND: i64 = 1_000_000;
pub(crate) const MICROS_PER_DAY: i64 = 86_400 * MICROS_PER_SECOND;

/// A time of day with microsecond precision, stored as microseconds since
/// midnight.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Time {
	micros_since_midnight: i64,
}

impl Time {
	pub fn new(hour: u32, minute: u32, second: u32, micro: u32) -> Option<Self> {
		if hour > 23 || minute > 59 || second > 59 || micro > 999_999 {
			return None;
		}
		let seconds = hour as i64 * 3600 + minute as i64 * 60 + second as i64;
		Some(Self {
			micros_since_midnight: seconds * MICROS_PER_SECOND + micro as i64,
		})
	}

	/// Takes the raw slot value; values outside one day wrap onto it.
	pub fn from_micros_since_midnight(micros: i64) -> Self {
		Self {
			micros_since_midnight: micros.rem_euclid(MICROS_PER_DAY),
		}
	}

	pub fn to_micros_since_midnight(&self) -> i64 {
		self.micros_since_midnight
	}

	pub fn hour(&self) -> u32 {
		(self.micros_since_midnight / (3600 * MICROS_PER_SECOND)) as u32
	}

	pub fn minute(&self) -> u32 {
		(self.micros_since_midnight / (60 * MICROS_PER_SECOND) % 60) as u32
	}

	pub fn second(&self) -> u32 {
		(self.micros_since_midnight / MICROS_PER_SECOND % 60) as u32
	}

	pub fn micro(&self) -> u32 {
		(self.micros_since_midnight % MICROS_PER_SECOND) as u32
	}
}

impl Display for Time {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())?;
		if self.micro() != 0 {
			write!(f, ".{:06}", self.micro())?;
		}
		Ok(())
	}
}

impl Serialize for Time {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display() {
		assert_eq!(Time::new(0, 0, 0, 0).unwrap().to_string(), "00:00:00");
		assert_eq!(Time::new(13, 5, 9, 0).unwrap().to_string(), "13:05:09");
		assert_eq!(Time::new(23, 59, 59, 250).unwrap().to_string(), "23:59:59.000250");
	}

	#[test]
	fn test_components() {
		let time = Time::new(7, 30, 15, 42).unwrap();
		assert_eq!(time.hour(), 7);
		assert_eq!(time.minute(), 30);
		assert_eq!(time.second(), 15);
		assert_eq!(time.micro(), 42);
	}

	#[test]
	fn test_invalid() {
		assert!(Time::new(24, 0, 0, 0).is_none());
		assert!(Time::new(0, 60, 0, 0).is_none());
		assert!(Time::new(0, 0, 0, 1_000_000).is_none());
	}

	#[test]
	fn test_wraps_raw_value() {
		let time = Time::from_micros_since_midnight(MICROS_PER_DAY + 1);
		assert_eq!(time.to_micros_since_midnight(), 1);
	}
}
