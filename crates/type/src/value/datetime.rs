// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use super::{
	Date, Time,
	time::{MICROS_PER_DAY, MICROS_PER_SECOND},
};

/// A timestamp without zone, stored as microseconds since the Unix epoch.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime {
	micros_since_epoch: i64,
}

impl DateTime {
	pub fn new(date: Date, time: Time) -> Self {
		Self {
			micros_since_epoch: date.to_days_since_epoch() as i64 * MICROS_PER_DAY
				+ time.to_micros_since_midnight(),
		}
	}

	pub fn from_micros_since_epoch(micros_since_epoch: i64) -> Self {
		Self {
			micros_since_epoch,
		}
	}

	pub fn from_seconds_since_epoch(seconds: i64) -> Self {
		Self {
			micros_since_epoch: seconds.saturating_mul(MICROS_PER_SECOND),
		}
	}

	pub fn to_micros_since_epoch(&self) -> i64 {
		self.micros_since_epoch
	}

	pub fn date(&self) -> Date {
		let days = self.micros_since_epoch.div_euclid(MICROS_PER_DAY);
		Date::from_days_since_epoch(days as i32)
	}

	pub fn time(&self) -> Time {
		Time::from_micros_since_midnight(self.micros_since_epoch.rem_euclid(MICROS_PER_DAY))
	}
}

impl Display for DateTime {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} {}", self.date(), self.time())
	}
}

impl Serialize for DateTime {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_epoch() {
		assert_eq!(DateTime::from_micros_since_epoch(0).to_string(), "1970-01-01 00:00:00");
	}

	#[test]
	fn test_compose() {
		let dt = DateTime::new(Date::new(2017, 6, 1).unwrap(), Time::new(12, 30, 0, 5).unwrap());
		assert_eq!(dt.to_string(), "2017-06-01 12:30:00.000005");
		assert_eq!(dt.date(), Date::new(2017, 6, 1).unwrap());
		assert_eq!(dt.time(), Time::new(12, 30, 0, 5).unwrap());
	}

	#[test]
	fn test_before_epoch() {
		let dt = DateTime::from_micros_since_epoch(-1);
		assert_eq!(dt.to_string(), "1969-12-31 23:59:59.999999");
	}
}
