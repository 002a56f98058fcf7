// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

/// A calendar date without time information.
///
/// Stored the way date columns store it: days since the Unix epoch
/// (1970-01-01), negative before it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
	days_since_epoch: i32,
}

// Calendar utilities
impl Date {
	#[inline]
	fn is_leap_year(year: i64) -> bool {
		(year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
	}

	#[inline]
	fn days_in_month(year: i64, month: u32) -> u32 {
		match month {
			1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
			4 | 6 | 9 | 11 => 30,
			2 => {
				if Self::is_leap_year(year) {
					29
				} else {
					28
				}
			}
			_ => 0,
		}
	}

	/// Howard Hinnant's days_from_civil, shifted so March is month zero.
	fn ymd_to_days(year: i64, month: u32, day: u32) -> i64 {
		let (y, m) = if month <= 2 {
			(year - 1, month as i64 + 9)
		} else {
			(year, month as i64 - 3)
		};

		let era = y.div_euclid(400);
		let yoe = y - era * 400; // [0, 399]
		let doy = (153 * m + 2) / 5 + day as i64 - 1; // [0, 365]
		let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
		era * 146097 + doe - 719468
	}

	/// Inverse of `ymd_to_days`.
	fn days_to_ymd(days: i64) -> (i64, u32, u32) {
		let z = days + 719468;
		let era = z.div_euclid(146097);
		let doe = z - era * 146097; // [0, 146096]
		let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365; // [0, 399]
		let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
		let mp = (5 * doy + 2) / 153; // [0, 11]
		let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
		let month = if mp < 10 {
			mp + 3
		} else {
			mp - 9
		};
		let year = if month <= 2 {
			yoe + era * 400 + 1
		} else {
			yoe + era * 400
		};
		(year, month as u32, day)
	}
}

impl Date {
	pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
		let year = year as i64;
		if !(1..=12).contains(&month) || day < 1 || day > Self::days_in_month(year, month) {
			return None;
		}
		let days = Self::ymd_to_days(year, month, day);
		i32::try_from(days).ok().map(|days_since_epoch| Self {
			days_since_epoch,
		})
	}

	pub fn from_days_since_epoch(days_since_epoch: i32) -> Self {
		Self {
			days_since_epoch,
		}
	}

	pub fn to_days_since_epoch(&self) -> i32 {
		self.days_since_epoch
	}

	pub fn year(&self) -> i64 {
		Self::days_to_ymd(self.days_since_epoch as i64).0
	}

	pub fn month(&self) -> u32 {
		Self::days_to_ymd(self.days_since_epoch as i64).1
	}

	pub fn day(&self) -> u32 {
		Self::days_to_ymd(self.days_since_epoch as i64).2
	}
}

impl Display for Date {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let (year, month, day) = Self::days_to_ymd(self.days_since_epoch as i64);
		if year < 0 {
			write!(f, "-{:04}-{:02}-{:02}", -year, month, day)
		} else {
			write!(f, "{:04}-{:02}-{:02}", year, month, day)
		}
	}
}

impl Serialize for Date {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.to_string())
	}
}
