// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{Result, error::ExportError};

/// Closed set of logical column types. The discriminants are the stable
/// integer codes callers pass to the type-erased entry points.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TypeCode {
	Boolean = 1,
	Tinyint = 2,
	Smallint = 3,
	Int = 4,
	Bigint = 5,
	Real = 6,
	Double = 7,
	String = 8,
	Date = 9,
	Timestamp = 10,
	Time = 11,
	Blob = 12,
	Decimal = 13,
	Oid = 14,
}

impl TypeCode {
	pub const ALL: [TypeCode; 14] = [
		TypeCode::Boolean,
		TypeCode::Tinyint,
		TypeCode::Smallint,
		TypeCode::Int,
		TypeCode::Bigint,
		TypeCode::Real,
		TypeCode::Double,
		TypeCode::String,
		TypeCode::Date,
		TypeCode::Timestamp,
		TypeCode::Time,
		TypeCode::Blob,
		TypeCode::Decimal,
		TypeCode::Oid,
	];

	pub fn code(self) -> i32 {
		self as i32
	}

	pub fn from_code(code: i32) -> Result<Self> {
		Ok(match code {
			1 => TypeCode::Boolean,
			2 => TypeCode::Tinyint,
			3 => TypeCode::Smallint,
			4 => TypeCode::Int,
			5 => TypeCode::Bigint,
			6 => TypeCode::Real,
			7 => TypeCode::Double,
			8 => TypeCode::String,
			9 => TypeCode::Date,
			10 => TypeCode::Timestamp,
			11 => TypeCode::Time,
			12 => TypeCode::Blob,
			13 => TypeCode::Decimal,
			14 => TypeCode::Oid,
			_ => {
				return Err(ExportError::UnknownTypeCode {
					code,
				}
				.into());
			}
		})
	}

	/// Maps a store SQL type name onto its type code. Lookup is case
	/// insensitive; names without a mapping are rejected.
	pub fn from_sql_name(name: &str) -> Result<Self> {
		let lower = name.to_ascii_lowercase();
		Ok(match lower.as_str() {
			"boolean" | "bool" => TypeCode::Boolean,
			"tinyint" => TypeCode::Tinyint,
			"smallint" => TypeCode::Smallint,
			"int" | "integer" | "month_interval" => TypeCode::Int,
			"bigint" | "sec_interval" => TypeCode::Bigint,
			"real" => TypeCode::Real,
			"double" | "float" => TypeCode::Double,
			"char" | "varchar" | "clob" | "string" | "json" | "url" | "uuid" | "inet" => TypeCode::String,
			"date" => TypeCode::Date,
			"timestamp" | "timestamptz" => TypeCode::Timestamp,
			"time" | "timetz" => TypeCode::Time,
			"blob" => TypeCode::Blob,
			"decimal" | "numeric" => TypeCode::Decimal,
			"oid" => TypeCode::Oid,
			_ => {
				return Err(ExportError::UnknownSqlType {
					name: name.to_string(),
				}
				.into());
			}
		})
	}

	/// Byte width of one slot for fixed-width kinds. Decimal slots depend on
	/// the declared digits and strings/blobs live out of line.
	pub fn slot_width(self) -> Option<usize> {
		match self {
			TypeCode::Boolean | TypeCode::Tinyint => Some(1),
			TypeCode::Smallint => Some(2),
			TypeCode::Int | TypeCode::Real | TypeCode::Date => Some(4),
			TypeCode::Bigint | TypeCode::Double | TypeCode::Timestamp | TypeCode::Time | TypeCode::Oid => {
				Some(8)
			}
			TypeCode::String | TypeCode::Blob | TypeCode::Decimal => None,
		}
	}

	pub fn is_variable_width(self) -> bool {
		matches!(self, TypeCode::String | TypeCode::Blob)
	}
}

impl TryFrom<i32> for TypeCode {
	type Error = crate::Error;

	fn try_from(code: i32) -> Result<Self> {
		TypeCode::from_code(code)
	}
}

impl Display for TypeCode {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			TypeCode::Boolean => "boolean",
			TypeCode::Tinyint => "tinyint",
			TypeCode::Smallint => "smallint",
			TypeCode::Int => "int",
			TypeCode::Bigint => "bigint",
			TypeCode::Real => "real",
			TypeCode::Double => "double",
			TypeCode::String => "string",
			TypeCode::Date => "date",
			TypeCode::Timestamp => "timestamp",
			TypeCode::Time => "time",
			TypeCode::Blob => "blob",
			TypeCode::Decimal => "decimal",
			TypeCode::Oid => "oid",
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ErrorKind;

	#[test]
	fn test_codes_are_one_to_fourteen() {
		for (idx, code) in TypeCode::ALL.iter().enumerate() {
			assert_eq!(code.code(), idx as i32 + 1);
			assert_eq!(TypeCode::from_code(code.code()).unwrap(), *code);
		}
	}

	#[test]
	fn test_unknown_code() {
		for code in [0, 15, 99, -1] {
			let err = TypeCode::from_code(code).unwrap_err();
			assert_eq!(err.kind(), ErrorKind::Usage);
			assert!(err.message.contains("Unknown type"));
		}
	}

	#[test]
	fn test_sql_names() {
		assert_eq!(TypeCode::from_sql_name("int").unwrap(), TypeCode::Int);
		assert_eq!(TypeCode::from_sql_name("INTEGER").unwrap(), TypeCode::Int);
		assert_eq!(TypeCode::from_sql_name("varchar").unwrap(), TypeCode::String);
		assert_eq!(TypeCode::from_sql_name("clob").unwrap(), TypeCode::String);
		assert_eq!(TypeCode::from_sql_name("timestamptz").unwrap(), TypeCode::Timestamp);
		assert_eq!(TypeCode::from_sql_name("timetz").unwrap(), TypeCode::Time);
		assert_eq!(TypeCode::from_sql_name("sec_interval").unwrap(), TypeCode::Bigint);
		assert_eq!(TypeCode::from_sql_name("decimal").unwrap(), TypeCode::Decimal);
		assert_eq!(TypeCode::from_sql_name("oid").unwrap(), TypeCode::Oid);
	}

	#[test]
	fn test_unknown_sql_name() {
		let err = TypeCode::from_sql_name("hugeint").unwrap_err();
		assert_eq!(err.code, "TYPE_002");
		assert_eq!(err.message, "Unknown SQL type 'hugeint'");
	}

	#[test]
	fn test_slot_width() {
		assert_eq!(TypeCode::Boolean.slot_width(), Some(1));
		assert_eq!(TypeCode::Smallint.slot_width(), Some(2));
		assert_eq!(TypeCode::Date.slot_width(), Some(4));
		assert_eq!(TypeCode::Oid.slot_width(), Some(8));
		assert_eq!(TypeCode::Decimal.slot_width(), None);
		assert!(TypeCode::Blob.is_variable_width());
		assert!(!TypeCode::Decimal.is_variable_width());
	}
}
