// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::Serialize;

pub mod blob;
mod date;
mod datetime;
mod decimal;
mod oid;
mod time;
mod r#type;

pub use blob::Blob;
pub use date::Date;
pub use datetime::DateTime;
pub use decimal::Decimal;
pub use oid::Oid;
pub use time::Time;
pub use r#type::TypeCode;

/// A single exported cell, owned by the caller.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Value {
	/// The slot held its type's null sentinel
	None {
		inner: TypeCode,
	},
	Boolean(bool),
	Tinyint(i8),
	Smallint(i16),
	Int(i32),
	Bigint(i64),
	Real(f32),
	Double(f64),
	String(String),
	Date(Date),
	Timestamp(DateTime),
	Time(Time),
	Blob(Blob),
	Decimal(Decimal),
	Oid(Oid),
}

impl Value {
	pub fn none(inner: TypeCode) -> Self {
		Value::None {
			inner,
		}
	}

	pub fn is_none(&self) -> bool {
		matches!(self, Value::None { .. })
	}

	pub fn type_code(&self) -> TypeCode {
		match self {
			Value::None {
				inner,
			} => *inner,
			Value::Boolean(_) => TypeCode::Boolean,
			Value::Tinyint(_) => TypeCode::Tinyint,
			Value::Smallint(_) => TypeCode::Smallint,
			Value::Int(_) => TypeCode::Int,
			Value::Bigint(_) => TypeCode::Bigint,
			Value::Real(_) => TypeCode::Real,
			Value::Double(_) => TypeCode::Double,
			Value::String(_) => TypeCode::String,
			Value::Date(_) => TypeCode::Date,
			Value::Timestamp(_) => TypeCode::Timestamp,
			Value::Time(_) => TypeCode::Time,
			Value::Blob(_) => TypeCode::Blob,
			Value::Decimal(_) => TypeCode::Decimal,
			Value::Oid(_) => TypeCode::Oid,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::None {
				..
			} => f.write_str("NULL"),
			Value::Boolean(v) => Display::fmt(v, f),
			Value::Tinyint(v) => Display::fmt(v, f),
			Value::Smallint(v) => Display::fmt(v, f),
			Value::Int(v) => Display::fmt(v, f),
			Value::Bigint(v) => Display::fmt(v, f),
			Value::Real(v) => Display::fmt(v, f),
			Value::Double(v) => Display::fmt(v, f),
			Value::String(v) => f.write_str(v),
			Value::Date(v) => Display::fmt(v, f),
			Value::Timestamp(v) => Display::fmt(v, f),
			Value::Time(v) => Display::fmt(v, f),
			Value::Blob(v) => Display::fmt(v, f),
			Value::Decimal(v) => Display::fmt(v, f),
			Value::Oid(v) => Display::fmt(v, f),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_none_keeps_type() {
		let value = Value::none(TypeCode::Int);
		assert!(value.is_none());
		assert_eq!(value.type_code(), TypeCode::Int);
		assert_eq!(value.to_string(), "NULL");
	}

	#[test]
	fn test_display() {
		assert_eq!(Value::Boolean(true).to_string(), "true");
		assert_eq!(Value::Int(-3).to_string(), "-3");
		assert_eq!(Value::Decimal(Decimal::new(125, 1)).to_string(), "12.5");
		assert_eq!(Value::Oid(Oid(7)).to_string(), "7@0");
		assert_eq!(Value::Blob(Blob::new(vec![1, 2])).to_string(), "0x0102");
	}

	#[test]
	fn test_serialize_to_json() {
		let json = serde_json::to_string(&Value::Int(5)).unwrap();
		assert_eq!(json, r#"{"Int":5}"#);

		let json = serde_json::to_string(&Value::Date(Date::from_days_since_epoch(0))).unwrap();
		assert_eq!(json, r#"{"Date":"1970-01-01"}"#);
	}
}
