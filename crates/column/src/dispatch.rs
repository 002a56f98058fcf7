// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Runtime dispatch from a column's [`TypeCode`] to its [`ColumnKind`].

use colexport_type::{Result, TypeCode, Value};
use tracing::trace;

use crate::{
	ColumnKind, TypedColumn,
	kind::{
		BigintKind, BlobKind, BooleanKind, DateKind, DecimalKind, DoubleKind, IntKind, OidKind, RealKind,
		SmallintKind, StringKind, TimeKind, TimestampKind, TinyintKind,
	},
};

fn owned<K: ColumnKind>(column: &TypedColumn<'_>, row: usize) -> Result<Value> {
	Ok(K::to_value(K::get(column, row)?))
}

/// Reads one row as an owned [`Value`], whatever the column's type.
pub fn value_at(column: &TypedColumn<'_>, row: usize) -> Result<Value> {
	match column.type_code() {
		TypeCode::Boolean => owned::<BooleanKind>(column, row),
		TypeCode::Tinyint => owned::<TinyintKind>(column, row),
		TypeCode::Smallint => owned::<SmallintKind>(column, row),
		TypeCode::Int => owned::<IntKind>(column, row),
		TypeCode::Bigint => owned::<BigintKind>(column, row),
		TypeCode::Real => owned::<RealKind>(column, row),
		TypeCode::Double => owned::<DoubleKind>(column, row),
		TypeCode::String => owned::<StringKind>(column, row),
		TypeCode::Date => owned::<DateKind>(column, row),
		TypeCode::Timestamp => owned::<TimestampKind>(column, row),
		TypeCode::Time => owned::<TimeKind>(column, row),
		TypeCode::Blob => owned::<BlobKind>(column, row),
		TypeCode::Decimal => owned::<DecimalKind>(column, row),
		TypeCode::Oid => owned::<OidKind>(column, row),
	}
}

/// Appends rows `offset..offset + length` to `out` as owned values.
pub fn append_values(column: &TypedColumn<'_>, offset: usize, length: usize, out: &mut Vec<Value>) -> Result<()> {
	trace!(column = column.index(), type_code = %column.type_code(), offset, length, "append values");
	match column.type_code() {
		TypeCode::Boolean => BooleanKind::append_values(column, offset, length, out),
		TypeCode::Tinyint => TinyintKind::append_values(column, offset, length, out),
		TypeCode::Smallint => SmallintKind::append_values(column, offset, length, out),
		TypeCode::Int => IntKind::append_values(column, offset, length, out),
		TypeCode::Bigint => BigintKind::append_values(column, offset, length, out),
		TypeCode::Real => RealKind::append_values(column, offset, length, out),
		TypeCode::Double => DoubleKind::append_values(column, offset, length, out),
		TypeCode::String => StringKind::append_values(column, offset, length, out),
		TypeCode::Date => DateKind::append_values(column, offset, length, out),
		TypeCode::Timestamp => TimestampKind::append_values(column, offset, length, out),
		TypeCode::Time => TimeKind::append_values(column, offset, length, out),
		TypeCode::Blob => BlobKind::append_values(column, offset, length, out),
		TypeCode::Decimal => DecimalKind::append_values(column, offset, length, out),
		TypeCode::Oid => OidKind::append_values(column, offset, length, out),
	}
}

#[cfg(test)]
mod tests {
	use colexport_type::{Date, Decimal};

	use super::*;
	use crate::{ColumnLayout, FixedBuffer, VarHeap};

	#[test]
	fn test_value_at_per_type() {
		let days = [17318i32, i32::MIN];
		let column =
			TypedColumn::new(0, ColumnLayout::new(TypeCode::Date, 0, 0), FixedBuffer::from_slice(&days).into())
				.unwrap();
		assert_eq!(value_at(&column, 0).unwrap(), Value::Date(Date::new(2017, 6, 1).unwrap()));
		assert_eq!(value_at(&column, 1).unwrap(), Value::none(TypeCode::Date));

		let decimals = [125i16];
		let column = TypedColumn::new(
			1,
			ColumnLayout::new(TypeCode::Decimal, 3, 1),
			FixedBuffer::from_slice(&decimals).into(),
		)
		.unwrap();
		assert_eq!(value_at(&column, 0).unwrap(), Value::Decimal(Decimal::new(125, 1)));
	}

	#[test]
	fn test_append_range() {
		let mut heap = Vec::new();
		let offsets = vec![
			VarHeap::push_string(&mut heap, Some("a")),
			VarHeap::push_string(&mut heap, None),
			VarHeap::push_string(&mut heap, Some("c")),
		];
		let column =
			TypedColumn::new(0, ColumnLayout::new(TypeCode::String, 0, 0), VarHeap::new(&offsets, &heap).into())
				.unwrap();

		let mut out = vec![Value::Int(0)];
		append_values(&column, 1, 2, &mut out).unwrap();
		assert_eq!(out, vec![Value::Int(0), Value::none(TypeCode::String), Value::String("c".to_string())]);
	}
}
