// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! One marker type per [`TypeCode`], each implementing [`ColumnKind`].
//!
//! Fixed-width kinds share a single generic accessor and exporter through
//! [`FixedKind`]; they differ only in their slot primitive and how a raw slot
//! becomes a value. Strings, blobs and decimals implement [`ColumnKind`]
//! directly.

use colexport_type::{Blob, Date, DateTime, Decimal, ExportError, Oid, Result, Time, TypeCode, Value};

use crate::{NullSentinel, TypedColumn};

pub trait ColumnKind {
	const TYPE_CODE: TypeCode;

	/// Decoded cell. Heap kinds borrow from the column buffer.
	type Value<'a>;

	/// Reads row `row`, `None` when the slot holds the null sentinel.
	///
	/// Rows are not bounds checked beyond slice indexing; reading past the
	/// column panics.
	fn get<'a>(column: &TypedColumn<'a>, row: usize) -> Result<Option<Self::Value<'a>>>;

	/// Writes rows `offset..offset + out.len()` into `out`, decoding exactly
	/// as [`ColumnKind::get`] does.
	fn export<'a>(column: &TypedColumn<'a>, offset: usize, out: &mut [Option<Self::Value<'a>>]) -> Result<()> {
		for (k, slot) in out.iter_mut().enumerate() {
			*slot = Self::get(column, offset + k)?;
		}
		Ok(())
	}

	fn to_value(value: Option<Self::Value<'_>>) -> Value;

	/// Appends rows `offset..offset + length` to `out` as owned values.
	fn append_values(column: &TypedColumn<'_>, offset: usize, length: usize, out: &mut Vec<Value>) -> Result<()> {
		for row in offset..offset + length {
			out.push(Self::to_value(Self::get(column, row)?));
		}
		Ok(())
	}
}

/// A kind stored in fixed-width slots of a single primitive.
pub trait FixedKind {
	const TYPE_CODE: TypeCode;

	type Raw: NullSentinel;

	type Decoded: Copy;

	fn decode(raw: Self::Raw) -> Self::Decoded;

	fn wrap(value: Self::Decoded) -> Value;
}

#[inline]
fn decode_slot<K: FixedKind>(slot: &[u8]) -> Option<K::Decoded> {
	let raw = K::Raw::read(slot);
	if raw.is_nil() {
		None
	} else {
		Some(K::decode(raw))
	}
}

impl<K: FixedKind> ColumnKind for K {
	const TYPE_CODE: TypeCode = <K as FixedKind>::TYPE_CODE;

	type Value<'a> = K::Decoded;

	#[inline]
	fn get<'a>(column: &TypedColumn<'a>, row: usize) -> Result<Option<K::Decoded>> {
		let buffer = column.fixed(<K as FixedKind>::TYPE_CODE)?;
		Ok(decode_slot::<K>(buffer.slot(row)))
	}

	fn export<'a>(column: &TypedColumn<'a>, offset: usize, out: &mut [Option<K::Decoded>]) -> Result<()> {
		let buffer = column.fixed(<K as FixedKind>::TYPE_CODE)?;
		let len = out.len();
		for (slot, raw) in out.iter_mut().zip(buffer.slots(offset, len)) {
			*slot = decode_slot::<K>(raw);
		}
		Ok(())
	}

	fn to_value(value: Option<K::Decoded>) -> Value {
		match value {
			Some(value) => K::wrap(value),
			None => Value::none(<K as FixedKind>::TYPE_CODE),
		}
	}

	fn append_values(column: &TypedColumn<'_>, offset: usize, length: usize, out: &mut Vec<Value>) -> Result<()> {
		let buffer = column.fixed(<K as FixedKind>::TYPE_CODE)?;
		out.extend(buffer.slots(offset, length).map(|raw| Self::to_value(decode_slot::<K>(raw))));
		Ok(())
	}
}

macro_rules! fixed_kind {
	($(#[$meta:meta])* $name:ident, $code:ident, $raw:ty => $decoded:ty, |$r:ident| $decode:expr, $variant:ident) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq)]
		pub struct $name;

		impl FixedKind for $name {
			const TYPE_CODE: TypeCode = TypeCode::$code;
			type Raw = $raw;
			type Decoded = $decoded;

			#[inline]
			fn decode($r: $raw) -> $decoded {
				$decode
			}

			fn wrap(value: $decoded) -> Value {
				Value::$variant(value)
			}
		}
	};
}

fixed_kind!(
	/// Stored as a byte; anything but `1` reads as false.
	BooleanKind, Boolean, i8 => bool, |raw| raw == 1, Boolean
);
fixed_kind!(TinyintKind, Tinyint, i8 => i8, |raw| raw, Tinyint);
fixed_kind!(SmallintKind, Smallint, i16 => i16, |raw| raw, Smallint);
fixed_kind!(IntKind, Int, i32 => i32, |raw| raw, Int);
fixed_kind!(BigintKind, Bigint, i64 => i64, |raw| raw, Bigint);
fixed_kind!(RealKind, Real, f32 => f32, |raw| raw, Real);
fixed_kind!(DoubleKind, Double, f64 => f64, |raw| raw, Double);
fixed_kind!(
	/// Days since the Unix epoch.
	DateKind, Date, i32 => Date, |raw| Date::from_days_since_epoch(raw), Date
);
fixed_kind!(
	/// Microseconds since the Unix epoch.
	TimestampKind, Timestamp, i64 => DateTime, |raw| DateTime::from_micros_since_epoch(raw), Timestamp
);
fixed_kind!(
	/// Microseconds since midnight.
	TimeKind, Time, i64 => Time, |raw| Time::from_micros_since_midnight(raw), Time
);
fixed_kind!(OidKind, Oid, u64 => Oid, |raw| Oid(raw), Oid);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringKind;

impl ColumnKind for StringKind {
	const TYPE_CODE: TypeCode = TypeCode::String;

	type Value<'a> = &'a str;

	fn get<'a>(column: &TypedColumn<'a>, row: usize) -> Result<Option<&'a str>> {
		column.heap(TypeCode::String)?.string(row)
	}

	fn to_value(value: Option<&str>) -> Value {
		match value {
			Some(value) => Value::String(value.to_string()),
			None => Value::none(TypeCode::String),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlobKind;

impl ColumnKind for BlobKind {
	const TYPE_CODE: TypeCode = TypeCode::Blob;

	type Value<'a> = &'a [u8];

	fn get<'a>(column: &TypedColumn<'a>, row: usize) -> Result<Option<&'a [u8]>> {
		column.heap(TypeCode::Blob)?.blob(row)
	}

	fn to_value(value: Option<&[u8]>) -> Value {
		match value {
			Some(value) => Value::Blob(Blob::from(value)),
			None => Value::none(TypeCode::Blob),
		}
	}
}

/// Backing width comes from the layout resolved when the column was bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalKind;

impl DecimalKind {
	fn layout<'c>(column: &'c TypedColumn<'_>) -> Result<&'c crate::DecimalLayout> {
		column.expect_type(TypeCode::Decimal)?;
		column.layout().decimal().ok_or_else(|| {
			ExportError::TypeMismatch {
				column: column.index(),
				expected: TypeCode::Decimal,
				actual: column.type_code(),
			}
			.into()
		})
	}
}

impl ColumnKind for DecimalKind {
	const TYPE_CODE: TypeCode = TypeCode::Decimal;

	type Value<'a> = Decimal;

	fn get<'a>(column: &TypedColumn<'a>, row: usize) -> Result<Option<Decimal>> {
		let layout = Self::layout(column)?;
		let buffer = column.fixed(TypeCode::Decimal)?;
		Ok(layout.read(&buffer, row))
	}

	fn export<'a>(column: &TypedColumn<'a>, offset: usize, out: &mut [Option<Decimal>]) -> Result<()> {
		let layout = Self::layout(column)?;
		let buffer = column.fixed(TypeCode::Decimal)?;
		layout.export(&buffer, offset, out);
		Ok(())
	}

	fn to_value(value: Option<Decimal>) -> Value {
		match value {
			Some(value) => Value::Decimal(value),
			None => Value::none(TypeCode::Decimal),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{ColumnLayout, FixedBuffer, VarHeap};

	fn bind<'a>(type_code: TypeCode, buffer: impl Into<crate::ColumnBuffer<'a>>) -> TypedColumn<'a> {
		TypedColumn::new(0, ColumnLayout::new(type_code, 0, 0), buffer.into()).unwrap()
	}

	fn assert_equivalent<K: ColumnKind>(column: &TypedColumn<'_>)
	where
		for<'a> K::Value<'a>: PartialEq + std::fmt::Debug,
	{
		let rows = column.len();
		for offset in 0..=rows {
			for length in 0..=rows - offset {
				let mut out: Vec<Option<K::Value<'_>>> = (0..length).map(|_| None).collect();
				K::export(column, offset, &mut out).unwrap();
				for (k, value) in out.iter().enumerate() {
					assert_eq!(*value, K::get(column, offset + k).unwrap(), "offset {} row {}", offset, k);
				}
			}
		}
	}

	#[test]
	fn test_int_scalar() {
		let values = [5i32, i32::MIN, -3];
		let column = bind(TypeCode::Int, FixedBuffer::from_slice(&values));
		assert_eq!(IntKind::get(&column, 0).unwrap(), Some(5));
		assert_eq!(IntKind::get(&column, 1).unwrap(), None);
		assert_eq!(IntKind::get(&column, 2).unwrap(), Some(-3));
	}

	#[test]
	fn test_int_range() {
		let values = [5i32, i32::MIN, -3];
		let column = bind(TypeCode::Int, FixedBuffer::from_slice(&values));
		let mut out = [Some(0); 2];
		IntKind::export(&column, 1, &mut out).unwrap();
		assert_eq!(out, [None, Some(-3)]);
	}

	#[test]
	fn test_boolean() {
		let values = [1i8, 0, i8::MIN, 2];
		let column = bind(TypeCode::Boolean, FixedBuffer::from_slice(&values));
		assert_eq!(BooleanKind::get(&column, 0).unwrap(), Some(true));
		assert_eq!(BooleanKind::get(&column, 1).unwrap(), Some(false));
		assert_eq!(BooleanKind::get(&column, 2).unwrap(), None);
		assert_eq!(BooleanKind::get(&column, 3).unwrap(), Some(false));
	}

	#[test]
	fn test_double_nan_is_null() {
		let values = [1.5f64, f64::NAN, -0.0];
		let column = bind(TypeCode::Double, FixedBuffer::from_slice(&values));
		assert_eq!(DoubleKind::get(&column, 0).unwrap(), Some(1.5));
		assert_eq!(DoubleKind::get(&column, 1).unwrap(), None);
		assert_eq!(DoubleKind::get(&column, 2).unwrap(), Some(-0.0));
	}

	#[test]
	fn test_temporal() {
		let days = [17318i32, i32::MIN];
		let column = bind(TypeCode::Date, FixedBuffer::from_slice(&days));
		assert_eq!(DateKind::get(&column, 0).unwrap(), Date::new(2017, 6, 1));
		assert_eq!(DateKind::get(&column, 1).unwrap(), None);

		let micros = [3_600_000_000i64, i64::MIN];
		let column = bind(TypeCode::Time, FixedBuffer::from_slice(&micros));
		assert_eq!(TimeKind::get(&column, 0).unwrap().unwrap().to_string(), "01:00:00");
		assert_eq!(TimeKind::get(&column, 1).unwrap(), None);

		let column = bind(TypeCode::Timestamp, FixedBuffer::from_slice(&micros));
		assert_eq!(TimestampKind::get(&column, 0).unwrap().unwrap().to_string(), "1970-01-01 01:00:00");
	}

	#[test]
	fn test_oid() {
		let values = [42u64, 1u64 << 63];
		let column = bind(TypeCode::Oid, FixedBuffer::from_slice(&values));
		assert_eq!(OidKind::get(&column, 0).unwrap(), Some(Oid(42)));
		assert_eq!(OidKind::get(&column, 1).unwrap(), None);
	}

	#[test]
	fn test_string_and_blob() {
		let mut heap = Vec::new();
		let offsets = vec![VarHeap::push_string(&mut heap, Some("a")), VarHeap::push_string(&mut heap, None)];
		let column = bind(TypeCode::String, VarHeap::new(&offsets, &heap));
		assert_eq!(StringKind::get(&column, 0).unwrap(), Some("a"));
		assert_eq!(StringKind::get(&column, 1).unwrap(), None);
		assert_equivalent::<StringKind>(&column);

		let mut heap = Vec::new();
		let offsets = vec![VarHeap::push_blob(&mut heap, None), VarHeap::push_blob(&mut heap, Some(b"xy"))];
		let column = bind(TypeCode::Blob, VarHeap::new(&offsets, &heap));
		assert_eq!(BlobKind::get(&column, 0).unwrap(), None);
		assert_eq!(BlobKind::get(&column, 1).unwrap(), Some(&b"xy"[..]));
		assert_equivalent::<BlobKind>(&column);
	}

	#[test]
	fn test_decimal_kind() {
		let values = [125i16, i16::MIN];
		let column = TypedColumn::new(
			0,
			ColumnLayout::new(TypeCode::Decimal, 3, 1),
			FixedBuffer::from_slice(&values).into(),
		)
		.unwrap();
		assert_eq!(DecimalKind::get(&column, 0).unwrap().unwrap().to_string(), "12.5");
		assert_eq!(DecimalKind::get(&column, 1).unwrap(), None);
		assert_equivalent::<DecimalKind>(&column);
	}

	#[test]
	fn test_exporter_matches_accessor_for_fixed_kinds() {
		let ints = [1i32, i32::MIN, 3, 4, i32::MIN];
		assert_equivalent::<IntKind>(&bind(TypeCode::Int, FixedBuffer::from_slice(&ints)));

		let bytes = [1i8, i8::MIN, 0];
		assert_equivalent::<BooleanKind>(&bind(TypeCode::Boolean, FixedBuffer::from_slice(&bytes)));
		assert_equivalent::<TinyintKind>(&bind(TypeCode::Tinyint, FixedBuffer::from_slice(&bytes)));

		let longs = [i64::MIN, 9, -9];
		assert_equivalent::<BigintKind>(&bind(TypeCode::Bigint, FixedBuffer::from_slice(&longs)));
		assert_equivalent::<TimeKind>(&bind(TypeCode::Time, FixedBuffer::from_slice(&longs)));

		let oids = [0u64, 1u64 << 63];
		assert_equivalent::<OidKind>(&bind(TypeCode::Oid, FixedBuffer::from_slice(&oids)));
	}

	#[test]
	fn test_append_values_matches_to_value() {
		let values = [5i32, i32::MIN, -3];
		let column = bind(TypeCode::Int, FixedBuffer::from_slice(&values));
		let mut out = Vec::new();
		IntKind::append_values(&column, 0, 3, &mut out).unwrap();
		assert_eq!(out, vec![Value::Int(5), Value::none(TypeCode::Int), Value::Int(-3)]);
	}

	#[test]
	fn test_wrong_kind_is_type_mismatch() {
		let values = [5i32];
		let column = bind(TypeCode::Int, FixedBuffer::from_slice(&values));
		let err = RealKind::get(&column, 0).unwrap_err();
		assert_eq!(err.code, "TYPE_003");
	}
}
