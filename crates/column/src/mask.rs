// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use colexport_type::{ExportError, Result, TypeCode};

use crate::{FixedBuffer, NullSentinel, TypedColumn};

#[inline]
pub(crate) fn extend_fixed<P: NullSentinel>(buffer: &FixedBuffer<'_>, out: &mut Vec<bool>) {
	out.extend(buffer.slots(0, buffer.len()).map(|slot| P::read(slot).is_nil()));
}

/// One flag per row, `true` where the row holds its type's null sentinel.
///
/// The mask agrees with the typed accessors: a row is flagged exactly when
/// reading it yields no value.
pub fn build_null_mask(column: &TypedColumn<'_>) -> Result<Vec<bool>> {
	let rows = column.len();
	let mut out = Vec::new();
	out.try_reserve_exact(rows).map_err(|_| ExportError::ResourceExhausted {
		what: "null mask".to_string(),
		requested: rows,
	})?;

	let type_code = column.type_code();
	match type_code {
		TypeCode::Boolean | TypeCode::Tinyint => extend_fixed::<i8>(&column.fixed(type_code)?, &mut out),
		TypeCode::Smallint => extend_fixed::<i16>(&column.fixed(type_code)?, &mut out),
		TypeCode::Int | TypeCode::Date => extend_fixed::<i32>(&column.fixed(type_code)?, &mut out),
		TypeCode::Bigint | TypeCode::Timestamp | TypeCode::Time => {
			extend_fixed::<i64>(&column.fixed(type_code)?, &mut out)
		}
		TypeCode::Real => extend_fixed::<f32>(&column.fixed(type_code)?, &mut out),
		TypeCode::Double => extend_fixed::<f64>(&column.fixed(type_code)?, &mut out),
		TypeCode::Oid => extend_fixed::<u64>(&column.fixed(type_code)?, &mut out),
		TypeCode::String => {
			let heap = column.heap(type_code)?;
			for row in 0..rows {
				out.push(heap.is_nil_string(row)?);
			}
		}
		TypeCode::Blob => {
			let heap = column.heap(type_code)?;
			for row in 0..rows {
				out.push(heap.is_nil_blob(row)?);
			}
		}
		TypeCode::Decimal => {
			let buffer = column.fixed(type_code)?;
			match column.layout().decimal() {
				Some(layout) => layout.nil_mask(&buffer, &mut out),
				None => {
					return Err(ExportError::TypeMismatch {
						column: column.index(),
						expected: TypeCode::Decimal,
						actual: type_code,
					}
					.into());
				}
			}
		}
	}
	Ok(out)
}
