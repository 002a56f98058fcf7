// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use colexport_column::{ColumnBuffer, DecimalWidth, FixedBuffer, NullSentinel, VarHeap};
use colexport_type::{Date, DateTime, Oid, Time};

use crate::{ColumnMeta, ResultDescriptor, StoreError};

#[derive(Debug, Clone)]
enum ColumnData {
	Fixed {
		bytes: Vec<u8>,
		width: usize,
	},
	Var {
		offsets: Vec<u64>,
		heap: Vec<u8>,
	},
}

impl ColumnData {
	fn len(&self) -> usize {
		match self {
			ColumnData::Fixed {
				bytes,
				width,
			} => bytes.len() / width,
			ColumnData::Var {
				offsets,
				..
			} => offsets.len(),
		}
	}
}

#[derive(Debug, Clone)]
struct MemoryColumn {
	meta: ColumnMeta,
	data: ColumnData,
}

/// A result held entirely in process memory, laid out the way the engine
/// lays out its column buffers: fixed slots carrying null sentinels, strings
/// and blobs in a per-column heap.
#[derive(Debug, Clone)]
pub struct MemoryResult {
	columns: Vec<MemoryColumn>,
	row_count: usize,
}

impl MemoryResult {
	pub fn builder() -> MemoryResultBuilder {
		MemoryResultBuilder::default()
	}
}

impl ResultDescriptor for MemoryResult {
	fn column_count(&self) -> usize {
		self.columns.len()
	}

	fn row_count(&self) -> usize {
		self.row_count
	}

	fn column_meta(&self, column: usize) -> &ColumnMeta {
		&self.columns[column].meta
	}

	fn column(&self, column: usize) -> ColumnBuffer<'_> {
		match &self.columns[column].data {
			ColumnData::Fixed {
				bytes,
				width,
			} => FixedBuffer::new(bytes, *width).into(),
			ColumnData::Var {
				offsets,
				heap,
			} => VarHeap::new(offsets, heap).into(),
		}
	}
}

/// Encodes typed values into a [`MemoryResult`].
///
/// `None` is written as the column type's null sentinel. Errors are deferred
/// to [`MemoryResultBuilder::build`].
#[derive(Debug, Default)]
pub struct MemoryResultBuilder {
	columns: Vec<MemoryColumn>,
	error: Option<StoreError>,
}

impl MemoryResultBuilder {
	fn push(mut self, meta: ColumnMeta, data: ColumnData) -> Self {
		self.columns.push(MemoryColumn {
			meta,
			data,
		});
		self
	}

	fn fail(mut self, message: String) -> Self {
		if self.error.is_none() {
			self.error = Some(StoreError(message));
		}
		self
	}

	fn fixed<P: NullSentinel>(self, meta: ColumnMeta, values: impl IntoIterator<Item = Option<P>>) -> Self {
		let mut bytes = Vec::new();
		for value in values {
			value.unwrap_or(P::NIL).write(&mut bytes);
		}
		self.push(
			meta,
			ColumnData::Fixed {
				bytes,
				width: P::WIDTH,
			},
		)
	}

	pub fn boolean(self, name: &str, values: &[Option<bool>]) -> Self {
		let raw = values.iter().map(|v| v.map(|b| b as i8));
		self.fixed(ColumnMeta::new(name, "boolean", 1, 0), raw)
	}

	pub fn tinyint(self, name: &str, values: &[Option<i8>]) -> Self {
		self.fixed(ColumnMeta::new(name, "tinyint", 8, 0), values.iter().copied())
	}

	pub fn smallint(self, name: &str, values: &[Option<i16>]) -> Self {
		self.fixed(ColumnMeta::new(name, "smallint", 16, 0), values.iter().copied())
	}

	pub fn int(self, name: &str, values: &[Option<i32>]) -> Self {
		self.fixed(ColumnMeta::new(name, "int", 32, 0), values.iter().copied())
	}

	pub fn bigint(self, name: &str, values: &[Option<i64>]) -> Self {
		self.fixed(ColumnMeta::new(name, "bigint", 64, 0), values.iter().copied())
	}

	pub fn real(self, name: &str, values: &[Option<f32>]) -> Self {
		self.fixed(ColumnMeta::new(name, "real", 24, 0), values.iter().copied())
	}

	pub fn double(self, name: &str, values: &[Option<f64>]) -> Self {
		self.fixed(ColumnMeta::new(name, "double", 53, 0), values.iter().copied())
	}

	pub fn date(self, name: &str, values: &[Option<Date>]) -> Self {
		let raw = values.iter().map(|v| v.map(|d| d.to_days_since_epoch()));
		self.fixed(ColumnMeta::new(name, "date", 0, 0), raw)
	}

	pub fn time(self, name: &str, values: &[Option<Time>]) -> Self {
		let raw = values.iter().map(|v| v.map(|t| t.to_micros_since_midnight()));
		self.fixed(ColumnMeta::new(name, "time", 7, 0), raw)
	}

	pub fn timestamp(self, name: &str, values: &[Option<DateTime>]) -> Self {
		let raw = values.iter().map(|v| v.map(|t| t.to_micros_since_epoch()));
		self.fixed(ColumnMeta::new(name, "timestamp", 7, 0), raw)
	}

	pub fn oid(self, name: &str, values: &[Option<Oid>]) -> Self {
		let raw = values.iter().map(|v| v.map(|oid| oid.0));
		self.fixed(ColumnMeta::new(name, "oid", 63, 0), raw)
	}

	pub fn string(self, name: &str, values: &[Option<&str>]) -> Self {
		let mut heap = Vec::new();
		let offsets = values.iter().map(|v| VarHeap::push_string(&mut heap, *v)).collect();
		self.push(
			ColumnMeta::new(name, "varchar", 0, 0),
			ColumnData::Var {
				offsets,
				heap,
			},
		)
	}

	pub fn blob(self, name: &str, values: &[Option<&[u8]>]) -> Self {
		let mut heap = Vec::new();
		let offsets = values.iter().map(|v| VarHeap::push_blob(&mut heap, *v)).collect();
		self.push(
			ColumnMeta::new(name, "blob", 0, 0),
			ColumnData::Var {
				offsets,
				heap,
			},
		)
	}

	/// Unscaled values stored at the width the engine picks for `digits`.
	pub fn decimal(self, name: &str, digits: u32, scale: u32, values: &[Option<i64>]) -> Self {
		let meta = ColumnMeta::new(name, "decimal", digits, scale);
		let narrowed: Result<Vec<Option<i64>>, String> = values
			.iter()
			.map(|value| match value {
				Some(v) if !fits(*v, DecimalWidth::for_digits(digits)) => {
					Err(format!("decimal {} does not fit in {} digits", v, digits))
				}
				other => Ok(*other),
			})
			.collect();
		let values = match narrowed {
			Ok(values) => values,
			Err(message) => return self.fail(message),
		};

		match DecimalWidth::for_digits(digits) {
			DecimalWidth::Bits8 => self.fixed(meta, values.into_iter().map(|v| v.map(|v| v as i8))),
			DecimalWidth::Bits16 => self.fixed(meta, values.into_iter().map(|v| v.map(|v| v as i16))),
			DecimalWidth::Bits32 => self.fixed(meta, values.into_iter().map(|v| v.map(|v| v as i32))),
			DecimalWidth::Bits64 => self.fixed(meta, values),
		}
	}

	/// A fixed-width column from already encoded slots, under any declared
	/// type. Lets callers reproduce layouts the typed helpers refuse to build.
	pub fn raw_fixed(self, meta: ColumnMeta, bytes: Vec<u8>, width: usize) -> Self {
		if width == 0 || bytes.len() % width != 0 {
			return self.fail(format!("{} bytes are not a whole number of {}-byte slots", bytes.len(), width));
		}
		self.push(
			meta,
			ColumnData::Fixed {
				bytes,
				width,
			},
		)
	}

	pub fn raw_heap(self, meta: ColumnMeta, offsets: Vec<u64>, heap: Vec<u8>) -> Self {
		self.push(
			meta,
			ColumnData::Var {
				offsets,
				heap,
			},
		)
	}

	pub fn build(self) -> Result<MemoryResult, StoreError> {
		if let Some(err) = self.error {
			return Err(err);
		}
		let row_count = self.columns.first().map(|c| c.data.len()).unwrap_or(0);
		if let Some(column) = self.columns.iter().find(|c| c.data.len() != row_count) {
			return Err(StoreError(format!(
				"column '{}' has {} rows, expected {}",
				column.meta.name,
				column.data.len(),
				row_count
			)));
		}
		Ok(MemoryResult {
			columns: self.columns,
			row_count,
		})
	}
}

/// Whether `value` is representable at `width` without colliding with the
/// width's null sentinel.
fn fits(value: i64, width: DecimalWidth) -> bool {
	match width {
		DecimalWidth::Bits8 => value > i8::MIN as i64 && value <= i8::MAX as i64,
		DecimalWidth::Bits16 => value > i16::MIN as i64 && value <= i16::MAX as i64,
		DecimalWidth::Bits32 => value > i32::MIN as i64 && value <= i32::MAX as i64,
		DecimalWidth::Bits64 => value > i64::MIN,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_int_column_sentinels() {
		let result = MemoryResult::builder().int("a", &[Some(5), None, Some(-3)]).build().unwrap();
		assert_eq!(result.row_count(), 3);
		match result.column(0) {
			ColumnBuffer::Fixed(buffer) => {
				assert_eq!(buffer.read::<i32>(0), 5);
				assert_eq!(buffer.read::<i32>(1), i32::MIN);
			}
			ColumnBuffer::Var(_) => panic!("int column stored in a heap"),
		}
	}

	#[test]
	fn test_decimal_width_follows_digits() {
		let result = MemoryResult::builder()
			.decimal("narrow", 3, 1, &[Some(125)])
			.decimal("wide", 10, 2, &[Some(125)])
			.build()
			.unwrap();
		assert_eq!(result.column(0).slot_width(), 2);
		assert_eq!(result.column(1).slot_width(), 8);
		assert_eq!(result.column_meta(0).digits, 3);
	}

	#[test]
	fn test_decimal_overflow_rejected() {
		let err = MemoryResult::builder().decimal("d", 2, 0, &[Some(1000)]).build().unwrap_err();
		assert!(err.message().contains("does not fit"));
	}

	#[test]
	fn test_ragged_rows_rejected() {
		let err = MemoryResult::builder().int("a", &[Some(1)]).string("b", &[Some("x"), None]).build().unwrap_err();
		assert_eq!(err.message(), "column 'b' has 2 rows, expected 1");
	}

	#[test]
	fn test_empty_result() {
		let result = MemoryResult::builder().build().unwrap();
		assert_eq!(result.column_count(), 0);
		assert_eq!(result.row_count(), 0);
	}
}
