// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Per-kind scalar and range accessors.

use colexport_column::{
	ColumnKind,
	kind::{
		BigintKind, BlobKind, BooleanKind, DateKind, DecimalKind, DoubleKind, IntKind, OidKind, RealKind,
		SmallintKind, StringKind, TimeKind, TimestampKind, TinyintKind,
	},
	value_at,
};
use colexport_store::Store;
use colexport_type::{Date, DateTime, Decimal, ExportError, Oid, Result, Time, Value};
use tracing::instrument;

use crate::{ResultSetHandle, ResultSetRegistry};

impl<S: Store> ResultSetRegistry<S> {
	/// Reads one cell of a column of kind `K`; `None` for NULL.
	pub fn get<'a, K: ColumnKind>(
		&'a self,
		handle: ResultSetHandle,
		column: usize,
		row: usize,
	) -> Result<Option<K::Value<'a>>> {
		let result_set = self.result_set(handle)?;
		let column = result_set.column(column)?;
		result_set.check_row(row)?;
		K::get(&column, row)
	}

	/// Writes rows `offset..offset + length` of a column of kind `K` into the
	/// first `length` slots of `out`. Same decoding as [`Self::get`].
	#[instrument(name = "resultset::export_range", level = "trace", skip(self, out), fields(type_code = %K::TYPE_CODE))]
	pub fn get_range<'a, K: ColumnKind>(
		&'a self,
		handle: ResultSetHandle,
		column: usize,
		offset: usize,
		length: usize,
		out: &mut [Option<K::Value<'a>>],
	) -> Result<()> {
		let result_set = self.result_set(handle)?;
		let column = result_set.column(column)?;
		result_set.check_range(offset, length)?;
		self.check_export_rows(length)?;
		if out.len() < length {
			return Err(ExportError::OutputTooSmall {
				length,
				capacity: out.len(),
			}
			.into());
		}
		K::export(&column, offset, &mut out[..length])
	}

	/// Reads one cell as an owned [`Value`], whatever the column's type.
	pub fn get_value(&self, handle: ResultSetHandle, column: usize, row: usize) -> Result<Value> {
		let result_set = self.result_set(handle)?;
		let column = result_set.column(column)?;
		result_set.check_row(row)?;
		value_at(&column, row)
	}
}

macro_rules! typed_accessors {
	($($kind:ty => $value:ty, $get:ident, $range:ident;)*) => {
		impl<S: Store> ResultSetRegistry<S> {
			$(
				pub fn $get<'a>(&'a self, handle: ResultSetHandle, column: usize, row: usize) -> Result<Option<$value>> {
					self.get::<$kind>(handle, column, row)
				}

				pub fn $range<'a>(
					&'a self,
					handle: ResultSetHandle,
					column: usize,
					offset: usize,
					length: usize,
					out: &mut [Option<$value>],
				) -> Result<()> {
					self.get_range::<$kind>(handle, column, offset, length, out)
				}
			)*
		}
	};
}

typed_accessors! {
	BooleanKind => bool, get_boolean, get_boolean_range;
	TinyintKind => i8, get_tinyint, get_tinyint_range;
	SmallintKind => i16, get_smallint, get_smallint_range;
	IntKind => i32, get_int, get_int_range;
	BigintKind => i64, get_bigint, get_bigint_range;
	RealKind => f32, get_real, get_real_range;
	DoubleKind => f64, get_double, get_double_range;
	StringKind => &'a str, get_string, get_string_range;
	DateKind => Date, get_date, get_date_range;
	TimestampKind => DateTime, get_timestamp, get_timestamp_range;
	TimeKind => Time, get_time, get_time_range;
	BlobKind => &'a [u8], get_blob, get_blob_range;
	DecimalKind => Decimal, get_decimal, get_decimal_range;
	OidKind => Oid, get_oid, get_oid_range;
}
