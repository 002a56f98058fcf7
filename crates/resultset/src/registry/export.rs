// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use colexport_column::{append_values, build_null_mask};
use colexport_store::Store;
use colexport_type::{ExportError, Result, TypeCode, Value};
use tracing::instrument;

use crate::{ResultSetHandle, ResultSetRegistry};

impl<S: Store> ResultSetRegistry<S> {
	/// Appends rows `offset..offset + length` of `column` to `out`, the column
	/// being read as the raw type code `type_code`.
	///
	/// The code must name a known type and match the column's own. Room for
	/// all `length` values is reserved before anything is appended.
	#[instrument(name = "resultset::export_as_type_code", level = "debug", skip(self, out))]
	pub fn get_column_range_as_type_code(
		&self,
		handle: ResultSetHandle,
		column: usize,
		type_code: i32,
		offset: usize,
		length: usize,
		out: &mut Vec<Value>,
	) -> Result<()> {
		let type_code = TypeCode::from_code(type_code)?;
		let result_set = self.result_set(handle)?;
		let column = result_set.column(column)?;
		column.expect_type(type_code)?;
		result_set.check_range(offset, length)?;
		self.check_export_rows(length)?;

		out.try_reserve_exact(length).map_err(|_| ExportError::ResourceExhausted {
			what: format!("{} exported values", length),
			requested: length,
		})?;
		append_values(&column, offset, length, out)
	}

	/// Every row of `column` as owned values.
	pub fn map_column_to_values(&self, handle: ResultSetHandle, column: usize, type_code: i32) -> Result<Vec<Value>> {
		let rows = self.result_set(handle)?.row_count();
		let mut out = Vec::new();
		self.get_column_range_as_type_code(handle, column, type_code, 0, rows, &mut out)?;
		Ok(out)
	}

	/// One flag per row of `column`, set where the row is NULL.
	#[instrument(name = "resultset::null_mask", level = "debug", skip(self))]
	pub fn get_null_mask(&self, handle: ResultSetHandle, column: usize, type_code: i32) -> Result<Vec<bool>> {
		let type_code = TypeCode::from_code(type_code)?;
		let result_set = self.result_set(handle)?;
		let column = result_set.column(column)?;
		column.expect_type(type_code)?;
		self.check_export_rows(result_set.row_count())?;
		build_null_mask(&column)
	}
}
