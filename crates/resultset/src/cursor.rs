// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use colexport_column::value_at;
use colexport_store::ResultDescriptor;
use colexport_type::{ExportError, Result, Value};

use crate::ExportedResultSet;

/// Walks the rows of one result set in order, reading cells of the current
/// row. Positioned before the first row until [`Self::next_row`] is called.
pub struct ResultSetCursor<'a, D> {
	result_set: &'a ExportedResultSet<D>,
	next: usize,
	current: Option<usize>,
	was_null: bool,
}

impl<'a, D: ResultDescriptor> ResultSetCursor<'a, D> {
	pub(crate) fn new(result_set: &'a ExportedResultSet<D>) -> Self {
		Self {
			result_set,
			next: 0,
			current: None,
			was_null: false,
		}
	}

	/// Advances to the next row; `false` once every row has been visited.
	pub fn next_row(&mut self) -> bool {
		self.was_null = false;
		if self.next < self.result_set.row_count() {
			self.current = Some(self.next);
			self.next += 1;
			true
		} else {
			self.current = None;
			false
		}
	}

	/// Index of the current row.
	pub fn row(&self) -> Option<usize> {
		self.current
	}

	pub fn value(&mut self, column: usize) -> Result<Value> {
		let row = self.current.ok_or(ExportError::RowOutOfBounds {
			row: self.next,
			row_count: self.result_set.row_count(),
		})?;
		let value = value_at(&self.result_set.column(column)?, row)?;
		self.was_null = value.is_none();
		Ok(value)
	}

	/// The current cell rendered as text, `None` for NULL.
	pub fn value_as_string(&mut self, column: usize) -> Result<Option<String>> {
		let value = self.value(column)?;
		Ok(if value.is_none() {
			None
		} else {
			Some(value.to_string())
		})
	}

	/// Whether the most recent read hit a NULL.
	pub fn was_null(&self) -> bool {
		self.was_null
	}
}

#[cfg(test)]
mod tests {
	use colexport_store::memory::MemoryResult;
	use colexport_type::{Date, DateTime, Oid, Time};

	use super::*;

	#[test]
	fn test_walk_rows() {
		let result = MemoryResult::builder().int("i", &[Some(5), None]).build().unwrap();
		let result_set = ExportedResultSet::new(result).unwrap();
		let mut cursor = ResultSetCursor::new(&result_set);

		assert!(cursor.value(0).is_err());
		assert!(cursor.next_row());
		assert_eq!(cursor.row(), Some(0));
		assert_eq!(cursor.value(0).unwrap(), Value::Int(5));
		assert!(!cursor.was_null());

		assert!(cursor.next_row());
		assert_eq!(cursor.value_as_string(0).unwrap(), None);
		assert!(cursor.was_null());

		assert!(!cursor.next_row());
		assert_eq!(cursor.row(), None);
		assert_eq!(cursor.value(0).unwrap_err().code, "COLUMN_002");
	}

	#[test]
	fn test_string_rendering() {
		let date = Date::new(2017, 6, 1).unwrap();
		let time = Time::new(13, 5, 9, 250_000).unwrap();
		let result = MemoryResult::builder()
			.boolean("b", &[Some(true)])
			.decimal("d", 5, 2, &[Some(-5)])
			.date("date", &[Some(date)])
			.time("time", &[Some(time)])
			.timestamp("ts", &[Some(DateTime::new(date, Time::new(0, 0, 0, 0).unwrap()))])
			.oid("o", &[Some(Oid(12))])
			.blob("x", &[Some(&[0x0f, 0xa0][..])])
			.double("f", &[Some(1.5)])
			.build()
			.unwrap();
		let result_set = ExportedResultSet::new(result).unwrap();
		let mut cursor = ResultSetCursor::new(&result_set);
		assert!(cursor.next_row());

		let rendered: Vec<String> =
			(0..result_set.column_count()).map(|c| cursor.value_as_string(c).unwrap().unwrap()).collect();
		assert_eq!(
			rendered,
			vec!["true", "-0.05", "2017-06-01", "13:05:09.250000", "2017-06-01 00:00:00", "12@0", "0x0fa0", "1.5"]
		);
	}
}
