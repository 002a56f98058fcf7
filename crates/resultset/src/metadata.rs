// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use colexport_type::TypeCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMetadata {
	pub name: String,
	/// SQL type name as the store declared it.
	pub type_name: String,
	pub type_code: TypeCode,
	pub digits: u32,
	pub scale: u32,
}

/// Snapshot of a result set's shape, one entry per column in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSetMetadata {
	pub row_count: usize,
	pub columns: Vec<ColumnMetadata>,
}

impl ResultSetMetadata {
	pub fn column_count(&self) -> usize {
		self.columns.len()
	}
}
