// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::Deserialize;

/// Limits applied by a [`ResultSetRegistry`](crate::ResultSetRegistry).
/// `None` means unlimited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
	/// Result sets that may be open at once.
	pub max_open_result_sets: Option<usize>,
	/// Rows a single range export, column mapping or null mask may cover.
	pub max_export_rows: Option<usize>,
}

impl ExportConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn max_open_result_sets(mut self, limit: usize) -> Self {
		self.max_open_result_sets = Some(limit);
		self
	}

	pub fn max_export_rows(mut self, limit: usize) -> Self {
		self.max_export_rows = Some(limit);
		self
	}
}
