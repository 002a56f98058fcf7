// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{Diagnostic, ErrorKind, IntoDiagnostic};
use crate::value::TypeCode;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExportError {
	#[error("result set {handle} has already been released")]
	ResultSetReleased {
		handle: u64,
	},

	#[error("result set {handle} is unknown")]
	UnknownResultSet {
		handle: u64,
	},

	#[error("column {column} is out of bounds")]
	ColumnOutOfBounds {
		column: usize,
		column_count: usize,
	},

	#[error("row {row} is out of bounds")]
	RowOutOfBounds {
		row: usize,
		row_count: usize,
	},

	#[error("row range {offset}..{offset}+{length} is out of bounds")]
	RangeOutOfBounds {
		offset: usize,
		length: usize,
		row_count: usize,
	},

	#[error("output buffer too small")]
	OutputTooSmall {
		length: usize,
		capacity: usize,
	},

	#[error("Unknown type code {code}")]
	UnknownTypeCode {
		code: i32,
	},

	#[error("Unknown SQL type '{name}'")]
	UnknownSqlType {
		name: String,
	},

	#[error("column {column} is {actual}, not {expected}")]
	TypeMismatch {
		column: usize,
		expected: TypeCode,
		actual: TypeCode,
	},

	#[error("column {column} slot width does not match its declared layout")]
	LayoutMismatch {
		column: usize,
		expected_width: usize,
		actual_width: usize,
	},

	#[error("corrupt heap entry at row {row}")]
	CorruptHeap {
		row: usize,
		reason: String,
	},

	#[error("cannot allocate {what}")]
	ResourceExhausted {
		what: String,
		requested: usize,
	},

	#[error("{message}")]
	Upstream {
		message: String,
	},
}

impl ExportError {
	pub fn kind(&self) -> ErrorKind {
		match self {
			ExportError::ResourceExhausted {
				..
			} => ErrorKind::ResourceExhaustion,
			ExportError::Upstream {
				..
			} => ErrorKind::Upstream,
			_ => ErrorKind::Usage,
		}
	}
}

/// Slot width zero stands for an out-of-line heap column.
fn describe_slots(width: usize) -> String {
	if width == 0 {
		"an out-of-line heap".to_string()
	} else {
		format!("{}-byte slots", width)
	}
}

impl IntoDiagnostic for ExportError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			ExportError::ResultSetReleased {
				handle,
			} => Diagnostic {
				code: "RESULTSET_001".to_string(),
				message,
				label: Some(format!("handle {} is closed", handle)),
				help: Some("Result sets cannot be accessed after close".to_string()),
				notes: vec!["Closing a result set invalidates its handle and every buffer reached through it"
					.to_string()],
			},

			ExportError::UnknownResultSet {
				handle,
			} => Diagnostic {
				code: "RESULTSET_002".to_string(),
				message,
				label: Some(format!("handle {} was never issued", handle)),
				help: Some("Use the handle returned by open".to_string()),
				notes: vec![],
			},

			ExportError::ColumnOutOfBounds {
				column,
				column_count,
			} => Diagnostic {
				code: "COLUMN_001".to_string(),
				message,
				label: Some(format!("column index {} of {} columns", column, column_count)),
				help: Some(format!("Column indices range over 0..{}", column_count)),
				notes: vec![],
			},

			ExportError::RowOutOfBounds {
				row,
				row_count,
			} => Diagnostic {
				code: "COLUMN_002".to_string(),
				message,
				label: Some(format!("row index {} of {} rows", row, row_count)),
				help: Some(format!("Row indices range over 0..{}", row_count)),
				notes: vec![],
			},

			ExportError::RangeOutOfBounds {
				offset,
				length,
				row_count,
			} => Diagnostic {
				code: "COLUMN_003".to_string(),
				message,
				label: Some(format!("rows {}..{} requested, {} available", offset, offset.saturating_add(length), row_count)),
				help: Some("Offset plus length must not exceed the row count".to_string()),
				notes: vec![],
			},

			ExportError::OutputTooSmall {
				length,
				capacity,
			} => Diagnostic {
				code: "COLUMN_004".to_string(),
				message,
				label: Some(format!("{} values requested, room for {}", length, capacity)),
				help: Some("Provide an output buffer holding at least `length` values".to_string()),
				notes: vec![],
			},

			ExportError::CorruptHeap {
				reason,
				..
			} => Diagnostic {
				code: "COLUMN_005".to_string(),
				message,
				label: Some(reason),
				help: None,
				notes: vec!["The store handed out a heap that does not follow the out-of-line layout"
					.to_string()],
			},

			ExportError::LayoutMismatch {
				expected_width,
				actual_width,
				..
			} => Diagnostic {
				code: "COLUMN_006".to_string(),
				message,
				label: Some(format!(
					"expected {}, found {}",
					describe_slots(expected_width),
					describe_slots(actual_width)
				)),
				help: Some("Decimal slot width is chosen from the declared digits".to_string()),
				notes: vec![],
			},

			ExportError::UnknownTypeCode {
				code,
			} => Diagnostic {
				code: "TYPE_001".to_string(),
				message,
				label: Some(format!("{} is an unknown type", code)),
				help: Some("Valid type codes range over 1..=14".to_string()),
				notes: vec![],
			},

			ExportError::UnknownSqlType {
				name,
			} => Diagnostic {
				code: "TYPE_002".to_string(),
				message,
				label: Some(format!("'{}' has no type code", name)),
				help: None,
				notes: vec![],
			},

			ExportError::TypeMismatch {
				expected,
				..
			} => Diagnostic {
				code: "TYPE_003".to_string(),
				message,
				label: Some(format!("requested as {}", expected)),
				help: Some("Use the accessor matching the column type code".to_string()),
				notes: vec![],
			},

			ExportError::ResourceExhausted {
				requested,
				..
			} => Diagnostic {
				code: "RESOURCE_001".to_string(),
				message,
				label: Some(format!("{} entries requested", requested)),
				help: None,
				notes: vec![],
			},

			ExportError::Upstream {
				..
			} => Diagnostic {
				code: "STORE_001".to_string(),
				message,
				label: None,
				help: None,
				notes: vec!["Reported by the storage engine".to_string()],
			},
		}
	}
}
