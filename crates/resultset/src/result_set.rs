// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use colexport_column::{ColumnLayout, TypedColumn};
use colexport_store::{ColumnMeta, ResultDescriptor};
use colexport_type::{ExportError, Result, TypeCode};

use crate::{ColumnMetadata, ResultSetMetadata};

/// A materialized result together with the layout of each of its columns.
///
/// Layouts, decimal widths included, are resolved once in
/// [`ExportedResultSet::new`] and reused by every read.
#[derive(Debug)]
pub struct ExportedResultSet<D> {
	descriptor: D,
	layouts: Vec<ColumnLayout>,
	row_count: usize,
}

impl<D: ResultDescriptor> ExportedResultSet<D> {
	/// Resolves the layout of every column. On failure the descriptor is
	/// returned so the caller can hand it back to the store.
	pub fn new(descriptor: D) -> std::result::Result<Self, (D, colexport_type::Error)> {
		match resolve_layouts(&descriptor) {
			Ok(layouts) => {
				let row_count = descriptor.row_count();
				Ok(Self {
					descriptor,
					layouts,
					row_count,
				})
			}
			Err(err) => Err((descriptor, err)),
		}
	}

	pub fn column_count(&self) -> usize {
		self.layouts.len()
	}

	pub fn row_count(&self) -> usize {
		self.row_count
	}

	pub fn descriptor(&self) -> &D {
		&self.descriptor
	}

	pub fn into_descriptor(self) -> D {
		self.descriptor
	}

	pub fn check_column(&self, column: usize) -> Result<()> {
		if column >= self.layouts.len() {
			return Err(ExportError::ColumnOutOfBounds {
				column,
				column_count: self.layouts.len(),
			}
			.into());
		}
		Ok(())
	}

	pub fn check_row(&self, row: usize) -> Result<()> {
		if row >= self.row_count {
			return Err(ExportError::RowOutOfBounds {
				row,
				row_count: self.row_count,
			}
			.into());
		}
		Ok(())
	}

	pub fn check_range(&self, offset: usize, length: usize) -> Result<()> {
		match offset.checked_add(length) {
			Some(end) if end <= self.row_count => Ok(()),
			_ => Err(ExportError::RangeOutOfBounds {
				offset,
				length,
				row_count: self.row_count,
			}
			.into()),
		}
	}

	pub fn layout(&self, column: usize) -> Result<&ColumnLayout> {
		self.check_column(column)?;
		Ok(&self.layouts[column])
	}

	pub fn meta(&self, column: usize) -> Result<&ColumnMeta> {
		self.check_column(column)?;
		Ok(self.descriptor.column_meta(column))
	}

	/// Column `column` bound to its cached layout.
	pub fn column(&self, column: usize) -> Result<TypedColumn<'_>> {
		self.check_column(column)?;
		TypedColumn::new(column, self.layouts[column], self.descriptor.column(column))
	}

	pub fn column_names(&self) -> Vec<String> {
		self.metas().map(|meta| meta.name.clone()).collect()
	}

	pub fn column_type_names(&self) -> Vec<String> {
		self.metas().map(|meta| meta.sql_type.clone()).collect()
	}

	pub fn column_type_codes(&self) -> Vec<TypeCode> {
		self.layouts.iter().map(ColumnLayout::type_code).collect()
	}

	pub fn column_digits(&self) -> Vec<u32> {
		self.metas().map(|meta| meta.digits).collect()
	}

	pub fn column_scales(&self) -> Vec<u32> {
		self.metas().map(|meta| meta.scale).collect()
	}

	pub fn metadata(&self) -> ResultSetMetadata {
		let columns = self
			.metas()
			.zip(self.layouts.iter())
			.map(|(meta, layout)| ColumnMetadata {
				name: meta.name.clone(),
				type_name: meta.sql_type.clone(),
				type_code: layout.type_code(),
				digits: meta.digits,
				scale: meta.scale,
			})
			.collect();
		ResultSetMetadata {
			row_count: self.row_count,
			columns,
		}
	}

	fn metas(&self) -> impl Iterator<Item = &ColumnMeta> {
		(0..self.layouts.len()).map(move |column| self.descriptor.column_meta(column))
	}
}

fn resolve_layouts<D: ResultDescriptor>(descriptor: &D) -> Result<Vec<ColumnLayout>> {
	let row_count = descriptor.row_count();
	(0..descriptor.column_count())
		.map(|column| {
			let meta = descriptor.column_meta(column);
			let type_code = TypeCode::from_sql_name(&meta.sql_type)?;
			let layout = ColumnLayout::new(type_code, meta.digits, meta.scale);

			let buffer = descriptor.column(column);
			layout.check(column, &buffer)?;
			if buffer.len() != row_count {
				return Err(ExportError::Upstream {
					message: format!(
						"column {} holds {} rows, the result declares {}",
						column,
						buffer.len(),
						row_count
					),
				}
				.into());
			}
			Ok(layout)
		})
		.collect()
}
