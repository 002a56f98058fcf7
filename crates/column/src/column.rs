// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use colexport_type::{ExportError, Result, TypeCode};

use crate::{ColumnBuffer, DecimalLayout, FixedBuffer, VarHeap};

/// How a column's buffer has to be interpreted. Resolved once when a result
/// set is opened; decimal width in particular is never re-derived later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnLayout {
	type_code: TypeCode,
	decimal: Option<DecimalLayout>,
}

impl ColumnLayout {
	pub fn new(type_code: TypeCode, digits: u32, scale: u32) -> Self {
		let decimal = match type_code {
			TypeCode::Decimal => Some(DecimalLayout::new(digits, scale)),
			_ => None,
		};
		Self {
			type_code,
			decimal,
		}
	}

	pub fn type_code(&self) -> TypeCode {
		self.type_code
	}

	pub fn decimal(&self) -> Option<&DecimalLayout> {
		self.decimal.as_ref()
	}

	/// Expected slot width in bytes, zero for heap columns.
	pub fn slot_width(&self) -> usize {
		match (&self.decimal, self.type_code.slot_width()) {
			(Some(decimal), _) => decimal.width().bytes(),
			(None, Some(width)) => width,
			(None, None) => 0,
		}
	}

	/// Verifies that `buffer` is laid out the way this layout reads it.
	pub fn check(&self, column: usize, buffer: &ColumnBuffer<'_>) -> Result<()> {
		let expected = self.slot_width();
		let actual = buffer.slot_width();
		if expected != actual {
			return Err(ExportError::LayoutMismatch {
				column,
				expected_width: expected,
				actual_width: actual,
			}
			.into());
		}
		Ok(())
	}
}

/// A column buffer bound to its position and layout within a result set.
#[derive(Debug, Clone, Copy)]
pub struct TypedColumn<'a> {
	index: usize,
	layout: ColumnLayout,
	buffer: ColumnBuffer<'a>,
}

impl<'a> TypedColumn<'a> {
	pub fn new(index: usize, layout: ColumnLayout, buffer: ColumnBuffer<'a>) -> Result<Self> {
		layout.check(index, &buffer)?;
		Ok(Self {
			index,
			layout,
			buffer,
		})
	}

	pub fn index(&self) -> usize {
		self.index
	}

	pub fn layout(&self) -> &ColumnLayout {
		&self.layout
	}

	pub fn type_code(&self) -> TypeCode {
		self.layout.type_code
	}

	pub fn buffer(&self) -> &ColumnBuffer<'a> {
		&self.buffer
	}

	pub fn len(&self) -> usize {
		self.buffer.len()
	}

	pub fn is_empty(&self) -> bool {
		self.buffer.is_empty()
	}

	pub fn expect_type(&self, expected: TypeCode) -> Result<()> {
		if self.layout.type_code != expected {
			return Err(ExportError::TypeMismatch {
				column: self.index,
				expected,
				actual: self.layout.type_code,
			}
			.into());
		}
		Ok(())
	}

	/// Fixed slots of a column of type `expected`.
	pub fn fixed(&self, expected: TypeCode) -> Result<FixedBuffer<'a>> {
		self.expect_type(expected)?;
		match self.buffer {
			ColumnBuffer::Fixed(buffer) => Ok(buffer),
			ColumnBuffer::Var(_) => Err(self.layout_mismatch()),
		}
	}

	/// Heap of a column of type `expected`.
	pub fn heap(&self, expected: TypeCode) -> Result<VarHeap<'a>> {
		self.expect_type(expected)?;
		match self.buffer {
			ColumnBuffer::Var(heap) => Ok(heap),
			ColumnBuffer::Fixed(_) => Err(self.layout_mismatch()),
		}
	}

	fn layout_mismatch(&self) -> colexport_type::Error {
		ExportError::LayoutMismatch {
			column: self.index,
			expected_width: self.layout.slot_width(),
			actual_width: self.buffer.slot_width(),
		}
		.into()
	}
}
