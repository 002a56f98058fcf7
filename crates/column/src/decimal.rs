// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use colexport_type::Decimal;

use crate::{FixedBuffer, NullSentinel};

/// Backing integer width of a decimal column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DecimalWidth {
	Bits8,
	Bits16,
	Bits32,
	Bits64,
}

impl DecimalWidth {
	/// | digits | width  |
	/// |--------|--------|
	/// | ≤ 2    | 8-bit  |
	/// | 3–4    | 16-bit |
	/// | 5–8    | 32-bit |
	/// | > 8    | 64-bit |
	pub fn for_digits(digits: u32) -> Self {
		match digits {
			0..=2 => DecimalWidth::Bits8,
			3..=4 => DecimalWidth::Bits16,
			5..=8 => DecimalWidth::Bits32,
			_ => DecimalWidth::Bits64,
		}
	}

	pub fn bytes(self) -> usize {
		match self {
			DecimalWidth::Bits8 => i8::WIDTH,
			DecimalWidth::Bits16 => i16::WIDTH,
			DecimalWidth::Bits32 => i32::WIDTH,
			DecimalWidth::Bits64 => i64::WIDTH,
		}
	}
}

/// Width and scale of a decimal column, resolved once from its declared
/// digits when the column is bound and reused for every access afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecimalLayout {
	digits: u32,
	width: DecimalWidth,
	scale: u32,
}

impl DecimalLayout {
	pub fn new(digits: u32, scale: u32) -> Self {
		Self {
			digits,
			width: DecimalWidth::for_digits(digits),
			scale,
		}
	}

	pub fn digits(&self) -> u32 {
		self.digits
	}

	pub fn width(&self) -> DecimalWidth {
		self.width
	}

	pub fn scale(&self) -> u32 {
		self.scale
	}

	/// Widens the raw integer of one slot, `None` for the width's sentinel.
	#[inline]
	pub fn read_unscaled(&self, buffer: &FixedBuffer<'_>, row: usize) -> Option<i64> {
		match self.width {
			DecimalWidth::Bits8 => widen::<i8>(buffer.slot(row)),
			DecimalWidth::Bits16 => widen::<i16>(buffer.slot(row)),
			DecimalWidth::Bits32 => widen::<i32>(buffer.slot(row)),
			DecimalWidth::Bits64 => widen::<i64>(buffer.slot(row)),
		}
	}

	pub fn read(&self, buffer: &FixedBuffer<'_>, row: usize) -> Option<Decimal> {
		self.read_unscaled(buffer, row).map(|unscaled| Decimal::new(unscaled, self.scale))
	}

	/// Decodes `out.len()` consecutive rows from `offset` in one pass.
	pub fn export(&self, buffer: &FixedBuffer<'_>, offset: usize, out: &mut [Option<Decimal>]) {
		match self.width {
			DecimalWidth::Bits8 => self.export_width::<i8>(buffer, offset, out),
			DecimalWidth::Bits16 => self.export_width::<i16>(buffer, offset, out),
			DecimalWidth::Bits32 => self.export_width::<i32>(buffer, offset, out),
			DecimalWidth::Bits64 => self.export_width::<i64>(buffer, offset, out),
		}
	}

	fn export_width<P>(&self, buffer: &FixedBuffer<'_>, offset: usize, out: &mut [Option<Decimal>])
	where
		P: NullSentinel + Into<i64>,
	{
		let len = out.len();
		for (slot, raw) in out.iter_mut().zip(buffer.slots(offset, len)) {
			*slot = widen::<P>(raw).map(|unscaled| Decimal::new(unscaled, self.scale));
		}
	}

	/// Whether each row holds the sentinel of the resolved width.
	pub fn nil_mask(&self, buffer: &FixedBuffer<'_>, out: &mut Vec<bool>) {
		match self.width {
			DecimalWidth::Bits8 => crate::mask::extend_fixed::<i8>(buffer, out),
			DecimalWidth::Bits16 => crate::mask::extend_fixed::<i16>(buffer, out),
			DecimalWidth::Bits32 => crate::mask::extend_fixed::<i32>(buffer, out),
			DecimalWidth::Bits64 => crate::mask::extend_fixed::<i64>(buffer, out),
		}
	}
}

#[inline]
fn widen<P: NullSentinel + Into<i64>>(slot: &[u8]) -> Option<i64> {
	let raw = P::read(slot);
	if raw.is_nil() {
		None
	} else {
		Some(raw.into())
	}
}
