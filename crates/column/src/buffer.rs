// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{mem::size_of_val, slice::ChunksExact};

use colexport_type::{ExportError, Result};

use crate::NullSentinel;

/// Heap entry the store writes for a NULL string.
pub const STRING_NIL: &[u8] = &[0x80];

/// Length prefix marking a NULL blob.
const BLOB_NIL_LEN: u64 = u64::MAX;

const BLOB_LEN_WIDTH: usize = size_of::<u64>();

/// Contiguous fixed-width slots, one per row, borrowed from the store.
#[derive(Clone, Copy, Debug)]
pub struct FixedBuffer<'a> {
	bytes: &'a [u8],
	width: usize,
}

impl<'a> FixedBuffer<'a> {
	/// `bytes` holds `bytes.len() / width` slots; a trailing partial slot is
	/// not addressable.
	pub fn new(bytes: &'a [u8], width: usize) -> Self {
		debug_assert!(width > 0, "slot width must be positive");
		debug_assert_eq!(bytes.len() % width.max(1), 0, "buffer is not a whole number of slots");
		Self {
			bytes,
			width: width.max(1),
		}
	}

	pub fn from_slice<P: NullSentinel>(values: &'a [P]) -> Self {
		// SAFETY: every NullSentinel is a plain integer or float without
		// padding or invalid bit patterns, so its storage is valid as bytes.
		let bytes = unsafe { std::slice::from_raw_parts(values.as_ptr().cast::<u8>(), size_of_val(values)) };
		Self {
			bytes,
			width: P::WIDTH,
		}
	}

	pub fn len(&self) -> usize {
		self.bytes.len() / self.width
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn width(&self) -> usize {
		self.width
	}

	pub fn bytes(&self) -> &'a [u8] {
		self.bytes
	}

	#[inline]
	pub fn slot(&self, row: usize) -> &'a [u8] {
		&self.bytes[row * self.width..(row + 1) * self.width]
	}

	/// Slots `offset..offset + length`, in row order.
	#[inline]
	pub fn slots(&self, offset: usize, length: usize) -> ChunksExact<'a, u8> {
		self.bytes[offset * self.width..(offset + length) * self.width].chunks_exact(self.width)
	}

	#[inline]
	pub fn read<P: NullSentinel>(&self, row: usize) -> P {
		debug_assert_eq!(P::WIDTH, self.width);
		P::read(self.slot(row))
	}
}

/// Out-of-line storage: one heap offset per row pointing at the row's entry.
///
/// String entries are NUL terminated UTF-8, the NULL string being the single
/// byte `0x80`. Blob entries are a native-endian `u64` length followed by the
/// bytes, a length of `u64::MAX` marking NULL. Rows may share entries.
#[derive(Clone, Copy, Debug)]
pub struct VarHeap<'a> {
	offsets: &'a [u64],
	heap: &'a [u8],
}

impl<'a> VarHeap<'a> {
	pub fn new(offsets: &'a [u64], heap: &'a [u8]) -> Self {
		Self {
			offsets,
			heap,
		}
	}

	pub fn len(&self) -> usize {
		self.offsets.len()
	}

	pub fn is_empty(&self) -> bool {
		self.offsets.is_empty()
	}

	pub fn offsets(&self) -> &'a [u64] {
		self.offsets
	}

	pub fn heap(&self) -> &'a [u8] {
		self.heap
	}

	fn entry(&self, row: usize) -> Result<&'a [u8]> {
		let offset = self.offsets[row];
		usize::try_from(offset).ok().and_then(|offset| self.heap.get(offset..)).ok_or_else(|| {
			ExportError::CorruptHeap {
				row,
				reason: format!("offset {} lies beyond the {}-byte heap", offset, self.heap.len()),
			}
			.into()
		})
	}

	/// Raw string entry without its terminator.
	fn string_bytes(&self, row: usize) -> Result<&'a [u8]> {
		let entry = self.entry(row)?;
		let end = entry.iter().position(|b| *b == 0).ok_or_else(|| ExportError::CorruptHeap {
			row,
			reason: "string entry is not NUL terminated".to_string(),
		})?;
		Ok(&entry[..end])
	}

	pub fn is_nil_string(&self, row: usize) -> Result<bool> {
		Ok(self.string_bytes(row)? == STRING_NIL)
	}

	pub fn string(&self, row: usize) -> Result<Option<&'a str>> {
		let bytes = self.string_bytes(row)?;
		if bytes == STRING_NIL {
			return Ok(None);
		}
		std::str::from_utf8(bytes).map(Some).map_err(|err| {
			ExportError::CorruptHeap {
				row,
				reason: format!("string entry is not valid UTF-8: {}", err),
			}
			.into()
		})
	}

	fn blob_len(&self, row: usize, entry: &[u8]) -> Result<u64> {
		if entry.len() < BLOB_LEN_WIDTH {
			return Err(ExportError::CorruptHeap {
				row,
				reason: "blob entry is missing its length prefix".to_string(),
			}
			.into());
		}
		Ok(u64::read(&entry[..BLOB_LEN_WIDTH]))
	}

	pub fn is_nil_blob(&self, row: usize) -> Result<bool> {
		let entry = self.entry(row)?;
		Ok(self.blob_len(row, entry)? == BLOB_NIL_LEN)
	}

	pub fn blob(&self, row: usize) -> Result<Option<&'a [u8]>> {
		let entry = self.entry(row)?;
		let len = self.blob_len(row, entry)?;
		if len == BLOB_NIL_LEN {
			return Ok(None);
		}
		let body = &entry[BLOB_LEN_WIDTH..];
		usize::try_from(len).ok().and_then(|len| body.get(..len)).map(Some).ok_or_else(|| {
			ExportError::CorruptHeap {
				row,
				reason: format!("blob entry claims {} bytes, {} remain in the heap", len, body.len()),
			}
			.into()
		})
	}

	/// Appends a string entry to `heap`, returning its offset.
	pub fn push_string(heap: &mut Vec<u8>, value: Option<&str>) -> u64 {
		let offset = heap.len() as u64;
		heap.extend_from_slice(value.map(str::as_bytes).unwrap_or(STRING_NIL));
		heap.push(0);
		offset
	}

	/// Appends a blob entry to `heap`, returning its offset.
	pub fn push_blob(heap: &mut Vec<u8>, value: Option<&[u8]>) -> u64 {
		let offset = heap.len() as u64;
		match value {
			Some(bytes) => {
				(bytes.len() as u64).write(heap);
				heap.extend_from_slice(bytes);
			}
			None => BLOB_NIL_LEN.write(heap),
		}
		offset
	}
}

/// A borrowed view of one result-set column as the store laid it out.
#[derive(Clone, Copy, Debug)]
pub enum ColumnBuffer<'a> {
	Fixed(FixedBuffer<'a>),
	Var(VarHeap<'a>),
}

impl<'a> ColumnBuffer<'a> {
	pub fn len(&self) -> usize {
		match self {
			ColumnBuffer::Fixed(buffer) => buffer.len(),
			ColumnBuffer::Var(heap) => heap.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Slot width in bytes, zero for heap columns.
	pub fn slot_width(&self) -> usize {
		match self {
			ColumnBuffer::Fixed(buffer) => buffer.width(),
			ColumnBuffer::Var(_) => 0,
		}
	}
}

impl<'a> From<FixedBuffer<'a>> for ColumnBuffer<'a> {
	fn from(buffer: FixedBuffer<'a>) -> Self {
		ColumnBuffer::Fixed(buffer)
	}
}

impl<'a> From<VarHeap<'a>> for ColumnBuffer<'a> {
	fn from(heap: VarHeap<'a>) -> Self {
		ColumnBuffer::Var(heap)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_fixed_from_slice() {
		let values = [5i32, i32::MIN, -3];
		let buffer = FixedBuffer::from_slice(&values);
		assert_eq!(buffer.len(), 3);
		assert_eq!(buffer.width(), 4);
		assert_eq!(buffer.read::<i32>(0), 5);
		assert_eq!(buffer.read::<i32>(2), -3);
		assert_eq!(buffer.slots(1, 2).count(), 2);
	}

	#[test]
	fn test_string_heap() {
		let mut heap = Vec::new();
		let offsets = vec![
			VarHeap::push_string(&mut heap, Some("hello")),
			VarHeap::push_string(&mut heap, None),
			VarHeap::push_string(&mut heap, Some("")),
		];
		let var = VarHeap::new(&offsets, &heap);

		assert_eq!(var.string(0).unwrap(), Some("hello"));
		assert_eq!(var.string(1).unwrap(), None);
		assert_eq!(var.string(2).unwrap(), Some(""));
		assert!(var.is_nil_string(1).unwrap());
		assert!(!var.is_nil_string(2).unwrap());
	}

	#[test]
	fn test_blob_heap() {
		let mut heap = Vec::new();
		let offsets = vec![
			VarHeap::push_blob(&mut heap, Some(&[1, 2, 3])),
			VarHeap::push_blob(&mut heap, None),
			VarHeap::push_blob(&mut heap, Some(&[])),
		];
		let var = VarHeap::new(&offsets, &heap);

		assert_eq!(var.blob(0).unwrap(), Some(&[1u8, 2, 3][..]));
		assert_eq!(var.blob(1).unwrap(), None);
		assert_eq!(var.blob(2).unwrap(), Some(&[][..]));
		assert!(var.is_nil_blob(1).unwrap());
	}

	#[test]
	fn test_shared_entries() {
		let mut heap = Vec::new();
		let shared = VarHeap::push_string(&mut heap, Some("same"));
		let offsets = vec![shared, shared];
		let var = VarHeap::new(&offsets, &heap);
		assert_eq!(var.string(0).unwrap(), var.string(1).unwrap());
	}

	#[test]
	fn test_corrupt_heap() {
		let heap = b"abc".to_vec();
		let offsets = vec![0u64, 10];
		let var = VarHeap::new(&offsets, &heap);

		let err = var.string(0).unwrap_err();
		assert_eq!(err.code, "COLUMN_005");
		assert!(var.string(1).is_err());
		assert!(var.blob(0).is_err());
	}

	#[test]
	fn test_invalid_utf8() {
		let heap = vec![0xff, 0xfe, 0x00];
		let offsets = vec![0u64];
		let var = VarHeap::new(&offsets, &heap);
		assert!(var.string(0).is_err());
	}

	#[test]
	fn test_slot_width() {
		let values = [1i16, 2];
		assert_eq!(ColumnBuffer::from(FixedBuffer::from_slice(&values)).slot_width(), 2);
		assert_eq!(ColumnBuffer::from(VarHeap::new(&[], &[])).slot_width(), 0);
	}
}
