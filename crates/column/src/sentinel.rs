// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::mem::size_of;

mod sealed {
	pub trait Sealed {}
}

/// A fixed-width primitive as laid out in a column slot, together with the
/// bit pattern the store writes instead of a value when the cell is NULL.
///
/// Slots are native endian: buffers never leave the host they were
/// materialized on.
pub trait NullSentinel: Copy + PartialEq + sealed::Sealed + 'static {
	/// Slot width in bytes.
	const WIDTH: usize;

	const NIL: Self;

	/// Decodes one slot. `slot` must be exactly `WIDTH` bytes long.
	fn read(slot: &[u8]) -> Self;

	fn write(self, out: &mut Vec<u8>);

	fn is_nil(self) -> bool {
		self == Self::NIL
	}
}

macro_rules! impl_integer_sentinel {
	($($t:ty => $nil:expr),* $(,)?) => {
		$(
			impl sealed::Sealed for $t {}

			impl NullSentinel for $t {
				const WIDTH: usize = size_of::<$t>();
				const NIL: $t = $nil;

				#[inline]
				fn read(slot: &[u8]) -> Self {
					let mut raw = [0u8; size_of::<$t>()];
					raw.copy_from_slice(slot);
					<$t>::from_ne_bytes(raw)
				}

				fn write(self, out: &mut Vec<u8>) {
					out.extend_from_slice(&self.to_ne_bytes());
				}
			}
		)*
	};
}

impl_integer_sentinel! {
	i8 => i8::MIN,
	i16 => i16::MIN,
	i32 => i32::MIN,
	i64 => i64::MIN,
	u64 => 1u64 << 63,
}

macro_rules! impl_float_sentinel {
	($($t:ty),* $(,)?) => {
		$(
			impl sealed::Sealed for $t {}

			/// Every NaN payload counts as NULL, not just the canonical one.
			impl NullSentinel for $t {
				const WIDTH: usize = size_of::<$t>();
				const NIL: $t = <$t>::NAN;

				#[inline]
				fn read(slot: &[u8]) -> Self {
					let mut raw = [0u8; size_of::<$t>()];
					raw.copy_from_slice(slot);
					<$t>::from_ne_bytes(raw)
				}

				fn write(self, out: &mut Vec<u8>) {
					out.extend_from_slice(&self.to_ne_bytes());
				}

				#[inline]
				fn is_nil(self) -> bool {
					self.is_nan()
				}
			}
		)*
	};
}

impl_float_sentinel!(f32, f64);

#[cfg(test)]
mod tests {
	use super::*;

	fn encode<P: NullSentinel>(value: P) -> Vec<u8> {
		let mut out = Vec::new();
		value.write(&mut out);
		out
	}

	#[test]
	fn test_integer_nil() {
		assert!(i8::MIN.is_nil());
		assert!(i16::MIN.is_nil());
		assert!(i32::MIN.is_nil());
		assert!(i64::MIN.is_nil());
		assert!((1u64 << 63).is_nil());
		assert!(!0i32.is_nil());
		assert!(!(i32::MIN + 1).is_nil());
	}

	#[test]
	fn test_float_nil_is_any_nan() {
		assert!(f32::NAN.is_nil());
		assert!(f64::NAN.is_nil());
		assert!(f64::from_bits(0x7ff8_0000_0000_0001).is_nil());
		assert!(!0.0f64.is_nil());
		assert!(!f64::INFINITY.is_nil());
	}

	#[test]
	fn test_read_write() {
		assert_eq!(i32::read(&encode(-3i32)), -3);
		assert_eq!(i16::read(&encode(1234i16)), 1234);
		assert_eq!(u64::read(&encode(7u64)), 7);
		assert_eq!(f64::read(&encode(1.5f64)), 1.5);
		assert_eq!(encode(5i8).len(), i8::WIDTH);
		assert_eq!(encode(5i64).len(), i64::WIDTH);
	}
}
