// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::Blob;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

pub(crate) fn encode(bytes: &[u8]) -> String {
	let mut out = String::with_capacity(bytes.len() * 2);
	for byte in bytes {
		out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
		out.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
	}
	out
}

impl Blob {
	pub fn to_hex(&self) -> String {
		format!("0x{}", encode(self.as_bytes()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_to_hex() {
		let blob = Blob::new(b"Hello".to_vec());
		assert_eq!(blob.to_hex(), "0x48656c6c6f");
	}

	#[test]
	fn test_to_hex_empty() {
		assert_eq!(Blob::default().to_hex(), "0x");
	}

	#[test]
	fn test_display_is_hex() {
		assert_eq!(Blob::new(vec![0x00, 0xff, 0x10]).to_string(), "0x00ff10");
	}
}
