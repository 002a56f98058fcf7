// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use colexport::{DecimalWidth, ErrorKind, ResultSetHandle, ResultSetRegistry, TypeCode, Value, memory::MemoryStore};
use colexport_testing::{fixture, init_tracing};

fn open(result: colexport::memory::MemoryResult) -> (ResultSetRegistry<MemoryStore>, ResultSetHandle) {
	init_tracing();
	let (store, statement) = fixture::stage(result);
	let mut registry = ResultSetRegistry::new(store);
	let handle = registry.open(statement).unwrap();
	(registry, handle)
}

#[test]
fn test_int_column_with_null() {
	let (registry, handle) = open(fixture::int_with_null());

	assert_eq!(registry.get_int(handle, 0, 1).unwrap(), None);
	assert_eq!(registry.get_null_mask(handle, 0, TypeCode::Int.code()).unwrap(), vec![false, true, false]);
}

#[test]
fn test_decimal_three_digits_scale_one() {
	let (registry, handle) = open(fixture::decimal(3, 1, &[Some(125)]));

	let layout = *registry.result_set(handle).unwrap().layout(0).unwrap();
	assert_eq!(layout.decimal().unwrap().width(), DecimalWidth::Bits16);
	assert_eq!(registry.get_decimal(handle, 0, 0).unwrap().unwrap().to_string(), "12.5");
}

#[test]
fn test_decimal_ten_digits_is_64_bit() {
	let (registry, handle) = open(fixture::decimal(10, 2, &[Some(1_234_567_890)]));

	let result_set = registry.result_set(handle).unwrap();
	assert_eq!(result_set.layout(0).unwrap().decimal().unwrap().width(), DecimalWidth::Bits64);
	assert_eq!(registry.get_decimal(handle, 0, 0).unwrap().unwrap().to_string(), "12345678.90");
}

#[test]
fn test_range_matches_scalar_reads() {
	let (registry, handle) = open(fixture::int_with_null());

	let mut out = [None; 2];
	registry.get_int_range(handle, 0, 1, 2, &mut out).unwrap();
	assert_eq!(out, [None, Some(-3)]);
	assert_eq!(out[0], registry.get_int(handle, 0, 1).unwrap());
	assert_eq!(out[1], registry.get_int(handle, 0, 2).unwrap());
}

#[test]
fn test_scalar_after_close() {
	let (mut registry, handle) = open(fixture::int_with_null());
	assert_eq!(registry.get_int(handle, 0, 0).unwrap(), Some(5));

	registry.close(handle).unwrap();

	let err = registry.get_int(handle, 0, 0).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::Usage);
	assert!(err.message.contains("released"));
}

#[test]
fn test_unknown_type_code() {
	let (registry, handle) = open(fixture::int_with_null());

	let mut out: Vec<Value> = Vec::new();
	let err = registry.get_column_range_as_type_code(handle, 0, 99, 0, 3, &mut out).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::Usage);
	assert_eq!(err.message, "Unknown type code 99");
	assert!(err.label.as_deref().unwrap_or_default().contains("unknown type"));
	assert!(out.is_empty());
}
