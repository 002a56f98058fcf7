// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use colexport_store::{
	ConnectionId, StatementId,
	memory::{MemoryResult, MemoryStore},
};
use colexport_type::{Date, DateTime, Oid, Time};

pub const CONNECTION: ConnectionId = ConnectionId(1);

/// A store with `result` prepared as a single statement.
pub fn stage(result: MemoryResult) -> (MemoryStore, StatementId) {
	let store = MemoryStore::new();
	let statement = store.prepare(CONNECTION, result);
	(store, statement)
}

/// One `int` column `c0` holding `[5, NULL, -3]`.
pub fn int_with_null() -> MemoryResult {
	MemoryResult::builder().int("c0", &[Some(5), None, Some(-3)]).build().expect("int fixture")
}

/// One decimal column `c0` with the given declaration.
pub fn decimal(digits: u32, scale: u32, unscaled: &[Option<i64>]) -> MemoryResult {
	MemoryResult::builder().decimal("c0", digits, scale, unscaled).build().expect("decimal fixture")
}

/// One column of every type, in type-code order, five rows each with NULLs
/// at different positions per column.
pub fn every_type() -> MemoryResult {
	let date = |y, m, d| Date::new(y, m, d);
	let time = |h, m, s, us| Time::new(h, m, s, us);
	let stamp = |seconds| Some(DateTime::from_seconds_since_epoch(seconds));

	MemoryResult::builder()
		.boolean("boolean", &[Some(true), Some(false), None, Some(true), None])
		.tinyint("tinyint", &[Some(-128 + 1), None, Some(0), Some(127), Some(7)])
		.smallint("smallint", &[None, Some(i16::MAX), Some(-1), Some(300), None])
		.int("int", &[Some(5), None, Some(-3), Some(i32::MAX), Some(0)])
		.bigint("bigint", &[Some(i64::MAX), Some(-1), None, None, Some(1 << 40)])
		.real("real", &[Some(1.25), None, Some(-0.5), Some(f32::INFINITY), Some(0.0)])
		.double("double", &[None, Some(std::f64::consts::PI), Some(-2.0), None, Some(1e300)])
		.string("string", &[Some("alpha"), Some(""), None, Some("δέλτα"), Some("alpha")])
		.date("date", &[date(2017, 6, 1), None, date(1969, 12, 31), date(2000, 2, 29), date(1, 1, 1)])
		.timestamp("timestamp", &[stamp(0), stamp(1_496_275_200), None, stamp(-1), stamp(951_782_400)])
		.time("time", &[time(0, 0, 0, 0), time(23, 59, 59, 999_999), None, time(12, 30, 0, 5), None])
		.blob("blob", &[Some(&[0xde, 0xad][..]), None, Some(&[][..]), Some(b"bytes"), None])
		.decimal("decimal", 3, 1, &[Some(125), None, Some(-999), Some(0), Some(5)])
		.oid("oid", &[Some(Oid(0)), Some(Oid(42)), None, Some(Oid((1 << 63) - 1)), None])
		.build()
		.expect("every type fixture")
}

/// Decimal columns whose digits sit on either side of each width boundary.
pub fn decimal_boundaries() -> MemoryResult {
	MemoryResult::builder()
		.decimal("d2", 2, 1, &[Some(12), None])
		.decimal("d3", 3, 1, &[Some(125), None])
		.decimal("d4", 4, 2, &[Some(125), None])
		.decimal("d5", 5, 2, &[Some(12_345), None])
		.decimal("d8", 8, 3, &[Some(12_345_678), None])
		.decimal("d9", 9, 3, &[Some(123_456_789), None])
		.decimal("d18", 18, 4, &[Some(-123_456_789_012), None])
		.build()
		.expect("decimal boundary fixture")
}
