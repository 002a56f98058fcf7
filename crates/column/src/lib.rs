// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Column-level half of the export protocol.
//!
//! A store hands out [`ColumnBuffer`]s: borrowed views of fixed-width slots or
//! of an out-of-line heap. Absence is marked in-band with a per-type
//! [`NullSentinel`] rather than a validity bitmap. On top of that this crate
//! provides the scalar accessor ([`ColumnKind::get`]), the bulk range exporter
//! ([`ColumnKind::export`]), the null mask builder ([`build_null_mask`]) and
//! the decimal width selector ([`DecimalWidth::for_digits`]).

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod buffer;
mod column;
mod decimal;
mod dispatch;
pub mod kind;
mod mask;
mod sentinel;

pub use buffer::{ColumnBuffer, FixedBuffer, STRING_NIL, VarHeap};
pub use column::{ColumnLayout, TypedColumn};
pub use decimal::{DecimalLayout, DecimalWidth};
pub use dispatch::{append_values, value_at};
pub use kind::ColumnKind;
pub use mask::build_null_mask;
pub use sentinel::NullSentinel;
