// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Shared vocabulary of the result-set export protocol: the closed set of
//! [`TypeCode`]s a column can carry, the owned [`Value`]s a caller receives,
//! and the diagnostics every failing call reports.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
pub mod value;

pub use error::{Diagnostic, Error, ErrorKind, ExportError, IntoDiagnostic};
pub use value::{Blob, Date, DateTime, Decimal, Oid, Time, TypeCode, Value};

pub type Result<T> = std::result::Result<T, Error>;
