// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Result-set half of the export protocol: materialized results are opened
//! into a [`ResultSetRegistry`] and addressed by opaque handle until they are
//! closed. Every column read goes through the handle, so no borrowed buffer
//! outlives the result it came from.

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod config;
mod cursor;
mod metadata;
mod registry;
mod result_set;

pub use config::ExportConfig;
pub use cursor::ResultSetCursor;
pub use metadata::{ColumnMetadata, ResultSetMetadata};
pub use registry::{ResultSetHandle, ResultSetRegistry};
pub use result_set::ExportedResultSet;
