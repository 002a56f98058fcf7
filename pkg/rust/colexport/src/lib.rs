// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Typed, handle-addressable export of columnar query results.
//!
//! A [`ResultSetRegistry`] opens results materialized by a [`Store`] and
//! serves them by [`ResultSetHandle`]: scalar reads, bulk row ranges, null
//! masks and column metadata, until the handle is closed.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use colexport_column as column;
pub use colexport_resultset as resultset;
pub use colexport_store as store;
pub use colexport_type as r#type;

pub use colexport_column::{ColumnKind, DecimalWidth, kind};
pub use colexport_resultset::{
	ColumnMetadata, ExportConfig, ExportedResultSet, ResultSetCursor, ResultSetHandle, ResultSetMetadata,
	ResultSetRegistry,
};
pub use colexport_store::{ColumnMeta, ConnectionId, ResultDescriptor, StatementId, Store, StoreError, memory};
pub use colexport_type::{
	Blob, Date, DateTime, Decimal, Diagnostic, Error, ErrorKind, ExportError, Oid, Result, Time, TypeCode, Value,
};
