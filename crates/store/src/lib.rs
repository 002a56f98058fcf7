// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! The boundary between the export layer and the columnar store that
//! materializes results. The store owns every column buffer; the export layer
//! only borrows them through a [`ResultDescriptor`] and hands the descriptor
//! back with [`Store::release_result`].

#![cfg_attr(not(debug_assertions), deny(warnings))]

use std::sync::Arc;

use colexport_column::ColumnBuffer;

mod error;
mod id;
pub mod memory;

pub use error::StoreError;
pub use id::{ConnectionId, StatementId};

/// Declared shape of one result column as the store reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMeta {
	pub name: String,
	/// SQL type name, e.g. `int` or `varchar`.
	pub sql_type: String,
	pub digits: u32,
	pub scale: u32,
}

impl ColumnMeta {
	pub fn new(name: impl Into<String>, sql_type: impl Into<String>, digits: u32, scale: u32) -> Self {
		Self {
			name: name.into(),
			sql_type: sql_type.into(),
			digits,
			scale,
		}
	}
}

/// A materialized result owned by the store.
pub trait ResultDescriptor {
	fn column_count(&self) -> usize;

	fn row_count(&self) -> usize;

	/// Panics if `column >= column_count()`.
	fn column_meta(&self, column: usize) -> &ColumnMeta;

	/// Borrowed view of the column's buffer, valid as long as the descriptor.
	/// Panics if `column >= column_count()`.
	fn column(&self, column: usize) -> ColumnBuffer<'_>;
}

pub trait Store {
	type Descriptor: ResultDescriptor;

	fn release_prepared_statement(&self, connection: ConnectionId, statement: StatementId) -> Result<(), StoreError>;

	/// Runs `statement` and hands back its result.
	fn materialize_result(&self, statement: StatementId) -> Result<Self::Descriptor, StoreError>;

	/// Gives a result back to the store; its buffers are freed.
	fn release_result(&self, descriptor: Self::Descriptor) -> Result<(), StoreError>;
}

impl<T: Store> Store for Arc<T> {
	type Descriptor = T::Descriptor;

	fn release_prepared_statement(&self, connection: ConnectionId, statement: StatementId) -> Result<(), StoreError> {
		(**self).release_prepared_statement(connection, statement)
	}

	fn materialize_result(&self, statement: StatementId) -> Result<Self::Descriptor, StoreError> {
		(**self).materialize_result(statement)
	}

	fn release_result(&self, descriptor: Self::Descriptor) -> Result<(), StoreError> {
		(**self).release_result(descriptor)
	}
}
