// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! In-process store backend. Statements are prepared with a staged result
//! (or a staged failure); materializing hands out a fresh copy of the result.

mod result;

use std::collections::HashMap;

use parking_lot::Mutex;
pub use result::{MemoryResult, MemoryResultBuilder};
use tracing::{debug, instrument};

use crate::{ConnectionId, ResultDescriptor, StatementId, Store, StoreError};

#[derive(Debug)]
struct PreparedStatement {
	connection: ConnectionId,
	outcome: Result<MemoryResult, StoreError>,
}

#[derive(Debug, Default)]
struct MemoryStoreInner {
	next_statement: u64,
	statements: HashMap<StatementId, PreparedStatement>,
	outstanding_results: usize,
	released_results: usize,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
	inner: Mutex<MemoryStoreInner>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Prepares a statement on `connection` whose execution yields `result`.
	pub fn prepare(&self, connection: ConnectionId, result: MemoryResult) -> StatementId {
		self.stage(connection, Ok(result))
	}

	/// Prepares a statement whose execution fails with `message`.
	pub fn prepare_failing(&self, connection: ConnectionId, message: impl Into<String>) -> StatementId {
		self.stage(connection, Err(StoreError::new(message)))
	}

	fn stage(&self, connection: ConnectionId, outcome: Result<MemoryResult, StoreError>) -> StatementId {
		let mut inner = self.inner.lock();
		inner.next_statement += 1;
		let statement = StatementId(inner.next_statement);
		inner.statements.insert(
			statement,
			PreparedStatement {
				connection,
				outcome,
			},
		);
		statement
	}

	pub fn is_prepared(&self, statement: StatementId) -> bool {
		self.inner.lock().statements.contains_key(&statement)
	}

	/// Results materialized and not yet released.
	pub fn outstanding_results(&self) -> usize {
		self.inner.lock().outstanding_results
	}

	pub fn released_results(&self) -> usize {
		self.inner.lock().released_results
	}
}

impl Store for MemoryStore {
	type Descriptor = MemoryResult;

	#[instrument(name = "store::memory::release_prepared_statement", level = "debug", skip(self))]
	fn release_prepared_statement(&self, connection: ConnectionId, statement: StatementId) -> Result<(), StoreError> {
		let mut inner = self.inner.lock();
		let owner = inner.statements.get(&statement).map(|prepared| prepared.connection);
		match owner {
			None => Err(StoreError(format!("Prepared {} not found", statement))),
			Some(owner) if owner != connection => {
				Err(StoreError(format!("{} does not belong to {}", statement, connection)))
			}
			Some(_) => {
				inner.statements.remove(&statement);
				Ok(())
			}
		}
	}

	#[instrument(name = "store::memory::materialize_result", level = "debug", skip(self))]
	fn materialize_result(&self, statement: StatementId) -> Result<MemoryResult, StoreError> {
		let mut inner = self.inner.lock();
		let prepared = inner
			.statements
			.get(&statement)
			.ok_or_else(|| StoreError(format!("Prepared {} not found", statement)))?;
		let result = prepared.outcome.clone()?;
		inner.outstanding_results += 1;
		debug!(columns = result.column_count(), rows = result.row_count(), "materialized");
		Ok(result)
	}

	#[instrument(name = "store::memory::release_result", level = "debug", skip_all)]
	fn release_result(&self, descriptor: MemoryResult) -> Result<(), StoreError> {
		let mut inner = self.inner.lock();
		if inner.outstanding_results == 0 {
			return Err(StoreError("no result is outstanding".to_string()));
		}
		inner.outstanding_results -= 1;
		inner.released_results += 1;
		drop(descriptor);
		Ok(())
	}
}
