// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod export;
mod typed;

use std::{
	collections::HashMap,
	fmt::{Display, Formatter},
};

use colexport_store::{ConnectionId, StatementId, Store};
use colexport_type::{ExportError, Result, TypeCode};
use tracing::{debug, instrument, warn};

use crate::{ExportConfig, ExportedResultSet, ResultSetCursor, ResultSetMetadata};

/// Opaque reference to an open result set. Never reused within a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResultSetHandle(u64);

impl ResultSetHandle {
	/// Rebuilds a handle from an id that crossed a process or language
	/// boundary. Ids never issued by the registry are reported as unknown.
	pub fn from_id(id: u64) -> Self {
		Self(id)
	}

	pub fn id(&self) -> u64 {
		self.0
	}
}

impl Display for ResultSetHandle {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Owns every open result set of one caller and the store they came from.
///
/// Opening and closing take `&mut self` and every read takes `&self`, so a
/// result set can never be released while a value borrowed from it is alive.
pub struct ResultSetRegistry<S: Store> {
	store: S,
	config: ExportConfig,
	next_handle: u64,
	open: HashMap<ResultSetHandle, ExportedResultSet<S::Descriptor>>,
}

impl<S: Store> ResultSetRegistry<S> {
	pub fn new(store: S) -> Self {
		Self::with_config(store, ExportConfig::default())
	}

	pub fn with_config(store: S, config: ExportConfig) -> Self {
		Self {
			store,
			config,
			next_handle: 1,
			open: HashMap::new(),
		}
	}

	pub fn store(&self) -> &S {
		&self.store
	}

	pub fn config(&self) -> &ExportConfig {
		&self.config
	}

	/// Number of result sets currently open.
	pub fn open_count(&self) -> usize {
		self.open.len()
	}

	/// Materializes `statement` and registers its result.
	///
	/// Every column's SQL type must be known and its buffer must match the
	/// layout derived from its declared type; otherwise the result is handed
	/// back to the store and the error returned.
	#[instrument(name = "resultset::open", level = "debug", skip(self))]
	pub fn open(&mut self, statement: StatementId) -> Result<ResultSetHandle> {
		if let Some(limit) = self.config.max_open_result_sets {
			if self.open.len() >= limit {
				return Err(ExportError::ResourceExhausted {
					what: format!("result set beyond the limit of {}", limit),
					requested: self.open.len() + 1,
				}
				.into());
			}
		}

		let descriptor = self.store.materialize_result(statement)?;
		let result_set = match ExportedResultSet::new(descriptor) {
			Ok(result_set) => result_set,
			Err((descriptor, err)) => {
				if let Err(release) = self.store.release_result(descriptor) {
					warn!(error = %release, "failed to release rejected result");
				}
				return Err(err);
			}
		};

		let handle = ResultSetHandle(self.next_handle);
		self.next_handle += 1;
		debug!(
			%handle,
			columns = result_set.column_count(),
			rows = result_set.row_count(),
			"result set opened"
		);
		self.open.insert(handle, result_set);
		Ok(handle)
	}

	/// Releases `handle` and gives its result back to the store. Any later
	/// use of the handle fails.
	#[instrument(name = "resultset::close", level = "debug", skip(self))]
	pub fn close(&mut self, handle: ResultSetHandle) -> Result<()> {
		let result_set = self.open.remove(&handle).ok_or_else(|| self.missing(handle))?;
		self.store.release_result(result_set.into_descriptor())?;
		debug!(%handle, "result set released");
		Ok(())
	}

	#[instrument(name = "resultset::release_prepared_statement", level = "debug", skip(self))]
	pub fn release_prepared_statement(&self, connection: ConnectionId, statement: StatementId) -> Result<()> {
		self.store.release_prepared_statement(connection, statement)?;
		Ok(())
	}

	pub fn result_set(&self, handle: ResultSetHandle) -> Result<&ExportedResultSet<S::Descriptor>> {
		self.open.get(&handle).ok_or_else(|| self.missing(handle))
	}

	fn missing(&self, handle: ResultSetHandle) -> colexport_type::Error {
		if handle.0 >= 1 && handle.0 < self.next_handle {
			ExportError::ResultSetReleased {
				handle: handle.0,
			}
			.into()
		} else {
			ExportError::UnknownResultSet {
				handle: handle.0,
			}
			.into()
		}
	}

	pub(crate) fn check_export_rows(&self, rows: usize) -> Result<()> {
		match self.config.max_export_rows {
			Some(limit) if rows > limit => Err(ExportError::ResourceExhausted {
				what: format!("export of {} rows beyond the limit of {}", rows, limit),
				requested: rows,
			}
			.into()),
			_ => Ok(()),
		}
	}

	pub fn get_column_names(&self, handle: ResultSetHandle) -> Result<Vec<String>> {
		Ok(self.result_set(handle)?.column_names())
	}

	pub fn get_column_type_names(&self, handle: ResultSetHandle) -> Result<Vec<String>> {
		Ok(self.result_set(handle)?.column_type_names())
	}

	pub fn get_column_type_codes(&self, handle: ResultSetHandle) -> Result<Vec<TypeCode>> {
		Ok(self.result_set(handle)?.column_type_codes())
	}

	pub fn get_column_digits(&self, handle: ResultSetHandle) -> Result<Vec<u32>> {
		Ok(self.result_set(handle)?.column_digits())
	}

	pub fn get_column_scales(&self, handle: ResultSetHandle) -> Result<Vec<u32>> {
		Ok(self.result_set(handle)?.column_scales())
	}

	#[instrument(name = "resultset::metadata", level = "trace", skip(self))]
	pub fn get_metadata(&self, handle: ResultSetHandle) -> Result<ResultSetMetadata> {
		Ok(self.result_set(handle)?.metadata())
	}

	/// Row-at-a-time reader over `handle`.
	pub fn cursor(&self, handle: ResultSetHandle) -> Result<ResultSetCursor<'_, S::Descriptor>> {
		Ok(ResultSetCursor::new(self.result_set(handle)?))
	}
}

impl<S: Store> Drop for ResultSetRegistry<S> {
	fn drop(&mut self) {
		for (handle, result_set) in self.open.drain() {
			if let Err(err) = self.store.release_result(result_set.into_descriptor()) {
				warn!(%handle, error = %err, "failed to release result set on drop");
			}
		}
	}
}
