//! Backend factory for creating backend instances from configuration.

use super::{query::QueryBackend, sql::SqlBackend, TodoBackend};
use crate::config::BackendKind;
use crate::storage::LocalStorage;

/// Create a backend of the given kind on top of an opened storage.
///
/// # Arguments
/// * `kind` - Which engine drives the table
/// * `storage` - Opened database; the backend takes ownership of it
///
/// # Returns
/// A boxed TodoBackend trait object
pub fn create_backend(kind: BackendKind, storage: LocalStorage) -> Box<dyn TodoBackend> {
    match kind {
        BackendKind::Sql => Box::new(SqlBackend::new(storage)),
        BackendKind::Query => Box::new(QueryBackend::new(storage)),
    }
}
