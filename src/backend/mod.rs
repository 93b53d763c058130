//! Backend abstraction layer for swappable storage engines.
//!
//! This module defines the storage capability set every engine must provide
//! (get by id, sorted and paged range query, field update, delete by id,
//! insert returning the new id), along with the query and patch types the
//! store hands to it. Store logic lives once in [`crate::store`]; a backend
//! only translates each call into exactly one database statement.

use async_trait::async_trait;
use sea_orm::DbErr;

use crate::entities::todo;
use crate::error::StoreError;
use crate::todo::Millis;

pub mod factory;
pub mod query;
pub mod sql;

pub use factory::create_backend;
pub use query::QueryBackend;
pub use sql::SqlBackend;

/// Sort order of a range query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TodoOrder {
    /// Most recently completed first
    CompleteTimeDesc,
    /// Oldest first
    CreateTimeAsc,
}

/// Offset/limit pair derived from a 1-based `(page, step)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    offset: u64,
    limit: u64,
}

impl PageWindow {
    /// Window for `page` (1-based) of `step` rows: offset `(page - 1) * step`, limit `step`.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `page` or `step` is zero, or if the offset
    /// does not fit a SQLite integer.
    pub fn new(page: u64, step: u64) -> Result<Self, StoreError> {
        if page < 1 {
            return Err(StoreError::invalid_input(format!("page must be at least 1, got {}", page)));
        }
        if step < 1 {
            return Err(StoreError::invalid_input(format!("step must be at least 1, got {}", step)));
        }

        let max = i64::MAX as u64;
        let offset = (page - 1)
            .checked_mul(step)
            .filter(|offset| *offset <= max)
            .ok_or_else(|| StoreError::invalid_input(format!("page {} with step {} is out of range", page, step)))?;
        if step > max {
            return Err(StoreError::invalid_input(format!("step {} is out of range", step)));
        }

        Ok(Self { offset, limit: step })
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

/// Range query over the `todo` table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TodoQuery {
    pub is_complete: bool,
    pub order: TodoOrder,
    pub window: PageWindow,
}

impl TodoQuery {
    /// Completed rows, most recently completed first.
    pub fn complete(window: PageWindow) -> Self {
        Self {
            is_complete: true,
            order: TodoOrder::CompleteTimeDesc,
            window,
        }
    }

    /// Open rows, oldest first.
    pub fn uncomplete(window: PageWindow) -> Self {
        Self {
            is_complete: false,
            order: TodoOrder::CreateTimeAsc,
            window,
        }
    }
}

/// Change to the completion fields of a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// Set the flag and stamp the completion time.
    Complete { at: Millis },
    /// Clear the flag and the completion time.
    Reopen,
}

/// Field update applied to one row. `update_time` is always written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoPatch {
    pub content: Option<String>,
    pub completion: Option<Completion>,
    pub update_time: Millis,
}

/// Row to insert. Creation and update time both start at `created_at`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTodo {
    pub content: String,
    pub created_at: Millis,
}

/// Storage engine for the `todo` table.
///
/// Every method maps to a single statement and returns the engine's error
/// unmodified.
#[async_trait]
pub trait TodoBackend: Send + Sync {
    /// Returns the backend type identifier (e.g., "sql", "query").
    fn backend_type(&self) -> &str;

    /// Create the `todo` table if it does not exist yet.
    async fn create_schema(&self) -> Result<(), DbErr>;

    /// Newest update or creation time stored, `None` for an empty table.
    async fn latest_timestamp(&self) -> Result<Option<Millis>, DbErr>;

    async fn get_by_id(&self, id: i64) -> Result<Option<todo::Model>, DbErr>;
    async fn query(&self, query: TodoQuery) -> Result<Vec<todo::Model>, DbErr>;

    /// Apply `patch` to the row with `id`, returning the number of rows affected.
    ///
    /// The written update and completion times are raised to the row's
    /// `create_time` if the patch carries an older stamp.
    async fn update_fields(&self, id: i64, patch: TodoPatch) -> Result<u64, DbErr>;

    /// Remove the row with `id`, returning the number of rows affected.
    async fn delete_by_id(&self, id: i64) -> Result<u64, DbErr>;

    /// Insert a new open row and return its generated id.
    async fn insert(&self, new_todo: NewTodo) -> Result<i64, DbErr>;
}
