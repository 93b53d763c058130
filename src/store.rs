//! The to-do store.
//!
//! [`TodoStore`] is built once at application start and passed to whoever
//! needs it. Each operation validates its input, issues exactly one statement
//! through the configured [`TodoBackend`], and maps the row into a [`Todo`].
//! Nothing is cached: every read goes to the database.

use log::{debug, info};

use crate::backend::{create_backend, Completion, NewTodo, PageWindow, TodoBackend, TodoPatch, TodoQuery};
use crate::config::DatabaseConfig;
use crate::error::StoreError;
use crate::storage::LocalStorage;
use crate::todo::Todo;
use crate::utils::datetime::MonotonicClock;

pub struct TodoStore {
    backend: Box<dyn TodoBackend>,
    clock: MonotonicClock,
}

impl TodoStore {
    /// Open the configured database, ensure the `todo` table exists and
    /// return a ready store.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let storage = LocalStorage::open(config).await?;
        info!("Using {} backend on {}", config.backend, storage.location());
        Self::with_backend(create_backend(config.backend, storage)).await
    }

    /// Wrap an already constructed backend, creating the schema first.
    pub async fn with_backend(backend: Box<dyn TodoBackend>) -> Result<Self, StoreError> {
        backend.create_schema().await?;
        debug!("Schema ready on {} backend", backend.backend_type());

        // Stamps must stay ahead of rows written by earlier stores on this database
        let clock = MonotonicClock::new();
        if let Some(latest) = backend.latest_timestamp().await? {
            clock.observe(latest);
        }

        Ok(Self { backend, clock })
    }

    pub fn backend_type(&self) -> &str {
        self.backend.backend_type()
    }

    /// Look up one todo. A missing row is `Ok(None)`, not an error.
    pub async fn get_todo(&self, id: i64) -> Result<Option<Todo>, StoreError> {
        check_id(id)?;
        let row = self.backend.get_by_id(id).await?;
        Ok(row.map(Todo::from))
    }

    /// Completed todos, most recently completed first.
    pub async fn get_complete_todos(&self, page: u64, step: u64) -> Result<Vec<Todo>, StoreError> {
        let window = PageWindow::new(page, step)?;
        self.fetch(TodoQuery::complete(window)).await
    }

    /// Open todos, oldest first.
    pub async fn get_uncomplete_todos(&self, page: u64, step: u64) -> Result<Vec<Todo>, StoreError> {
        let window = PageWindow::new(page, step)?;
        self.fetch(TodoQuery::uncomplete(window)).await
    }

    /// Replace the content of a todo. Completion fields are left alone.
    pub async fn update_content(&self, id: i64, content: &str) -> Result<u64, StoreError> {
        check_id(id)?;
        let patch = TodoPatch {
            content: Some(content.to_string()),
            completion: None,
            update_time: self.clock.now(),
        };
        self.apply(id, patch).await
    }

    /// Mark a todo as done now.
    pub async fn complete_todo(&self, id: i64) -> Result<u64, StoreError> {
        check_id(id)?;
        let now = self.clock.now();
        let patch = TodoPatch {
            content: None,
            completion: Some(Completion::Complete { at: now }),
            update_time: now,
        };
        self.apply(id, patch).await
    }

    /// Reopen a todo, clearing its completion time.
    pub async fn re_todo(&self, id: i64) -> Result<u64, StoreError> {
        check_id(id)?;
        let patch = TodoPatch {
            content: None,
            completion: Some(Completion::Reopen),
            update_time: self.clock.now(),
        };
        self.apply(id, patch).await
    }

    /// Permanently remove a todo.
    pub async fn delete_todo(&self, id: i64) -> Result<u64, StoreError> {
        check_id(id)?;
        let deleted = self.backend.delete_by_id(id).await?;
        debug!("Deleted todo {} ({} row(s))", id, deleted);
        Ok(deleted)
    }

    /// Insert a new open todo and return its id.
    pub async fn add_todo(&self, content: &str) -> Result<i64, StoreError> {
        let new_todo = NewTodo {
            content: content.to_string(),
            created_at: self.clock.now(),
        };
        let id = self.backend.insert(new_todo).await?;
        debug!("Added todo {}", id);
        Ok(id)
    }

    async fn fetch(&self, query: TodoQuery) -> Result<Vec<Todo>, StoreError> {
        let rows = self.backend.query(query).await?;
        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn apply(&self, id: i64, patch: TodoPatch) -> Result<u64, StoreError> {
        let updated = self.backend.update_fields(id, patch).await?;
        debug!("Updated todo {} ({} row(s))", id, updated);
        Ok(updated)
    }
}

fn check_id(id: i64) -> Result<(), StoreError> {
    if id < 1 {
        return Err(StoreError::invalid_input(format!("id must be positive, got {}", id)));
    }
    Ok(())
}
