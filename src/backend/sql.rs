//! SQL statement backend.
//!
//! Issues hand-written, parameterized SQL against the `todo` table and maps
//! result rows by column name.

use async_trait::async_trait;
use log::debug;
use sea_orm::{ConnectionTrait, DbBackend, DbErr, QueryResult, Statement, Value};

use super::{Completion, NewTodo, TodoBackend, TodoOrder, TodoPatch, TodoQuery};
use crate::constants::BACKEND_SQL;
use crate::entities::todo;
use crate::storage::LocalStorage;
use crate::todo::{encode_flag, Millis};

const CREATE_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS todo (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        content TEXT NOT NULL,
        is_complete INTEGER NOT NULL,
        complete_time INTEGER,
        update_time INTEGER NOT NULL,
        create_time INTEGER NOT NULL
    )
";

const SELECT_COLUMNS: &str = "SELECT id, content, is_complete, complete_time, update_time, create_time FROM todo";

/// Backend that talks to SQLite through raw statements.
#[derive(Clone)]
pub struct SqlBackend {
    storage: LocalStorage,
}

impl SqlBackend {
    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    fn statement(&self, sql: &str, values: Vec<Value>) -> Statement {
        Statement::from_sql_and_values(self.db_backend(), sql, values)
    }

    fn db_backend(&self) -> DbBackend {
        self.storage.conn.get_database_backend()
    }

    /// Create a todo row from a database result row
    fn todo_from_row(row: &QueryResult) -> Result<todo::Model, DbErr> {
        Ok(todo::Model {
            id: row.try_get("", "id")?,
            content: row.try_get("", "content")?,
            is_complete: row.try_get("", "is_complete")?,
            complete_time: row.try_get("", "complete_time")?,
            update_time: row.try_get("", "update_time")?,
            create_time: row.try_get("", "create_time")?,
        })
    }
}

#[async_trait]
impl TodoBackend for SqlBackend {
    fn backend_type(&self) -> &str {
        BACKEND_SQL
    }

    async fn create_schema(&self) -> Result<(), DbErr> {
        self.storage.conn.execute_unprepared(CREATE_TABLE).await?;
        Ok(())
    }

    async fn latest_timestamp(&self) -> Result<Option<Millis>, DbErr> {
        let row = self
            .storage
            .conn
            .query_one(self.statement(
                "SELECT MAX(update_time) AS max_update, MAX(create_time) AS max_create FROM todo",
                Vec::new(),
            ))
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        let max_update: Option<i64> = row.try_get("", "max_update")?;
        let max_create: Option<i64> = row.try_get("", "max_create")?;
        Ok(max_update.max(max_create))
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<todo::Model>, DbErr> {
        let sql = format!("{} WHERE id = ?", SELECT_COLUMNS);
        let row = self
            .storage
            .conn
            .query_one(self.statement(&sql, vec![id.into()]))
            .await?;

        row.as_ref().map(Self::todo_from_row).transpose()
    }

    async fn query(&self, query: TodoQuery) -> Result<Vec<todo::Model>, DbErr> {
        let order_clause = match query.order {
            TodoOrder::CompleteTimeDesc => "ORDER BY complete_time DESC, id DESC",
            TodoOrder::CreateTimeAsc => "ORDER BY create_time ASC, id ASC",
        };
        let sql = format!("{} WHERE is_complete = ? {} LIMIT ? OFFSET ?", SELECT_COLUMNS, order_clause);

        let values = vec![
            encode_flag(query.is_complete).into(),
            query.window.limit().into(),
            query.window.offset().into(),
        ];
        let rows = self.storage.conn.query_all(self.statement(&sql, values)).await?;
        debug!("SQL query returned {} row(s)", rows.len());

        rows.iter().map(Self::todo_from_row).collect()
    }

    async fn update_fields(&self, id: i64, patch: TodoPatch) -> Result<u64, DbErr> {
        let mut assignments = Vec::new();
        let mut values: Vec<Value> = Vec::new();

        if let Some(content) = patch.content {
            assignments.push("content = ?");
            values.push(content.into());
        }

        match patch.completion {
            Some(Completion::Complete { at }) => {
                assignments.push("is_complete = ?");
                values.push(encode_flag(true).into());
                assignments.push("complete_time = MAX(?, create_time)");
                values.push(at.into());
            }
            Some(Completion::Reopen) => {
                assignments.push("is_complete = ?");
                values.push(encode_flag(false).into());
                assignments.push("complete_time = ?");
                values.push(None::<i64>.into());
            }
            None => {}
        }

        assignments.push("update_time = MAX(?, create_time)");
        values.push(patch.update_time.into());
        values.push(id.into());

        let sql = format!("UPDATE todo SET {} WHERE id = ?", assignments.join(", "));
        let result = self.storage.conn.execute(self.statement(&sql, values)).await?;
        Ok(result.rows_affected())
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, DbErr> {
        let result = self
            .storage
            .conn
            .execute(self.statement("DELETE FROM todo WHERE id = ?", vec![id.into()]))
            .await?;
        Ok(result.rows_affected())
    }

    async fn insert(&self, new_todo: NewTodo) -> Result<i64, DbErr> {
        let values = vec![
            new_todo.content.into(),
            encode_flag(false).into(),
            new_todo.created_at.into(),
            new_todo.created_at.into(),
        ];
        let result = self
            .storage
            .conn
            .execute(self.statement(
                "INSERT INTO todo (content, is_complete, complete_time, update_time, create_time) VALUES (?, ?, NULL, ?, ?)",
                values,
            ))
            .await?;

        i64::try_from(result.last_insert_id())
            .map_err(|_| DbErr::Custom(format!("inserted id {} out of range", result.last_insert_id())))
    }
}
