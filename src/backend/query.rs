//! Query-builder backend.
//!
//! Drives the `todo` table through the SeaORM entity API: the schema is
//! derived from the entity and every statement is assembled by the query
//! builder.

use async_trait::async_trait;
use log::debug;
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Schema,
};

use super::{Completion, NewTodo, TodoBackend, TodoOrder, TodoPatch, TodoQuery};
use crate::constants::BACKEND_QUERY;
use crate::entities::todo;
use crate::storage::LocalStorage;
use crate::todo::{encode_flag, Millis};

/// `MAX(stamp, create_time)`, so a row is never stamped before it was created
fn not_before_creation(stamp: Millis) -> SimpleExpr {
    Expr::cust_with_values("MAX(?, \"create_time\")", [stamp])
}

/// Backend that builds its statements from the `todo` entity.
#[derive(Clone)]
pub struct QueryBackend {
    storage: LocalStorage,
}

impl QueryBackend {
    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl TodoBackend for QueryBackend {
    fn backend_type(&self) -> &str {
        BACKEND_QUERY
    }

    async fn create_schema(&self) -> Result<(), DbErr> {
        let db_backend = self.storage.conn.get_database_backend();
        let schema = Schema::new(db_backend);

        let mut table = schema.create_table_from_entity(todo::Entity);
        table.if_not_exists();

        self.storage.conn.execute(db_backend.build(&table)).await?;
        Ok(())
    }

    async fn latest_timestamp(&self) -> Result<Option<Millis>, DbErr> {
        let latest = todo::Entity::find()
            .select_only()
            .column_as(todo::Column::UpdateTime.max(), "max_update")
            .column_as(todo::Column::CreateTime.max(), "max_create")
            .into_tuple::<(Option<i64>, Option<i64>)>()
            .one(&self.storage.conn)
            .await?;

        Ok(latest.and_then(|(max_update, max_create)| max_update.max(max_create)))
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<todo::Model>, DbErr> {
        todo::Entity::find_by_id(id).one(&self.storage.conn).await
    }

    async fn query(&self, query: TodoQuery) -> Result<Vec<todo::Model>, DbErr> {
        let select = todo::Entity::find().filter(todo::Column::IsComplete.eq(encode_flag(query.is_complete)));

        let select = match query.order {
            TodoOrder::CompleteTimeDesc => select
                .order_by_desc(todo::Column::CompleteTime)
                .order_by_desc(todo::Column::Id),
            TodoOrder::CreateTimeAsc => select
                .order_by_asc(todo::Column::CreateTime)
                .order_by_asc(todo::Column::Id),
        };

        let rows = select
            .offset(query.window.offset())
            .limit(query.window.limit())
            .all(&self.storage.conn)
            .await?;
        debug!("Query builder returned {} row(s)", rows.len());

        Ok(rows)
    }

    async fn update_fields(&self, id: i64, patch: TodoPatch) -> Result<u64, DbErr> {
        let mut update =
            todo::Entity::update_many().col_expr(todo::Column::UpdateTime, not_before_creation(patch.update_time));

        if let Some(content) = patch.content {
            update = update.col_expr(todo::Column::Content, Expr::value(content));
        }

        update = match patch.completion {
            Some(Completion::Complete { at }) => update
                .col_expr(todo::Column::IsComplete, Expr::value(encode_flag(true)))
                .col_expr(todo::Column::CompleteTime, not_before_creation(at)),
            Some(Completion::Reopen) => update
                .col_expr(todo::Column::IsComplete, Expr::value(encode_flag(false)))
                .col_expr(todo::Column::CompleteTime, Expr::value(None::<i64>)),
            None => update,
        };

        let result = update
            .filter(todo::Column::Id.eq(id))
            .exec(&self.storage.conn)
            .await?;
        Ok(result.rows_affected)
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, DbErr> {
        let result = todo::Entity::delete_by_id(id).exec(&self.storage.conn).await?;
        Ok(result.rows_affected)
    }

    async fn insert(&self, new_todo: NewTodo) -> Result<i64, DbErr> {
        let model = todo::ActiveModel {
            id: ActiveValue::NotSet,
            content: ActiveValue::Set(new_todo.content),
            is_complete: ActiveValue::Set(encode_flag(false)),
            complete_time: ActiveValue::Set(None),
            update_time: ActiveValue::Set(new_todo.created_at),
            create_time: ActiveValue::Set(new_todo.created_at),
        };

        let result = todo::Entity::insert(model).exec(&self.storage.conn).await?;
        Ok(result.last_insert_id)
    }
}
