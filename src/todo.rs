//! Domain entity handed to the application.
//!
//! [`Todo`] is the in-memory form of one persisted row. The table keeps the
//! completion flag as a 0/1 integer; [`encode_flag`] and [`decode_flag`] are the
//! only places that conversion happens.

use serde::{Deserialize, Serialize};

use crate::entities::todo;

/// Milliseconds since the Unix epoch (UTC).
pub type Millis = i64;

/// One task record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub content: String,
    pub is_complete: bool,
    /// Present if and only if `is_complete` is true.
    pub complete_time: Option<Millis>,
    pub update_time: Millis,
    pub create_time: Millis,
}

/// Encode a completion flag the way the table stores it.
pub fn encode_flag(value: bool) -> i32 {
    i32::from(value)
}

/// Decode a stored completion flag. Any non-zero value counts as set.
pub fn decode_flag(value: i32) -> bool {
    value != 0
}

impl From<todo::Model> for Todo {
    fn from(row: todo::Model) -> Self {
        Self {
            id: row.id,
            content: row.content,
            is_complete: decode_flag(row.is_complete),
            complete_time: row.complete_time,
            update_time: row.update_time,
            create_time: row.create_time,
        }
    }
}

impl From<Todo> for todo::Model {
    fn from(entity: Todo) -> Self {
        Self {
            id: entity.id,
            content: entity.content,
            is_complete: encode_flag(entity.is_complete),
            complete_time: entity.complete_time,
            update_time: entity.update_time,
            create_time: entity.create_time,
        }
    }
}
