use std::sync::atomic::{AtomicUsize, Ordering};
use todo_store::config::{BackendKind, DatabaseConfig};
use todo_store::TodoStore;

/// Every test runs against both engines
pub const BACKENDS: [BackendKind; 2] = [BackendKind::Sql, BackendKind::Query];

static NEXT_DATABASE: AtomicUsize = AtomicUsize::new(0);

/// Name for a shared in-memory database no other test uses
pub fn unique_name(prefix: &str) -> String {
    format!(
        "{}_{}_{}",
        prefix,
        std::process::id(),
        NEXT_DATABASE.fetch_add(1, Ordering::Relaxed)
    )
}

pub async fn memory_store(kind: BackendKind) -> TodoStore {
    let config = DatabaseConfig::in_memory(unique_name("todo"), kind);
    TodoStore::open(&config).await.expect("in-memory store should open")
}

/// Add todos in order and return their ids
pub async fn add_all(store: &TodoStore, contents: &[&str]) -> Vec<i64> {
    let mut ids = Vec::with_capacity(contents.len());
    for content in contents {
        ids.push(store.add_todo(content).await.unwrap());
    }
    ids
}
