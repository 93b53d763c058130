use todo_store::StoreError;

use crate::common::{add_all, memory_store, BACKENDS};

#[tokio::test]
async fn test_add_then_get_returns_open_todo() {
    for kind in BACKENDS {
        let store = memory_store(kind).await;

        for content in ["buy milk", "", "réparer le vélo 🚲", "line one\nline two"] {
            let id = store.add_todo(content).await.unwrap();
            let todo = store.get_todo(id).await.unwrap().expect("todo should exist");

            assert_eq!(todo.id, id, "{kind} backend");
            assert_eq!(todo.content, content, "{kind} backend");
            assert!(!todo.is_complete, "{kind} backend");
            assert_eq!(todo.complete_time, None, "{kind} backend");
            assert_eq!(todo.create_time, todo.update_time, "{kind} backend");
        }
    }
}

#[tokio::test]
async fn test_ids_are_distinct_and_not_reused() {
    for kind in BACKENDS {
        let store = memory_store(kind).await;
        let ids = add_all(&store, &["a", "b", "c"]).await;
        assert!(ids[0] < ids[1] && ids[1] < ids[2], "{kind} backend");

        store.delete_todo(ids[2]).await.unwrap();
        let next = store.add_todo("d").await.unwrap();
        assert!(next > ids[2], "{kind} backend reassigned id {}", next);
    }
}

#[tokio::test]
async fn test_get_missing_todo_is_none() {
    for kind in BACKENDS {
        let store = memory_store(kind).await;
        assert_eq!(store.get_todo(42).await.unwrap(), None, "{kind} backend");
    }
}

#[tokio::test]
async fn test_complete_then_reopen() {
    for kind in BACKENDS {
        let store = memory_store(kind).await;
        let id = store.add_todo("file taxes").await.unwrap();
        let created = store.get_todo(id).await.unwrap().unwrap();

        assert_eq!(store.complete_todo(id).await.unwrap(), 1);
        let completed = store.get_todo(id).await.unwrap().unwrap();
        assert!(completed.is_complete, "{kind} backend");
        assert_eq!(completed.complete_time, Some(completed.update_time), "{kind} backend");
        assert!(completed.update_time > created.update_time, "{kind} backend");
        assert_eq!(completed.create_time, created.create_time, "{kind} backend");

        assert_eq!(store.re_todo(id).await.unwrap(), 1);
        let reopened = store.get_todo(id).await.unwrap().unwrap();
        assert!(!reopened.is_complete, "{kind} backend");
        assert_eq!(reopened.complete_time, None, "{kind} backend");
        assert!(reopened.update_time > completed.update_time, "{kind} backend");
        assert_eq!(reopened.content, "file taxes", "{kind} backend");
        assert_eq!(reopened.create_time, created.create_time, "{kind} backend");
    }
}

#[tokio::test]
async fn test_update_content_touches_only_content_and_update_time() {
    for kind in BACKENDS {
        let store = memory_store(kind).await;
        let id = store.add_todo("draft").await.unwrap();
        store.complete_todo(id).await.unwrap();
        let before = store.get_todo(id).await.unwrap().unwrap();

        assert_eq!(store.update_content(id, "x").await.unwrap(), 1);
        let after = store.get_todo(id).await.unwrap().unwrap();

        assert_eq!(after.content, "x", "{kind} backend");
        assert!(after.update_time > before.update_time, "{kind} backend");
        assert_eq!(after.create_time, before.create_time, "{kind} backend");
        assert_eq!(after.is_complete, before.is_complete, "{kind} backend");
        assert_eq!(after.complete_time, before.complete_time, "{kind} backend");
    }
}

#[tokio::test]
async fn test_delete_removes_row() {
    for kind in BACKENDS {
        let store = memory_store(kind).await;
        let ids = add_all(&store, &["keep", "drop"]).await;

        assert_eq!(store.delete_todo(ids[1]).await.unwrap(), 1);
        assert_eq!(store.get_todo(ids[1]).await.unwrap(), None, "{kind} backend");
        assert!(store.get_todo(ids[0]).await.unwrap().is_some(), "{kind} backend");

        // Deleting again affects nothing
        assert_eq!(store.delete_todo(ids[1]).await.unwrap(), 0, "{kind} backend");
    }
}

#[tokio::test]
async fn test_mutating_missing_todo_affects_no_rows() {
    for kind in BACKENDS {
        let store = memory_store(kind).await;
        assert_eq!(store.update_content(99, "ghost").await.unwrap(), 0, "{kind} backend");
        assert_eq!(store.complete_todo(99).await.unwrap(), 0, "{kind} backend");
        assert_eq!(store.re_todo(99).await.unwrap(), 0, "{kind} backend");
        assert_eq!(store.get_todo(99).await.unwrap(), None, "{kind} backend");
    }
}

#[tokio::test]
async fn test_invalid_input_rejected_before_any_statement() {
    for kind in BACKENDS {
        let store = memory_store(kind).await;

        assert!(matches!(store.get_todo(0).await, Err(StoreError::InvalidInput(_))));
        assert!(matches!(store.get_todo(-3).await, Err(StoreError::InvalidInput(_))));
        assert!(matches!(store.update_content(0, "x").await, Err(StoreError::InvalidInput(_))));
        assert!(matches!(store.complete_todo(-1).await, Err(StoreError::InvalidInput(_))));
        assert!(matches!(store.re_todo(0).await, Err(StoreError::InvalidInput(_))));
        assert!(matches!(store.delete_todo(0).await, Err(StoreError::InvalidInput(_))));
        assert!(matches!(store.get_complete_todos(0, 10).await, Err(StoreError::InvalidInput(_))));
        assert!(matches!(store.get_uncomplete_todos(1, 0).await, Err(StoreError::InvalidInput(_))));
    }
}

#[tokio::test]
async fn test_backend_type_reported() {
    for kind in BACKENDS {
        let store = memory_store(kind).await;
        assert_eq!(store.backend_type(), kind.as_str());
    }
}
