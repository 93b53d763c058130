use crate::common::{add_all, memory_store, BACKENDS};

fn contents(todos: &[todo_store::Todo]) -> Vec<&str> {
    todos.iter().map(|todo| todo.content.as_str()).collect()
}

#[tokio::test]
async fn test_complete_todos_paged_newest_first() {
    for kind in BACKENDS {
        let store = memory_store(kind).await;
        let ids = add_all(&store, &["one", "two", "three", "four", "five"]).await;

        // Completed in insertion order, so "five" is the most recent
        for id in &ids {
            store.complete_todo(*id).await.unwrap();
        }

        let page1 = store.get_complete_todos(1, 2).await.unwrap();
        assert_eq!(contents(&page1), ["five", "four"], "{kind} backend");

        let page2 = store.get_complete_todos(2, 2).await.unwrap();
        assert_eq!(contents(&page2), ["three", "two"], "{kind} backend");

        let page3 = store.get_complete_todos(3, 2).await.unwrap();
        assert_eq!(contents(&page3), ["one"], "{kind} backend");

        let page4 = store.get_complete_todos(4, 2).await.unwrap();
        assert!(page4.is_empty(), "{kind} backend");
    }
}

#[tokio::test]
async fn test_completion_order_not_creation_order() {
    for kind in BACKENDS {
        let store = memory_store(kind).await;
        let ids = add_all(&store, &["first", "second", "third"]).await;

        store.complete_todo(ids[1]).await.unwrap();
        store.complete_todo(ids[2]).await.unwrap();
        store.complete_todo(ids[0]).await.unwrap();

        let done = store.get_complete_todos(1, 10).await.unwrap();
        assert_eq!(contents(&done), ["first", "third", "second"], "{kind} backend");
        assert!(done.iter().all(|todo| todo.is_complete));
        assert!(done.windows(2).all(|pair| pair[0].complete_time > pair[1].complete_time));
    }
}

#[tokio::test]
async fn test_uncomplete_todos_oldest_first() {
    for kind in BACKENDS {
        let store = memory_store(kind).await;
        let ids = add_all(&store, &["a", "b", "c", "d"]).await;
        store.complete_todo(ids[1]).await.unwrap();

        let open = store.get_uncomplete_todos(1, 10).await.unwrap();
        assert_eq!(contents(&open), ["a", "c", "d"], "{kind} backend");
        assert!(open.iter().all(|todo| !todo.is_complete && todo.complete_time.is_none()));
        assert!(open.windows(2).all(|pair| pair[0].create_time < pair[1].create_time));

        let second_page = store.get_uncomplete_todos(2, 2).await.unwrap();
        assert_eq!(contents(&second_page), ["d"], "{kind} backend");
    }
}

#[tokio::test]
async fn test_reopened_todo_moves_back_to_open_list() {
    for kind in BACKENDS {
        let store = memory_store(kind).await;
        let ids = add_all(&store, &["older", "newer"]).await;
        store.complete_todo(ids[0]).await.unwrap();
        store.re_todo(ids[0]).await.unwrap();

        assert!(store.get_complete_todos(1, 10).await.unwrap().is_empty(), "{kind} backend");

        // Reopening keeps the original creation time, so it sorts first again
        let open = store.get_uncomplete_todos(1, 10).await.unwrap();
        assert_eq!(contents(&open), ["older", "newer"], "{kind} backend");
    }
}

#[tokio::test]
async fn test_window_past_the_end_is_empty() {
    for kind in BACKENDS {
        let store = memory_store(kind).await;
        assert!(store.get_complete_todos(1, 5).await.unwrap().is_empty());
        assert!(store.get_uncomplete_todos(1, 5).await.unwrap().is_empty());

        add_all(&store, &["only"]).await;
        assert!(store.get_uncomplete_todos(2, 1).await.unwrap().is_empty(), "{kind} backend");
        assert!(store.get_uncomplete_todos(1_000_000, 1_000).await.unwrap().is_empty(), "{kind} backend");
        assert_eq!(store.get_uncomplete_todos(1, 1_000).await.unwrap().len(), 1, "{kind} backend");
    }
}
