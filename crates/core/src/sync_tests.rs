// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the synchronization core.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::store::tests::MockStore;
use chrono::Utc;

fn item(id: &str, text: &str, completed: bool) -> Item {
    let mut item = Item::new(ItemId::new(id), text, Utc::now());
    item.completed = completed;
    item
}

fn ids(sync: &TodoSync<MockStore>) -> Vec<String> {
    sync.state()
        .items()
        .iter()
        .map(|i| i.id.to_string())
        .collect()
}

fn transport_error() -> SyncError {
    SyncError::Transport {
        message: "connection refused".into(),
    }
}

async fn loaded(items: Vec<Item>) -> TodoSync<MockStore> {
    let sync = TodoSync::new(MockStore::with_items(items));
    assert_eq!(sync.fetch_all().await, Outcome::Applied);
    sync
}

// fetch_all

#[tokio::test]
async fn test_fetch_all_replaces_collection() {
    let sync = loaded(vec![item("a", "A", false), item("b", "B", true)]).await;
    assert_eq!(ids(&sync), vec!["a", "b"]);
    assert_eq!(sync.state().status(), Status::Idle);
}

#[tokio::test]
async fn test_fetch_all_marks_loading_while_in_flight() {
    let store = MockStore::with_items(vec![item("a", "A", false)]);
    let release = store.hold("list");
    let sync = TodoSync::new(store);

    let ((), outcome) = tokio::join!(
        async {
            tokio::task::yield_now().await;
            assert!(sync.state().status().is_loading());
            release.send(()).unwrap();
        },
        sync.fetch_all()
    );

    assert_eq!(outcome, Outcome::Applied);
    assert!(!sync.state().status().is_loading());
}

#[tokio::test]
async fn test_fetch_all_failure_keeps_previous_items() {
    let sync = loaded(vec![item("a", "A", false)]).await;
    sync.store().set_down(Some(transport_error()));

    let outcome = sync.fetch_all().await;

    assert_eq!(outcome, Outcome::Failed(transport_error()));
    assert_eq!(ids(&sync), vec!["a"]);
    assert_eq!(sync.state().status(), Status::Failed(transport_error()));
}

#[tokio::test]
async fn test_first_fetch_failure_leaves_empty_collection() {
    let store = MockStore::new();
    store.set_down(Some(transport_error()));
    let sync = TodoSync::new(store);

    assert!(sync.fetch_all().await.is_failed());
    assert!(sync.state().items().is_empty());
    assert!(!sync.state().status().is_loading());
}

#[tokio::test]
async fn test_fetch_all_dedups_keeping_last() {
    let sync = loaded(vec![
        item("a", "old", false),
        item("b", "B", false),
        item("a", "new", true),
    ])
    .await;
    assert_eq!(ids(&sync), vec!["b", "a"]);
    assert_eq!(sync.state().get(&ItemId::new("a")).unwrap().text, "new");
}

// retry

#[tokio::test]
async fn test_retry_without_error_is_skipped() {
    let sync = loaded(vec![]).await;
    assert_eq!(sync.retry().await, Outcome::Skipped(SkipReason::NoError));
    assert_eq!(sync.store().calls(), vec!["list"]);
}

#[tokio::test]
async fn test_retry_refetches_after_error() {
    let store = MockStore::with_items(vec![item("a", "A", false)]);
    store.set_down(Some(transport_error()));
    let sync = TodoSync::new(store);
    assert!(sync.fetch_all().await.is_failed());

    sync.store().set_down(None);
    assert_eq!(sync.retry().await, Outcome::Applied);
    assert_eq!(ids(&sync), vec!["a"]);
    assert_eq!(sync.state().status(), Status::Idle);
}

// add

#[tokio::test]
async fn test_add_appends_server_item() {
    let sync = loaded(vec![item("a", "A", false)]).await;

    assert_eq!(sync.add("  Buy milk  ").await, Outcome::Applied);

    let items = sync.state().items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].id.as_str(), "srv-1");
    assert_eq!(items[1].text, "Buy milk");
    assert!(!items[1].completed);
    assert!(sync.store().calls().contains(&"create:Buy milk".to_string()));
}

#[tokio::test]
async fn test_add_then_fetch_contains_text_once() {
    let sync = loaded(vec![]).await;
    sync.add("Write report").await;
    sync.fetch_all().await;

    let matching = sync
        .state()
        .items()
        .iter()
        .filter(|i| i.text == "Write report")
        .count();
    assert_eq!(matching, 1);
}

#[tokio::test]
async fn test_add_blank_is_silent_noop() {
    let sync = loaded(vec![]).await;

    assert_eq!(
        sync.add("   ").await,
        Outcome::Skipped(SkipReason::Invalid(ValidationError::Empty))
    );
    assert!(sync.state().items().is_empty());
    assert_eq!(sync.state().status(), Status::Idle);
    assert_eq!(sync.store().calls(), vec!["list"]);
}

#[tokio::test]
async fn test_add_failure_sets_error_and_keeps_collection() {
    let sync = loaded(vec![item("a", "A", false)]).await;
    let rejection = SyncError::Rejected {
        status: 400,
        reason: "Bad Request".into(),
        body: Some(r#"{"error": "Text is required"}"#.into()),
    };
    sync.store().set_down(Some(rejection.clone()));

    assert_eq!(sync.add("B").await, Outcome::Failed(rejection.clone()));
    assert_eq!(ids(&sync), vec!["a"]);
    let status = sync.state().status();
    assert_eq!(status.error().unwrap().to_string(), "Text is required");
}

#[tokio::test]
async fn test_add_item_returns_created_item_when_id_already_listed() {
    let sync = loaded(vec![item("srv-1", "Stale", false), item("z", "Z", false)]).await;

    let (outcome, created) = sync.add_item("Fresh").await;

    assert_eq!(outcome, Outcome::Applied);
    let created = created.unwrap();
    assert_eq!(created.id.as_str(), "srv-1");
    assert_eq!(created.text, "Fresh");
    assert_eq!(ids(&sync), vec!["srv-1", "z"]);
    assert_eq!(sync.state().get(&created.id).unwrap().text, "Fresh");
}

#[tokio::test]
async fn test_add_item_skip_and_failure_return_no_item() {
    let sync = loaded(vec![]).await;
    assert!(sync.add_item("   ").await.1.is_none());

    sync.store().set_down(Some(transport_error()));
    let (outcome, created) = sync.add_item("A").await;
    assert!(outcome.is_failed());
    assert!(created.is_none());
}

#[tokio::test]
async fn test_new_attempt_clears_previous_error() {
    let sync = loaded(vec![]).await;
    sync.store().set_down(Some(transport_error()));
    sync.add("A").await;
    assert!(sync.state().status().error().is_some());

    sync.store().set_down(None);
    assert_eq!(sync.add("A").await, Outcome::Applied);
    assert_eq!(sync.state().status(), Status::Idle);
}

// toggle

#[tokio::test]
async fn test_toggle_uses_server_state() {
    let sync = loaded(vec![item("a", "A", false)]).await;

    assert_eq!(sync.toggle(&ItemId::new("a")).await, Outcome::Applied);

    let a = sync.state().get(&ItemId::new("a")).unwrap();
    assert!(a.completed);
    assert!(a.updated_at.is_some());
    assert_eq!(sync.store().calls()[1], "set_completed:a:true");
}

#[tokio::test]
async fn test_toggle_twice_restores_original() {
    let sync = loaded(vec![item("a", "A", true)]).await;
    let id = ItemId::new("a");

    sync.toggle(&id).await;
    assert!(!sync.state().get(&id).unwrap().completed);
    sync.toggle(&id).await;
    assert!(sync.state().get(&id).unwrap().completed);
}

#[tokio::test]
async fn test_toggle_unknown_id_is_noop() {
    let sync = loaded(vec![item("a", "A", false)]).await;
    let id = ItemId::new("zzz");
    assert_eq!(
        sync.toggle(&id).await,
        Outcome::Skipped(SkipReason::UnknownItem(id))
    );
    assert_eq!(sync.store().calls(), vec!["list"]);
}

#[tokio::test]
async fn test_toggle_failure_leaves_item_unchanged() {
    let sync = loaded(vec![item("a", "A", false)]).await;
    sync.store().set_down(Some(transport_error()));

    assert!(sync.toggle(&ItemId::new("a")).await.is_failed());
    assert!(!sync.state().get(&ItemId::new("a")).unwrap().completed);
    assert!(sync.state().status().error().is_some());
}

#[tokio::test]
async fn test_item_pending_while_toggle_in_flight() {
    let store = MockStore::with_items(vec![item("a", "A", false)]);
    let sync = TodoSync::new(store);
    sync.fetch_all().await;
    let release = sync.store().hold("set_completed");
    let id = ItemId::new("a");

    let (outcome, ()) = tokio::join!(sync.toggle(&id), async {
        tokio::task::yield_now().await;
        assert!(sync.state().is_pending(&id));
        release.send(()).unwrap();
    });

    assert_eq!(outcome, Outcome::Applied);
    assert!(!sync.state().is_pending(&id));
}

// rename

#[tokio::test]
async fn test_rename_replaces_with_server_item() {
    let sync = loaded(vec![item("a", "Old", false)]).await;

    assert_eq!(
        sync.rename(&ItemId::new("a"), " New text ").await,
        Outcome::Applied
    );
    assert_eq!(
        sync.state().get(&ItemId::new("a")).unwrap().text,
        "New text"
    );
}

#[tokio::test]
async fn test_rename_blank_or_identical_is_noop() {
    let sync = loaded(vec![item("a", "Same", false)]).await;
    let id = ItemId::new("a");
    let before = sync.state().items();

    for text in ["", "   ", "Same", "  Same "] {
        assert!(matches!(
            sync.rename(&id, text).await,
            Outcome::Skipped(SkipReason::Invalid(_))
        ));
    }

    assert_eq!(sync.state().items(), before);
    assert_eq!(sync.state().status(), Status::Idle);
    assert_eq!(sync.store().calls(), vec!["list"]);
}

#[tokio::test]
async fn test_rename_failure_leaves_item_unchanged() {
    let sync = loaded(vec![item("a", "Old", false)]).await;
    sync.store()
        .set_down(Some(SyncError::rejected(500, "Internal Server Error")));

    assert!(sync.rename(&ItemId::new("a"), "New").await.is_failed());
    assert_eq!(sync.state().get(&ItemId::new("a")).unwrap().text, "Old");
}

// delete

#[tokio::test]
async fn test_delete_removes_exactly_one() {
    let sync = loaded(vec![
        item("a", "A", false),
        item("b", "B", false),
        item("c", "C", false),
    ])
    .await;

    assert_eq!(sync.delete(&ItemId::new("b")).await, Outcome::Applied);
    assert_eq!(ids(&sync), vec!["a", "c"]);
}

#[tokio::test]
async fn test_delete_unknown_id_is_noop() {
    let sync = loaded(vec![item("a", "A", false)]).await;

    assert!(matches!(
        sync.delete(&ItemId::new("nope")).await,
        Outcome::Skipped(SkipReason::UnknownItem(_))
    ));
    assert_eq!(ids(&sync), vec!["a"]);
    assert_eq!(sync.state().status(), Status::Idle);
}

#[tokio::test]
async fn test_delete_failure_keeps_item() {
    let sync = loaded(vec![item("a", "A", false)]).await;
    sync.store()
        .fail_delete(&ItemId::new("a"), SyncError::rejected(403, "Forbidden"));

    assert!(sync.delete(&ItemId::new("a")).await.is_failed());
    assert_eq!(ids(&sync), vec!["a"]);
}

// clear_completed

#[tokio::test]
async fn test_clear_completed_partial_failure() {
    let sync = loaded(vec![
        item("a", "A", true),
        item("b", "B", true),
        item("c", "C", false),
    ])
    .await;
    sync.store().fail_delete(
        &ItemId::new("b"),
        SyncError::rejected(500, "Internal Server Error"),
    );

    let outcome = sync.clear_completed().await;

    let expected = SyncError::PartialBulkFailure {
        failed: 1,
        succeeded: 1,
    };
    assert_eq!(outcome, Outcome::Failed(expected.clone()));
    assert_eq!(ids(&sync), vec!["b", "c"]);
    assert_eq!(sync.state().status(), Status::Failed(expected));

    let calls = sync.store().calls();
    assert!(calls.contains(&"delete:a".to_string()));
    assert!(calls.contains(&"delete:b".to_string()));
    assert!(!calls.iter().any(|c| c.ends_with(":c")));
}

#[tokio::test]
async fn test_clear_completed_all_succeed() {
    let sync = loaded(vec![
        item("a", "A", true),
        item("b", "B", false),
        item("c", "C", true),
    ])
    .await;

    assert_eq!(sync.clear_completed().await, Outcome::Applied);
    assert_eq!(ids(&sync), vec!["b"]);
    assert_eq!(sync.store().server_items().len(), 1);
}

#[tokio::test]
async fn test_clear_completed_slow_delete_does_not_block_others() {
    let sync = loaded(vec![item("a", "A", true), item("b", "B", true)]).await;
    let release = sync.store().hold("delete");

    let ((), outcome) = tokio::join!(
        async {
            tokio::task::yield_now().await;
            assert_eq!(sync.store().calls(), vec!["list", "delete:a", "delete:b"]);
            release.send(()).unwrap();
        },
        sync.clear_completed()
    );

    assert_eq!(outcome, Outcome::Applied);
    assert!(ids(&sync).is_empty());
}

#[tokio::test]
async fn test_clear_completed_with_nothing_completed() {
    let sync = loaded(vec![item("a", "A", false)]).await;
    assert_eq!(
        sync.clear_completed().await,
        Outcome::Skipped(SkipReason::NothingToClear)
    );
    assert_eq!(sync.store().calls(), vec!["list"]);
}

#[tokio::test]
async fn test_clear_completed_all_fail() {
    let sync = loaded(vec![item("a", "A", true), item("b", "B", true)]).await;
    sync.store().set_down(Some(transport_error()));

    assert_eq!(
        sync.clear_completed().await,
        Outcome::Failed(SyncError::PartialBulkFailure {
            failed: 2,
            succeeded: 0
        })
    );
    assert_eq!(ids(&sync), vec!["a", "b"]);
}

// ordering

#[tokio::test]
async fn test_late_toggle_response_does_not_resurrect_deleted_item() {
    let sync = loaded(vec![item("a", "A", false), item("b", "B", false)]).await;
    let release = sync.store().hold("set_completed");
    let id = ItemId::new("a");

    let (toggled, ()) = tokio::join!(sync.toggle(&id), async {
        assert_eq!(sync.delete(&id).await, Outcome::Applied);
        assert!(sync.state().get(&id).is_none());
        release.send(()).unwrap();
    });

    assert_eq!(toggled, Outcome::Skipped(SkipReason::UnknownItem(id)));
    assert_eq!(ids(&sync), vec!["b"]);
    assert_eq!(sync.state().status(), Status::Idle);
}

#[tokio::test]
async fn test_out_of_order_completion_touches_only_own_items() {
    let sync = loaded(vec![item("a", "A", false)]).await;
    let release = sync.store().hold("create");

    let (added, ()) = tokio::join!(sync.add("Slow add"), async {
        assert_eq!(sync.toggle(&ItemId::new("a")).await, Outcome::Applied);
        release.send(()).unwrap();
    });

    assert_eq!(added, Outcome::Applied);
    let items = sync.state().items();
    assert_eq!(items.len(), 2);
    assert!(items[0].completed);
    assert_eq!(items[1].text, "Slow add");
}
