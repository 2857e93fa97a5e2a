//! End-to-end tests for the asset lifecycle coordinator and the background
//! dispatcher it rides on: exactly-one removal per orphaning transition, and
//! full isolation of cleanup failures from the caller.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use folio_api::services::AssetLifecycleCoordinator;
use folio_api::TaskDispatcher;
use folio_core::{AssetBackend, ContentKind};
use folio_storage::{AssetStore, StorageError, StorageResult};
use uuid::Uuid;

/// Asset store double that records every removal and can be made to fail.
struct RecordingStore {
    removed: Mutex<Vec<String>>,
    calls: AtomicUsize,
    fail: bool,
}

impl RecordingStore {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            removed: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            fail: false,
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            removed: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            fail: true,
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn removed_ids(&self) -> Vec<String> {
        self.removed.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssetStore for RecordingStore {
    async fn remove(&self, asset_id: &str) -> StorageResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(StorageError::DeleteFailed(format!(
                "simulated failure for {}",
                asset_id
            )));
        }
        self.removed.lock().unwrap().push(asset_id.to_string());
        Ok(())
    }

    fn backend_type(&self) -> AssetBackend {
        AssetBackend::Local
    }
}

async fn wait_until(check: impl Fn() -> bool) -> bool {
    for _ in 0..100 {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    check()
}

/// Grace period for asserting that nothing was dispatched.
async fn settle() {
    tokio::time::sleep(Duration::from_millis(100)).await;
}

#[tokio::test]
async fn replacing_an_asset_removes_exactly_the_old_one() {
    let store = RecordingStore::new();
    let coordinator =
        AssetLifecycleCoordinator::new(store.clone(), TaskDispatcher::new());

    coordinator.reconcile(ContentKind::Blog, Uuid::new_v4(), Some("old1"), Some("new1"));

    assert!(wait_until(|| store.call_count() == 1).await);
    assert_eq!(store.removed_ids(), vec!["old1".to_string()]);

    settle().await;
    assert_eq!(store.call_count(), 1);
}

#[tokio::test]
async fn unchanged_asset_triggers_no_removal() {
    let store = RecordingStore::new();
    let coordinator =
        AssetLifecycleCoordinator::new(store.clone(), TaskDispatcher::new());

    coordinator.reconcile(ContentKind::Blog, Uuid::new_v4(), Some("old1"), Some("old1"));

    settle().await;
    assert_eq!(store.call_count(), 0);
}

#[tokio::test]
async fn deleting_a_record_with_attached_asset_removes_it() {
    let store = RecordingStore::new();
    let coordinator =
        AssetLifecycleCoordinator::new(store.clone(), TaskDispatcher::new());

    coordinator.reconcile(ContentKind::Video, Uuid::new_v4(), Some("thumb9"), None);

    assert!(wait_until(|| store.call_count() == 1).await);
    assert_eq!(store.removed_ids(), vec!["thumb9".to_string()]);
}

#[tokio::test]
async fn deleting_an_unattached_record_triggers_no_removal() {
    let store = RecordingStore::new();
    let coordinator =
        AssetLifecycleCoordinator::new(store.clone(), TaskDispatcher::new());

    coordinator.reconcile(ContentKind::Video, Uuid::new_v4(), None, None);

    settle().await;
    assert_eq!(store.call_count(), 0);
}

#[tokio::test]
async fn cleanup_failure_is_isolated_and_later_cleanups_still_run() {
    let failing = RecordingStore::failing();
    let dispatcher = TaskDispatcher::new();
    let coordinator = AssetLifecycleCoordinator::new(failing.clone(), dispatcher.clone());

    // The failing removal must not propagate anywhere; reconcile returns
    // immediately and the dispatcher swallows the error.
    coordinator.reconcile(ContentKind::Blog, Uuid::new_v4(), Some("doomed"), None);
    assert!(wait_until(|| failing.call_count() == 1).await);

    // A healthy store on the same dispatcher keeps working afterwards.
    let healthy = RecordingStore::new();
    let coordinator = AssetLifecycleCoordinator::new(healthy.clone(), dispatcher);
    coordinator.reconcile(ContentKind::Blog, Uuid::new_v4(), Some("old2"), Some("new2"));

    assert!(wait_until(|| healthy.call_count() == 1).await);
    assert_eq!(healthy.removed_ids(), vec!["old2".to_string()]);
}

#[tokio::test]
async fn each_transition_dispatches_at_most_once() {
    let store = RecordingStore::new();
    let coordinator =
        AssetLifecycleCoordinator::new(store.clone(), TaskDispatcher::new());
    let record_id = Uuid::new_v4();

    // Three successive replacements: each orphans exactly one asset.
    coordinator.reconcile(ContentKind::Blog, record_id, Some("a"), Some("b"));
    coordinator.reconcile(ContentKind::Blog, record_id, Some("b"), Some("c"));
    coordinator.reconcile(ContentKind::Blog, record_id, Some("c"), None);

    assert!(wait_until(|| store.call_count() == 3).await);
    let mut removed = store.removed_ids();
    removed.sort();
    assert_eq!(removed, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
}
