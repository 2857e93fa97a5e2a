//! Asset lifecycle coordination.
//!
//! A record holds at most one external asset reference. When an update
//! replaces that reference, or a delete removes the record, the previously
//! attached asset is orphaned and must be removed from the asset store. The
//! removal runs as a detached background unit of work: the primary write has
//! already committed, and its result never depends on cleanup succeeding.
//! Cleanup failures are logged and dropped; the store's removal is
//! idempotent on unknown ids, so an occasional duplicate dispatch is
//! harmless.

use std::sync::Arc;

use anyhow::Context;
use folio_core::ContentKind;
use folio_storage::AssetStore;
use folio_worker::TaskDispatcher;
use uuid::Uuid;

/// Decide which asset, if any, a transition orphans.
///
/// Returns the old asset id iff it is present and differs from the new one.
/// Covers both replacement (new = Some(other)) and record deletion
/// (new = None); a no-op update (new == old) or an unattached record yields
/// nothing.
pub fn cleanup_target<'a>(old: Option<&'a str>, new: Option<&str>) -> Option<&'a str> {
    match old {
        Some(old_id) if !old_id.is_empty() && new != Some(old_id) => Some(old_id),
        _ => None,
    }
}

/// Decides and dispatches asset removals on record transitions.
#[derive(Clone)]
pub struct AssetLifecycleCoordinator {
    store: Arc<dyn AssetStore>,
    dispatcher: TaskDispatcher,
}

impl AssetLifecycleCoordinator {
    pub fn new(store: Arc<dyn AssetStore>, dispatcher: TaskDispatcher) -> Self {
        Self { store, dispatcher }
    }

    /// Reconcile a record's asset reference after a committed write.
    ///
    /// Called with the asset ids before and after the write (after = None
    /// when the record was deleted). Returns immediately; any removal runs
    /// in the background.
    pub fn reconcile(
        &self,
        kind: ContentKind,
        record_id: Uuid,
        old_asset: Option<&str>,
        new_asset: Option<&str>,
    ) {
        let Some(target) = cleanup_target(old_asset, new_asset) else {
            return;
        };

        tracing::debug!(
            record_type = %kind,
            record_id = %record_id,
            asset_id = target,
            "Scheduling orphaned asset removal"
        );

        let asset_id = target.to_string();
        let store = self.store.clone();
        self.dispatcher.dispatch("asset-cleanup", async move {
            store
                .remove(&asset_id)
                .await
                .with_context(|| format!("Failed to remove asset {}", asset_id))?;
            tracing::debug!(asset_id = %asset_id, "Orphaned asset removed");
            Ok(())
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaced_asset_is_cleaned_up() {
        assert_eq!(cleanup_target(Some("old1"), Some("new1")), Some("old1"));
    }

    #[test]
    fn unchanged_asset_is_kept() {
        assert_eq!(cleanup_target(Some("old1"), Some("old1")), None);
    }

    #[test]
    fn deleted_record_cleans_up_attached_asset() {
        assert_eq!(cleanup_target(Some("old1"), None), Some("old1"));
    }

    #[test]
    fn unattached_record_has_no_cleanup() {
        assert_eq!(cleanup_target(None, Some("new1")), None);
        assert_eq!(cleanup_target(None, None), None);
        assert_eq!(cleanup_target(Some(""), None), None);
    }
}
