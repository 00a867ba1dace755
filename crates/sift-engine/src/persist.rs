//! Deferred persistence scheduler
//!
//! Writes never block snapshot emission: each save is handed to a task
//! that first yields (or sleeps a minimal delay) so the current
//! interaction finishes undisturbed. Scheduling a new save aborts a
//! not-yet-fired one, giving last-write-wins on disk.

use sift_core::FilterQuery;
use sift_storage::FilterStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// How a deferred write waits before touching the disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersistMode {
    /// Yield to the runtime first; the write runs once the executor has
    /// nothing more urgent.
    #[default]
    Idle,
    /// Minimal fixed delay, for hosts without a useful idle signal.
    Delay,
}

pub struct PersistScheduler {
    store: Arc<FilterStore>,
    mode: PersistMode,
    pending: Option<JoinHandle<()>>,
}

impl PersistScheduler {
    pub fn new(store: Arc<FilterStore>, mode: PersistMode) -> Self {
        Self {
            store,
            mode,
            pending: None,
        }
    }

    /// Queue a deferred write of `query`. Failures are swallowed with a
    /// warning: losing persisted filters degrades to defaults on the next
    /// session, not to a user-facing error.
    pub fn schedule(&mut self, query: FilterQuery) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        let store = self.store.clone();
        let mode = self.mode;
        self.pending = Some(tokio::spawn(async move {
            match mode {
                PersistMode::Idle => tokio::task::yield_now().await,
                PersistMode::Delay => sleep(Duration::from_millis(1)).await,
            }
            if let Err(err) = store.save(&query).await {
                tracing::warn!("deferred filter write failed: {err}");
            }
        }));
    }

    /// Wait for the pending write, if any, to finish. Test hook.
    pub async fn flush(&mut self) {
        if let Some(handle) = self.pending.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for PersistScheduler {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, Arc<FilterStore>) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(FilterStore::new(dir.path().join("state.json")));
        (dir, store)
    }

    #[tokio::test]
    async fn test_deferred_write_lands() {
        let (_dir, store) = temp_store();
        let mut scheduler = PersistScheduler::new(store.clone(), PersistMode::Idle);
        let query = FilterQuery {
            brand: "puma".to_string(),
            ..Default::default()
        };
        scheduler.schedule(query.clone());
        scheduler.flush().await;
        assert_eq!(store.load(), Some(query));
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let (_dir, store) = temp_store();
        let mut scheduler = PersistScheduler::new(store.clone(), PersistMode::Delay);
        for brand in ["a", "b", "c"] {
            scheduler.schedule(FilterQuery {
                brand: brand.to_string(),
                ..Default::default()
            });
        }
        scheduler.flush().await;
        assert_eq!(store.load().unwrap().brand, "c");
    }

    #[tokio::test]
    async fn test_drop_cancels_pending_write() {
        let (_dir, store) = temp_store();
        let mut scheduler = PersistScheduler::new(store.clone(), PersistMode::Delay);
        scheduler.schedule(FilterQuery {
            brand: "never".to_string(),
            ..Default::default()
        });
        drop(scheduler);
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn test_write_failure_is_swallowed() {
        // A directory path makes every write fail.
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(FilterStore::new(dir.path().to_path_buf()));
        let mut scheduler = PersistScheduler::new(store, PersistMode::Idle);
        scheduler.schedule(FilterQuery::default());
        // Must not panic.
        scheduler.flush().await;
    }
}
