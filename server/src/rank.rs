//! Cached retrieval id of the latest published snapshot.
//!
//! The id is a local timestamp recomputed only after a new snapshot has been
//! marked as published. A [`RankRefresher`] owned by the service recomputes
//! it periodically and purges expired login keys on the same tick.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};
use parking_lot::RwLock;
use tokio::sync::oneshot;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::store::LoginKeyStore;

/// Timestamp layout of a retrieval id.
pub const RETRIEVAL_ID_FORMAT: &str = "%Y%m%d%H%M%S";

pub fn format_retrieval_id(now: &DateTime<Local>) -> String {
    now.format(RETRIEVAL_ID_FORMAT).to_string()
}

#[derive(Debug)]
struct RankState {
    retrieval_id: String,
    refreshed_at: Option<DateTime<Local>>,
    dirty: bool,
}

/// Lock-guarded retrieval id with a dirty flag.
#[derive(Debug)]
pub struct RankCache {
    state: RwLock<RankState>,
}

impl Default for RankCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RankCache {
    /// Creates an empty cache. It starts dirty so the first refresh yields an id.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RankState {
                retrieval_id: String::new(),
                refreshed_at: None,
                dirty: true,
            }),
        }
    }

    /// Latest retrieval id, empty before the first refresh.
    pub fn retrieval_id(&self) -> String {
        self.state.read().retrieval_id.clone()
    }

    pub fn refreshed_at(&self) -> Option<DateTime<Local>> {
        self.state.read().refreshed_at
    }

    pub fn is_dirty(&self) -> bool {
        self.state.read().dirty
    }

    /// Records that a new snapshot has been published.
    pub fn mark_dirty(&self) {
        self.state.write().dirty = true;
    }

    /// Recomputes the retrieval id from `now` if the cache is dirty.
    ///
    /// Returns `true` when a new id was computed.
    pub fn refresh(&self, now: DateTime<Local>) -> bool {
        let mut state = self.state.write();
        if !state.dirty {
            return false;
        }
        state.retrieval_id = format_retrieval_id(&now);
        state.refreshed_at = Some(now);
        state.dirty = false;
        true
    }
}

/// Refreshes `cache` and purges `store` once.
pub fn refresh_tick(cache: &RankCache, store: &dyn LoginKeyStore) {
    if cache.refresh(Local::now()) {
        info!(retrieval_id = %cache.retrieval_id(), "retrieval id refreshed");
    }
    match store.purge_expired() {
        Ok(0) => {}
        Ok(purged) => debug!(purged, "expired login keys purged"),
        Err(err) => warn!(error = %err, "login key purge failed"),
    }
}

/// Periodic refresh task owned by the service.
///
/// Dropping the refresher without calling [`stop`](Self::stop) also ends the
/// task on its next poll.
#[derive(Debug)]
pub struct RankRefresher {
    stop_tx: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl RankRefresher {
    /// Spawns the refresh loop on the current tokio runtime.
    ///
    /// The first refresh happens one `period` after spawning; callers refresh
    /// once themselves before serving. `period` must be non-zero.
    pub fn spawn(cache: Arc<RankCache>, store: Arc<dyn LoginKeyStore>, period: Duration) -> Self {
        let (stop_tx, mut stop_rx) = oneshot::channel();
        let handle = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut ticker = tokio::time::interval_at(start, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = ticker.tick() => refresh_tick(&cache, store.as_ref()),
                    _ = &mut stop_rx => break,
                }
            }
            debug!("rank refresher stopped");
        });
        Self { stop_tx, handle }
    }

    /// Signals the loop to end and waits for it.
    pub async fn stop(self) -> Result<(), JoinError> {
        let Self { stop_tx, handle } = self;
        // The receiver is gone only if the task already ended.
        let _ = stop_tx.send(());
        handle.await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryKeyStore;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32, second: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 1, 2, hour, minute, second)
            .single()
            .unwrap()
    }

    #[test]
    fn starts_dirty_and_empty() {
        let cache = RankCache::new();
        assert!(cache.is_dirty());
        assert_eq!(cache.retrieval_id(), "");
        assert_eq!(cache.refreshed_at(), None);
    }

    #[test]
    fn refresh_only_while_dirty() {
        let cache = RankCache::new();
        assert!(cache.refresh(at(3, 4, 5)));
        assert_eq!(cache.retrieval_id(), "20240102030405");
        assert_eq!(cache.refreshed_at(), Some(at(3, 4, 5)));

        assert!(!cache.refresh(at(9, 0, 0)));
        assert_eq!(cache.retrieval_id(), "20240102030405");

        cache.mark_dirty();
        assert!(cache.refresh(at(9, 0, 0)));
        assert_eq!(cache.retrieval_id(), "20240102090000");
        assert!(!cache.is_dirty());
    }

    #[tokio::test(start_paused = true)]
    async fn refresher_ticks_and_stops() {
        let cache = Arc::new(RankCache::new());
        let store = Arc::new(MemoryKeyStore::new());
        store.assign("expired", 1, Duration::ZERO).unwrap();

        let refresher = RankRefresher::spawn(cache.clone(), store.clone(), Duration::from_secs(60));
        assert!(cache.is_dirty());

        tokio::time::sleep(Duration::from_secs(61)).await;
        assert!(!cache.is_dirty());
        assert!(!cache.retrieval_id().is_empty());
        assert!(store.is_empty());

        refresher.stop().await.unwrap();
    }

    #[tokio::test]
    async fn stop_before_first_tick() {
        let cache = Arc::new(RankCache::new());
        let store: Arc<dyn LoginKeyStore> = Arc::new(MemoryKeyStore::new());
        let refresher = RankRefresher::spawn(cache.clone(), store, Duration::from_secs(3600));
        refresher.stop().await.unwrap();
        assert!(cache.is_dirty());
    }
}
