use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Weak},
    time::Duration,
};

use moka::{future::Cache, notification::RemovalCause};
use parking_lot::Mutex;
use parley_core::{PermissionHolder, PermissionStore};

use super::{
    errors::PersistenceFailure, gateway::PersistenceGateway,
    metrics::record_client_cache_evictions,
};

type ExpiredStores = Arc<Mutex<Vec<(PermissionHolder, Arc<PermissionStore>)>>>;

/// Outcome of one [`HolderStoreCache::sweep`] pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub released: usize,
    pub flushed: usize,
    pub failed: usize,
}

/// Permission stores loaded on demand, shared while referenced and kept warm
/// for an idle window after the last access.
///
/// Strong references live in a `moka` cache with `time_to_idle`; expired
/// stores are queued by the eviction listener and flushed by [`sweep`].
/// A weak index keeps one instance per holder while anything still holds it.
///
/// [`sweep`]: HolderStoreCache::sweep
pub struct HolderStoreCache {
    warm: Cache<PermissionHolder, Arc<PermissionStore>>,
    expired: ExpiredStores,
    live: Mutex<HashMap<PermissionHolder, Weak<PermissionStore>>>,
    // holders whose last flush failed; never released until a flush succeeds
    unsynced: Mutex<HashSet<PermissionHolder>>,
}

impl std::fmt::Debug for HolderStoreCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HolderStoreCache")
            .field("warm", &self.warm.entry_count())
            .field("live", &self.live.lock().len())
            .finish()
    }
}

impl HolderStoreCache {
    #[must_use]
    pub fn new(idle: Duration) -> Self {
        let expired = ExpiredStores::default();
        let queue = Arc::clone(&expired);
        let warm = Cache::builder()
            .time_to_idle(idle)
            .eviction_listener(
                move |holder: Arc<PermissionHolder>, store: Arc<PermissionStore>, cause| {
                    if matches!(cause, RemovalCause::Expired) {
                        queue.lock().push((*holder, store));
                    }
                },
            )
            .build();
        Self {
            warm,
            expired,
            live: Mutex::new(HashMap::new()),
            unsynced: Mutex::new(HashSet::new()),
        }
    }

    /// The live store of `holder`, refreshing its idle window.
    pub async fn get(&self, holder: &PermissionHolder) -> Option<Arc<PermissionStore>> {
        if let Some(store) = self.warm.get(holder).await {
            return Some(store);
        }
        let store = self.live.lock().get(holder).and_then(Weak::upgrade)?;
        self.warm.insert(*holder, Arc::clone(&store)).await;
        Some(store)
    }

    /// Caches `store` unless a live one is already present, returning the winner.
    pub async fn insert(
        &self,
        holder: PermissionHolder,
        store: Arc<PermissionStore>,
    ) -> Arc<PermissionStore> {
        let winner = {
            let mut live = self.live.lock();
            if let Some(existing) = live.get(&holder).and_then(Weak::upgrade) {
                existing
            } else {
                live.insert(holder, Arc::downgrade(&store));
                store
            }
        };
        self.warm.insert(holder, Arc::clone(&winner)).await;
        winner
    }

    /// Returns the cached store or loads it through `gateway`.
    ///
    /// Concurrent loads of the same holder resolve to a single shared store.
    ///
    /// # Errors
    /// Returns an error when the holder's rows cannot be read.
    pub async fn get_or_load(
        &self,
        gateway: &PersistenceGateway,
        holder: &PermissionHolder,
    ) -> Result<Arc<PermissionStore>, PersistenceFailure> {
        if let Some(store) = self.get(holder).await {
            return Ok(store);
        }
        let loaded = gateway.load_permissions(holder).await?;
        Ok(self.insert(*holder, Arc::new(loaded)).await)
    }

    /// Flushes and releases every store that idled out.
    ///
    /// A store whose flush fails stays warm, and is kept warm on later sweeps
    /// until a flush of it succeeds.
    pub async fn sweep(&self, gateway: &PersistenceGateway) -> SweepSummary {
        self.warm.run_pending_tasks().await;
        let expired = std::mem::take(&mut *self.expired.lock());

        let mut summary = SweepSummary::default();
        for (holder, store) in expired {
            if store.require_db_updates() {
                if let Err(error) = gateway.save_permissions(&holder, &store).await {
                    summary.failed += 1;
                    self.unsynced.lock().insert(holder);
                    tracing::warn!(%holder, %error, "keeping permission store after failed flush");
                    self.warm.insert(holder, store).await;
                    continue;
                }
                summary.flushed += 1;
                self.unsynced.lock().remove(&holder);
            } else if self.unsynced.lock().contains(&holder) {
                self.warm.insert(holder, store).await;
                continue;
            }
            drop(store);
            summary.released += 1;
        }

        self.live.lock().retain(|_, weak| weak.strong_count() > 0);
        if summary.released > 0 || summary.failed > 0 {
            record_client_cache_evictions(summary.released as u64);
            tracing::debug!(
                released = summary.released,
                flushed = summary.flushed,
                failed = summary.failed,
                "permission store cache swept"
            );
        }
        summary
    }

    /// Number of holders whose store is still referenced.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
            .lock()
            .values()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every store that is still referenced somewhere.
    pub(crate) fn live(&self) -> Vec<(PermissionHolder, Arc<PermissionStore>)> {
        self.live
            .lock()
            .iter()
            .filter_map(|(holder, weak)| weak.upgrade().map(|store| (*holder, store)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use parley_core::{
        ClientDbId, PermissionHolder, PermissionKind, PermissionStore, PermissionUpdate, ServerId,
    };
    use sqlx::postgres::PgPoolOptions;

    use super::HolderStoreCache;
    use crate::server::gateway::PersistenceGateway;

    const IDLE: Duration = Duration::from_millis(50);
    const JOIN: PermissionKind = PermissionKind::I_CHANNEL_JOIN_POWER;

    fn holder() -> PermissionHolder {
        PermissionHolder::client(ServerId(1), ClientDbId(3))
    }

    fn unreachable_gateway() -> PersistenceGateway {
        let pool = PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(250))
            .connect_lazy("postgres://parley@127.0.0.1:1/parley")
            .expect("lazy pool should build");
        PersistenceGateway::postgres(pool)
    }

    async fn idle_out() {
        tokio::time::sleep(IDLE * 3).await;
    }

    #[tokio::test]
    async fn repeated_loads_share_one_store() {
        let gateway = PersistenceGateway::in_memory();
        let cache = HolderStoreCache::new(Duration::from_secs(60));
        let first = cache.get_or_load(&gateway, &holder()).await.unwrap();
        let second = cache.get_or_load(&gateway, &holder()).await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn sweep_flushes_then_releases_idle_stores() {
        let gateway = PersistenceGateway::in_memory();
        let cache = HolderStoreCache::new(IDLE);
        let store = cache.get_or_load(&gateway, &holder()).await.unwrap();
        store.set_permission(JOIN, PermissionUpdate::set_value(25)).unwrap();
        drop(store);

        let early = cache.sweep(&gateway).await;
        assert_eq!(early.released, 0);

        idle_out().await;
        let summary = cache.sweep(&gateway).await;
        assert_eq!(summary.released, 1);
        assert_eq!(summary.flushed, 1);

        let reloaded = cache.get_or_load(&gateway, &holder()).await.unwrap();
        assert_eq!(reloaded.permission_value_flagged(JOIN).as_option(), Some(25));
    }

    #[tokio::test]
    async fn externally_held_store_survives_sweep() {
        let gateway = PersistenceGateway::in_memory();
        let cache = HolderStoreCache::new(IDLE);
        let held = cache.get_or_load(&gateway, &holder()).await.unwrap();

        idle_out().await;
        cache.sweep(&gateway).await;
        assert_eq!(cache.len(), 1);
        let again = cache.get(&holder()).await.unwrap();
        assert!(Arc::ptr_eq(&held, &again));
    }

    #[tokio::test]
    async fn failed_flush_keeps_store_resident() {
        let gateway = unreachable_gateway();
        let cache = HolderStoreCache::new(IDLE);
        let store = cache
            .insert(holder(), Arc::new(PermissionStore::new()))
            .await;
        store.set_permission(JOIN, PermissionUpdate::set_value(25)).unwrap();
        drop(store);

        idle_out().await;
        let summary = cache.sweep(&gateway).await;
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.released, 0);
        let resident = cache.get(&holder()).await.expect("edit must stay in memory");
        assert_eq!(resident.permission_value_flagged(JOIN).as_option(), Some(25));
        drop(resident);

        idle_out().await;
        let again = cache.sweep(&gateway).await;
        assert_eq!(again.released, 0);
        assert!(cache.get(&holder()).await.is_some());
    }
}
