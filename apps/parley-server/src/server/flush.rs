use tokio::{
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};

use super::core::AppState;

/// Outcome of one pass over every live store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlushReport {
    pub stores: usize,
    pub rows: u64,
    pub failed: usize,
}

/// Saves every live store with pending edits. Failures are logged and counted;
/// the in-memory state is kept as is.
///
/// Holder deletion waits until the pass is over.
pub async fn flush_all(state: &AppState) -> FlushReport {
    let _gate = state.flush_gate.lock().await;
    let mut report = FlushReport::default();
    for (holder, store) in state.live_stores() {
        if !store.require_db_updates() {
            continue;
        }
        match state.gateway.save_permissions(&holder, &store).await {
            Ok(summary) => {
                report.stores += 1;
                report.rows += summary.total();
            }
            Err(_) => report.failed += 1,
        }
    }
    if report.stores > 0 || report.failed > 0 {
        tracing::info!(
            stores = report.stores,
            rows = report.rows,
            failed = report.failed,
            "permission flush finished"
        );
    }
    report
}

/// Releases unused memory of every live store without pending edits.
pub fn cleanup_all(state: &AppState) -> usize {
    let reclaimed: usize = state
        .live_stores()
        .iter()
        .filter(|(_, store)| !store.require_db_updates())
        .map(|(_, store)| store.cleanup())
        .sum();
    if reclaimed > 0 {
        tracing::debug!(reclaimed, "permission stores compacted");
    }
    reclaimed
}

/// Runs periodic flushes, store cache sweeps and store compaction until the
/// task is aborted.
pub fn spawn_flush_worker(state: AppState) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut flush_ticker = interval(state.config.flush_interval);
        flush_ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut sweep_ticker = interval(state.config.client_cache_sweep_interval);
        sweep_ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // both intervals fire immediately on the first tick
        flush_ticker.tick().await;
        sweep_ticker.tick().await;

        loop {
            tokio::select! {
                _ = flush_ticker.tick() => {
                    flush_all(&state).await;
                }
                _ = sweep_ticker.tick() => {
                    state.clients.sweep(&state.gateway).await;
                    state.playlists.sweep(&state.gateway).await;
                    cleanup_all(&state);
                }
            }
        }
    })
}

impl AppState {
    /// Stops `worker`, if any, and writes every pending edit once.
    pub async fn shutdown_flush(&self, worker: Option<JoinHandle<()>>) -> FlushReport {
        if let Some(worker) = worker {
            worker.abort();
            if let Err(error) = worker.await {
                if !error.is_cancelled() {
                    tracing::error!(%error, "flush worker failed");
                }
            }
        }
        let report = flush_all(self).await;
        tracing::info!(
            stores = report.stores,
            rows = report.rows,
            failed = report.failed,
            "shutdown flush complete"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use parley_core::{ClientDbId, PermissionKind, PermissionUpdate, ServerId};

    use super::{cleanup_all, flush_all, spawn_flush_worker};
    use crate::server::{
        core::{AppConfig, AppState},
        groups::GroupKind,
    };

    #[tokio::test]
    async fn flush_all_writes_groups_clients_and_defaults() {
        let state = AppState::new(&AppConfig::default()).unwrap();
        let group = state
            .groups
            .create_group(ServerId(1), GroupKind::Server, "Admin");
        group
            .permissions
            .set_permission(PermissionKind::I_CHANNEL_JOIN_POWER, PermissionUpdate::set_value(75))
            .unwrap();
        state
            .instance_default
            .set_permission(PermissionKind::I_CHANNEL_VIEW_POWER, PermissionUpdate::set_value(1))
            .unwrap();
        let client = state
            .client_permissions(ServerId(1), ClientDbId(4))
            .await
            .unwrap();
        client
            .set_permission(PermissionKind::I_CHANNEL_JOIN_POWER, PermissionUpdate::set(5, 6))
            .unwrap();

        let report = flush_all(&state).await;
        assert_eq!(report.stores, 3);
        assert_eq!(report.rows, 3);
        assert_eq!(report.failed, 0);
        assert!(!group.permissions.require_db_updates());

        let again = state.shutdown_flush(None).await;
        assert_eq!(again.rows, 0);

        let reloaded = state
            .gateway
            .load_group_permissions(ServerId(1), group.id)
            .await
            .unwrap();
        assert_eq!(
            reloaded
                .permission_value_flagged(PermissionKind::I_CHANNEL_JOIN_POWER)
                .as_option(),
            Some(75)
        );

        group
            .permissions
            .set_permission(PermissionKind::I_CHANNEL_JOIN_POWER, PermissionUpdate::delete_all())
            .unwrap();
        flush_all(&state).await;
        assert!(cleanup_all(&state) >= 1);
    }

    #[tokio::test]
    async fn shutdown_stops_the_worker_and_flushes() {
        let state = AppState::new(&AppConfig::default()).unwrap();
        let worker = spawn_flush_worker(state.clone());
        state
            .instance_default
            .set_permission(PermissionKind::I_CHANNEL_VIEW_POWER, PermissionUpdate::set_value(1))
            .unwrap();

        let report = state.shutdown_flush(Some(worker)).await;
        assert_eq!(report.rows, 1);
        assert_eq!(report.failed, 0);
    }
}
