use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{Arc, Mutex, OnceLock},
    time::Duration,
};

use anyhow::anyhow;
use parley_core::{
    ChannelId, ClientDbId, GroupId, PermissionHolder, PermissionStore, PlaylistId, ServerId,
};
use sqlx::postgres::PgPoolOptions;

use super::{
    channels::ChannelTree, errors::PersistenceFailure, gateway::PersistenceGateway,
    groups::GroupManager, store_cache::HolderStoreCache,
};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_JSON_BODY_LIMIT_BYTES: usize = 65_536;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_FLUSH_INTERVAL_SECS: u64 = 30;
pub const DEFAULT_CLIENT_CACHE_IDLE_SECS: u64 = 5 * 60;
pub const DEFAULT_CLIENT_CACHE_SWEEP_SECS: u64 = 60;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
pub(crate) const METRICS_TEXT_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

pub(crate) static METRICS_STATE: OnceLock<MetricsState> = OnceLock::new();

#[derive(Default)]
pub(crate) struct MetricsState {
    pub(crate) flush_rows: Mutex<HashMap<(&'static str, &'static str), u64>>,
    pub(crate) flush_failures: Mutex<HashMap<&'static str, u64>>,
    pub(crate) load_skipped: Mutex<HashMap<&'static str, u64>>,
    pub(crate) client_cache_evictions: Mutex<u64>,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_body_bytes: usize,
    pub request_timeout: Duration,
    pub flush_interval: Duration,
    pub client_cache_idle: Duration,
    pub client_cache_sweep_interval: Duration,
    pub database_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            max_body_bytes: DEFAULT_JSON_BODY_LIMIT_BYTES,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            flush_interval: Duration::from_secs(DEFAULT_FLUSH_INTERVAL_SECS),
            client_cache_idle: Duration::from_secs(DEFAULT_CLIENT_CACHE_IDLE_SECS),
            client_cache_sweep_interval: Duration::from_secs(DEFAULT_CLIENT_CACHE_SWEEP_SECS),
            database_url: None,
        }
    }
}

impl AppConfig {
    /// Reads `PARLEY_*` environment variables on top of the defaults.
    ///
    /// # Errors
    /// Returns an error naming the variable when a value does not parse.
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            bind_addr: std::env::var("PARLEY_BIND_ADDR")
                .unwrap_or_else(|_| String::from(DEFAULT_BIND_ADDR))
                .parse::<SocketAddr>()
                .map_err(|e| anyhow!("invalid PARLEY_BIND_ADDR: {e}"))?,
            flush_interval: env_secs("PARLEY_FLUSH_INTERVAL_SECS", defaults.flush_interval)?,
            client_cache_idle: env_secs(
                "PARLEY_CLIENT_CACHE_IDLE_SECS",
                defaults.client_cache_idle,
            )?,
            client_cache_sweep_interval: env_secs(
                "PARLEY_CLIENT_CACHE_SWEEP_SECS",
                defaults.client_cache_sweep_interval,
            )?,
            database_url: std::env::var("PARLEY_DATABASE_URL").ok(),
            ..defaults
        })
    }

    pub(crate) fn validate(&self) -> anyhow::Result<()> {
        if self.flush_interval.is_zero() {
            return Err(anyhow!("flush interval must be at least 1 second"));
        }
        if self.client_cache_idle.is_zero() {
            return Err(anyhow!("client cache idle window must be at least 1 second"));
        }
        if self.client_cache_sweep_interval.is_zero() {
            return Err(anyhow!("client cache sweep interval must be at least 1 second"));
        }
        Ok(())
    }
}

fn env_secs(name: &str, default: Duration) -> anyhow::Result<Duration> {
    std::env::var(name).map_or_else(
        |_| Ok(default),
        |value| {
            value
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|e| anyhow!("invalid {name} value {value:?}: {e}"))
        },
    )
}

/// Shared server state: the persistence gateway plus every live permission store.
#[derive(Clone)]
pub struct AppState {
    pub gateway: PersistenceGateway,
    pub groups: Arc<GroupManager>,
    pub channels: Arc<ChannelTree>,
    pub clients: Arc<HolderStoreCache>,
    pub playlists: Arc<HolderStoreCache>,
    pub instance_default: Arc<PermissionStore>,
    // serializes flush passes against holder deletion
    pub(crate) flush_gate: Arc<tokio::sync::Mutex<()>>,
    pub(crate) config: Arc<AppConfig>,
}

impl AppState {
    /// Builds the state; the database pool, when configured, connects lazily.
    ///
    /// # Errors
    /// Returns an error for invalid configuration or an unusable database url.
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let gateway = if let Some(database_url) = &config.database_url {
            let pool = PgPoolOptions::new()
                .max_connections(DEFAULT_DB_MAX_CONNECTIONS)
                .connect_lazy(database_url)
                .map_err(|e| anyhow!("postgres pool init failed: {e}"))?;
            PersistenceGateway::postgres(pool)
        } else {
            tracing::warn!("no database configured, permissions are kept in memory only");
            PersistenceGateway::in_memory()
        };

        Ok(Self {
            gateway,
            groups: Arc::new(GroupManager::new()),
            channels: Arc::new(ChannelTree::new()),
            clients: Arc::new(HolderStoreCache::new(config.client_cache_idle)),
            playlists: Arc::new(HolderStoreCache::new(config.client_cache_idle)),
            instance_default: Arc::new(PermissionStore::new()),
            flush_gate: Arc::new(tokio::sync::Mutex::new(())),
            config: Arc::new(config.clone()),
        })
    }

    /// Loads the instance-wide default permissions.
    ///
    /// # Errors
    /// Returns an error when the backing store cannot be read.
    pub async fn load_instance_defaults(&self) -> Result<usize, PersistenceFailure> {
        self.gateway
            .hydrate(&instance_default_holder(), &self.instance_default)
            .await
    }

    /// Client store, loaded on first access and released after idling.
    ///
    /// # Errors
    /// Returns an error when the client's rows cannot be read.
    pub async fn client_permissions(
        &self,
        server_id: ServerId,
        client_id: ClientDbId,
    ) -> Result<Arc<PermissionStore>, PersistenceFailure> {
        self.clients
            .get_or_load(&self.gateway, &PermissionHolder::client(server_id, client_id))
            .await
    }

    /// Playlist store, loaded on first access and released after idling.
    ///
    /// # Errors
    /// Returns an error when the playlist's rows cannot be read.
    pub async fn playlist_permissions(
        &self,
        server_id: ServerId,
        playlist_id: PlaylistId,
    ) -> Result<Arc<PermissionStore>, PersistenceFailure> {
        self.playlists
            .get_or_load(&self.gateway, &PermissionHolder::playlist(server_id, playlist_id))
            .await
    }

    /// Deletes a group and its stored rows. Returns `false` if it did not exist.
    ///
    /// Unsaved edits of the group are discarded.
    ///
    /// # Errors
    /// Returns an error when the stored rows cannot be removed; the group is
    /// already gone from memory at that point.
    pub async fn delete_group(
        &self,
        server_id: ServerId,
        group_id: GroupId,
    ) -> Result<bool, PersistenceFailure> {
        let _gate = self.flush_gate.lock().await;
        let Some(group) = self.groups.delete_group(server_id, group_id) else {
            return Ok(false);
        };
        let holder = group.holder();
        discard_pending(&holder, &group.permissions);
        self.gateway.delete_holder_permissions(&holder).await?;
        Ok(true)
    }

    /// Deletes a channel subtree and the stored rows of every removed channel.
    ///
    /// # Errors
    /// Returns an error when stored rows cannot be removed.
    pub async fn delete_channel(
        &self,
        server_id: ServerId,
        channel_id: ChannelId,
    ) -> Result<usize, PersistenceFailure> {
        let _gate = self.flush_gate.lock().await;
        let removed = self.channels.delete_channel(server_id, channel_id);
        for channel in &removed {
            let holder = PermissionHolder::channel(server_id, channel.id);
            discard_pending(&holder, &channel.permissions);
            self.gateway.delete_holder_permissions(&holder).await?;
        }
        Ok(removed.len())
    }

    /// Every store currently held in memory, keyed by its persistence identity.
    pub(crate) fn live_stores(&self) -> Vec<(PermissionHolder, Arc<PermissionStore>)> {
        let mut stores = vec![(instance_default_holder(), Arc::clone(&self.instance_default))];
        stores.extend(self.groups.stores());
        stores.extend(self.channels.stores());
        stores.extend(self.clients.live());
        stores.extend(self.playlists.live());
        stores
    }
}

fn discard_pending(holder: &PermissionHolder, store: &PermissionStore) {
    let dropped = store.flush_db_updates().len();
    if dropped > 0 {
        tracing::warn!(%holder, edits = dropped, "discarding unsaved edits of deleted holder");
    }
}

/// The instance default store is persisted as group 0 of the instance pseudo-server.
pub(crate) const fn instance_default_holder() -> PermissionHolder {
    PermissionHolder::group(ServerId::INSTANCE, GroupId(0))
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use parley_core::{PermissionKind, PermissionUpdate, PlaylistId, ServerId};

    use super::{AppConfig, AppState};
    use crate::server::{flush::flush_all, groups::GroupKind};

    const SERVER: ServerId = ServerId(1);

    #[test]
    fn zero_intervals_are_rejected() {
        let config = AppConfig {
            flush_interval: Duration::ZERO,
            ..AppConfig::default()
        };
        assert!(AppState::new(&config).is_err());
    }

    #[tokio::test]
    async fn deleting_group_purges_stored_rows() {
        let state = AppState::new(&AppConfig::default()).unwrap();
        let group = state.groups.create_group(SERVER, GroupKind::Server, "Admin");
        group
            .permissions
            .set_permission(PermissionKind::I_CHANNEL_JOIN_POWER, PermissionUpdate::set_value(9))
            .unwrap();
        flush_all(&state).await;

        assert!(state.delete_group(SERVER, group.id).await.unwrap());
        assert!(!state.delete_group(SERVER, group.id).await.unwrap());
        let reloaded = state
            .gateway
            .load_group_permissions(SERVER, group.id)
            .await
            .unwrap();
        assert!(reloaded.permissions().is_empty());
    }

    #[tokio::test]
    async fn deleting_group_discards_unsaved_edits() {
        let state = AppState::new(&AppConfig::default()).unwrap();
        let group = state.groups.create_group(SERVER, GroupKind::Server, "Admin");
        group
            .permissions
            .set_permission(PermissionKind::I_CHANNEL_JOIN_POWER, PermissionUpdate::set_value(9))
            .unwrap();

        assert!(state.delete_group(SERVER, group.id).await.unwrap());
        assert!(!group.permissions.require_db_updates());
        assert_eq!(flush_all(&state).await.rows, 0);
        let reloaded = state
            .gateway
            .load_group_permissions(SERVER, group.id)
            .await
            .unwrap();
        assert!(reloaded.permissions().is_empty());
    }

    #[tokio::test]
    async fn group_deletion_waits_for_a_running_flush() {
        let state = AppState::new(&AppConfig::default()).unwrap();
        let group = state.groups.create_group(SERVER, GroupKind::Server, "Admin");
        group
            .permissions
            .set_permission(PermissionKind::I_CHANNEL_JOIN_POWER, PermissionUpdate::set_value(9))
            .unwrap();
        let group_id = group.id;

        let flushing = state.flush_gate.lock().await;
        let deleting = tokio::spawn({
            let state = state.clone();
            async move { state.delete_group(SERVER, group_id).await }
        });
        tokio::task::yield_now().await;
        assert!(state.groups.find_group(SERVER, group.id).is_some());
        drop(flushing);
        assert!(deleting.await.unwrap().unwrap());

        let (_, again) = tokio::join!(flush_all(&state), state.delete_group(SERVER, group.id));
        assert!(!again.unwrap());
        let reloaded = state
            .gateway
            .load_group_permissions(SERVER, group.id)
            .await
            .unwrap();
        assert!(reloaded.permissions().is_empty());
    }

    #[tokio::test]
    async fn deleting_channel_purges_the_subtree() {
        let state = AppState::new(&AppConfig::default()).unwrap();
        let root = state.channels.create_channel(SERVER, None, "Lobby").unwrap();
        let child = state
            .channels
            .create_channel(SERVER, Some(root.id), "Games")
            .unwrap();
        child
            .permissions
            .set_permission(
                PermissionKind::I_CHANNEL_NEEDED_JOIN_POWER,
                PermissionUpdate::set_value(20),
            )
            .unwrap();
        flush_all(&state).await;

        assert_eq!(state.delete_channel(SERVER, root.id).await.unwrap(), 2);
        let reloaded = state
            .gateway
            .load_channel_permissions(SERVER, child.id)
            .await
            .unwrap();
        assert!(reloaded.permissions().is_empty());
    }

    #[tokio::test]
    async fn playlist_store_is_loaded_once_and_flushed() {
        let state = AppState::new(&AppConfig::default()).unwrap();
        let first = state.playlist_permissions(SERVER, PlaylistId(2)).await.unwrap();
        let second = state.playlist_permissions(SERVER, PlaylistId(2)).await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        first
            .set_permission(PermissionKind::I_CHANNEL_JOIN_POWER, PermissionUpdate::set_value(3))
            .unwrap();
        assert_eq!(flush_all(&state).await.rows, 1);
        let reloaded = state
            .gateway
            .load_playlist_permissions(SERVER, PlaylistId(2))
            .await
            .unwrap();
        assert_eq!(
            reloaded
                .permission_value_flagged(PermissionKind::I_CHANNEL_JOIN_POWER)
                .as_option(),
            Some(3)
        );
    }
}
