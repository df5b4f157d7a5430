pub(crate) mod calculator;
pub(crate) mod channels;
pub(crate) mod core;
pub(crate) mod db;
pub(crate) mod errors;
pub(crate) mod flush;
pub(crate) mod gateway;
pub(crate) mod groups;
pub(crate) mod handlers;
pub(crate) mod metrics;
pub(crate) mod router;
pub(crate) mod store_cache;
pub(crate) mod types;

pub use calculator::ClientPermissionCalculator;
pub use channels::{Channel, ChannelError, ChannelTree};
pub use self::core::{
    AppConfig, AppState, DEFAULT_BIND_ADDR, DEFAULT_CLIENT_CACHE_IDLE_SECS,
    DEFAULT_CLIENT_CACHE_SWEEP_SECS, DEFAULT_DB_MAX_CONNECTIONS, DEFAULT_FLUSH_INTERVAL_SECS,
    DEFAULT_JSON_BODY_LIMIT_BYTES, DEFAULT_REQUEST_TIMEOUT_SECS,
};
pub use errors::{init_tracing, PersistenceFailure};
pub use flush::{cleanup_all, flush_all, spawn_flush_worker, FlushReport};
pub use gateway::{FlushSummary, PermissionTarget, PersistenceGateway};
pub use groups::{Group, GroupError, GroupKind, GroupManager, ResolvedChannelGroup};
pub use router::{build_router, build_router_with_state};
pub use store_cache::{HolderStoreCache, SweepSummary};
