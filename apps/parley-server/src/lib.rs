#![forbid(unsafe_code)]

//! Permission service for a multi-tenant voice server: group, channel and
//! client permission stores, their persistence, and an admin HTTP surface.

mod server;

pub use server::{
    build_router, build_router_with_state, cleanup_all, flush_all, init_tracing,
    spawn_flush_worker, AppConfig, AppState, Channel, ChannelError, ChannelTree,
    ClientPermissionCalculator, FlushReport, FlushSummary, Group, GroupError, GroupKind,
    GroupManager, HolderStoreCache, PermissionTarget, PersistenceFailure, PersistenceGateway,
    ResolvedChannelGroup, SweepSummary, DEFAULT_BIND_ADDR, DEFAULT_CLIENT_CACHE_IDLE_SECS,
    DEFAULT_CLIENT_CACHE_SWEEP_SECS, DEFAULT_DB_MAX_CONNECTIONS, DEFAULT_FLUSH_INTERVAL_SECS,
    DEFAULT_JSON_BODY_LIMIT_BYTES, DEFAULT_REQUEST_TIMEOUT_SECS,
};
