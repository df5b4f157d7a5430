use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderName, StatusCode},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::{
    core::{AppConfig, AppState},
    handlers::{calculate_permission, channel_access, list_permissions},
    types::{health, metrics},
};

/// Build the admin router over a fresh state.
///
/// # Errors
/// Returns an error if the configuration is invalid.
pub fn build_router(config: &AppConfig) -> anyhow::Result<Router> {
    let app_state = AppState::new(config)?;
    Ok(build_router_with_state(app_state))
}

/// Build the admin router over an existing state, so background tasks and
/// request handlers observe the same stores.
pub fn build_router_with_state(app_state: AppState) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");
    let max_body_bytes = app_state.config.max_body_bytes;
    let request_timeout = app_state.config.request_timeout;

    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/permissions", get(list_permissions))
        .route(
            "/servers/{server_id}/clients/{client_db_id}/permissions/{name}",
            get(calculate_permission),
        )
        .route(
            "/servers/{server_id}/clients/{client_db_id}/channels/{channel_id}/access",
            get(channel_access),
        )
        .with_state(app_state)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
                .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    request_timeout,
                )),
        )
}
