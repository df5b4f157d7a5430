use axum::{http::StatusCode, response::IntoResponse, Json};

use super::types::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum PersistenceFailure {
    #[error("database request failed: {0}")]
    Database(#[from] sqlx::Error),
}

impl PersistenceFailure {
    pub(crate) fn reason(&self) -> &'static str {
        match self {
            Self::Database(sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed) => "pool",
            Self::Database(sqlx::Error::Io(_) | sqlx::Error::Tls(_)) => "connection",
            Self::Database(_) => "query",
        }
    }
}

#[derive(Debug)]
pub(crate) enum ApiFailure {
    UnknownPermission,
    NotFound,
    Internal,
}

impl From<PersistenceFailure> for ApiFailure {
    fn from(error: PersistenceFailure) -> Self {
        tracing::error!(reason = error.reason(), %error, "permission load failed");
        Self::Internal
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            Self::UnknownPermission => (StatusCode::NOT_FOUND, "unknown_permission"),
            Self::NotFound => (StatusCode::NOT_FOUND, "not_found"),
            Self::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };
        (status, Json(ApiError { error })).into_response()
    }
}

pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(true)
        .with_span_list(true)
        .init();
}
