use axum::{
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
    Json,
};
use parley_core::{ChannelId, Facet, PermissionEntry, PermissionGroup};
use serde::{Deserialize, Serialize};

use super::{core::METRICS_TEXT_CONTENT_TYPE, metrics::render_metrics};

#[derive(Debug, Serialize)]
pub(crate) struct ApiError {
    pub(crate) error: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct HealthResponse {
    pub(crate) status: &'static str,
}

pub(crate) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub(crate) async fn metrics() -> Response {
    (
        [(CONTENT_TYPE, METRICS_TEXT_CONTENT_TYPE)],
        render_metrics(),
    )
        .into_response()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct CatalogQuery {
    pub(crate) group: Option<PermissionGroup>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PermissionInfo {
    pub(crate) id: u16,
    pub(crate) name: &'static str,
    pub(crate) group: PermissionGroup,
    pub(crate) description: &'static str,
    pub(crate) grant_name: String,
}

impl From<&PermissionEntry> for PermissionInfo {
    fn from(entry: &PermissionEntry) -> Self {
        Self {
            id: entry.kind.id(),
            name: entry.name,
            group: entry.group,
            description: entry.description,
            grant_name: entry.grant_name.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct CalculateQuery {
    pub(crate) channel_id: Option<ChannelId>,
    #[serde(default)]
    pub(crate) facet: Facet,
}

#[derive(Debug, Serialize)]
pub(crate) struct CalculatedPermission {
    pub(crate) permission: &'static str,
    pub(crate) value: Option<i32>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChannelAccessResponse {
    pub(crate) view: bool,
    pub(crate) join: bool,
    pub(crate) subscribe: bool,
    pub(crate) description_view: bool,
}
