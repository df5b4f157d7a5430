use axum::{
    extract::{Path, Query, State},
    Json,
};
use parley_core::{catalog, ChannelAccess, ChannelId, ClientDbId, Facet, ServerId};

use super::{
    calculator::ClientPermissionCalculator,
    core::AppState,
    errors::ApiFailure,
    types::{
        CalculateQuery, CalculatedPermission, CatalogQuery, ChannelAccessResponse, PermissionInfo,
    },
};

pub(crate) async fn list_permissions(
    Query(query): Query<CatalogQuery>,
) -> Json<Vec<PermissionInfo>> {
    let entries = catalog().entries().iter();
    Json(match query.group {
        Some(group) => entries
            .filter(|entry| entry.group.is_within(group))
            .map(PermissionInfo::from)
            .collect(),
        None => entries.map(PermissionInfo::from).collect(),
    })
}

fn ensure_channel(
    state: &AppState,
    server_id: ServerId,
    channel_id: Option<ChannelId>,
) -> Result<(), ApiFailure> {
    match channel_id {
        Some(channel_id) if state.channels.find(server_id, channel_id).is_none() => {
            Err(ApiFailure::NotFound)
        }
        _ => Ok(()),
    }
}

pub(crate) async fn calculate_permission(
    State(state): State<AppState>,
    Path((server_id, client_id, name)): Path<(ServerId, ClientDbId, String)>,
    Query(query): Query<CalculateQuery>,
) -> Result<Json<CalculatedPermission>, ApiFailure> {
    let kind = catalog()
        .resolve_by_name(&name)
        .map_err(|_| ApiFailure::UnknownPermission)?;
    ensure_channel(&state, server_id, query.channel_id)?;

    // grant names address the grant facet of their base permission
    let (lookup, facet) = if kind.is_grant() {
        (kind.base(), Facet::Grant)
    } else {
        (kind, query.facet)
    };
    let calculator =
        ClientPermissionCalculator::new(&state, server_id, client_id, query.channel_id).await?;
    let value = calculator.calculate(lookup, facet);

    Ok(Json(CalculatedPermission {
        permission: kind.name(),
        value: value.as_option(),
    }))
}

pub(crate) async fn channel_access(
    State(state): State<AppState>,
    Path((server_id, client_id, channel_id)): Path<(ServerId, ClientDbId, ChannelId)>,
) -> Result<Json<ChannelAccessResponse>, ApiFailure> {
    ensure_channel(&state, server_id, Some(channel_id))?;
    let calculator =
        ClientPermissionCalculator::new(&state, server_id, client_id, Some(channel_id)).await?;

    Ok(Json(ChannelAccessResponse {
        view: calculator.can_access_channel(ChannelAccess::View),
        join: calculator.can_access_channel(ChannelAccess::Join),
        subscribe: calculator.can_access_channel(ChannelAccess::Subscribe),
        description_view: calculator.can_access_channel(ChannelAccess::DescriptionView),
    }))
}
