use std::sync::Arc;

use parley_core::{
    AuthorityChain, ChannelAccess, ChannelId, ClientDbId, Facet, FlaggedValue, PermissionKind,
    PermissionResolver, ServerId,
};

use super::{core::AppState, errors::PersistenceFailure};

/// Resolves permissions for one client, optionally inside a channel.
///
/// The chain is captured at construction: later group or channel changes are
/// not observed by an existing calculator.
#[derive(Debug)]
pub struct ClientPermissionCalculator {
    chain: AuthorityChain,
}

impl ClientPermissionCalculator {
    /// # Errors
    /// Returns an error when the client's permissions cannot be loaded.
    pub async fn new(
        state: &AppState,
        server_id: ServerId,
        client_id: ClientDbId,
        channel_id: Option<ChannelId>,
    ) -> Result<Self, PersistenceFailure> {
        let client = state.client_permissions(server_id, client_id).await?;

        let mut chain = AuthorityChain::new(client)
            .with_instance_default(Arc::clone(&state.instance_default));
        for group in state.groups.server_groups_of(server_id, client_id) {
            chain = chain.with_server_group(Arc::clone(&group.permissions));
        }
        if let Some(channel_id) = channel_id {
            for channel in state.channels.ancestors(server_id, channel_id) {
                chain = chain.with_channel(channel.id, Arc::clone(&channel.permissions));
            }
        }

        if let Some(resolved) = state
            .groups
            .channel_group_of(server_id, client_id, &chain.channels)
        {
            tracing::trace!(
                server_id = %server_id,
                client_id = %client_id,
                group_id = %resolved.group.id,
                inherited_from = ?resolved.inherited_from,
                "using channel group"
            );
            chain = chain.with_channel_group(Arc::clone(&resolved.group.permissions));
        }

        Ok(Self { chain })
    }

    #[must_use]
    pub fn resolver(&self) -> PermissionResolver<'_> {
        PermissionResolver::new(&self.chain)
    }

    #[must_use]
    pub fn calculate(&self, kind: PermissionKind, facet: Facet) -> FlaggedValue {
        self.resolver().calculate(kind, facet)
    }

    #[must_use]
    pub fn calculate_many(
        &self,
        kinds: &[PermissionKind],
        facet: Facet,
    ) -> Vec<(PermissionKind, FlaggedValue)> {
        self.resolver().calculate_many(kinds, facet)
    }

    #[must_use]
    pub fn permission_granted(&self, kind: PermissionKind, required: i32) -> bool {
        self.resolver().permission_granted_value(kind, required)
    }

    #[must_use]
    pub fn can_access_channel(&self, access: ChannelAccess) -> bool {
        self.resolver().can_access_channel(access)
    }

    #[must_use]
    pub fn can_assign(&self, kind: PermissionKind, value: i32) -> bool {
        self.resolver().can_assign(kind, value)
    }
}
