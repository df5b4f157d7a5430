//! Folds an authority chain of permission stores into one effective value.
//!
//! Lookup order for a client in a channel:
//! 1. the client's own entry for that channel,
//! 2. the channel group, then the channel itself followed by its ancestors,
//!    unless channel-level permissions are skipped,
//! 3. the client's holder-wide entry,
//! 4. the winning server group,
//! 5. the instance default.
//!
//! Channel-level permissions are skipped when no channel is involved, when the
//! client holds `b_client_skip_channelgroup_permissions`, or when the entry that
//! would otherwise apply at client or server-group level carries the skip flag.
//!
//! Each store is locked independently per lookup; a resolution is not atomic
//! across the chain.

use std::{cell::OnceCell, sync::Arc};

use crate::{
    permission_granted, ChannelId, Facet, FlaggedValue, PermissionContainer, PermissionKind,
    PermissionStore,
};

/// The ordered stores consulted for one client.
#[derive(Debug, Clone)]
pub struct AuthorityChain {
    pub client: Arc<PermissionStore>,
    pub channel_group: Option<Arc<PermissionStore>>,
    pub server_groups: Vec<Arc<PermissionStore>>,
    /// Target channel first, then its parents up to the root.
    pub channels: Vec<(ChannelId, Arc<PermissionStore>)>,
    pub instance_default: Option<Arc<PermissionStore>>,
}

impl AuthorityChain {
    #[must_use]
    pub fn new(client: Arc<PermissionStore>) -> Self {
        Self {
            client,
            channel_group: None,
            server_groups: Vec::new(),
            channels: Vec::new(),
            instance_default: None,
        }
    }

    #[must_use]
    pub fn with_server_group(mut self, group: Arc<PermissionStore>) -> Self {
        self.server_groups.push(group);
        self
    }

    #[must_use]
    pub fn with_channel_group(mut self, group: Arc<PermissionStore>) -> Self {
        self.channel_group = Some(group);
        self
    }

    #[must_use]
    pub fn with_channel(mut self, channel_id: ChannelId, store: Arc<PermissionStore>) -> Self {
        self.channels.push((channel_id, store));
        self
    }

    #[must_use]
    pub fn with_instance_default(mut self, store: Arc<PermissionStore>) -> Self {
        self.instance_default = Some(store);
        self
    }

    /// The channel the resolution happens in, if any.
    #[must_use]
    pub fn channel_id(&self) -> Option<ChannelId> {
        self.channels.first().map(|(channel_id, _)| *channel_id)
    }
}

/// Channel interactions gated by a power/needed-power pair and an ignore flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelAccess {
    View,
    Join,
    Subscribe,
    DescriptionView,
}

impl ChannelAccess {
    #[must_use]
    pub const fn power(self) -> PermissionKind {
        match self {
            Self::View => PermissionKind::I_CHANNEL_VIEW_POWER,
            Self::Join => PermissionKind::I_CHANNEL_JOIN_POWER,
            Self::Subscribe => PermissionKind::I_CHANNEL_SUBSCRIBE_POWER,
            Self::DescriptionView => PermissionKind::I_CHANNEL_DESCRIPTION_VIEW_POWER,
        }
    }

    #[must_use]
    pub const fn needed_power(self) -> PermissionKind {
        match self {
            Self::View => PermissionKind::I_CHANNEL_NEEDED_VIEW_POWER,
            Self::Join => PermissionKind::I_CHANNEL_NEEDED_JOIN_POWER,
            Self::Subscribe => PermissionKind::I_CHANNEL_NEEDED_SUBSCRIBE_POWER,
            Self::DescriptionView => PermissionKind::I_CHANNEL_NEEDED_DESCRIPTION_VIEW_POWER,
        }
    }

    #[must_use]
    pub const fn ignore(self) -> PermissionKind {
        match self {
            Self::View => PermissionKind::B_CHANNEL_IGNORE_VIEW_POWER,
            Self::Join => PermissionKind::B_CHANNEL_IGNORE_JOIN_POWER,
            Self::Subscribe => PermissionKind::B_CHANNEL_IGNORE_SUBSCRIBE_POWER,
            Self::DescriptionView => PermissionKind::B_CHANNEL_IGNORE_DESCRIPTION_VIEW_POWER,
        }
    }
}

pub struct PermissionResolver<'a> {
    chain: &'a AuthorityChain,
    global_skip: OnceCell<bool>,
}

impl<'a> PermissionResolver<'a> {
    #[must_use]
    pub fn new(chain: &'a AuthorityChain) -> Self {
        Self {
            chain,
            global_skip: OnceCell::new(),
        }
    }

    /// Effective value (or grant) of `kind`. Unset when no level provides one.
    #[must_use]
    pub fn calculate(&self, kind: PermissionKind, facet: Facet) -> FlaggedValue {
        let chain = self.chain;
        let client = chain.client.container(kind);

        if let Some(channel_id) = chain.channel_id() {
            if client.flags.channel_specific() {
                let scoped = chain.client.channel_permission(kind, channel_id).facet(facet);
                if scoped.has_value {
                    return scoped;
                }
            }
        }

        let client_value = client.facet(facet);
        let active_group = self.active_server_group(kind, facet);

        let skip_channel = chain.channel_id().is_none()
            || self.has_global_skip()
            || if client_value.has_value {
                client.flags.skip()
            } else {
                active_group.is_some_and(|group| group.flags.skip())
            };

        if !skip_channel {
            if let Some(group) = &chain.channel_group {
                let value = group.container(kind).facet(facet);
                if value.has_value {
                    return value;
                }
            }
            for (_, channel) in &chain.channels {
                let value = channel.container(kind).facet(facet);
                if value.has_value {
                    return value;
                }
            }
        }

        if client_value.has_value {
            return client_value;
        }
        if let Some(group) = active_group {
            return group.facet(facet);
        }
        chain
            .instance_default
            .as_ref()
            .map_or(FlaggedValue::unset(), |store| store.container(kind).facet(facet))
    }

    #[must_use]
    pub fn calculate_many(
        &self,
        kinds: &[PermissionKind],
        facet: Facet,
    ) -> Vec<(PermissionKind, FlaggedValue)> {
        kinds
            .iter()
            .map(|kind| (*kind, self.calculate(*kind, facet)))
            .collect()
    }

    /// Whether the client's value of `kind` satisfies `required`.
    #[must_use]
    pub fn permission_granted(&self, kind: PermissionKind, required: FlaggedValue) -> bool {
        permission_granted(required, self.calculate(kind, Facet::Value))
    }

    #[must_use]
    pub fn permission_granted_value(&self, kind: PermissionKind, required: i32) -> bool {
        self.permission_granted(kind, FlaggedValue::new(required))
    }

    /// Checks a channel interaction against the target channel's needed power.
    #[must_use]
    pub fn can_access_channel(&self, access: ChannelAccess) -> bool {
        if self.permission_granted_value(access.ignore(), 1) {
            return true;
        }
        let required = self
            .chain
            .channels
            .first()
            .map_or(FlaggedValue::unset(), |(_, channel)| {
                channel.permission_value_flagged(access.needed_power())
            })
            .clear_flag_on_zero();
        permission_granted(required, self.calculate(access.power(), Facet::Value))
    }

    #[must_use]
    pub fn can_view_channel(&self) -> bool {
        self.can_access_channel(ChannelAccess::View)
    }

    #[must_use]
    pub fn can_join_channel(&self) -> bool {
        self.can_access_channel(ChannelAccess::Join)
    }

    #[must_use]
    pub fn can_subscribe_channel(&self) -> bool {
        self.can_access_channel(ChannelAccess::Subscribe)
    }

    #[must_use]
    pub fn can_view_description(&self) -> bool {
        self.can_access_channel(ChannelAccess::DescriptionView)
    }

    /// Whether the client may assign `value` for `kind` to another holder.
    #[must_use]
    pub fn can_assign(&self, kind: PermissionKind, value: i32) -> bool {
        self.permission_granted_value(PermissionKind::B_PERMISSION_MODIFY_POWER_IGNORE, 1)
            || permission_granted(FlaggedValue::new(value), self.calculate(kind, Facet::Grant))
    }

    fn has_global_skip(&self) -> bool {
        *self.global_skip.get_or_init(|| {
            let kind = PermissionKind::B_CLIENT_SKIP_CHANNELGROUP_PERMISSIONS;
            let required = FlaggedValue::new(1);
            let client = self.chain.client.permission_value_flagged(kind);
            if client.has_value {
                return permission_granted(required, client);
            }
            self.chain.server_groups.iter().any(|group| {
                let value = group.permission_value_flagged(kind);
                value.has_value && permission_granted(required, value)
            })
        })
    }

    /// Picks the server group whose entry applies. Negated entries win over
    /// plain ones; among negated entries the lowest value wins, otherwise the
    /// highest. `-1` counts as infinite in both cases.
    fn active_server_group(
        &self,
        kind: PermissionKind,
        facet: Facet,
    ) -> Option<PermissionContainer> {
        let candidates: Vec<PermissionContainer> = self
            .chain
            .server_groups
            .iter()
            .map(|group| group.container(kind))
            .filter(|container| container.facet(facet).has_value)
            .collect();
        let negated = candidates.iter().any(|container| container.flags.negate());

        candidates
            .into_iter()
            .filter(|container| !negated || container.flags.negate())
            .reduce(|active, candidate| {
                let current = active.facet(facet).value;
                let value = candidate.facet(facet).value;
                let replace = if negated {
                    value != FlaggedValue::INFINITE
                        && (current == FlaggedValue::INFINITE || value < current)
                } else {
                    current != FlaggedValue::INFINITE
                        && (value == FlaggedValue::INFINITE || value > current)
                };
                if replace {
                    candidate
                } else {
                    active
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{AuthorityChain, ChannelAccess, PermissionResolver};
    use crate::{
        ChannelId, Facet, FlaggedValue, PermissionKind, PermissionStore, PermissionUpdate,
    };

    const KIND: PermissionKind = PermissionKind::I_CLIENT_BAN_MAX_BANTIME;

    fn store_with(kind: PermissionKind, update: PermissionUpdate) -> Arc<PermissionStore> {
        let store = PermissionStore::new();
        store.set_permission(kind, update).unwrap();
        Arc::new(store)
    }

    fn empty() -> Arc<PermissionStore> {
        Arc::new(PermissionStore::new())
    }

    #[test]
    fn empty_chain_resolves_to_unset() {
        let chain = AuthorityChain::new(empty());
        let resolver = PermissionResolver::new(&chain);
        assert_eq!(resolver.calculate(KIND, Facet::Value), FlaggedValue::unset());
    }

    #[test]
    fn instance_default_is_the_last_fallback() {
        let chain = AuthorityChain::new(empty())
            .with_instance_default(store_with(KIND, PermissionUpdate::set_value(3)));
        let resolver = PermissionResolver::new(&chain);
        assert_eq!(resolver.calculate(KIND, Facet::Value), FlaggedValue::new(3));
    }

    #[test]
    fn client_value_beats_server_groups() {
        let chain = AuthorityChain::new(store_with(KIND, PermissionUpdate::set_value(10)))
            .with_server_group(store_with(KIND, PermissionUpdate::set_value(99)));
        let resolver = PermissionResolver::new(&chain);
        assert_eq!(resolver.calculate(KIND, Facet::Value), FlaggedValue::new(10));
    }

    #[test]
    fn highest_server_group_wins_and_infinite_beats_all() {
        let chain = AuthorityChain::new(empty())
            .with_server_group(store_with(KIND, PermissionUpdate::set_value(20)))
            .with_server_group(store_with(KIND, PermissionUpdate::set_value(50)))
            .with_server_group(store_with(KIND, PermissionUpdate::set_value(30)));
        assert_eq!(
            PermissionResolver::new(&chain).calculate(KIND, Facet::Value),
            FlaggedValue::new(50)
        );

        let chain = chain.with_server_group(store_with(KIND, PermissionUpdate::set_value(-1)));
        assert_eq!(
            PermissionResolver::new(&chain).calculate(KIND, Facet::Value),
            FlaggedValue::new(-1)
        );
    }

    #[test]
    fn negated_server_groups_win_with_lowest_value() {
        let chain = AuthorityChain::new(empty())
            .with_server_group(store_with(KIND, PermissionUpdate::set_value(75)))
            .with_server_group(store_with(
                KIND,
                PermissionUpdate::set_value(40).with_negate(true),
            ))
            .with_server_group(store_with(
                KIND,
                PermissionUpdate::set_value(15).with_negate(true),
            ));
        assert_eq!(
            PermissionResolver::new(&chain).calculate(KIND, Facet::Value),
            FlaggedValue::new(15)
        );
    }

    #[test]
    fn grant_facet_resolves_independently() {
        let chain = AuthorityChain::new(store_with(KIND, PermissionUpdate::set_value(10)))
            .with_server_group(store_with(KIND, PermissionUpdate::set_grant(60)));
        let resolver = PermissionResolver::new(&chain);
        assert_eq!(resolver.calculate(KIND, Facet::Value), FlaggedValue::new(10));
        assert_eq!(resolver.calculate(KIND, Facet::Grant), FlaggedValue::new(60));
    }

    #[test]
    fn channel_group_and_channel_override_client_and_groups() {
        let channel = ChannelId(5);
        let chain = AuthorityChain::new(store_with(KIND, PermissionUpdate::set_value(10)))
            .with_server_group(store_with(KIND, PermissionUpdate::set_value(20)))
            .with_channel_group(store_with(KIND, PermissionUpdate::set_value(30)))
            .with_channel(channel, store_with(KIND, PermissionUpdate::set_value(40)));
        assert_eq!(
            PermissionResolver::new(&chain).calculate(KIND, Facet::Value),
            FlaggedValue::new(30)
        );

        let chain = AuthorityChain {
            channel_group: Some(empty()),
            ..chain
        };
        assert_eq!(
            PermissionResolver::new(&chain).calculate(KIND, Facet::Value),
            FlaggedValue::new(40)
        );
    }

    #[test]
    fn channel_walk_falls_back_to_parent_channels() {
        let chain = AuthorityChain::new(empty())
            .with_channel(ChannelId(9), empty())
            .with_channel(ChannelId(3), store_with(KIND, PermissionUpdate::set_value(12)));
        assert_eq!(
            PermissionResolver::new(&chain).calculate(KIND, Facet::Value),
            FlaggedValue::new(12)
        );
    }

    #[test]
    fn skip_flag_on_client_entry_bypasses_channel_levels() {
        let chain = AuthorityChain::new(store_with(
            KIND,
            PermissionUpdate::set_value(10).with_skip(true),
        ))
        .with_channel_group(store_with(KIND, PermissionUpdate::set_value(30)))
        .with_channel(ChannelId(1), empty());
        assert_eq!(
            PermissionResolver::new(&chain).calculate(KIND, Facet::Value),
            FlaggedValue::new(10)
        );
    }

    #[test]
    fn skip_flag_on_server_group_bypasses_channel_levels() {
        let chain = AuthorityChain::new(empty())
            .with_server_group(store_with(
                KIND,
                PermissionUpdate::set_value(20).with_skip(true),
            ))
            .with_channel_group(store_with(KIND, PermissionUpdate::set_value(30)))
            .with_channel(ChannelId(1), empty());
        assert_eq!(
            PermissionResolver::new(&chain).calculate(KIND, Facet::Value),
            FlaggedValue::new(20)
        );
    }

    #[test]
    fn global_skip_permission_bypasses_channel_group() {
        let group = PermissionStore::new();
        group
            .set_permission(
                PermissionKind::B_CLIENT_SKIP_CHANNELGROUP_PERMISSIONS,
                PermissionUpdate::set_value(1),
            )
            .unwrap();
        group.set_permission(KIND, PermissionUpdate::set_value(20)).unwrap();
        let chain = AuthorityChain::new(empty())
            .with_server_group(Arc::new(group))
            .with_channel_group(store_with(KIND, PermissionUpdate::set_value(30)))
            .with_channel(ChannelId(1), empty());
        assert_eq!(
            PermissionResolver::new(&chain).calculate(KIND, Facet::Value),
            FlaggedValue::new(20)
        );
    }

    #[test]
    fn client_channel_entry_has_top_priority() {
        let channel = ChannelId(8);
        let client = PermissionStore::new();
        client.set_permission(KIND, PermissionUpdate::set_value(10)).unwrap();
        client
            .set_channel_permission(KIND, channel, PermissionUpdate::set_value(77))
            .unwrap();
        let chain = AuthorityChain::new(Arc::new(client))
            .with_channel_group(store_with(KIND, PermissionUpdate::set_value(30)))
            .with_channel(channel, empty());
        assert_eq!(
            PermissionResolver::new(&chain).calculate(KIND, Facet::Value),
            FlaggedValue::new(77)
        );

        let elsewhere = AuthorityChain {
            channels: vec![(ChannelId(2), empty())],
            ..chain
        };
        assert_eq!(
            PermissionResolver::new(&elsewhere).calculate(KIND, Facet::Value),
            FlaggedValue::new(30)
        );
    }

    #[test]
    fn channel_access_compares_power_against_needed_power() {
        let channel = PermissionStore::new();
        channel
            .set_permission(
                PermissionKind::I_CHANNEL_NEEDED_JOIN_POWER,
                PermissionUpdate::set_value(50),
            )
            .unwrap();
        let channel = Arc::new(channel);

        let weak = AuthorityChain::new(store_with(
            PermissionKind::I_CHANNEL_JOIN_POWER,
            PermissionUpdate::set_value(25),
        ))
        .with_channel(ChannelId(1), Arc::clone(&channel));
        assert!(!PermissionResolver::new(&weak).can_join_channel());

        let strong = AuthorityChain::new(store_with(
            PermissionKind::I_CHANNEL_JOIN_POWER,
            PermissionUpdate::set_value(50),
        ))
        .with_channel(ChannelId(1), Arc::clone(&channel));
        assert!(PermissionResolver::new(&strong).can_join_channel());

        let ignoring = AuthorityChain::new(store_with(
            ChannelAccess::Join.ignore(),
            PermissionUpdate::set_value(1),
        ))
        .with_channel(ChannelId(1), channel);
        assert!(PermissionResolver::new(&ignoring).can_join_channel());
    }

    #[test]
    fn zero_needed_power_is_no_requirement() {
        let channel = store_with(
            PermissionKind::I_CHANNEL_NEEDED_VIEW_POWER,
            PermissionUpdate::set_value(0),
        );
        let chain = AuthorityChain::new(empty()).with_channel(ChannelId(1), channel);
        let resolver = PermissionResolver::new(&chain);
        assert!(resolver.can_view_channel());
        assert!(resolver.can_subscribe_channel());
        assert!(resolver.can_view_description());
    }

    #[test]
    fn assignment_requires_grant_power_or_ignore_flag() {
        let chain = AuthorityChain::new(store_with(KIND, PermissionUpdate::set_grant(50)));
        let resolver = PermissionResolver::new(&chain);
        assert!(resolver.can_assign(KIND, 50));
        assert!(!resolver.can_assign(KIND, 51));

        let chain = AuthorityChain::new(store_with(
            PermissionKind::B_PERMISSION_MODIFY_POWER_IGNORE,
            PermissionUpdate::set_value(1),
        ));
        assert!(PermissionResolver::new(&chain).can_assign(KIND, 1000));
    }

    #[test]
    fn batch_calculation_keeps_input_order() {
        let chain = AuthorityChain::new(store_with(KIND, PermissionUpdate::set_value(4)));
        let kinds = [KIND, PermissionKind::I_CHANNEL_JOIN_POWER];
        let results = PermissionResolver::new(&chain).calculate_many(&kinds, Facet::Value);
        assert_eq!(
            results,
            vec![
                (KIND, FlaggedValue::new(4)),
                (PermissionKind::I_CHANNEL_JOIN_POWER, FlaggedValue::unset())
            ]
        );
    }
}
