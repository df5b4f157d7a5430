use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    sync::Arc,
};

use parking_lot::RwLock;
use parley_core::{
    permission_granted_value, ChannelId, ClientDbId, GroupId, PermissionHolder, PermissionKind,
    PermissionStore, ServerId,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    Server,
    Channel,
}

#[derive(Debug)]
pub struct Group {
    pub id: GroupId,
    pub server_id: ServerId,
    pub kind: GroupKind,
    pub name: String,
    pub permissions: Arc<PermissionStore>,
}

impl Group {
    #[must_use]
    pub const fn holder(&self) -> PermissionHolder {
        PermissionHolder::group(self.server_id, self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GroupError {
    #[error("group {group_id} does not exist on server {server_id}")]
    UnknownGroup { server_id: ServerId, group_id: GroupId },
    #[error("group {group_id} is not a {expected:?} group")]
    WrongKind { group_id: GroupId, expected: GroupKind },
}

/// The channel group applying to a client in a channel.
#[derive(Debug, Clone)]
pub struct ResolvedChannelGroup {
    pub group: Arc<Group>,
    /// Parent channel the assignment was found on; `None` for the target
    /// channel itself or the server default.
    pub inherited_from: Option<ChannelId>,
}

#[derive(Debug, Default)]
struct ServerGroups {
    groups: BTreeMap<GroupId, Arc<Group>>,
    default_server_group: Option<GroupId>,
    default_channel_group: Option<GroupId>,
    server_assignments: HashMap<ClientDbId, BTreeSet<GroupId>>,
    channel_assignments: HashMap<(ClientDbId, ChannelId), GroupId>,
}

impl ServerGroups {
    fn group_of_kind(
        &self,
        server_id: ServerId,
        group_id: GroupId,
        kind: GroupKind,
    ) -> Result<&Arc<Group>, GroupError> {
        let group = self
            .groups
            .get(&group_id)
            .ok_or(GroupError::UnknownGroup { server_id, group_id })?;
        if group.kind != kind {
            return Err(GroupError::WrongKind {
                group_id,
                expected: kind,
            });
        }
        Ok(group)
    }
}

/// Server and channel groups of every virtual server plus client assignments.
#[derive(Debug, Default)]
pub struct GroupManager {
    servers: RwLock<HashMap<ServerId, ServerGroups>>,
}

impl GroupManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a group with an empty store under the next free id.
    pub fn create_group(&self, server_id: ServerId, kind: GroupKind, name: &str) -> Arc<Group> {
        let mut servers = self.servers.write();
        let next_id = servers
            .values()
            .filter_map(|server| server.groups.keys().next_back())
            .max()
            .map_or(1, |id| id.get() + 1);
        let group = Arc::new(Group {
            id: GroupId(next_id),
            server_id,
            kind,
            name: name.to_owned(),
            permissions: Arc::new(PermissionStore::new()),
        });
        servers
            .entry(server_id)
            .or_default()
            .groups
            .insert(group.id, Arc::clone(&group));
        tracing::info!(
            server_id = %server_id,
            group_id = %group.id,
            ?kind,
            group_name = name,
            "group created"
        );
        group
    }

    /// Removes a group together with its assignments and default pointers.
    pub fn delete_group(&self, server_id: ServerId, group_id: GroupId) -> Option<Arc<Group>> {
        let mut servers = self.servers.write();
        let server = servers.get_mut(&server_id)?;
        let group = server.groups.remove(&group_id)?;
        for assigned in server.server_assignments.values_mut() {
            assigned.remove(&group_id);
        }
        server
            .server_assignments
            .retain(|_, assigned| !assigned.is_empty());
        server
            .channel_assignments
            .retain(|_, assigned| *assigned != group_id);
        if server.default_server_group == Some(group_id) {
            server.default_server_group = None;
        }
        if server.default_channel_group == Some(group_id) {
            server.default_channel_group = None;
        }
        tracing::info!(server_id = %server_id, group_id = %group_id, "group deleted");
        Some(group)
    }

    #[must_use]
    pub fn find_group(&self, server_id: ServerId, group_id: GroupId) -> Option<Arc<Group>> {
        self.servers
            .read()
            .get(&server_id)
            .and_then(|server| server.groups.get(&group_id).cloned())
    }

    /// # Errors
    /// Fails when the group is unknown or not a server group.
    pub fn set_default_server_group(
        &self,
        server_id: ServerId,
        group_id: GroupId,
    ) -> Result<(), GroupError> {
        let mut servers = self.servers.write();
        let server = servers.entry(server_id).or_default();
        server.group_of_kind(server_id, group_id, GroupKind::Server)?;
        server.default_server_group = Some(group_id);
        Ok(())
    }

    /// # Errors
    /// Fails when the group is unknown or not a channel group.
    pub fn set_default_channel_group(
        &self,
        server_id: ServerId,
        group_id: GroupId,
    ) -> Result<(), GroupError> {
        let mut servers = self.servers.write();
        let server = servers.entry(server_id).or_default();
        server.group_of_kind(server_id, group_id, GroupKind::Channel)?;
        server.default_channel_group = Some(group_id);
        Ok(())
    }

    /// Adds a server group to a client; returns `false` if it was already assigned.
    ///
    /// # Errors
    /// Fails when the group is unknown or not a server group.
    pub fn assign_server_group(
        &self,
        server_id: ServerId,
        client_id: ClientDbId,
        group_id: GroupId,
    ) -> Result<bool, GroupError> {
        let mut servers = self.servers.write();
        let server = servers.entry(server_id).or_default();
        server.group_of_kind(server_id, group_id, GroupKind::Server)?;
        Ok(server
            .server_assignments
            .entry(client_id)
            .or_default()
            .insert(group_id))
    }

    pub fn unassign_server_group(
        &self,
        server_id: ServerId,
        client_id: ClientDbId,
        group_id: GroupId,
    ) -> bool {
        let mut servers = self.servers.write();
        let Some(server) = servers.get_mut(&server_id) else {
            return false;
        };
        let Some(assigned) = server.server_assignments.get_mut(&client_id) else {
            return false;
        };
        let removed = assigned.remove(&group_id);
        if assigned.is_empty() {
            server.server_assignments.remove(&client_id);
        }
        removed
    }

    /// Assigns a channel group to a client in one channel; `None` clears the
    /// assignment so the channel falls back to inheritance or the default.
    ///
    /// # Errors
    /// Fails when the group is unknown or not a channel group.
    pub fn set_channel_group(
        &self,
        server_id: ServerId,
        client_id: ClientDbId,
        channel_id: ChannelId,
        group_id: Option<GroupId>,
    ) -> Result<(), GroupError> {
        let mut servers = self.servers.write();
        let server = servers.entry(server_id).or_default();
        match group_id {
            Some(group_id) => {
                server.group_of_kind(server_id, group_id, GroupKind::Channel)?;
                server
                    .channel_assignments
                    .insert((client_id, channel_id), group_id);
            }
            None => {
                server.channel_assignments.remove(&(client_id, channel_id));
            }
        }
        Ok(())
    }

    /// Assigned server groups, or the server default when none are assigned.
    #[must_use]
    pub fn server_groups_of(&self, server_id: ServerId, client_id: ClientDbId) -> Vec<Arc<Group>> {
        let servers = self.servers.read();
        let Some(server) = servers.get(&server_id) else {
            return Vec::new();
        };
        let assigned: Vec<_> = server
            .server_assignments
            .get(&client_id)
            .into_iter()
            .flatten()
            .filter_map(|group_id| server.groups.get(group_id).cloned())
            .collect();
        if !assigned.is_empty() {
            return assigned;
        }
        server
            .default_server_group
            .and_then(|group_id| server.groups.get(&group_id).cloned())
            .into_iter()
            .collect()
    }

    /// Walks `channels` (target first, then parents) for an explicit assignment.
    /// The walk stops after a channel granting `b_channel_group_inheritance_end`;
    /// without a match the server's default channel group applies.
    #[must_use]
    pub fn channel_group_of(
        &self,
        server_id: ServerId,
        client_id: ClientDbId,
        channels: &[(ChannelId, Arc<PermissionStore>)],
    ) -> Option<ResolvedChannelGroup> {
        let servers = self.servers.read();
        let server = servers.get(&server_id)?;
        let target = channels.first().map(|(channel_id, _)| *channel_id)?;

        for (channel_id, store) in channels {
            if let Some(group) = server
                .channel_assignments
                .get(&(client_id, *channel_id))
                .and_then(|group_id| server.groups.get(group_id))
            {
                return Some(ResolvedChannelGroup {
                    group: Arc::clone(group),
                    inherited_from: (*channel_id != target).then_some(*channel_id),
                });
            }
            let inheritance_end =
                store.permission_value_flagged(PermissionKind::B_CHANNEL_GROUP_INHERITANCE_END);
            if permission_granted_value(1, inheritance_end) {
                break;
            }
        }

        let group = server
            .default_channel_group
            .and_then(|group_id| server.groups.get(&group_id))?;
        Some(ResolvedChannelGroup {
            group: Arc::clone(group),
            inherited_from: None,
        })
    }

    /// Every group store with its persistence identity.
    pub(crate) fn stores(&self) -> Vec<(PermissionHolder, Arc<PermissionStore>)> {
        self.servers
            .read()
            .values()
            .flat_map(|server| server.groups.values())
            .map(|group| (group.holder(), Arc::clone(&group.permissions)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parley_core::{
        ChannelId, ClientDbId, GroupId, PermissionKind, PermissionStore, PermissionUpdate,
        ServerId,
    };

    use super::{GroupError, GroupKind, GroupManager};

    const SERVER: ServerId = ServerId(1);
    const CLIENT: ClientDbId = ClientDbId(42);

    #[test]
    fn group_ids_are_unique_across_servers() {
        let manager = GroupManager::new();
        let first = manager.create_group(SERVER, GroupKind::Server, "Guest");
        let second = manager.create_group(ServerId(2), GroupKind::Server, "Guest");
        assert_ne!(first.id, second.id);
        assert_eq!(manager.find_group(ServerId(2), second.id).unwrap().name, "Guest");
        assert!(manager.find_group(SERVER, second.id).is_none());
    }

    #[test]
    fn server_groups_fall_back_to_default() {
        let manager = GroupManager::new();
        let guest = manager.create_group(SERVER, GroupKind::Server, "Guest");
        let admin = manager.create_group(SERVER, GroupKind::Server, "Admin");
        manager.set_default_server_group(SERVER, guest.id).unwrap();

        let ids = |groups: Vec<Arc<super::Group>>| groups.iter().map(|g| g.id).collect::<Vec<_>>();
        assert_eq!(ids(manager.server_groups_of(SERVER, CLIENT)), vec![guest.id]);

        assert!(manager.assign_server_group(SERVER, CLIENT, admin.id).unwrap());
        assert!(!manager.assign_server_group(SERVER, CLIENT, admin.id).unwrap());
        assert_eq!(ids(manager.server_groups_of(SERVER, CLIENT)), vec![admin.id]);

        assert!(manager.unassign_server_group(SERVER, CLIENT, admin.id));
        assert_eq!(ids(manager.server_groups_of(SERVER, CLIENT)), vec![guest.id]);
    }

    #[test]
    fn assignments_reject_wrong_group_kind() {
        let manager = GroupManager::new();
        let channel_group = manager.create_group(SERVER, GroupKind::Channel, "Operator");
        assert_eq!(
            manager.assign_server_group(SERVER, CLIENT, channel_group.id),
            Err(GroupError::WrongKind {
                group_id: channel_group.id,
                expected: GroupKind::Server
            })
        );
        assert!(matches!(
            manager.set_channel_group(SERVER, CLIENT, ChannelId(1), Some(GroupId(999))),
            Err(GroupError::UnknownGroup { .. })
        ));
    }

    #[test]
    fn channel_group_is_inherited_until_inheritance_end() {
        let manager = GroupManager::new();
        let guest = manager.create_group(SERVER, GroupKind::Channel, "Guest");
        let operator = manager.create_group(SERVER, GroupKind::Channel, "Operator");
        manager.set_default_channel_group(SERVER, guest.id).unwrap();
        manager
            .set_channel_group(SERVER, CLIENT, ChannelId(1), Some(operator.id))
            .unwrap();

        let root = Arc::new(PermissionStore::new());
        let middle = Arc::new(PermissionStore::new());
        let leaf = Arc::new(PermissionStore::new());
        let chain = vec![
            (ChannelId(3), Arc::clone(&leaf)),
            (ChannelId(2), Arc::clone(&middle)),
            (ChannelId(1), Arc::clone(&root)),
        ];

        let resolved = manager.channel_group_of(SERVER, CLIENT, &chain).unwrap();
        assert_eq!(resolved.group.id, operator.id);
        assert_eq!(resolved.inherited_from, Some(ChannelId(1)));

        middle
            .set_permission(
                PermissionKind::B_CHANNEL_GROUP_INHERITANCE_END,
                PermissionUpdate::set_value(1),
            )
            .unwrap();
        let resolved = manager.channel_group_of(SERVER, CLIENT, &chain).unwrap();
        assert_eq!(resolved.group.id, guest.id);
        assert_eq!(resolved.inherited_from, None);
    }

    #[test]
    fn deleting_group_drops_assignments_and_defaults() {
        let manager = GroupManager::new();
        let guest = manager.create_group(SERVER, GroupKind::Server, "Guest");
        manager.set_default_server_group(SERVER, guest.id).unwrap();
        manager.assign_server_group(SERVER, CLIENT, guest.id).unwrap();

        assert!(manager.delete_group(SERVER, guest.id).is_some());
        assert!(manager.server_groups_of(SERVER, CLIENT).is_empty());
        assert!(manager.find_group(SERVER, guest.id).is_none());
        assert!(manager.stores().is_empty());
    }
}
