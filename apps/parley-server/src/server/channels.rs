use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;
use parley_core::{ChannelId, PermissionHolder, PermissionStore, ServerId};

#[derive(Debug)]
pub struct Channel {
    pub id: ChannelId,
    pub server_id: ServerId,
    pub parent: Option<ChannelId>,
    pub name: String,
    pub permissions: Arc<PermissionStore>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChannelError {
    #[error("channel {channel_id} does not exist on server {server_id}")]
    UnknownChannel {
        server_id: ServerId,
        channel_id: ChannelId,
    },
}

#[derive(Debug, Default)]
struct ServerChannels {
    channels: HashMap<ChannelId, Arc<Channel>>,
    next_id: u64,
}

/// Channel hierarchy of every virtual server.
#[derive(Debug, Default)]
pub struct ChannelTree {
    servers: RwLock<HashMap<ServerId, ServerChannels>>,
}

impl ChannelTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a channel below `parent` (or at the root) with an empty store.
    ///
    /// # Errors
    /// Returns [`ChannelError::UnknownChannel`] when the parent does not exist.
    pub fn create_channel(
        &self,
        server_id: ServerId,
        parent: Option<ChannelId>,
        name: &str,
    ) -> Result<Arc<Channel>, ChannelError> {
        let mut servers = self.servers.write();
        let server = servers.entry(server_id).or_default();
        if let Some(parent) = parent {
            if !server.channels.contains_key(&parent) {
                return Err(ChannelError::UnknownChannel {
                    server_id,
                    channel_id: parent,
                });
            }
        }
        server.next_id = server
            .next_id
            .max(server.channels.keys().map(|id| id.get()).max().unwrap_or(0))
            + 1;
        let channel = Arc::new(Channel {
            id: ChannelId(server.next_id),
            server_id,
            parent,
            name: name.to_owned(),
            permissions: Arc::new(PermissionStore::new()),
        });
        server.channels.insert(channel.id, Arc::clone(&channel));
        tracing::info!(
            server_id = %server_id,
            channel_id = %channel.id,
            channel_name = name,
            "channel created"
        );
        Ok(channel)
    }

    /// Deletes a channel and every channel below it, returning the removed ones.
    pub fn delete_channel(&self, server_id: ServerId, channel_id: ChannelId) -> Vec<Arc<Channel>> {
        let mut servers = self.servers.write();
        let Some(server) = servers.get_mut(&server_id) else {
            return Vec::new();
        };
        if !server.channels.contains_key(&channel_id) {
            return Vec::new();
        }

        let mut doomed = vec![channel_id];
        let mut cursor = 0;
        while let Some(current) = doomed.get(cursor).copied() {
            doomed.extend(
                server
                    .channels
                    .values()
                    .filter(|channel| channel.parent == Some(current))
                    .map(|channel| channel.id),
            );
            cursor += 1;
        }

        let removed: Vec<_> = doomed
            .iter()
            .filter_map(|id| server.channels.remove(id))
            .collect();
        tracing::info!(
            server_id = %server_id,
            channel_id = %channel_id,
            removed = removed.len(),
            "channel tree deleted"
        );
        removed
    }

    #[must_use]
    pub fn find(&self, server_id: ServerId, channel_id: ChannelId) -> Option<Arc<Channel>> {
        self.servers
            .read()
            .get(&server_id)
            .and_then(|server| server.channels.get(&channel_id).cloned())
    }

    /// The channel followed by its parents up to the root. Empty if unknown.
    #[must_use]
    pub fn ancestors(&self, server_id: ServerId, channel_id: ChannelId) -> Vec<Arc<Channel>> {
        let servers = self.servers.read();
        let Some(server) = servers.get(&server_id) else {
            return Vec::new();
        };
        let mut chain = Vec::new();
        let mut cursor = Some(channel_id);
        while let Some(current) = cursor {
            let Some(channel) = server.channels.get(&current) else {
                break;
            };
            if chain.len() > server.channels.len() {
                tracing::error!(
                    server_id = %server_id,
                    channel_id = %channel_id,
                    "channel parent cycle"
                );
                break;
            }
            chain.push(Arc::clone(channel));
            cursor = channel.parent;
        }
        chain
    }

    pub(crate) fn stores(&self) -> Vec<(PermissionHolder, Arc<PermissionStore>)> {
        self.servers
            .read()
            .values()
            .flat_map(|server| server.channels.values())
            .map(|channel| {
                (
                    PermissionHolder::channel(channel.server_id, channel.id),
                    Arc::clone(&channel.permissions),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use parley_core::{ChannelId, ServerId};

    use super::{ChannelError, ChannelTree};

    const SERVER: ServerId = ServerId(1);

    #[test]
    fn ancestors_walk_from_target_to_root() {
        let tree = ChannelTree::new();
        let root = tree.create_channel(SERVER, None, "Lobby").unwrap();
        let middle = tree.create_channel(SERVER, Some(root.id), "Games").unwrap();
        let leaf = tree.create_channel(SERVER, Some(middle.id), "Raid").unwrap();

        let ids: Vec<_> = tree
            .ancestors(SERVER, leaf.id)
            .iter()
            .map(|channel| channel.id)
            .collect();
        assert_eq!(ids, vec![leaf.id, middle.id, root.id]);
        assert!(tree.ancestors(SERVER, ChannelId(999)).is_empty());
    }

    #[test]
    fn unknown_parent_is_rejected() {
        let tree = ChannelTree::new();
        assert_eq!(
            tree.create_channel(SERVER, Some(ChannelId(7)), "orphan")
                .unwrap_err(),
            ChannelError::UnknownChannel {
                server_id: SERVER,
                channel_id: ChannelId(7)
            }
        );
    }

    #[test]
    fn delete_removes_the_whole_subtree() {
        let tree = ChannelTree::new();
        let root = tree.create_channel(SERVER, None, "Lobby").unwrap();
        let middle = tree.create_channel(SERVER, Some(root.id), "Games").unwrap();
        tree.create_channel(SERVER, Some(middle.id), "Raid").unwrap();
        let sibling = tree.create_channel(SERVER, Some(root.id), "Music").unwrap();

        let removed = tree.delete_channel(SERVER, middle.id);
        assert_eq!(removed.len(), 2);
        assert!(tree.find(SERVER, middle.id).is_none());
        assert!(tree.find(SERVER, sibling.id).is_some());
        assert_eq!(tree.stores().len(), 2);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let tree = ChannelTree::new();
        let first = tree.create_channel(SERVER, None, "a").unwrap();
        tree.delete_channel(SERVER, first.id);
        let second = tree.create_channel(SERVER, None, "b").unwrap();
        assert_ne!(first.id, second.id);
    }
}
