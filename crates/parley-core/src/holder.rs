use std::fmt;

use serde::{Deserialize, Serialize};

use crate::PermissionError;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            Default,
            Serialize,
            Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            pub const MIN: Self = Self(u64::MIN);
            pub const MAX: Self = Self(u64::MAX);

            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Virtual server id. `0` addresses instance-wide holders such as templates.
    ServerId
);
entity_id!(ChannelId);
entity_id!(GroupId);
entity_id!(
    /// Database id of a client, stable across connections.
    ClientDbId
);
entity_id!(PlaylistId);

impl ServerId {
    pub const INSTANCE: Self = Self(0);
}

/// The category of entity owning a permission store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolderKind {
    Group,
    Channel,
    User,
    Playlist,
}

impl HolderKind {
    pub const ALL: [Self; 4] = [Self::Group, Self::Channel, Self::User, Self::Playlist];

    /// Discriminator stored in the `type` column.
    #[must_use]
    pub const fn sql_type(self) -> i16 {
        match self {
            Self::Group => 0,
            Self::Channel => 1,
            Self::User => 2,
            Self::Playlist => 3,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Channel => "channel",
            Self::User => "user",
            Self::Playlist => "playlist",
        }
    }
}

impl TryFrom<i16> for HolderKind {
    type Error = PermissionError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Group),
            1 => Ok(Self::Channel),
            2 => Ok(Self::User),
            3 => Ok(Self::Playlist),
            raw => Err(PermissionError::InvalidHolderKind { raw }),
        }
    }
}

/// Persistence identity of one permission store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermissionHolder {
    pub server_id: ServerId,
    pub kind: HolderKind,
    pub entity_id: u64,
}

impl PermissionHolder {
    #[must_use]
    pub const fn group(server_id: ServerId, group_id: GroupId) -> Self {
        Self {
            server_id,
            kind: HolderKind::Group,
            entity_id: group_id.0,
        }
    }

    #[must_use]
    pub const fn channel(server_id: ServerId, channel_id: ChannelId) -> Self {
        Self {
            server_id,
            kind: HolderKind::Channel,
            entity_id: channel_id.0,
        }
    }

    #[must_use]
    pub const fn client(server_id: ServerId, client_id: ClientDbId) -> Self {
        Self {
            server_id,
            kind: HolderKind::User,
            entity_id: client_id.0,
        }
    }

    #[must_use]
    pub const fn playlist(server_id: ServerId, playlist_id: PlaylistId) -> Self {
        Self {
            server_id,
            kind: HolderKind::Playlist,
            entity_id: playlist_id.0,
        }
    }
}

impl fmt::Display for PermissionHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.server_id, self.kind.as_str(), self.entity_id)
    }
}

#[cfg(test)]
mod tests {
    use super::{ClientDbId, HolderKind, PermissionHolder, ServerId};
    use crate::PermissionError;

    #[test]
    fn holder_kind_sql_codes_are_stable() {
        for kind in HolderKind::ALL {
            assert_eq!(HolderKind::try_from(kind.sql_type()).unwrap(), kind);
        }
        assert_eq!(
            HolderKind::try_from(9).unwrap_err(),
            PermissionError::InvalidHolderKind { raw: 9 }
        );
    }

    #[test]
    fn holder_display_names_the_persistence_key() {
        let holder = PermissionHolder::client(ServerId(3), ClientDbId(42));
        assert_eq!(holder.to_string(), "3:user:42");
    }
}
