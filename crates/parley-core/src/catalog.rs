use std::{collections::HashMap, fmt, sync::OnceLock};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::PermissionError;

const GRANT_NAME_PREFIX: &str = "i_needed_modify_power_";

static CATALOG: OnceLock<PermissionCatalog> = OnceLock::new();

/// Identifier of one fixed permission.
///
/// Plain kinds use the dense id range `1..PERMISSION_ID_MAX`. The companion
/// "needed modify power" kind of a permission shares its id with
/// [`PermissionKind::GRANT_FLAG`] set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PermissionKind(u16);

/// One past the highest plain permission id.
pub const PERMISSION_ID_MAX: u16 = 360;

impl PermissionKind {
    pub const UNKNOWN: Self = Self(0);
    pub const GRANT_FLAG: u16 = 1 << 15;

    /// Raw id, grant bit included.
    #[must_use]
    pub const fn id(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn is_grant(self) -> bool {
        self.0 & Self::GRANT_FLAG != 0
    }

    /// The plain kind this value refers to, with the grant bit stripped.
    #[must_use]
    pub const fn base(self) -> Self {
        Self(self.0 & !Self::GRANT_FLAG)
    }

    /// True for plain kinds inside the dense id range.
    #[must_use]
    pub const fn is_dense(self) -> bool {
        self.0 != 0 && self.0 < PERMISSION_ID_MAX
    }

    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn dense(id: u16) -> Self {
        Self(id)
    }

    /// Looks up a kind by its raw id.
    ///
    /// # Errors
    /// Returns [`PermissionError::UnknownPermission`] when no catalog entry exists.
    pub fn from_id(id: u16) -> Result<Self, PermissionError> {
        catalog().resolve_by_id(Self(id)).map(|_| Self(id))
    }

    /// Catalog name of the kind; grant kinds yield their grant name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match catalog().resolve_by_id(self) {
            Ok(entry) if self.is_grant() => entry.grant_name.as_str(),
            Ok(entry) => entry.name,
            Err(_) => "unknown",
        }
    }
}

impl fmt::Display for PermissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<&str> for PermissionKind {
    type Error = PermissionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        catalog().resolve_by_name(value)
    }
}

impl Serialize for PermissionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for PermissionKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::try_from(name.as_str()).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionGroup {
    Global,
    GlobalInfo,
    GlobalVsManage,
    GlobalAdmin,
    GlobalSettings,
    VirtualServer,
    VsInfo,
    VsAdmin,
    VsSettings,
    Channel,
    ChannelInfo,
    ChannelCreate,
    ChannelModify,
    ChannelDelete,
    ChannelAccess,
    Group,
    GroupInfo,
    GroupCreate,
    GroupModify,
    GroupDelete,
    Client,
    ClientInfo,
    ClientAdmin,
    ClientBasic,
    ClientModify,
    FileTransfer,
}

impl PermissionGroup {
    /// Enclosing category, `None` for the top-level categories.
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::GlobalInfo | Self::GlobalVsManage | Self::GlobalAdmin | Self::GlobalSettings => {
                Some(Self::Global)
            }
            Self::VsInfo | Self::VsAdmin | Self::VsSettings => Some(Self::VirtualServer),
            Self::ChannelInfo
            | Self::ChannelCreate
            | Self::ChannelModify
            | Self::ChannelDelete
            | Self::ChannelAccess => Some(Self::Channel),
            Self::GroupInfo | Self::GroupCreate | Self::GroupModify | Self::GroupDelete => {
                Some(Self::Group)
            }
            Self::ClientInfo | Self::ClientAdmin | Self::ClientBasic | Self::ClientModify => {
                Some(Self::Client)
            }
            Self::Global
            | Self::VirtualServer
            | Self::Channel
            | Self::Group
            | Self::Client
            | Self::FileTransfer => None,
        }
    }

    #[must_use]
    pub fn is_within(self, ancestor: Self) -> bool {
        self == ancestor || self.parent().is_some_and(|parent| parent.is_within(ancestor))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PermissionEntry {
    pub kind: PermissionKind,
    pub name: &'static str,
    pub grant_name: String,
    pub group: PermissionGroup,
    pub description: &'static str,
}

pub(crate) struct RawEntry {
    kind: PermissionKind,
    name: &'static str,
    group: PermissionGroup,
    description: &'static str,
}

macro_rules! permission_table {
    ($($id:literal => $konst:ident, $name:literal, $group:ident, $description:literal;)*) => {
        impl PermissionKind {
            $(pub const $konst: Self = Self($id);)*
        }

        pub(crate) const RAW_ENTRIES: &[RawEntry] = &[
            $(RawEntry {
                kind: PermissionKind($id),
                name: $name,
                group: PermissionGroup::$group,
                description: $description,
            },)*
        ];
    };
}

mod table;

/// Process-wide, read-only permission metadata.
pub struct PermissionCatalog {
    entries: Vec<PermissionEntry>,
    by_name: HashMap<&'static str, PermissionKind>,
    by_grant_name: HashMap<String, PermissionKind>,
}

/// The catalog, built on first use.
pub fn catalog() -> &'static PermissionCatalog {
    CATALOG.get_or_init(PermissionCatalog::build)
}

impl PermissionCatalog {
    fn build() -> Self {
        let mut entries = Vec::with_capacity(table::RAW_ENTRIES.len());
        let mut by_name = HashMap::with_capacity(table::RAW_ENTRIES.len());
        let mut by_grant_name = HashMap::with_capacity(table::RAW_ENTRIES.len());
        for raw in table::RAW_ENTRIES {
            let grant_name = grant_name_for(raw.name);
            by_name.insert(raw.name, raw.kind);
            by_grant_name.insert(grant_name.clone(), raw.kind);
            entries.push(PermissionEntry {
                kind: raw.kind,
                name: raw.name,
                grant_name,
                group: raw.group,
                description: raw.description,
            });
        }
        tracing::debug!(permissions = entries.len(), "permission catalog built");
        Self {
            entries,
            by_name,
            by_grant_name,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[PermissionEntry] {
        &self.entries
    }

    /// Metadata for `kind`. Grant kinds resolve to the entry of their base kind.
    ///
    /// # Errors
    /// Returns [`PermissionError::UnknownPermission`] for ids without an entry.
    pub fn resolve_by_id(&self, kind: PermissionKind) -> Result<&PermissionEntry, PermissionError> {
        let base = kind.base();
        if !base.is_dense() {
            return Err(PermissionError::UnknownPermission { id: kind.id() });
        }
        // Entries are stored in id order starting at 1.
        self.entries
            .get(base.index() - 1)
            .filter(|entry| entry.kind == base)
            .ok_or(PermissionError::UnknownPermission { id: kind.id() })
    }

    /// Resolves a permission name or a grant name.
    ///
    /// # Errors
    /// Returns [`PermissionError::UnknownPermissionName`] when neither matches.
    pub fn resolve_by_name(&self, name: &str) -> Result<PermissionKind, PermissionError> {
        if let Some(kind) = self.by_name.get(name) {
            return Ok(*kind);
        }
        self.by_grant_name
            .get(name)
            .map(|kind| PermissionKind(kind.id() | PermissionKind::GRANT_FLAG))
            .ok_or_else(|| PermissionError::UnknownPermissionName {
                name: name.to_owned(),
            })
    }

    /// The "needed modify power" companion of `kind`.
    ///
    /// # Errors
    /// Returns [`PermissionError::UnknownPermission`] for ids without an entry.
    pub fn grant_kind_of(&self, kind: PermissionKind) -> Result<PermissionKind, PermissionError> {
        let entry = self.resolve_by_id(kind)?;
        Ok(PermissionKind(entry.kind.id() | PermissionKind::GRANT_FLAG))
    }

    /// Kinds whose category is `group` or one of its sub-categories.
    pub fn kinds_in_group(
        &self,
        group: PermissionGroup,
    ) -> impl Iterator<Item = PermissionKind> + '_ {
        self.entries
            .iter()
            .filter(move |entry| entry.group.is_within(group))
            .map(|entry| entry.kind)
    }
}

fn grant_name_for(name: &str) -> String {
    let stem = name.get(2..).unwrap_or(name);
    format!("{GRANT_NAME_PREFIX}{stem}")
}
