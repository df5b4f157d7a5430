#![forbid(unsafe_code)]

//! Permission engine of the parley voice server: the permission catalog,
//! per-holder permission stores with change tracking, and the resolver that
//! folds an authority chain of stores into one effective decision.

pub mod catalog;
pub mod holder;
pub mod resolver;
pub mod store;
pub mod tracker;
pub mod value;

pub use catalog::{
    catalog, PermissionCatalog, PermissionEntry, PermissionGroup, PermissionKind, PERMISSION_ID_MAX,
};
pub use holder::{
    ChannelId, ClientDbId, GroupId, HolderKind, PermissionHolder, PlaylistId, ServerId,
};
pub use resolver::{AuthorityChain, ChannelAccess, PermissionResolver};
pub use store::{PermissionStore, BULK_SIZE};
pub use tracker::{DirtyUpdate, StatementKind};
pub use value::{
    permission_granted, permission_granted_value, Facet, FlaggedValue, PermissionContainer,
    PermissionFlags, PermissionRecord, PermissionUpdate, PermissionValues, UpdateAction,
};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum PermissionError {
    #[error("unknown permission id {id}")]
    UnknownPermission { id: u16 },
    #[error("unknown permission name {name:?}")]
    UnknownPermissionName { name: String },
    #[error("holder kind {raw} is invalid")]
    InvalidHolderKind { raw: i16 },
}

#[cfg(test)]
mod tests {
    use super::PermissionError;

    #[test]
    fn errors_name_the_offending_input() {
        assert_eq!(
            PermissionError::UnknownPermissionName {
                name: String::from("b_nope")
            }
            .to_string(),
            "unknown permission name \"b_nope\""
        );
        assert_eq!(
            PermissionError::UnknownPermission { id: 9000 }.to_string(),
            "unknown permission id 9000"
        );
    }
}
