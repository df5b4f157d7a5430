//! Persistence diff for a [`PermissionStore`](crate::PermissionStore).
//!
//! The store keeps one coarse dirty flag. A flush walks every container with
//! pending update markers and compares its current state with the snapshot it
//! was last persisted as, so edits that cancel out produce no statement.

use serde::Serialize;

use crate::{
    value::{PermissionContainer, PermissionRecord},
    ChannelId, FlaggedValue, PermissionKind, UpdateAction,
};

/// Container state plus the snapshot last written to (or read from) storage.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TrackedSlot {
    pub(crate) container: PermissionContainer,
    pub(crate) persisted: PermissionRecord,
}

impl TrackedSlot {
    pub(crate) fn hydrate(&mut self, record: PermissionRecord) {
        let flags = &mut self.container.flags;
        flags.set_value_set(record.value.is_some());
        flags.set_grant_set(record.grant.is_some());
        flags.set_skip(record.skip);
        flags.set_negate(record.negate);
        flags.set_has_db_row(true);
        flags.clear_updates();
        self.container.values.value = record.value.unwrap_or_default();
        self.container.values.grant = record.grant.unwrap_or_default();
        self.persisted = record;
    }

    /// Idle slots carry nothing worth keeping in memory.
    pub(crate) const fn is_idle(&self) -> bool {
        let flags = self.container.flags;
        !flags.permission_set()
            && !flags.channel_specific()
            && !flags.has_db_row()
            && !flags.update_pending()
    }
}

/// Which SQL statement a [`DirtyUpdate`] maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    Insert,
    Update,
    Delete,
}

impl StatementKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// One pending persistence action produced by `flush_db_updates`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DirtyUpdate {
    pub kind: PermissionKind,
    /// `None` for the holder-wide entry.
    pub channel_id: Option<ChannelId>,
    pub value: FlaggedValue,
    pub grant: FlaggedValue,
    pub update_value: UpdateAction,
    pub update_grant: UpdateAction,
    pub skip: bool,
    pub negate: bool,
    pub has_db_row: bool,
    pub is_delete: bool,
}

impl DirtyUpdate {
    #[must_use]
    pub const fn statement(&self) -> StatementKind {
        if self.is_delete {
            StatementKind::Delete
        } else if self.has_db_row {
            StatementKind::Update
        } else {
            StatementKind::Insert
        }
    }
}

fn snapshot(container: &PermissionContainer) -> PermissionRecord {
    PermissionRecord {
        value: container.value().as_option(),
        grant: container.grant().as_option(),
        skip: container.flags.skip(),
        negate: container.flags.negate(),
    }
}

fn facet_action(present: bool, changed: bool) -> UpdateAction {
    match (changed, present) {
        (false, _) => UpdateAction::DoNothing,
        (true, true) => UpdateAction::SetValue,
        (true, false) => UpdateAction::DeleteValue,
    }
}

/// Consumes the pending markers of `slot`, returning the statement needed to
/// bring storage in line with the current state.
pub(crate) fn take_update(
    kind: PermissionKind,
    channel_id: Option<ChannelId>,
    slot: &mut TrackedSlot,
) -> Option<DirtyUpdate> {
    let flags = slot.container.flags;
    if !flags.update_pending() {
        return None;
    }
    slot.container.flags.clear_updates();

    let current = snapshot(&slot.container);
    let has_db_row = flags.has_db_row();
    if has_db_row {
        if current == slot.persisted {
            return None;
        }
    } else if !flags.permission_set() {
        return None;
    }

    let previous = if has_db_row {
        slot.persisted
    } else {
        PermissionRecord::default()
    };
    let flags_changed = current.skip != previous.skip || current.negate != previous.negate;
    let update = DirtyUpdate {
        kind,
        channel_id,
        value: slot.container.value(),
        grant: slot.container.grant(),
        update_value: facet_action(
            current.value.is_some(),
            current.value != previous.value || (flags_changed && current.value.is_some()),
        ),
        update_grant: facet_action(current.grant.is_some(), current.grant != previous.grant),
        skip: current.skip,
        negate: current.negate,
        has_db_row,
        is_delete: !flags.permission_set(),
    };

    slot.persisted = current;
    slot.container.flags.set_has_db_row(flags.permission_set());
    Some(update)
}
