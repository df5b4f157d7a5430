use std::{
    collections::BTreeMap,
    mem::size_of,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use parking_lot::{Mutex, RwLock};

use crate::{
    tracker::{take_update, TrackedSlot},
    ChannelId, DirtyUpdate, FlaggedValue, PermissionContainer, PermissionError, PermissionFlags,
    PermissionKind, PermissionRecord, PermissionUpdate, PermissionValues, UpdateAction,
    PERMISSION_ID_MAX,
};

const BULK_BITS: usize = 4;
pub const BULK_SIZE: usize = 1 << BULK_BITS;
const BULK_MASK: usize = BULK_SIZE - 1;
const BULK_COUNT: usize = (PERMISSION_ID_MAX as usize).div_ceil(BULK_SIZE);

type Block = RwLock<[TrackedSlot; BULK_SIZE]>;
type OverlayKey = (PermissionKind, ChannelId);

/// All permissions owned by one holder.
///
/// Holder-wide entries live in lazily allocated blocks of [`BULK_SIZE`]
/// containers. The slot table lock only guards block allocation and release;
/// container values are read and written under the owning block's lock, so a
/// reader always sees one whole container. Blocks are shared through `Arc`,
/// and the strong count doubles as the block's use count: `cleanup` only
/// releases blocks nobody is holding.
///
/// Channel-scoped entries live in an overlay map keyed by `(kind, channel)`.
pub struct PermissionStore {
    blocks: Mutex<Vec<Option<Arc<Block>>>>,
    overlay: RwLock<BTreeMap<OverlayKey, TrackedSlot>>,
    dirty: AtomicBool,
}

impl Default for PermissionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PermissionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermissionStore")
            .field("allocated_blocks", &self.allocated_blocks())
            .field("overlay_entries", &self.overlay.read().len())
            .field("dirty", &self.require_db_updates())
            .finish()
    }
}

const fn block_position(kind: PermissionKind) -> (usize, usize) {
    (kind.index() >> BULK_BITS, kind.index() & BULK_MASK)
}

#[allow(clippy::cast_possible_truncation)]
const fn kind_at(block: usize, offset: usize) -> PermissionKind {
    // Block indices are bounded by PERMISSION_ID_MAX, which fits in u16.
    PermissionKind::dense((block << BULK_BITS | offset) as u16)
}

fn ensure_dense(kind: PermissionKind) -> Result<(), PermissionError> {
    if kind.is_dense() {
        Ok(())
    } else {
        Err(PermissionError::UnknownPermission { id: kind.id() })
    }
}

fn overlay_range(kind: PermissionKind) -> std::ops::RangeInclusive<OverlayKey> {
    (kind, ChannelId::MIN)..=(kind, ChannelId::MAX)
}

impl PermissionStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            blocks: Mutex::new(vec![None; BULK_COUNT]),
            overlay: RwLock::new(BTreeMap::new()),
            dirty: AtomicBool::new(false),
        }
    }

    fn block(&self, index: usize) -> Option<Arc<Block>> {
        self.blocks.lock().get(index).cloned().flatten()
    }

    fn block_or_allocate(&self, index: usize) -> Arc<Block> {
        let mut blocks = self.blocks.lock();
        Arc::clone(blocks[index].get_or_insert_with(|| {
            tracing::trace!(block = index, "allocating permission block");
            Arc::new(RwLock::new([TrackedSlot::default(); BULK_SIZE]))
        }))
    }

    fn allocated_blocks(&self) -> usize {
        self.blocks.lock().iter().filter(|block| block.is_some()).count()
    }

    fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    /// Hydrates a holder-wide entry from storage. Never marks the store dirty;
    /// replaying the same row again overwrites it. Kinds outside the dense range
    /// are ignored.
    pub fn load_permission(&self, kind: PermissionKind, record: PermissionRecord) {
        if !kind.is_dense() {
            tracing::debug!(permission = kind.id(), "ignoring non-dense permission on load");
            return;
        }
        let (block, offset) = block_position(kind);
        let block = self.block_or_allocate(block);
        block.write()[offset].hydrate(record);
    }

    /// Channel-scoped counterpart of [`PermissionStore::load_permission`].
    pub fn load_channel_permission(
        &self,
        kind: PermissionKind,
        channel_id: ChannelId,
        record: PermissionRecord,
    ) {
        if !kind.is_dense() {
            tracing::debug!(permission = kind.id(), "ignoring non-dense permission on load");
            return;
        }
        let mut overlay = self.overlay.write();
        overlay
            .entry((kind, channel_id))
            .or_default()
            .hydrate(record);
        let channel_specific = overlay
            .range(overlay_range(kind))
            .any(|(_, slot)| slot.container.flags.permission_set());
        self.update_channel_specific(kind, channel_specific);
    }

    #[must_use]
    pub fn permission_flags(&self, kind: PermissionKind) -> PermissionFlags {
        self.container(kind).flags
    }

    #[must_use]
    pub fn permission_values(&self, kind: PermissionKind) -> PermissionValues {
        self.container(kind).values
    }

    #[must_use]
    pub fn permission_value_flagged(&self, kind: PermissionKind) -> FlaggedValue {
        self.container(kind).value()
    }

    #[must_use]
    pub fn permission_granted_flagged(&self, kind: PermissionKind) -> FlaggedValue {
        self.container(kind).grant()
    }

    /// Copy of the holder-wide container for `kind`; empty if never written.
    #[must_use]
    pub fn container(&self, kind: PermissionKind) -> PermissionContainer {
        if !kind.is_dense() {
            return PermissionContainer::EMPTY;
        }
        let (block, offset) = block_position(kind);
        self.block(block)
            .map_or(PermissionContainer::EMPTY, |block| block.read()[offset].container)
    }

    /// Copy of the overlay entry for `(kind, channel_id)`; empty if absent.
    #[must_use]
    pub fn channel_permission(
        &self,
        kind: PermissionKind,
        channel_id: ChannelId,
    ) -> PermissionContainer {
        self.overlay
            .read()
            .get(&(kind, channel_id))
            .map_or(PermissionContainer::EMPTY, |slot| slot.container)
    }

    /// Applies `update` to the holder-wide entry and returns the resulting container.
    ///
    /// # Errors
    /// Returns [`PermissionError::UnknownPermission`] for kinds outside the dense range.
    pub fn set_permission(
        &self,
        kind: PermissionKind,
        update: PermissionUpdate,
    ) -> Result<PermissionContainer, PermissionError> {
        ensure_dense(kind)?;
        if update.is_noop() {
            return Ok(self.container(kind));
        }
        let (block, offset) = block_position(kind);
        let block = self.block_or_allocate(block);
        let container = {
            let mut slots = block.write();
            let slot = &mut slots[offset];
            update.apply(&mut slot.container);
            slot.container
        };
        self.mark_dirty();
        Ok(container)
    }

    /// Applies `update` to the overlay entry for `(kind, channel_id)`, inserting it
    /// when a facet is being set. Returns the resulting container.
    ///
    /// # Errors
    /// Returns [`PermissionError::UnknownPermission`] for kinds outside the dense range.
    pub fn set_channel_permission(
        &self,
        kind: PermissionKind,
        channel_id: ChannelId,
        update: PermissionUpdate,
    ) -> Result<PermissionContainer, PermissionError> {
        ensure_dense(kind)?;
        let mut overlay = self.overlay.write();
        let key = (kind, channel_id);
        let creates_value =
            update.value == UpdateAction::SetValue || update.grant == UpdateAction::SetValue;
        if !overlay.contains_key(&key) && !creates_value {
            return Ok(PermissionContainer::EMPTY);
        }
        if update.is_noop() {
            return Ok(overlay
                .get(&key)
                .map_or(PermissionContainer::EMPTY, |slot| slot.container));
        }

        let slot = overlay.entry(key).or_default();
        update.apply(&mut slot.container);
        let container = slot.container;

        let channel_specific = container.flags.permission_set()
            || overlay
                .range(overlay_range(kind))
                .any(|(_, slot)| slot.container.flags.permission_set());
        self.update_channel_specific(kind, channel_specific);
        drop(overlay);

        self.mark_dirty();
        Ok(container)
    }

    fn update_channel_specific(&self, kind: PermissionKind, channel_specific: bool) {
        let (block, offset) = block_position(kind);
        let block = if channel_specific {
            self.block_or_allocate(block)
        } else {
            match self.block(block) {
                Some(block) => block,
                None => return,
            }
        };
        block.write()[offset]
            .container
            .flags
            .set_channel_specific(channel_specific);
    }

    /// Snapshot of every holder-wide entry with a set facet.
    ///
    /// All allocated blocks are read-locked together, so the result never mixes
    /// states from before and after a concurrent write.
    #[must_use]
    pub fn permissions(&self) -> Vec<(PermissionKind, PermissionContainer)> {
        let blocks: Vec<(usize, Arc<Block>)> = self
            .blocks
            .lock()
            .iter()
            .enumerate()
            .filter_map(|(index, block)| block.as_ref().map(|block| (index, Arc::clone(block))))
            .collect();
        let guards: Vec<_> = blocks
            .iter()
            .map(|(index, block)| (*index, block.read()))
            .collect();

        let mut result = Vec::new();
        for (index, slots) in &guards {
            for (offset, slot) in slots.iter().enumerate() {
                if slot.container.flags.permission_set() {
                    result.push((kind_at(*index, offset), slot.container));
                }
            }
        }
        result
    }

    /// Overlay entries with a set facet for one channel.
    #[must_use]
    pub fn channel_permissions(
        &self,
        channel_id: ChannelId,
    ) -> Vec<(PermissionKind, PermissionContainer)> {
        self.overlay
            .read()
            .iter()
            .filter(|((_, channel), slot)| {
                *channel == channel_id && slot.container.flags.permission_set()
            })
            .map(|((kind, _), slot)| (*kind, slot.container))
            .collect()
    }

    /// Overlay entries with a set facet across all channels.
    #[must_use]
    pub fn channel_permissions_all(
        &self,
    ) -> Vec<(PermissionKind, ChannelId, PermissionContainer)> {
        self.overlay
            .read()
            .iter()
            .filter(|(_, slot)| slot.container.flags.permission_set())
            .map(|((kind, channel), slot)| (*kind, *channel, slot.container))
            .collect()
    }

    /// Releases idle blocks nobody holds and drops overlay entries that carry
    /// nothing to persist. Returns the number of released blocks and entries.
    pub fn cleanup(&self) -> usize {
        let mut released = 0;
        {
            let mut overlay = self.overlay.write();
            let before = overlay.len();
            overlay.retain(|_, slot| !slot.is_idle());
            released += before - overlay.len();
        }

        let mut blocks = self.blocks.lock();
        for block in blocks.iter_mut() {
            let reclaim = block.as_ref().is_some_and(|shared| {
                Arc::strong_count(shared) == 1 && shared.read().iter().all(TrackedSlot::is_idle)
            });
            if reclaim {
                *block = None;
                released += 1;
            }
        }
        drop(blocks);

        if released > 0 {
            tracing::debug!(released, "released idle permission storage");
        }
        released
    }

    /// Approximate heap and inline footprint in bytes.
    #[must_use]
    pub fn used_memory(&self) -> usize {
        size_of::<Self>()
            + BULK_COUNT * size_of::<Option<Arc<Block>>>()
            + self.allocated_blocks() * size_of::<Block>()
            + self.overlay.read().len() * size_of::<(OverlayKey, TrackedSlot)>()
    }

    /// Whether any edit happened since the last flush.
    #[must_use]
    pub fn require_db_updates(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    /// Computes the statements needed to persist every pending edit and clears
    /// the pending state. Performs no I/O.
    pub fn flush_db_updates(&self) -> Vec<DirtyUpdate> {
        let mut overlay = self.overlay.write();
        let blocks = self.blocks.lock();
        if !self.dirty.swap(false, Ordering::AcqRel) {
            return Vec::new();
        }

        let mut updates = Vec::new();
        for (index, block) in blocks.iter().enumerate() {
            let Some(block) = block else {
                continue;
            };
            let mut slots = block.write();
            for (offset, slot) in slots.iter_mut().enumerate() {
                if let Some(update) = take_update(kind_at(index, offset), None, slot) {
                    updates.push(update);
                }
            }
        }
        drop(blocks);

        for ((kind, channel), slot) in overlay.iter_mut() {
            if let Some(update) = take_update(*kind, Some(*channel), slot) {
                updates.push(update);
            }
        }
        overlay.retain(|_, slot| slot.container.flags.permission_set());
        updates
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{AtomicBool, Ordering},
        thread,
    };

    use super::{PermissionStore, BULK_SIZE};
    use crate::{
        ChannelId, FlaggedValue, PermissionError, PermissionKind, PermissionRecord,
        PermissionUpdate, PermissionValues,
    };

    const KIND: PermissionKind = PermissionKind::I_CHANNEL_JOIN_POWER;

    #[test]
    fn hydration_round_trips_without_marking_dirty() {
        let store = PermissionStore::new();
        store.load_permission(KIND, PermissionRecord::value(5).with_grant(1));

        assert_eq!(store.permission_value_flagged(KIND), FlaggedValue::new(5));
        assert_eq!(store.permission_granted_flagged(KIND), FlaggedValue::new(1));
        assert_eq!(store.permission_values(KIND), PermissionValues::new(5, 1));
        let flags = store.permission_flags(KIND);
        assert!(flags.has_db_row() && flags.value_set() && flags.grant_set());
        assert!(!store.require_db_updates());
    }

    #[test]
    fn repeated_hydration_keeps_last_row() {
        let store = PermissionStore::new();
        store.load_permission(KIND, PermissionRecord::value(5));
        store.load_permission(KIND, PermissionRecord::value(8));
        assert_eq!(store.permission_value_flagged(KIND), FlaggedValue::new(8));
        assert_eq!(store.permissions().len(), 1);
    }

    #[test]
    fn unknown_kinds_are_rejected_or_ignored() {
        let store = PermissionStore::new();
        assert_eq!(
            store
                .set_permission(PermissionKind::UNKNOWN, PermissionUpdate::set_value(1))
                .unwrap_err(),
            PermissionError::UnknownPermission { id: 0 }
        );
        store.load_permission(PermissionKind::UNKNOWN, PermissionRecord::value(1));
        assert!(store.permissions().is_empty());
        assert_eq!(
            store.permission_value_flagged(PermissionKind::UNKNOWN),
            FlaggedValue::unset()
        );
    }

    #[test]
    fn set_returns_resulting_container_and_marks_dirty() {
        let store = PermissionStore::new();
        let container = store
            .set_permission(KIND, PermissionUpdate::set(75, 10).with_skip(true))
            .unwrap();
        assert_eq!(container.value(), FlaggedValue::new(75));
        assert_eq!(container.grant(), FlaggedValue::new(10));
        assert!(container.flags.skip());
        assert!(store.require_db_updates());
        assert_eq!(store.container(KIND), container);
    }

    #[test]
    fn overlay_upserts_per_kind_and_channel() {
        let store = PermissionStore::new();
        let channel = ChannelId(4);
        store
            .set_channel_permission(KIND, channel, PermissionUpdate::set_value(10))
            .unwrap();
        store
            .set_channel_permission(KIND, channel, PermissionUpdate::set_value(20))
            .unwrap();

        let entries = store.channel_permissions(channel);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, KIND);
        assert_eq!(entries[0].1.value(), FlaggedValue::new(20));
        assert!(store.channel_permissions(ChannelId(5)).is_empty());
        assert!(store.permission_flags(KIND).channel_specific());
    }

    #[test]
    fn overlay_delete_without_entry_does_not_insert() {
        let store = PermissionStore::new();
        let container = store
            .set_channel_permission(KIND, ChannelId(1), PermissionUpdate::delete_value())
            .unwrap();
        assert_eq!(container, crate::PermissionContainer::EMPTY);
        assert!(store.channel_permissions_all().is_empty());
        assert!(!store.require_db_updates());
    }

    #[test]
    fn channel_specific_clears_with_last_overlay_entry() {
        let store = PermissionStore::new();
        store
            .set_channel_permission(KIND, ChannelId(1), PermissionUpdate::set_value(1))
            .unwrap();
        store
            .set_channel_permission(KIND, ChannelId(2), PermissionUpdate::set_value(2))
            .unwrap();

        store
            .set_channel_permission(KIND, ChannelId(1), PermissionUpdate::delete_value())
            .unwrap();
        assert!(store.permission_flags(KIND).channel_specific());
        store
            .set_channel_permission(KIND, ChannelId(2), PermissionUpdate::delete_value())
            .unwrap();
        assert!(!store.permission_flags(KIND).channel_specific());
    }

    #[test]
    fn enumeration_only_lists_set_entries() {
        let store = PermissionStore::new();
        store
            .set_permission(KIND, PermissionUpdate::default().with_skip(true))
            .unwrap();
        store
            .set_permission(
                PermissionKind::B_CHANNEL_IGNORE_JOIN_POWER,
                PermissionUpdate::set_value(1),
            )
            .unwrap();
        let listed = store.permissions();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].0, PermissionKind::B_CHANNEL_IGNORE_JOIN_POWER);
    }

    #[test]
    fn cleanup_reclaims_emptied_blocks_and_allows_reallocation() {
        let store = PermissionStore::new();
        let baseline = store.used_memory();
        let first = KIND.id() & !(u16::try_from(BULK_SIZE).unwrap() - 1);
        let block_kinds: Vec<_> = (first..first + u16::try_from(BULK_SIZE).unwrap())
            .filter_map(|id| PermissionKind::from_id(id).ok())
            .collect();
        for kind in &block_kinds {
            store.set_permission(*kind, PermissionUpdate::set(1, 1)).unwrap();
        }
        store.flush_db_updates();
        let populated = store.used_memory();
        assert!(populated > baseline);

        for kind in &block_kinds {
            store
                .set_permission(*kind, PermissionUpdate::delete_all())
                .unwrap();
        }
        store.flush_db_updates();
        assert!(store.cleanup() >= 1);
        assert!(store.used_memory() < populated);
        assert_eq!(store.used_memory(), baseline);

        store.set_permission(KIND, PermissionUpdate::set_value(9)).unwrap();
        assert_eq!(store.permission_value_flagged(KIND), FlaggedValue::new(9));
    }

    #[test]
    fn cleanup_keeps_blocks_with_pending_deletes() {
        let store = PermissionStore::new();
        store.load_permission(KIND, PermissionRecord::value(3));
        store
            .set_permission(KIND, PermissionUpdate::delete_value())
            .unwrap();
        assert_eq!(store.cleanup(), 0);
        let updates = store.flush_db_updates();
        assert_eq!(updates.len(), 1);
        assert!(updates[0].is_delete);
    }

    #[test]
    fn concurrent_readers_never_observe_torn_containers() {
        let store = PermissionStore::new();
        store.set_permission(KIND, PermissionUpdate::set(0, 0)).unwrap();
        let done = AtomicBool::new(false);

        thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    while !done.load(Ordering::Acquire) {
                        let values = store.permission_values(KIND);
                        // Every write stores grant = -value.
                        assert_eq!(values.grant, -values.value);
                    }
                });
            }
            scope.spawn(|| {
                for round in 1..=20_000 {
                    store
                        .set_permission(KIND, PermissionUpdate::set(round, -round))
                        .unwrap();
                }
                done.store(true, Ordering::Release);
            });
        });
    }

    #[test]
    fn concurrent_overlay_writers_keep_one_entry_per_key() {
        let store = PermissionStore::new();
        let channel = ChannelId(11);
        thread::scope(|scope| {
            for writer in 0..4 {
                let store = &store;
                scope.spawn(move || {
                    for round in 0..500 {
                        store
                            .set_channel_permission(
                                KIND,
                                channel,
                                PermissionUpdate::set_value(writer * 1000 + round),
                            )
                            .unwrap();
                    }
                });
            }
        });
        assert_eq!(store.channel_permissions(channel).len(), 1);
    }
}
