use super::slot::{Slot, SlotStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Identifier of a transposable element.
///
/// Ids are handed out by a `TeIdAllocator` in creation order, starting at 0,
/// and are never reused within one genome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeId(pub u64);

impl TeId {
    /// Return the raw id value.
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Monotonically increasing TE id counter.
///
/// One allocator lives inside each genome; it is never reset.
#[derive(Debug, Default, Clone)]
pub struct TeIdAllocator {
    next: u64,
}

impl TeIdAllocator {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Hand out the next id.
    #[inline]
    pub fn next_id(&mut self) -> TeId {
        let id = TeId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to `next_id` will return.
    #[inline]
    pub fn peek(&self) -> TeId {
        TeId(self.next)
    }

    /// Number of ids handed out so far.
    #[inline]
    pub fn allocated(&self) -> u64 {
        self.next
    }
}

/// Lifecycle state of a TE. `Disabled` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeState {
    Active,
    Disabled,
}

#[derive(Debug, Clone, Copy)]
struct TeRecord {
    length: usize,
    state: TeState,
}

/// Per-genome TE bookkeeping shared by both genome backends.
///
/// Slots only carry a `TeId`; whether that TE is active is looked up here, so
/// disabling a TE is a table update rather than a rewrite of its slots.
#[derive(Debug, Default, Clone)]
pub struct TeRegistry {
    ids: TeIdAllocator,
    /// Indexed by `TeId`, since ids are dense from 0.
    records: Vec<TeRecord>,
    /// Active ids in creation order.
    active: BTreeSet<TeId>,
}

impl TeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new id for an active TE spanning `length` slots.
    pub fn register(&mut self, length: usize) -> TeId {
        let id = self.ids.next_id();
        debug_assert_eq!(id.index(), self.records.len());
        self.records.push(TeRecord {
            length,
            state: TeState::Active,
        });
        self.active.insert(id);
        id
    }

    /// Mark `id` disabled.
    ///
    /// Returns `true` if the TE was active before the call. Unknown and
    /// already-disabled ids are left alone.
    pub fn disable(&mut self, id: TeId) -> bool {
        match self.records.get_mut(id.index()) {
            Some(record) if record.state == TeState::Active => {
                record.state = TeState::Disabled;
                self.active.remove(&id);
                true
            }
            _ => false,
        }
    }

    /// Return `true` if `id` names a currently active TE.
    #[inline]
    pub fn is_active(&self, id: TeId) -> bool {
        self.state(id) == Some(TeState::Active)
    }

    /// Return the state of `id`, or `None` if it was never allocated.
    #[inline]
    pub fn state(&self, id: TeId) -> Option<TeState> {
        self.records.get(id.index()).map(|r| r.state)
    }

    /// Return the number of slots `id` was created with.
    #[inline]
    pub fn length(&self, id: TeId) -> Option<usize> {
        self.records.get(id.index()).map(|r| r.length)
    }

    /// Active ids in ascending (creation) order.
    pub fn active_ids(&self) -> Vec<TeId> {
        self.active.iter().copied().collect()
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Number of TEs ever created, active or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolve the rendered status of a slot.
    #[inline]
    pub fn status_of(&self, slot: Slot) -> SlotStatus {
        match slot {
            Slot::Empty => SlotStatus::Empty,
            Slot::Te(id) if self.is_active(id) => SlotStatus::Active(id),
            Slot::Te(id) => SlotStatus::Disabled(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocator_is_monotone() {
        let mut ids = TeIdAllocator::new();
        assert_eq!(ids.peek(), TeId(0));
        assert_eq!(ids.next_id(), TeId(0));
        assert_eq!(ids.next_id(), TeId(1));
        assert_eq!(ids.next_id(), TeId(2));
        assert_eq!(ids.allocated(), 3);
        assert_eq!(ids.peek(), TeId(3));
    }

    #[test]
    fn test_register_and_disable() {
        let mut reg = TeRegistry::new();
        let a = reg.register(3);
        let b = reg.register(5);

        assert_eq!(reg.active_ids(), vec![a, b]);
        assert_eq!(reg.length(b), Some(5));

        assert!(reg.disable(a));
        assert!(!reg.disable(a));
        assert!(!reg.disable(TeId(99)));

        assert_eq!(reg.state(a), Some(TeState::Disabled));
        assert_eq!(reg.state(TeId(99)), None);
        assert_eq!(reg.active_ids(), vec![b]);
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.active_count(), 1);
    }

    #[test]
    fn test_status_of_slot() {
        let mut reg = TeRegistry::new();
        let a = reg.register(1);
        let b = reg.register(1);
        reg.disable(b);

        assert_eq!(reg.status_of(Slot::Empty), SlotStatus::Empty);
        assert_eq!(reg.status_of(Slot::Te(a)), SlotStatus::Active(a));
        assert_eq!(reg.status_of(Slot::Te(b)), SlotStatus::Disabled(b));
    }
}
