use super::te::TeId;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Rendering of an empty slot.
pub const EMPTY_CHAR: char = '-';
/// Rendering of a slot owned by an active TE.
pub const ACTIVE_CHAR: char = 'A';
/// Rendering of a slot owned by a disabled TE.
pub const DISABLED_CHAR: char = 'x';

/// Content of one genome position.
///
/// A slot stores at most one TE id. Whether that TE is still active lives in
/// the genome's `TeRegistry`, not in the slot itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Slot {
    #[default]
    Empty,
    Te(TeId),
}

impl Slot {
    /// Return the TE id carried by this slot, if any.
    #[inline(always)]
    pub const fn te(self) -> Option<TeId> {
        match self {
            Self::Empty => None,
            Self::Te(id) => Some(id),
        }
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Resolved status of a slot: its TE id together with that TE's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotStatus {
    Empty,
    Active(TeId),
    Disabled(TeId),
}

impl SlotStatus {
    /// Convert to the character used by genome renderings.
    #[inline(always)]
    pub const fn to_char(self) -> char {
        match self {
            Self::Empty => EMPTY_CHAR,
            Self::Active(_) => ACTIVE_CHAR,
            Self::Disabled(_) => DISABLED_CHAR,
        }
    }

    /// Return the TE id this status refers to, if any.
    #[inline(always)]
    pub const fn te(self) -> Option<TeId> {
        match self {
            Self::Empty => None,
            Self::Active(id) | Self::Disabled(id) => Some(id),
        }
    }

    #[inline(always)]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active(_))
    }
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_chars() {
        assert_eq!(SlotStatus::Empty.to_char(), '-');
        assert_eq!(SlotStatus::Active(TeId(0)).to_char(), 'A');
        assert_eq!(SlotStatus::Disabled(TeId(0)).to_char(), 'x');
        assert_eq!(SlotStatus::Disabled(TeId(3)).to_string(), "x");
    }

    #[test]
    fn test_slot_te() {
        assert_eq!(Slot::default(), Slot::Empty);
        assert!(Slot::Empty.is_empty());
        assert_eq!(Slot::Empty.te(), None);
        assert_eq!(Slot::Te(TeId(7)).te(), Some(TeId(7)));
        assert_eq!(SlotStatus::Active(TeId(2)).te(), Some(TeId(2)));
        assert!(SlotStatus::Active(TeId(2)).is_active());
        assert!(!SlotStatus::Disabled(TeId(2)).is_active());
    }
}
