//! Circular genome representations.
//!
//! A genome is a ring of slots annotated with transposable elements (TEs).
//! The `Genome` trait is the contract every representation satisfies; two
//! backends implement it with different cost profiles:
//!
//! - `DenseGenome`: a contiguous buffer of slots, index = position.
//! - `LinkedGenome`: a circular chain of arena-allocated nodes with an
//!   id -> first-node table.
//!
//! Backends are selected once at construction via `GenomeKind`.

mod dense;
mod linked;

pub use dense::DenseGenome;
pub use linked::LinkedGenome;

use crate::base::{SlotStatus, TeId};
pub use crate::errors::GenomeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operations shared by every genome representation.
///
/// Positions are addressed modulo `len()`; position 0 follows `len() - 1`.
/// `Display` renders one character per slot from position 0: `-` for empty,
/// `A` for an active TE and `x` for a disabled TE.
pub trait Genome: fmt::Display {
    /// Insert a new TE of `length` slots so that it occupies `[pos, pos + length)`.
    ///
    /// If the slot currently at `pos` belongs to an active TE, that TE is
    /// disabled. Only the single slot at `pos` is checked. Content at and after
    /// `pos` shifts forward by `length`.
    ///
    /// # Errors
    /// `OutOfRange` if `pos >= len()`, `InvalidArgument` if `length == 0`.
    fn insert_te(&mut self, pos: usize, length: usize) -> Result<TeId, GenomeError>;

    /// Copy the active TE `te` to `offset` slots from its start, wrapping
    /// circularly in either direction.
    ///
    /// Returns `None`, leaving the genome untouched, if `te` is not active.
    fn copy_te(&mut self, te: TeId, offset: isize) -> Option<TeId>;

    /// Disable `te` if it is active. Unknown or disabled ids are ignored.
    fn disable_te(&mut self, te: TeId);

    /// Active TE ids in creation order.
    fn active_tes(&self) -> Vec<TeId>;

    /// Number of slots.
    fn len(&self) -> usize;

    /// Which representation backs this genome.
    fn kind(&self) -> GenomeKind;

    /// Resolved slot statuses in position order.
    fn statuses(&self) -> Vec<SlotStatus>;

    /// Always `false` for a constructed genome; kept for API symmetry.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn active_count(&self) -> usize {
        self.active_tes().len()
    }
}

/// Reduce `start + offset` onto a ring of `len` slots.
#[inline]
pub(crate) fn wrap_offset(start: usize, offset: isize, len: usize) -> usize {
    debug_assert!(len > 0);
    (start as i128 + offset as i128).rem_euclid(len as i128) as usize
}

/// Validate an initial genome size.
pub(crate) fn check_size(n: usize) -> Result<(), GenomeError> {
    if n == 0 {
        return Err(GenomeError::InvalidArgument(
            "genome size must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Validate the arguments of `insert_te`.
pub(crate) fn check_insert(pos: usize, length: usize, len: usize) -> Result<(), GenomeError> {
    if pos >= len {
        return Err(GenomeError::OutOfRange { pos, len });
    }
    if length == 0 {
        return Err(GenomeError::InvalidArgument(
            "TE length must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Genome backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenomeKind {
    /// Contiguous slot buffer.
    #[default]
    Dense,
    /// Circular chain of nodes.
    Linked,
}

impl GenomeKind {
    /// Every backend, in a fixed order.
    pub const ALL: [GenomeKind; 2] = [GenomeKind::Dense, GenomeKind::Linked];

    /// Construct an empty genome of `n` slots with this backend.
    pub fn build(&self, n: usize) -> Result<Box<dyn Genome>, GenomeError> {
        Ok(match self {
            GenomeKind::Dense => Box::new(DenseGenome::new(n)?),
            GenomeKind::Linked => Box::new(LinkedGenome::new(n)?),
        })
    }
}

impl fmt::Display for GenomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dense => write!(f, "dense"),
            Self::Linked => write!(f, "linked"),
        }
    }
}

impl std::str::FromStr for GenomeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dense" | "list" | "vec" => Ok(Self::Dense),
            "linked" | "linked-list" => Ok(Self::Linked),
            _ => Err(format!(
                "Unknown genome backend: {s}. Available: dense, linked"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_offset() {
        assert_eq!(wrap_offset(4, 6, 8), 2);
        assert_eq!(wrap_offset(10, -15, 50), 45);
        assert_eq!(wrap_offset(0, -1, 5), 4);
        assert_eq!(wrap_offset(3, 0, 5), 3);
        assert_eq!(wrap_offset(1, -11, 5), 0);
        assert_eq!(wrap_offset(2, isize::MAX, 7), ((2 + (isize::MAX as i128)) % 7) as usize);
    }

    #[test]
    fn test_check_insert() {
        assert!(check_insert(0, 1, 1).is_ok());
        assert_eq!(
            check_insert(5, 1, 5),
            Err(GenomeError::OutOfRange { pos: 5, len: 5 })
        );
        assert!(matches!(
            check_insert(0, 0, 5),
            Err(GenomeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("dense".parse::<GenomeKind>(), Ok(GenomeKind::Dense));
        assert_eq!("Linked".parse::<GenomeKind>(), Ok(GenomeKind::Linked));
        assert_eq!("linked-list".parse::<GenomeKind>(), Ok(GenomeKind::Linked));
        assert_eq!("list".parse::<GenomeKind>(), Ok(GenomeKind::Dense));
        assert!("rope".parse::<GenomeKind>().is_err());
        assert_eq!(GenomeKind::default(), GenomeKind::Dense);
        assert_eq!(GenomeKind::Linked.to_string(), "linked");
    }

    #[test]
    fn test_kind_build() {
        for kind in GenomeKind::ALL {
            let genome = kind.build(4).unwrap();
            assert_eq!(genome.kind(), kind);
            assert_eq!(genome.len(), 4);
            assert_eq!(genome.to_string(), "----");
            assert!(!genome.is_empty());
        }
        assert!(GenomeKind::Linked.build(0).is_err());
    }

    #[test]
    fn test_kind_serde() {
        let json = serde_json::to_string(&GenomeKind::Linked).unwrap();
        assert_eq!(json, "\"linked\"");
        let kind: GenomeKind = serde_json::from_str("\"dense\"").unwrap();
        assert_eq!(kind, GenomeKind::Dense);
    }
}
