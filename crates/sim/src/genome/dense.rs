use super::{Genome, GenomeError, GenomeKind, check_insert, check_size, wrap_offset};
use crate::base::{Slot, SlotStatus, TeId, TeRegistry};
use log::debug;
use std::collections::HashMap;
use std::fmt;
use std::ops::Range;

/// Genome backed by one contiguous buffer of slots, index = position.
///
/// Locating a position is O(1); splicing shifts every later slot, so inserts
/// and copies cost O(n) in the worst case. The start of every active TE is
/// kept in a side table and shifted on each splice, which makes finding a
/// TE's run for `copy_te` O(1).
///
/// # Examples
///
/// ```rust
/// # use transposon_sim::genome::{DenseGenome, Genome};
/// let mut genome = DenseGenome::new(6).unwrap();
/// let te = genome.insert_te(4, 2).unwrap();
/// assert_eq!(genome.to_string(), "----AA--");
/// genome.copy_te(te, 6);
/// assert_eq!(genome.to_string(), "--AA--AA--");
/// ```
#[derive(Debug, Clone)]
pub struct DenseGenome {
    slots: Vec<Slot>,
    tes: TeRegistry,
    /// Start position of every active TE.
    starts: HashMap<TeId, usize>,
}

impl DenseGenome {
    /// Create an all-empty genome of `n` slots.
    ///
    /// # Errors
    /// `InvalidArgument` if `n == 0`.
    pub fn new(n: usize) -> Result<Self, GenomeError> {
        check_size(n)?;
        Ok(Self {
            slots: vec![Slot::Empty; n],
            tes: TeRegistry::new(),
            starts: HashMap::new(),
        })
    }

    /// Borrow the raw slot buffer.
    #[inline]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Borrow the TE registry.
    #[inline]
    pub fn registry(&self) -> &TeRegistry {
        &self.tes
    }

    /// Return the slot range of an active TE.
    pub fn te_range(&self, te: TeId) -> Option<Range<usize>> {
        let start = *self.starts.get(&te)?;
        let length = self.tes.length(te)?;
        Some(start..start + length)
    }

    /// Splice a new active run of `length` slots in front of `pos`.
    ///
    /// Callers validate `pos` and `length`.
    fn splice(&mut self, pos: usize, length: usize) -> TeId {
        if let Slot::Te(hit) = self.slots[pos] {
            if self.tes.disable(hit) {
                self.starts.remove(&hit);
                debug!("dense: insertion at {pos} disabled TE {hit}");
            }
        }

        for start in self.starts.values_mut() {
            if *start >= pos {
                *start += length;
            }
        }

        let id = self.tes.register(length);
        self.slots
            .splice(pos..pos, std::iter::repeat(Slot::Te(id)).take(length));
        self.starts.insert(id, pos);
        id
    }
}

impl Genome for DenseGenome {
    fn insert_te(&mut self, pos: usize, length: usize) -> Result<TeId, GenomeError> {
        check_insert(pos, length, self.slots.len())?;
        Ok(self.splice(pos, length))
    }

    fn copy_te(&mut self, te: TeId, offset: isize) -> Option<TeId> {
        let range = self.te_range(te)?;
        debug_assert!(self.slots[range.clone()].iter().all(|s| *s == Slot::Te(te)));

        let target = wrap_offset(range.start, offset, self.slots.len());
        Some(self.splice(target, range.len()))
    }

    fn disable_te(&mut self, te: TeId) {
        if self.tes.disable(te) {
            self.starts.remove(&te);
            debug!("dense: disabled TE {te}");
        }
    }

    fn active_tes(&self) -> Vec<TeId> {
        self.tes.active_ids()
    }

    #[inline]
    fn len(&self) -> usize {
        self.slots.len()
    }

    fn kind(&self) -> GenomeKind {
        GenomeKind::Dense
    }

    fn statuses(&self) -> Vec<SlotStatus> {
        self.slots.iter().map(|&s| self.tes.status_of(s)).collect()
    }

    fn active_count(&self) -> usize {
        self.tes.active_count()
    }
}

impl fmt::Display for DenseGenome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: String = self
            .slots
            .iter()
            .map(|&s| self.tes.status_of(s).to_char())
            .collect();
        f.write_str(&rendered)
    }
}
