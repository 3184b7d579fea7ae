use super::{Genome, GenomeError, GenomeKind, check_insert, check_size, wrap_offset};
use crate::base::{Node, NodeArena, NodeId, Slot, SlotStatus, TeId, TeRegistry};
use log::debug;
use std::collections::HashMap;
use std::fmt;

/// Genome backed by a circular chain of nodes, one per position.
///
/// Nodes live in a `NodeArena` and link to each other by `NodeId`. The tail
/// has no `next` link and the head has no `prev` link; the wrap-around between
/// them is resolved through the `head`/`tail` fields, so traversal is circular
/// while the link graph stays acyclic.
///
/// Splicing is O(length) once the target node is known. Reaching a position
/// walks from the nearest end (O(min(pos, n - pos))); `copy_te` starts its walk
/// from the source TE's first node, found in O(1) through `first_nodes`.
///
/// # Examples
///
/// ```rust
/// # use transposon_sim::genome::{Genome, LinkedGenome};
/// let mut genome = LinkedGenome::new(6).unwrap();
/// let te = genome.insert_te(4, 2).unwrap();
/// assert_eq!(genome.to_string(), "----AA--");
/// genome.copy_te(te, 6);
/// assert_eq!(genome.to_string(), "--AA--AA--");
/// ```
#[derive(Debug)]
pub struct LinkedGenome {
    nodes: NodeArena,
    head: NodeId,
    tail: NodeId,
    len: usize,
    tes: TeRegistry,
    /// First node of every active TE.
    first_nodes: HashMap<TeId, NodeId>,
}

impl LinkedGenome {
    /// Create an all-empty genome of `n` slots.
    ///
    /// # Errors
    /// `InvalidArgument` if `n == 0`.
    pub fn new(n: usize) -> Result<Self, GenomeError> {
        check_size(n)?;

        let mut nodes = NodeArena::with_capacity(n);
        let head = nodes.alloc(Node::new(Slot::Empty));
        let mut tail = head;
        for _ in 1..n {
            let id = nodes.alloc(Node {
                slot: Slot::Empty,
                next: None,
                prev: Some(tail),
            });
            nodes.get_mut(tail).next = Some(id);
            tail = id;
        }

        Ok(Self {
            nodes,
            head,
            tail,
            len: n,
            tes: TeRegistry::new(),
            first_nodes: HashMap::new(),
        })
    }

    /// Borrow the TE registry.
    #[inline]
    pub fn registry(&self) -> &TeRegistry {
        &self.tes
    }

    /// Return the position of the first slot of an active TE.
    ///
    /// This walks the chain from the head and costs O(n).
    pub fn te_start(&self, te: TeId) -> Option<usize> {
        let first = *self.first_nodes.get(&te)?;
        self.node_ids().position(|id| id == first)
    }

    /// Iterate over slots in position order, starting at the head.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.node_ids().map(move |id| self.nodes.get(id).slot)
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(self.head), move |&id| self.nodes.get(id).next)
    }

    #[inline]
    fn succ(&self, id: NodeId) -> NodeId {
        self.nodes.get(id).next.unwrap_or(self.head)
    }

    #[inline]
    fn pred(&self, id: NodeId) -> NodeId {
        self.nodes.get(id).prev.unwrap_or(self.tail)
    }

    /// Move `steps` positions forward from `from`, taking the shorter way
    /// round the ring. `steps` must be below `len`.
    fn walk(&self, from: NodeId, steps: usize) -> NodeId {
        debug_assert!(steps < self.len);
        let mut at = from;
        let back = self.len - steps;
        if steps <= back {
            for _ in 0..steps {
                at = self.succ(at);
            }
        } else {
            for _ in 0..back {
                at = self.pred(at);
            }
        }
        at
    }

    /// Return `true` if `te` still owns `length` consecutive nodes from `first`.
    fn run_is_intact(&self, te: TeId, first: NodeId, length: usize) -> bool {
        let mut at = first;
        for i in 0..length {
            if self.nodes.get(at).slot != Slot::Te(te) {
                return false;
            }
            if i + 1 < length {
                at = self.succ(at);
            }
        }
        true
    }

    /// Splice a new active run of `length` nodes in front of `target`.
    ///
    /// If `target` is the head, the new run becomes positions `[0, length)`.
    fn splice_before(&mut self, target: NodeId, length: usize) -> TeId {
        debug_assert!(length > 0);

        if let Slot::Te(hit) = self.nodes.get(target).slot {
            if self.tes.disable(hit) {
                self.first_nodes.remove(&hit);
                debug!("linked: insertion before node {} disabled TE {hit}", target.index());
            }
        }

        let id = self.tes.register(length);
        let slot = Slot::Te(id);

        self.nodes.reserve(length);
        let first = self.nodes.alloc(Node::new(slot));
        let mut last = first;
        for _ in 1..length {
            let node = self.nodes.alloc(Node {
                slot,
                next: None,
                prev: Some(last),
            });
            self.nodes.get_mut(last).next = Some(node);
            last = node;
        }

        let before = self.nodes.get(target).prev;
        self.nodes.get_mut(first).prev = before;
        self.nodes.get_mut(last).next = Some(target);
        self.nodes.get_mut(target).prev = Some(last);
        match before {
            Some(prev) => self.nodes.get_mut(prev).next = Some(first),
            None => self.head = first,
        }

        self.len += length;
        self.first_nodes.insert(id, first);
        id
    }
}

impl Genome for LinkedGenome {
    fn insert_te(&mut self, pos: usize, length: usize) -> Result<TeId, GenomeError> {
        check_insert(pos, length, self.len)?;
        let target = self.walk(self.head, pos);
        Ok(self.splice_before(target, length))
    }

    fn copy_te(&mut self, te: TeId, offset: isize) -> Option<TeId> {
        let first = *self.first_nodes.get(&te)?;
        let length = self.tes.length(te)?;
        debug_assert!(self.run_is_intact(te, first, length));

        let steps = wrap_offset(0, offset, self.len);
        let target = self.walk(first, steps);
        Some(self.splice_before(target, length))
    }

    fn disable_te(&mut self, te: TeId) {
        if self.tes.disable(te) {
            self.first_nodes.remove(&te);
            debug!("linked: disabled TE {te}");
        }
    }

    fn active_tes(&self) -> Vec<TeId> {
        self.tes.active_ids()
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn kind(&self) -> GenomeKind {
        GenomeKind::Linked
    }

    fn statuses(&self) -> Vec<SlotStatus> {
        self.slots().map(|s| self.tes.status_of(s)).collect()
    }

    fn active_count(&self) -> usize {
        self.tes.active_count()
    }
}

impl fmt::Display for LinkedGenome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered = String::with_capacity(self.len);
        rendered.extend(self.slots().map(|s| self.tes.status_of(s).to_char()));
        f.write_str(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::TeState;

    /// Check that prev/next links agree and the chain has `len` nodes.
    fn assert_chain_consistent(genome: &LinkedGenome) {
        let ids: Vec<NodeId> = genome.node_ids().collect();
        assert_eq!(ids.len(), genome.len());
        assert_eq!(ids.first(), Some(&genome.head));
        assert_eq!(ids.last(), Some(&genome.tail));
        assert_eq!(genome.nodes.get(genome.head).prev, None);
        for pair in ids.windows(2) {
            assert_eq!(genome.nodes.get(pair[1]).prev, Some(pair[0]));
        }
        assert_eq!(genome.succ(genome.tail), genome.head);
        assert_eq!(genome.pred(genome.head), genome.tail);
    }

    #[test]
    fn test_new_builds_ring() {
        let genome = LinkedGenome::new(5).unwrap();
        assert_eq!(genome.to_string(), "-----");
        assert_chain_consistent(&genome);

        let single = LinkedGenome::new(1).unwrap();
        assert_eq!(single.succ(single.head), single.head);
        assert_chain_consistent(&single);
    }

    #[test]
    fn test_new_zero_size() {
        assert!(LinkedGenome::new(0).is_err());
    }

    #[test]
    fn test_walk_both_directions() {
        let genome = LinkedGenome::new(10).unwrap();
        let ids: Vec<NodeId> = genome.node_ids().collect();
        assert_eq!(genome.walk(genome.head, 0), ids[0]);
        assert_eq!(genome.walk(genome.head, 3), ids[3]);
        assert_eq!(genome.walk(genome.head, 9), ids[9]);
        assert_eq!(genome.walk(ids[8], 4), ids[2]);
    }

    #[test]
    fn test_insert_at_head_moves_head() {
        let mut genome = LinkedGenome::new(10).unwrap();
        assert_eq!(genome.insert_te(0, 3).unwrap(), TeId(0));
        assert_eq!(genome.to_string(), "AAA----------");
        assert_eq!(genome.te_start(TeId(0)), Some(0));
        assert_chain_consistent(&genome);
    }

    #[test]
    fn test_insert_at_tail() {
        let mut genome = LinkedGenome::new(4).unwrap();
        genome.insert_te(3, 2).unwrap();
        assert_eq!(genome.to_string(), "---AA-");
        assert_eq!(genome.te_start(TeId(0)), Some(3));
        assert_chain_consistent(&genome);
    }

    #[test]
    fn test_collision_disables_hit_te() {
        let mut genome = LinkedGenome::new(10).unwrap();
        genome.insert_te(0, 3).unwrap();
        genome.insert_te(0, 2).unwrap();
        assert_eq!(genome.to_string(), "AAxxx----------");
        assert_eq!(genome.active_tes(), vec![TeId(1)]);
        assert_eq!(genome.te_start(TeId(0)), None);

        let registry = genome.registry();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.state(TeId(0)), Some(TeState::Disabled));
        assert_eq!(registry.length(TeId(0)), Some(3));
        assert!(registry.is_active(TeId(1)));
        assert_chain_consistent(&genome);
    }

    #[test]
    fn test_insert_out_of_range() {
        let mut genome = LinkedGenome::new(3).unwrap();
        assert_eq!(
            genome.insert_te(3, 1),
            Err(GenomeError::OutOfRange { pos: 3, len: 3 })
        );
        assert!(matches!(
            genome.insert_te(1, 0),
            Err(GenomeError::InvalidArgument(_))
        ));
        assert_eq!(genome.to_string(), "---");
    }

    #[test]
    fn test_copy_walks_from_source() {
        let mut genome = LinkedGenome::new(6).unwrap();
        genome.insert_te(4, 2).unwrap();
        assert_eq!(genome.copy_te(TeId(0), 6), Some(TeId(1)));
        assert_eq!(genome.to_string(), "--AA--AA--");
        assert_eq!(genome.te_start(TeId(1)), Some(2));
        assert_eq!(genome.te_start(TeId(0)), Some(6));
        assert_chain_consistent(&genome);
    }

    #[test]
    fn test_copy_negative_wraps_to_head() {
        let mut genome = LinkedGenome::new(5).unwrap();
        genome.insert_te(2, 1).unwrap(); // --A---
        // (2 - 8) mod 6 = 0: the copy lands at the head.
        assert_eq!(genome.copy_te(TeId(0), -8), Some(TeId(1)));
        assert_eq!(genome.to_string(), "A--A---");
        assert_eq!(genome.te_start(TeId(1)), Some(0));
        assert_chain_consistent(&genome);
    }

    #[test]
    fn test_copy_inactive_is_none() {
        let mut genome = LinkedGenome::new(3).unwrap();
        genome.insert_te(1, 1).unwrap();
        genome.disable_te(TeId(0));
        genome.disable_te(TeId(0));
        assert_eq!(genome.copy_te(TeId(0), 1), None);
        assert_eq!(genome.copy_te(TeId(5), 1), None);
        assert_eq!(genome.to_string(), "-x--");
        assert_eq!(genome.len(), 4);
    }

    #[test]
    fn test_run_is_intact() {
        let mut genome = LinkedGenome::new(3).unwrap();
        genome.insert_te(1, 3).unwrap();
        let first = genome.first_nodes[&TeId(0)];
        assert!(genome.run_is_intact(TeId(0), first, 3));
        assert!(!genome.run_is_intact(TeId(0), first, 4));
    }
}
