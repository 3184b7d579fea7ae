use super::slot::Slot;

/// Stable handle to a node in a `NodeArena`.
///
/// Handles stay valid for the lifetime of the arena: nodes are never removed
/// or moved, so growth of the backing buffer does not invalidate them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Handle for the node stored at `index`.
    ///
    /// # Panics
    /// Panics if `index` does not fit in a `u32`.
    #[inline]
    fn from_index(index: usize) -> Self {
        let raw = u32::try_from(index).expect("node arena exceeds u32::MAX nodes");
        Self(raw)
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One genome position in the linked representation.
///
/// `next` is `None` only on the tail node and `prev` is `None` only on the
/// head node. The wrap-around from tail to head is kept by the owner of the
/// chain, so following `next` links alone never cycles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub slot: Slot,
    pub next: Option<NodeId>,
    pub prev: Option<NodeId>,
}

impl Node {
    pub fn new(slot: Slot) -> Self {
        Self {
            slot,
            next: None,
            prev: None,
        }
    }
}

/// Index-addressed node pool backing the linked genome.
///
/// All nodes live in one contiguous buffer. Links between nodes are `NodeId`
/// indices rather than references, which keeps ownership acyclic while the
/// chain itself is logically circular.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Store `node` and return its handle.
    ///
    /// # Panics
    /// Panics if the arena already holds `u32::MAX + 1` nodes.
    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Access a node.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this arena.
    #[inline]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Mutably access a node.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this arena.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Number of nodes ever allocated.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Reserve room for `additional` more nodes.
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }
}
