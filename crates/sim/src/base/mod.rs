//! Base types shared by every genome representation.
//!
//! This module provides slot records, TE identities and their registry, and
//! the node arena used by the linked representation.

mod arena;
mod slot;
mod te;

pub use arena::{Node, NodeArena, NodeId};
pub use slot::{ACTIVE_CHAR, DISABLED_CHAR, EMPTY_CHAR, Slot, SlotStatus};
pub use te::{TeId, TeIdAllocator, TeRegistry, TeState};
