//! # Simulation Crate
//!
//! The `sim` crate models a circular genome annotated with transposable
//! elements (TEs). It includes the `Genome` contract with its dense and linked
//! backends, the TE id/registry types they share, and a random driver that
//! inserts, copies and disables TEs.

pub mod base;
pub mod errors;
pub mod genome;
pub mod prelude;
pub mod simulation;

pub use base::{Slot, SlotStatus, TeId};
pub use genome::{DenseGenome, Genome, GenomeKind, LinkedGenome};
