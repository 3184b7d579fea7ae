//! Random TE simulation.
//!
//! This module provides the driver that repeatedly picks an operation
//! (insert, copy or disable) and applies it to a genome, and the parameters
//! that control it.
//!
//! - `Simulation`: the engine; owns one genome of the chosen `GenomeKind`.
//! - `SimulationParams`: mean TE length, mean copy offset and operation
//!   weights, loadable from JSON.

pub mod engine;
pub mod parameters;

pub use engine::{Event, RunSummary, Simulation};
pub use parameters::{Operation, OperationWeights, SimulationParams};
