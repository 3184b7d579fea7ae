//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use transposon_sim::prelude::*;
//!
//! let mut genome = GenomeKind::Linked.build(10).unwrap();
//! let te = genome.insert_te(0, 3).unwrap();
//! assert_eq!(te, TeId(0));
//! assert_eq!(genome.to_string(), "AAA----------");
//! ```

pub use crate::base::{Slot, SlotStatus, TeId};
pub use crate::errors::{GenomeError, ParamsError, SimulationError};
pub use crate::genome::{DenseGenome, Genome, GenomeKind, LinkedGenome};
pub use crate::simulation::{OperationWeights, Simulation, SimulationParams};
