//! Random TE simulation driver.
//!
//! Each step looks at the active TEs, weighs insert/copy/disable accordingly
//! and applies one operation through the `Genome` contract. The driver never
//! touches a backend directly, so the same seed replays the same sequence of
//! operations on any `GenomeKind`.

use crate::base::TeId;
use crate::errors::SimulationError;
use crate::genome::{Genome, GenomeKind};
use crate::simulation::{Operation, SimulationParams};
use log::{debug, trace};
use rand::distr::weighted::WeightedIndex;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Geometric};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Serialize;

/// Outcome of one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Event {
    Inserted {
        pos: usize,
        length: usize,
        te: TeId,
    },
    Copied {
        source: TeId,
        offset: isize,
        te: Option<TeId>,
    },
    Disabled {
        te: TeId,
    },
}

/// Counters accumulated over a run, plus a snapshot of the genome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub steps: usize,
    pub inserts: usize,
    pub copies: usize,
    pub failed_copies: usize,
    pub disables: usize,
    pub genome_len: usize,
    pub active_tes: usize,
}

impl RunSummary {
    fn record(&mut self, event: &Event) {
        self.steps += 1;
        match event {
            Event::Inserted { .. } => self.inserts += 1,
            Event::Copied { te: Some(_), .. } => self.copies += 1,
            Event::Copied { te: None, .. } => self.failed_copies += 1,
            Event::Disabled { .. } => self.disables += 1,
        }
    }

    /// Number of TEs created during the run.
    pub fn created_tes(&self) -> usize {
        self.inserts + self.copies
    }
}

/// Main simulation engine.
pub struct Simulation {
    genome: Box<dyn Genome>,
    params: SimulationParams,
    /// Random number generator (Xoshiro256++ for speed and reproducibility)
    rng: Xoshiro256PlusPlus,
    length_dist: Geometric,
    offset_dist: Geometric,
    summary: RunSummary,
}

impl Simulation {
    /// Create a simulation over an empty genome of `size` slots.
    ///
    /// With `seed` set, every run with the same parameters performs the same
    /// operations regardless of `kind`.
    pub fn new(
        kind: GenomeKind,
        size: usize,
        params: SimulationParams,
        seed: Option<u64>,
    ) -> Result<Self, SimulationError> {
        params.validate()?;
        let genome = kind.build(size)?;

        let rng = if let Some(seed) = seed {
            Xoshiro256PlusPlus::seed_from_u64(seed)
        } else {
            Xoshiro256PlusPlus::from_seed(rand::rng().random())
        };

        let length_dist = Geometric::new(1.0 / params.te_len)
            .map_err(|e| SimulationError::Sampling(format!("te_len: {e}")))?;
        let offset_dist = Geometric::new(1.0 / params.te_offset)
            .map_err(|e| SimulationError::Sampling(format!("te_offset: {e}")))?;

        debug!("simulation: {kind} genome of {size} slots, params {params:?}, seed {seed:?}");

        Ok(Self {
            genome,
            params,
            rng,
            length_dist,
            offset_dist,
            summary: RunSummary::default(),
        })
    }

    /// Perform one random operation.
    pub fn step(&mut self) -> Result<Event, SimulationError> {
        let active = self.genome.active_tes();
        let weights = self.params.weights.for_active(active.len());
        let chooser = WeightedIndex::new(weights)
            .map_err(|e| SimulationError::Sampling(format!("operation weights: {e}")))?;

        let event = match Operation::ALL[chooser.sample(&mut self.rng)] {
            Operation::Insert => {
                let pos = self.rng.random_range(0..self.genome.len());
                let length = self.sample_length();
                let te = self.genome.insert_te(pos, length)?;
                Event::Inserted { pos, length, te }
            }
            Operation::Copy => {
                let source = active[self.rng.random_range(0..active.len())];
                let offset = self.sample_offset();
                let te = self.genome.copy_te(source, offset);
                Event::Copied { source, offset, te }
            }
            Operation::Disable => {
                let te = active[self.rng.random_range(0..active.len())];
                self.genome.disable_te(te);
                Event::Disabled { te }
            }
        };

        self.summary.record(&event);
        trace!("step {}: {event:?}", self.summary.steps);
        Ok(event)
    }

    /// Perform `steps` operations and return the summary so far.
    pub fn run(&mut self, steps: usize) -> Result<RunSummary, SimulationError> {
        for _ in 0..steps {
            self.step()?;
        }
        Ok(self.summary())
    }

    /// Geometric length with support starting at 1 and mean `te_len`.
    fn sample_length(&mut self) -> usize {
        (self.length_dist.sample(&mut self.rng) + 1) as usize
    }

    /// Geometric magnitude with mean `te_offset` and a fair random sign.
    fn sample_offset(&mut self) -> isize {
        let magnitude = (self.offset_dist.sample(&mut self.rng) + 1) as isize;
        if self.rng.random::<f64>() < 0.5 {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Counters so far, with the current genome length and active count.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            genome_len: self.genome.len(),
            active_tes: self.genome.active_count(),
            ..self.summary.clone()
        }
    }

    #[inline]
    pub fn genome(&self) -> &dyn Genome {
        self.genome.as_ref()
    }

    #[inline]
    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    #[inline]
    pub fn kind(&self) -> GenomeKind {
        self.genome.kind()
    }

    /// Number of steps performed so far.
    #[inline]
    pub fn steps(&self) -> usize {
        self.summary.steps
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("kind", &self.genome.kind())
            .field("len", &self.genome.len())
            .field("params", &self.params)
            .field("summary", &self.summary)
            .finish()
    }
}
