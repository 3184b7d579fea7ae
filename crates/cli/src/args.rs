use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use transposon_sim::genome::GenomeKind;
use transposon_sim::simulation::{OperationWeights, SimulationParams};

use crate::defaults;

/// Genome and driver settings shared by `run` and `compare`.
#[derive(Args, Debug, Clone)]
pub struct SimulationArgs {
    /// Initial genome size, in empty slots
    #[arg(short = 'n', long, default_value_t = defaults::GENOME_SIZE)]
    pub size: usize,

    /// Number of random operations to perform
    #[arg(short = 'k', long, default_value_t = defaults::ITERATIONS)]
    pub iterations: usize,

    /// Random seed (default: random)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Parameter file (JSON) written by `transposon init`
    ///
    /// Values given with --te-len, --te-offset or --weights override the file.
    #[arg(short, long)]
    pub params: Option<PathBuf>,

    /// Mean length of inserted TEs
    #[arg(long)]
    pub te_len: Option<f64>,

    /// Mean absolute copy offset
    #[arg(long)]
    pub te_offset: Option<f64>,

    /// Operation weights as "insert,copy,disable", e.g. "0.1,2,1"
    #[arg(short, long)]
    pub weights: Option<OperationWeights>,
}

impl SimulationArgs {
    /// Parameters from the file (or defaults) with flag overrides applied.
    pub fn resolve_params(&self) -> Result<SimulationParams> {
        let mut params = match &self.params {
            Some(path) => SimulationParams::from_json_file(path)
                .with_context(|| format!("Failed to load parameters from {}", path.display()))?,
            None => SimulationParams::default(),
        };

        if let Some(te_len) = self.te_len {
            params.te_len = te_len;
        }
        if let Some(te_offset) = self.te_offset {
            params.te_offset = te_offset;
        }
        if let Some(weights) = &self.weights {
            params.weights = weights.clone();
        }

        params.validate().context("Invalid simulation parameters")?;
        Ok(params)
    }
}

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub sim: SimulationArgs,

    /// Genome backend (dense, linked)
    #[arg(short, long, default_value = defaults::BACKEND)]
    pub backend: GenomeKind,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,

    /// Print the final genome string
    #[arg(long)]
    pub show_genome: bool,

    /// Print the run summary as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    #[command(flatten)]
    pub sim: SimulationArgs,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output parameter file
    #[arg(short, long, default_value = defaults::PARAMS_FILE)]
    pub output: PathBuf,

    /// Overwrite the output file if it exists
    #[arg(long)]
    pub force: bool,
}
