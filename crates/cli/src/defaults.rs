//! Shared default values for the command line.
//! Used by the clap definitions in `args.rs` and by the `init` command.

pub const GENOME_SIZE: usize = 1_000_000;
pub const ITERATIONS: usize = 1000;
pub const BACKEND: &str = "dense";

/// Seed used by `compare` when none is given, so both backends see the same run.
pub const COMPARE_SEED: u64 = 42;

pub const PARAMS_FILE: &str = "params.json";
