mod args;
mod commands;
pub mod defaults;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};

use args::{CompareArgs, InitArgs, RunArgs};
use commands::{compare, init, run};

/// Transposon: a transposable element genome simulator
///
/// Grows a genome of empty slots by random TE insertions, copies and
/// disables, on either the dense or the linked genome backend.
#[derive(Parser, Debug)]
#[command(name = "transposon")]
#[command(author, version, about = "Simulates transposable element activity in a genome", long_about = None)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a random TE simulation on one backend.
    Run(RunArgs),

    /// Run the same seeded simulation on every backend and time them.
    ///
    /// Fails if the backends end with different genomes.
    Compare(CompareArgs),

    /// Write a default parameter file.
    Init(InitArgs),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run(args) => run::run_simulation(&args)?,
        Commands::Compare(args) => compare::compare_backends(&args)?,
        Commands::Init(args) => init::init_params(&args)?,
    }

    Ok(())
}
