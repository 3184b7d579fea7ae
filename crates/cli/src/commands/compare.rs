use anyhow::{Context, Result, bail};
use log::info;
use std::time::{Duration, Instant};
use transposon_sim::genome::GenomeKind;
use transposon_sim::simulation::{RunSummary, Simulation, SimulationParams};

use crate::args::CompareArgs;
use crate::defaults;
use crate::printing::{print_parameters, print_summary};

struct BackendRun {
    kind: GenomeKind,
    summary: RunSummary,
    genome: String,
    elapsed: Duration,
}

fn run_backend(
    kind: GenomeKind,
    size: usize,
    iterations: usize,
    params: &SimulationParams,
    seed: u64,
) -> Result<BackendRun> {
    let mut sim = Simulation::new(kind, size, params.clone(), Some(seed))
        .with_context(|| format!("Failed to initialize {kind} simulation"))?;

    let start = Instant::now();
    let summary = sim
        .run(iterations)
        .with_context(|| format!("{kind} simulation failed"))?;
    let elapsed = start.elapsed();
    info!("{kind}: {iterations} steps in {elapsed:?}");

    Ok(BackendRun {
        kind,
        summary,
        genome: sim.genome().to_string(),
        elapsed,
    })
}

/// Run every backend on the same seeded operation sequence and time them.
pub fn compare_backends(args: &CompareArgs) -> Result<()> {
    let params = args.sim.resolve_params()?;
    let seed = args.sim.seed.unwrap_or(defaults::COMPARE_SEED);

    println!("🧬 Transposon - Backend Comparison");
    println!("==================================");
    print_parameters(&args.sim, &params);
    if args.sim.seed.is_none() {
        println!("  • Using seed {seed} for both backends");
    }

    let mut runs = Vec::with_capacity(GenomeKind::ALL.len());
    for kind in GenomeKind::ALL {
        let run = run_backend(kind, args.sim.size, args.sim.iterations, &params, seed)?;
        print_summary(run.kind, &run.summary, run.elapsed);
        runs.push(run);
    }

    let (first, rest) = runs.split_first().context("No backends to compare")?;
    for other in rest {
        if other.genome != first.genome || other.summary != first.summary {
            bail!(
                "Final genomes differ between {} and {} backends",
                first.kind,
                other.kind
            );
        }
    }

    println!("\n✓ All backends produced identical genomes");
    Ok(())
}
