use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::time::Instant;
use transposon_sim::simulation::Simulation;

use crate::args::RunArgs;
use crate::printing::{print_parameters, print_summary};

pub fn run_simulation(args: &RunArgs) -> Result<()> {
    let params = args.sim.resolve_params()?;

    let mut sim = Simulation::new(args.backend, args.sim.size, params, args.sim.seed)
        .context("Failed to initialize simulation")?;

    if !args.json {
        println!("🧬 Transposon - TE Genome Simulator");
        println!("==================================");
        println!("Backend: {}", sim.kind());
        print_parameters(&args.sim, sim.params());
    }
    info!("Running {} steps on the {} backend", args.sim.iterations, args.backend);

    let pb = if args.progress {
        let pb = ProgressBar::new(args.sim.iterations as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {per_sec}",
                )
                .context("Invalid progress bar template")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();
    for i in 1..=args.sim.iterations {
        sim.step().with_context(|| format!("Step {i} failed"))?;
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }
    let elapsed = start.elapsed();

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    let summary = sim.summary();
    if args.json {
        let text = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        println!("{text}");
    } else {
        print_summary(args.backend, &summary, elapsed);
        println!("\n✓ Simulation complete!");
    }

    if args.show_genome {
        println!("{}", sim.genome());
    }

    Ok(())
}
