use std::time::Duration;
use transposon_sim::genome::GenomeKind;
use transposon_sim::simulation::{RunSummary, SimulationParams};

use crate::args::SimulationArgs;

pub fn print_parameters(args: &SimulationArgs, params: &SimulationParams) {
    println!("\n📋 Simulation Configuration");
    println!("  • Genome Size: {} slots [-n, --size]", args.size);
    println!("  • Iterations: {} [-k, --iterations]", args.iterations);
    if let Some(seed) = args.seed {
        println!("  • Random Seed: {seed} [--seed]");
    } else {
        println!("  • Random Seed: Random [--seed]");
    }

    println!("\n🧬 Transposable Elements");
    println!("  • Mean TE Length: {} [--te-len]", params.te_len);
    println!("  • Mean Copy Offset: {} [--te-offset]", params.te_offset);
    let weights = &params.weights;
    println!(
        "  • Weights: insert {}, copy {} × active, disable {} × active [--weights]",
        weights.insert, weights.copy, weights.disable
    );
}

pub fn print_summary(kind: GenomeKind, summary: &RunSummary, elapsed: Duration) {
    println!("\n📊 Results ({kind})");
    println!("  • Steps: {}", summary.steps);
    println!("  • Insertions: {}", summary.inserts);
    println!(
        "  • Copies: {} ({} failed)",
        summary.copies, summary.failed_copies
    );
    println!("  • Disables: {}", summary.disables);
    println!("  • TEs Created: {}", summary.created_tes());
    println!("  • Genome Length: {}", summary.genome_len);
    println!("  • Active TEs: {}", summary.active_tes);
    println!("  • Elapsed: {:.3}s", elapsed.as_secs_f64());
}
