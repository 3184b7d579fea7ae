use anyhow::{Context, Result, bail};
use transposon_sim::simulation::SimulationParams;

use crate::args::InitArgs;

pub fn init_params(args: &InitArgs) -> Result<()> {
    let output = &args.output;
    if output.exists() && !args.force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            output.display()
        );
    }

    SimulationParams::default()
        .to_json_file(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("✓ Default parameters written to {}", output.display());
    println!("  Edit the file, then run: transposon run --params {}", output.display());
    Ok(())
}
