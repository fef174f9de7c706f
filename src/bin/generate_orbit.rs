use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use phi_plot::data::writer;
use phi_plot::orbit::Orbit;

/// Write one year of the Sun–Earth orbital phase, sampled daily.
#[derive(Debug, Parser)]
#[command(name = "generate_orbit", version, about)]
struct Args {
    /// Output file.
    #[arg(default_value = "orbit.txt")]
    output: PathBuf,

    /// Number of days to evolve.
    #[arg(long, default_value_t = 365)]
    days: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let orbit = Orbit::default();
    let table = orbit.daily_table(args.days);

    writer::save_file(&args.output, &table)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!(
        "Wrote {} samples (t* = {:.6e} s) to {}",
        table.len(),
        orbit.time_scale(),
        args.output.display()
    );
    Ok(())
}
