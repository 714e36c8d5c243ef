use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use starmap::constants::DEFAULT_ITEM_COUNTS;
use starmap::{build_scene, export_scene, ParticleBudget, SceneConfig};

/// Starmap - sphere layouts and particle fields for a catalog browser
#[derive(Parser, Debug)]
#[command(name = "starmap", version, about)]
struct Cli {
    /// Item count per category, in catalog order (e.g. 6,9,4)
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_ITEM_COUNTS)]
    items: Vec<usize>,

    /// JSON config file (missing fields keep their defaults)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Random seed for particle fields
    #[arg(long)]
    seed: Option<u64>,

    /// Use the reduced particle budget for mobile devices
    #[arg(long)]
    mobile: bool,

    /// Category sphere radius (overrides config)
    #[arg(long)]
    radius: Option<f64>,

    /// Relaxation iterations (overrides config)
    #[arg(long)]
    iterations: Option<u32>,

    /// Initial relaxation step size (overrides config)
    #[arg(long)]
    step: Option<f64>,

    /// Export the scene to a file (supports .json and .json.gz)
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// Log uniformity statistics of the category layout
    #[arg(long)]
    report: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> starmap::Result<()> {
    let mut config = match &cli.config {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };
    if let Some(radius) = cli.radius {
        config.layout.sphere_radius = radius;
    }
    if let Some(iterations) = cli.iterations {
        config.layout.relax_iterations = iterations;
    }
    if let Some(step) = cli.step {
        config.layout.relax_step = step;
    }
    config.validate()?;

    let budget = if cli.mobile {
        ParticleBudget::Mobile
    } else {
        ParticleBudget::Desktop
    };
    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!(
        "Building scene: seed={}, categories={}, budget={}",
        seed,
        cli.items.len(),
        budget
    );

    let scene = build_scene(&config, &cli.items, budget, seed);

    if cli.report {
        let (before, after) = scene.category_stats();
        before.log_summary("Categories (spiral)");
        after.log_summary("Categories (relaxed)");
    }

    if let Some(path) = &cli.export {
        export_scene(&scene, path)?;
    }

    Ok(())
}
