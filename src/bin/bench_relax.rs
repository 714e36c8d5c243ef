//! Benchmark golden-spiral sampling and Thomson relaxation.
//!
//! Run with: cargo run --release --bin bench_relax
//!
//! Usage:
//!   bench_relax                 Run default sizes (20, 100, 300)
//!   bench_relax 50 200 1k       Run specific sizes
//!   bench_relax -i 20 --step 0.05
//!   bench_relax -n 10           Repeat each size (for profiling)

use std::time::Instant;

use clap::Parser;
use sphere_points::{relax_with, sample_sphere, RelaxConfig, UniformityStats, DEFAULT_DECAY};
use starmap::util::{format_count, parse_count};

#[derive(Parser)]
#[command(name = "bench_relax")]
#[command(about = "Benchmark sphere sampling and relaxation at various sizes")]
struct Args {
    /// Point counts to benchmark (e.g., 100, 1k)
    #[arg(value_parser = parse_count)]
    sizes: Vec<usize>,

    /// Sphere radius
    #[arg(short, long, default_value_t = 1.0)]
    radius: f64,

    /// Relaxation iterations
    #[arg(short, long, default_value_t = 50)]
    iterations: u32,

    /// Initial step size
    #[arg(long, default_value_t = 0.1)]
    step: f64,

    /// Number of repeats per size
    #[arg(short = 'n', long, default_value_t = 1)]
    repeat: usize,
}

fn print_stats(label: &str, stats: &UniformityStats) {
    println!(
        "  {:<8} min {:>9.5}  mean_nn {:>9.5}  cv {:>7.4}  energy {:>12.4}",
        label, stats.min_distance, stats.mean_nearest, stats.nearest_cv, stats.energy
    );
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    println!("Sphere Relaxation Benchmark");
    println!("===========================\n");

    let sizes = if args.sizes.is_empty() {
        vec![20, 100, 300]
    } else {
        args.sizes.clone()
    };
    let config = RelaxConfig {
        iterations: args.iterations,
        step_size: args.step,
        decay: DEFAULT_DECAY,
    };

    for &n in &sizes {
        if n > 2_000 {
            println!("note: n={} is O(iterations * n^2), this will be slow", n);
        }
        println!(
            "n = {} (radius {}, {} iterations, step {})",
            format_count(n),
            args.radius,
            args.iterations,
            args.step
        );

        let mut sample_ms = 0.0;
        let mut relax_ms = 0.0;
        let mut last = None;
        for _ in 0..args.repeat.max(1) {
            let t0 = Instant::now();
            let initial = sample_sphere(n, args.radius);
            sample_ms += t0.elapsed().as_secs_f64() * 1000.0;

            let t1 = Instant::now();
            let relaxed = relax_with(&initial, &config);
            relax_ms += t1.elapsed().as_secs_f64() * 1000.0;

            last = Some((initial, relaxed));
        }

        let runs = args.repeat.max(1) as f64;
        println!("  sample   {:>9.3}ms", sample_ms / runs);
        println!("  relax    {:>9.3}ms", relax_ms / runs);

        if let Some((initial, relaxed)) = last {
            print_stats("spiral", &UniformityStats::measure(&initial));
            print_stats("relaxed", &UniformityStats::measure(&relaxed));
        }
        println!();
    }
}
