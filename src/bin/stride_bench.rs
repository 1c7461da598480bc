//! Timing comparison of the quadratic and linear clustering strategies.
//!
//! For each sample size this binary generates an ascending-with-gaps sequence, runs both
//! strategies, checks that they agree, and records wall-clock time per strategy.
//!
//! ## Usage
//!
//! ```bash
//! # Defaults: step 2, sizes 1000..100000, values 1, 4, 7, ...
//! cargo run --release --features bench-cli --bin stride-bench
//!
//! # Random gapped data, custom sizes, JSON output
//! cargo run --release --features bench-cli --bin stride-bench -- \
//!     --random --seed 7 --sizes 1000,10000,50000 \
//!     --output bench_results/stride.json
//! ```

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{debug, info, LevelFilter};
use serde::Serialize;

use stride::cluster::{same_clusters, Strategy};
use stride::synth;

const DEFAULT_SIZES: [usize; 12] = [
    1000, 5000, 10000, 20000, 30000, 40000, 50000, 60000, 70000, 80000, 90000, 100000,
];

/// Compare the running time of the adaptive clustering strategies.
#[derive(Parser, Debug)]
#[command(name = "stride-bench")]
#[command(about = "Compare quadratic and linear adaptive clustering")]
struct Args {
    /// Admission step.
    #[arg(long, default_value_t = 2.0)]
    step: f64,

    /// Sample sizes (comma separated). Defaults to 1000 through 100000.
    #[arg(long, value_delimiter = ',')]
    sizes: Vec<usize>,

    /// Spacing of the deterministic ascending sequence.
    #[arg(long, default_value_t = 3)]
    stride: usize,

    /// Use seeded random gapped data instead of the ascending sequence.
    #[arg(long)]
    random: bool,

    /// Seed for `--random`.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Write the timing table as JSON.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Debug, Serialize)]
struct Timing {
    size: usize,
    n_values: usize,
    n_clusters: usize,
    quadratic_secs: f64,
    linear_secs: f64,
}

#[derive(Debug, Serialize)]
struct Report {
    step: f64,
    random: bool,
    timings: Vec<Timing>,
}

fn main() -> Result<()> {
    let mut args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let sizes = if args.sizes.is_empty() {
        DEFAULT_SIZES.to_vec()
    } else {
        std::mem::take(&mut args.sizes)
    };
    info!(
        "step={} sizes={:?} data={}",
        args.step,
        sizes,
        if args.random { "random" } else { "ascending" }
    );

    let mut timings = Vec::with_capacity(sizes.len());
    for &size in &sizes {
        let data = if args.random {
            synth::gapped(size, args.step, args.seed)
        } else {
            synth::arithmetic(size, args.stride)
        };
        debug!("size {}: {} values", size, data.len());

        let quadratic = Strategy::Quadratic.clusterer(args.step);
        let start = Instant::now();
        let a = quadratic
            .run(&data)
            .with_context(|| format!("quadratic strategy failed at size {}", size))?;
        let quadratic_secs = start.elapsed().as_secs_f64();

        let linear = Strategy::Linear.clusterer(args.step);
        let start = Instant::now();
        let b = linear
            .run(&data)
            .with_context(|| format!("linear strategy failed at size {}", size))?;
        let linear_secs = start.elapsed().as_secs_f64();

        if !same_clusters(&a, &b) {
            bail!(
                "strategies disagree at size {}: {} vs {} clusters",
                size,
                a.len(),
                b.len()
            );
        }
        println!("the two different algorithm have same results. Then, we save time consumption.");

        timings.push(Timing {
            size,
            n_values: data.len(),
            n_clusters: b.len(),
            quadratic_secs,
            linear_secs,
        });
    }

    print_table(&timings);

    if let Some(path) = &args.output {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let report = Report {
            step: args.step,
            random: args.random,
            timings,
        };
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        info!("wrote {}", path.display());
    }

    Ok(())
}

fn print_table(timings: &[Timing]) {
    println!();
    println!(
        "{:>10} {:>10} {:>10} {:>14} {:>14} {:>9}",
        "size", "values", "clusters", "quadratic (s)", "linear (s)", "speedup"
    );
    for t in timings {
        let speedup = if t.linear_secs > 0.0 {
            t.quadratic_secs / t.linear_secs
        } else {
            f64::INFINITY
        };
        println!(
            "{:>10} {:>10} {:>10} {:>14.6} {:>14.6} {:>8.1}x",
            t.size, t.n_values, t.n_clusters, t.quadratic_secs, t.linear_secs, speedup
        );
    }
}
