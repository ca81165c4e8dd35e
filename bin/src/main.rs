#[macro_use]
extern crate log;

use clap::Parser;
use distrib2d::app::*;
use distrib2d::geometry::*;
use distrib2d::grid_io::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize `env_logger`.
    env_logger::init();

    let options = Options::parse();

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(options: &Options) -> Result<(), String> {
    let distribution = read_grid(&options.path)?.into_distribution()?;
    let (width, height) = (distribution.width(), distribution.height());

    // Histogram of selected cells.
    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut hist = vec![0_usize; width * height];
    for _ in 0..options.sample_count {
        let warp = distribution.warp(&Point2f::new(rng.gen(), rng.gen()));
        hist[warp.row * width + warp.column] += 1;
    }

    if !options.quiet {
        println!("{:>6} {:>6} {:>12} {:>12}", "row", "column", "expected", "observed");
    }

    let n = options.sample_count as f64;
    let mut chi_squared = 0.0;
    for row in 0..height {
        for column in 0..width {
            let expected = distribution.pdf(row, column) as f64;
            let observed = hist[row * width + column] as f64;
            if expected > 0.0 && n > 0.0 {
                let diff = observed - n * expected;
                chi_squared += diff * diff / (n * expected);
            }
            if !options.quiet {
                println!("{row:>6} {column:>6} {expected:>12.6} {:>12.6}", observed / n.max(1.0));
            }
        }
    }

    info!(
        "Drew {} samples from {width} x {height} grid (integral {}), chi-squared {chi_squared:.3}",
        options.sample_count,
        distribution.integral()
    );

    Ok(())
}
