//! Application related stuff

use clap::Parser;

/// Command line options for the sampling driver.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about = "Draw samples from a piecewise-constant 2D distribution.", long_about = None)]
pub struct Options {
    /// Number of samples to draw.
    #[arg(
        long = "samples",
        short = 'n',
        value_name = "NUM",
        default_value_t = 100_000,
        help = "Number of uniform samples to warp through the distribution."
    )]
    pub sample_count: usize,

    /// Seed for the random number generator.
    #[arg(
        long,
        short = 's',
        value_name = "NUM",
        default_value_t = 0,
        help = "Seed for the random number generator."
    )]
    pub seed: u64,

    /// Suppress the per-cell report.
    #[arg(long, help = "Suppress all text output other than error messages.")]
    pub quiet: bool,

    /// Path to the weight grid.
    #[arg(value_name = "FILE", help = "Text file with one row of weights per line.")]
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = Options::try_parse_from(["distrib2d", "sky.txt"]).unwrap();
        assert_eq!(options.sample_count, 100_000);
        assert_eq!(options.seed, 0);
        assert!(!options.quiet);
        assert_eq!(options.path, "sky.txt");
    }

    #[test]
    fn overrides() {
        let options = Options::try_parse_from(["distrib2d", "-n", "10", "--seed", "7", "--quiet", "sky.txt"]).unwrap();
        assert_eq!(options.sample_count, 10);
        assert_eq!(options.seed, 7);
        assert!(options.quiet);
    }

    #[test]
    fn path_is_required() {
        assert!(Options::try_parse_from(["distrib2d"]).is_err());
    }
}
