//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use fftmul_bigfft::ExecutorKind;
use fftmul_core::DEFAULT_DIGITS;

/// FFTMul-rs: parallel FFT multiplication of large decimal integers.
#[derive(Parser, Debug)]
#[command(name = "fftmul", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Number of digits in each random operand.
    #[arg(short = 'n', long, default_value_t = DEFAULT_DIGITS, env = "FFTMUL_DIGITS")]
    pub digits: usize,

    /// Worker threads per transform stage (0 = detect).
    #[arg(long, default_value_t = 0, env = "FFTMUL_THREADS")]
    pub threads: usize,

    /// Stage executor: fresh scoped threads per stage, or a persistent pool.
    #[arg(long, value_enum, default_value_t = ExecutorArg::Pool)]
    pub executor: ExecutorArg,

    /// Multiplier to use: fft, reference, or all.
    #[arg(long, default_value = "fft")]
    pub algo: String,

    /// Seed for operand generation (random when omitted).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory holding num1.txt, num2.txt and result.txt.
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Skip writing operand and result files.
    #[arg(long)]
    pub no_save: bool,

    /// Largest accepted rounding residual in carry normalization, in (0, 0.5).
    #[arg(long)]
    pub max_residual: Option<f64>,

    /// Memory limit (e.g., "8G", "512M").
    #[arg(long, default_value = "")]
    pub memory_limit: String,

    /// Run past the documented precision ceiling.
    #[arg(long)]
    pub allow_beyond_ceiling: bool,

    /// Check result.txt against num1.txt * num2.txt instead of multiplying.
    #[arg(long)]
    pub validate: bool,

    /// Print a JSON run report instead of text.
    #[arg(long)]
    pub json: bool,

    /// Quiet mode (only output the product).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// Stage executor choice on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExecutorArg {
    Spawn,
    Pool,
}

impl From<ExecutorArg> for ExecutorKind {
    fn from(arg: ExecutorArg) -> Self {
        match arg {
            ExecutorArg::Spawn => ExecutorKind::Spawn,
            ExecutorArg::Pool => ExecutorKind::Pool,
        }
    }
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("fftmul").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.threads, 0);
        assert_eq!(config.executor, ExecutorArg::Pool);
        assert_eq!(config.algo, "fft");
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(config.seed.is_none());
        assert!(!config.validate);
    }

    #[test]
    fn digits_short_flag() {
        let config = parse(&["-n", "1000", "--seed", "7"]);
        assert_eq!(config.digits, 1000);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn executor_maps_to_kind() {
        let config = parse(&["--executor", "spawn"]);
        assert_eq!(ExecutorKind::from(config.executor), ExecutorKind::Spawn);
        assert_eq!(ExecutorKind::from(ExecutorArg::Pool), ExecutorKind::Pool);
    }

    #[test]
    fn rejects_unknown_executor() {
        let result = AppConfig::try_parse_from(["fftmul", "--executor", "gpu"]);
        assert!(result.is_err());
    }

    #[test]
    fn command_is_consistent() {
        use clap::CommandFactory;
        AppConfig::command().debug_assert();
    }
}
