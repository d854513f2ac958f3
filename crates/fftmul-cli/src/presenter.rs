//! CLI result presenter.

use fftmul_core::digits::Digits;
use fftmul_orchestration::interfaces::{MultiplicationResult, ResultPresenter};

use crate::output::{format_duration, format_number, format_result};
use crate::ui::print_error;

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// The product line: abbreviated unless verbose.
    fn result_line(&self, digits: &Digits) -> String {
        format!("Result: {}", format_result(digits, self.verbose))
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, result: &MultiplicationResult, digits: &Digits) {
        if self.quiet {
            println!("{digits}");
            return;
        }

        println!("Algorithm: {}", result.algorithm);
        println!("Total time: {}", format_duration(result.duration));
        if let Some(phases) = result.phases {
            println!("  FFT time: {}", format_duration(phases.fft));
            println!("  Carry time: {}", format_duration(phases.carry));
            if self.verbose {
                println!("  Working length: {}", format_number(phases.working_length));
                println!("  Max rounding residual: {:.3e}", phases.max_residual);
            }
        }
        println!("Result digits: {}", format_number(digits.len()));
        println!("{}", self.result_line(digits));
    }

    fn present_comparison(&self, results: &[MultiplicationResult]) {
        if self.quiet {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<60}", "");
        for result in results {
            let status = if result.outcome.is_err() {
                "ERROR"
            } else {
                "OK"
            };
            println!(
                "  {:<20} {:>10} [{}]",
                result.algorithm,
                format_duration(result.duration),
                status,
            );
        }
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}
