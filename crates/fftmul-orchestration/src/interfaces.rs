//! Orchestration interfaces.

use std::time::Duration;

use fftmul_core::digits::Digits;
use fftmul_core::multiplier::{CoreError, Phases};

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present one multiplier's product.
    fn present_result(&self, result: &MultiplicationResult, digits: &Digits);

    /// Present a side-by-side comparison.
    fn present_comparison(&self, results: &[MultiplicationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single multiplication.
#[derive(Debug)]
pub struct MultiplicationResult {
    /// Multiplier name.
    pub algorithm: String,
    /// The product or a structured error.
    pub outcome: Result<Digits, CoreError>,
    /// Engine phases, when the multiplier reports them.
    pub phases: Option<Phases>,
    /// Wall-clock duration.
    pub duration: Duration,
}

impl MultiplicationResult {
    /// The product, if the multiplication succeeded.
    #[must_use]
    pub fn value(&self) -> Option<&Digits> {
        self.outcome.as_ref().ok()
    }
}
