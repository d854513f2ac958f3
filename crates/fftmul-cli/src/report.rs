//! Machine-readable run report.

use serde::Serialize;

use fftmul_orchestration::MultiplicationResult;

/// One multiplier's entry in a [`RunReport`].
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmReport {
    pub algorithm: String,
    pub ok: bool,
    pub error: Option<String>,
    pub total_seconds: f64,
    pub fft_seconds: Option<f64>,
    pub carry_seconds: Option<f64>,
    pub working_length: Option<usize>,
    pub max_residual: Option<f64>,
    pub result_digits: Option<usize>,
}

/// Summary of a whole run, printed with `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub threads: usize,
    pub executor: String,
    pub digits_a: usize,
    pub digits_b: usize,
    pub results: Vec<AlgorithmReport>,
    pub consistent: Option<bool>,
}

impl AlgorithmReport {
    #[must_use]
    pub fn from_result(result: &MultiplicationResult) -> Self {
        Self {
            algorithm: result.algorithm.clone(),
            ok: result.outcome.is_ok(),
            error: result.outcome.as_ref().err().map(ToString::to_string),
            total_seconds: result.duration.as_secs_f64(),
            fft_seconds: result.phases.map(|p| p.fft.as_secs_f64()),
            carry_seconds: result.phases.map(|p| p.carry.as_secs_f64()),
            working_length: result.phases.map(|p| p.working_length),
            max_residual: result.phases.map(|p| p.max_residual),
            result_digits: result.value().map(fftmul_core::Digits::len),
        }
    }
}

impl RunReport {
    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
