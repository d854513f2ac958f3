//! Multiplication options and pre-flight budget checks.

use fftmul_bigfft::{estimate_fft_memory, within_precision_ceiling, MulOptions, MAX_WORKING_LENGTH};

use crate::multiplier::CoreError;

/// Options for a multiplication run.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Engine options.
    pub mul: MulOptions,
    /// Memory limit in bytes (0 = unlimited).
    pub memory_limit: usize,
    /// Run past the documented precision ceiling.
    pub allow_beyond_ceiling: bool,
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        self.mul = self.mul.normalize();
        self
    }

    /// Reject operand sizes outside the precision ceiling or memory limit.
    pub fn check_budget(&self, len_a: usize, len_b: usize) -> Result<(), CoreError> {
        if !self.allow_beyond_ceiling && !within_precision_ceiling(len_a, len_b) {
            return Err(CoreError::Config(format!(
                "{len_a} x {len_b} digits exceeds the precision ceiling \
                 (combined length must fit a working length of {MAX_WORKING_LENGTH})"
            )));
        }
        let estimate = estimate_fft_memory(len_a, len_b);
        if self.memory_limit > 0 && estimate > self.memory_limit {
            return Err(CoreError::Config(format!(
                "estimated memory ({} MB) exceeds limit ({} MB)",
                estimate / (1024 * 1024),
                self.memory_limit / (1024 * 1024)
            )));
        }
        Ok(())
    }
}

/// Parse a memory limit string (e.g., "8G", "512M", "1024K").
///
/// An empty string means unlimited and parses to 0.
pub fn parse_memory_limit(s: &str) -> Result<usize, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(0);
    }

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('B') {
        (n, 1)
    } else {
        (s, 1)
    };

    let n: usize = num_str
        .trim()
        .parse()
        .map_err(|_| format!("invalid memory limit: {s:?}"))?;
    n.checked_mul(multiplier)
        .ok_or_else(|| format!("memory limit overflows: {s:?}"))
}
