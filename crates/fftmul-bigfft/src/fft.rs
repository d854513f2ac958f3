//! Public FFT multiplication API.
//!
//! Pads both digit sequences to the working length, forward-transforms them,
//! multiplies the spectra, transforms back and recovers decimal digits with
//! carry normalization.

use std::time::{Duration, Instant};

use num_bigint::BigUint;
use tracing::debug;

use crate::carry::{normalize_carries, Normalized};
use crate::error::MulError;
use crate::executor::{build_executor, ExecutorKind, StageExecutor};
use crate::fft_poly::TimeDomain;
use crate::memory_est::working_length;

/// Default limit on the rounding residual accepted by carry normalization.
pub const DEFAULT_MAX_RESIDUAL: f64 = 0.4;

/// Worker count used when none is requested.
#[must_use]
pub fn default_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZero::get)
        .unwrap_or(1)
}

/// Options for [`FftMultiplier`].
#[derive(Debug, Clone)]
pub struct MulOptions {
    /// Worker threads per stage (0 = detect).
    pub threads: usize,
    /// Stage executor implementation.
    pub executor: ExecutorKind,
    /// Run the two forward transforms concurrently.
    pub concurrent_forward: bool,
    /// Largest accepted distance between a coefficient and its rounded value.
    pub max_residual: f64,
}

impl Default for MulOptions {
    fn default() -> Self {
        Self {
            threads: default_parallelism(),
            executor: ExecutorKind::default(),
            concurrent_forward: true,
            max_residual: DEFAULT_MAX_RESIDUAL,
        }
    }
}

impl MulOptions {
    /// Replace zero threads and out-of-range residual limits with defaults.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.threads == 0 {
            self.threads = default_parallelism();
        }
        if !(self.max_residual > 0.0 && self.max_residual < 0.5) {
            self.max_residual = DEFAULT_MAX_RESIDUAL;
        }
        self
    }
}

/// Product digits with phase timings.
#[derive(Debug, Clone)]
pub struct MulReport {
    /// Product, least-significant digit first.
    pub digits: Vec<u8>,
    /// Power-of-two buffer length used.
    pub working_length: usize,
    /// Forward transforms, pointwise product and inverse transform.
    pub fft_time: Duration,
    /// Rounding, carry propagation and trimming.
    pub carry_time: Duration,
    /// Largest rounding residual observed.
    pub max_residual: f64,
}

/// FFT multiplier bound to one stage executor.
pub struct FftMultiplier {
    executor: Box<dyn StageExecutor>,
    opts: MulOptions,
}

impl FftMultiplier {
    /// Build a multiplier and its executor from `opts`.
    pub fn new(opts: MulOptions) -> Result<Self, MulError> {
        let opts = opts.normalize();
        let executor = build_executor(opts.executor, opts.threads)?;
        Ok(Self { executor, opts })
    }

    /// Multiply two little-endian digit sequences.
    pub fn multiply(&self, a: &[u8], b: &[u8]) -> Result<Vec<u8>, MulError> {
        self.multiply_timed(a, b).map(|report| report.digits)
    }

    /// Multiply and report phase timings.
    pub fn multiply_timed(&self, a: &[u8], b: &[u8]) -> Result<MulReport, MulError> {
        debug_assert!(a.iter().chain(b).all(|&d| d <= 9), "digit out of range");
        let n = working_length(a.len(), b.len());
        let exec = self.executor.as_ref();
        debug!(
            len_a = a.len(),
            len_b = b.len(),
            n,
            executor = exec.name(),
            threads = exec.threads(),
            "fft multiply"
        );

        let fft_start = Instant::now();
        let (fa, fb) = if self.opts.concurrent_forward {
            rayon::join(
                || TimeDomain::from_digits(a, n).forward(exec),
                || TimeDomain::from_digits(b, n).forward(exec),
            )
        } else {
            (
                TimeDomain::from_digits(a, n).forward(exec),
                TimeDomain::from_digits(b, n).forward(exec),
            )
        };
        let mut product = fa?;
        product.pointwise_mul(&fb?);
        let coeffs = product.inverse(exec)?;
        let fft_time = fft_start.elapsed();

        self.finish(&coeffs, n, fft_time)
    }

    fn finish(
        &self,
        coeffs: &TimeDomain,
        n: usize,
        fft_time: Duration,
    ) -> Result<MulReport, MulError> {
        let carry_start = Instant::now();
        let Normalized {
            digits,
            max_residual,
        } = normalize_carries(coeffs.samples(), self.opts.max_residual)?;
        let carry_time = carry_start.elapsed();

        debug!(
            n,
            fft_us = fft_time.as_micros(),
            carry_us = carry_time.as_micros(),
            max_residual,
            digits = digits.len(),
            "fft multiply done"
        );

        Ok(MulReport {
            digits,
            working_length: n,
            fft_time,
            carry_time,
            max_residual,
        })
    }
}

/// Multiply two little-endian digit sequences with `parallelism` workers.
///
/// Digits must be in `0..=9` and `parallelism` at least 1.
pub fn multiply(a: &[u8], b: &[u8], parallelism: usize) -> Result<Vec<u8>, MulError> {
    if parallelism == 0 {
        return Err(MulError::ZeroParallelism);
    }
    let opts = MulOptions {
        threads: parallelism,
        ..MulOptions::default()
    };
    FftMultiplier::new(opts)?.multiply(a, b)
}

/// Multiply two `BigUint`s through their decimal digits.
pub fn mul_biguint(a: &BigUint, b: &BigUint, parallelism: usize) -> Result<BigUint, MulError> {
    let digits = multiply(&a.to_radix_le(10), &b.to_radix_le(10), parallelism)?;
    // Every digit produced by carry normalization is below 10.
    Ok(BigUint::from_radix_le(&digits, 10).unwrap_or_default())
}
