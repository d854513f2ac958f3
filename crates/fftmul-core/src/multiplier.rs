//! Multiplier trait, its FFT and reference implementations, and the error type.
//!
//! `Multiplier` is the trait consumed by orchestration. `FftDigitMultiplier`
//! drives the `fftmul-bigfft` engine; `ReferenceMultiplier` uses num-bigint
//! and serves as the independent check of FFT products.

use std::time::Duration;

use fftmul_bigfft::{FftMultiplier, MulError, MulOptions};

use crate::digits::Digits;

/// Error type for digit multiplication.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A digit value outside `0..=9`.
    #[error("invalid digit {found} at position {position}")]
    InvalidDigit { position: usize, found: u8 },

    /// A character that is not a decimal digit.
    #[error("invalid character {found:?} at position {position}")]
    InvalidChar { position: usize, found: char },

    /// No digits at all.
    #[error("empty digit sequence")]
    Empty,

    /// The FFT engine failed.
    #[error("multiplication failed: {0}")]
    Engine(#[from] MulError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Results from different multipliers don't match.
    #[error("result mismatch between multipliers")]
    Mismatch,
}

/// Engine phase breakdown of a product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phases {
    /// Power-of-two transform length.
    pub working_length: usize,
    /// Transforms and pointwise product.
    pub fft: Duration,
    /// Carry normalization.
    pub carry: Duration,
    /// Largest rounding residual.
    pub max_residual: f64,
}

/// A product with optional phase timings.
#[derive(Debug, Clone)]
pub struct Product {
    pub digits: Digits,
    pub phases: Option<Phases>,
}

/// Public trait for digit multipliers.
pub trait Multiplier: Send + Sync {
    /// Multiply and report engine phases where available.
    fn compute(&self, a: &Digits, b: &Digits) -> Result<Product, CoreError>;

    /// Get the name of this multiplier.
    fn name(&self) -> &str;

    /// Multiply `a` by `b`.
    fn multiply(&self, a: &Digits, b: &Digits) -> Result<Digits, CoreError> {
        self.compute(a, b).map(|p| p.digits)
    }
}

/// Parallel FFT multiplication.
pub struct FftDigitMultiplier {
    engine: FftMultiplier,
}

impl FftDigitMultiplier {
    pub fn new(opts: MulOptions) -> Result<Self, CoreError> {
        Ok(Self {
            engine: FftMultiplier::new(opts)?,
        })
    }
}

impl Multiplier for FftDigitMultiplier {
    fn compute(&self, a: &Digits, b: &Digits) -> Result<Product, CoreError> {
        let report = self.engine.multiply_timed(a.as_slice(), b.as_slice())?;
        Ok(Product {
            digits: Digits::from_engine(report.digits),
            phases: Some(Phases {
                working_length: report.working_length,
                fft: report.fft_time,
                carry: report.carry_time,
                max_residual: report.max_residual,
            }),
        })
    }

    fn name(&self) -> &str {
        "FFT"
    }
}

/// num-bigint multiplication.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReferenceMultiplier;

impl ReferenceMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Multiplier for ReferenceMultiplier {
    fn compute(&self, a: &Digits, b: &Digits) -> Result<Product, CoreError> {
        let product = a.to_biguint() * b.to_biguint();
        Ok(Product {
            digits: Digits::from_biguint(&product),
            phases: None,
        })
    }

    fn name(&self) -> &str {
        "Reference"
    }
}
