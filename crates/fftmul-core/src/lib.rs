//! # fftmul-core
//!
//! Core library for FFTMul-rs: validated decimal digit sequences, the
//! `Multiplier` abstraction over the FFT engine and a num-bigint reference,
//! random operand generation, and run options.

pub mod constants;
pub mod digits;
pub mod generator;
pub mod multiplier;
pub mod options;
pub mod registry;

// Re-exports
pub use constants::{exit_codes, DEFAULT_DIGITS};
pub use digits::Digits;
pub use generator::{generate_random, seeded_rng};
pub use multiplier::{
    CoreError, FftDigitMultiplier, Multiplier, Phases, Product, ReferenceMultiplier,
};
pub use options::Options;
pub use registry::{DefaultFactory, MultiplierFactory};

/// Multiply two digit sequences with the FFT engine on `parallelism` workers.
///
/// For repeated multiplications build an [`FftDigitMultiplier`] once instead.
///
/// # Example
/// ```
/// use fftmul_core::Digits;
/// let a = Digits::parse("123").unwrap();
/// let b = Digits::parse("456").unwrap();
/// assert_eq!(fftmul_core::multiply(&a, &b, 2).unwrap().to_string(), "56088");
/// ```
pub fn multiply(a: &Digits, b: &Digits, parallelism: usize) -> Result<Digits, CoreError> {
    let digits = fftmul_bigfft::multiply(a.as_slice(), b.as_slice(), parallelism)?;
    Ok(Digits::from_engine(digits))
}
