//! # fftmul-bigfft
//!
//! Decimal big number multiplication with a parallel iterative complex FFT.
//!
//! Digit sequences are least-significant digit first. The product is exact
//! while the working length stays within [`MAX_WORKING_LENGTH`].

pub mod bit_reverse;
pub mod carry;
pub mod error;
pub mod executor;
pub mod fft;
pub mod fft_core;
pub mod fft_poly;
pub mod memory_est;
pub mod partition;

// Re-exports
pub use error::MulError;
pub use executor::{build_executor, ExecutorKind, PoolExecutor, SpawnExecutor, StageExecutor};
pub use fft::{
    default_parallelism, mul_biguint, multiply, FftMultiplier, MulOptions, MulReport,
    DEFAULT_MAX_RESIDUAL,
};
pub use fft_core::{transform, Direction};
pub use fft_poly::{Spectrum, TimeDomain};
pub use memory_est::{
    estimate_fft_memory, within_precision_ceiling, working_length, MAX_WORKING_LENGTH,
};
pub use partition::ThreadPartition;
