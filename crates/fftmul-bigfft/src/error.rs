//! Fatal error conditions of the multiplication engine.

use std::io;

/// Error type for FFT multiplication.
///
/// None of these are recoverable: a multiply call either produces the full
/// product or fails with one of these and produces nothing.
#[derive(Debug, thiserror::Error)]
pub enum MulError {
    /// A rounded convolution coefficient was too far from an integer.
    #[error(
        "precision exhausted at coefficient {index}: value {value} is {residual:.4} away from an integer"
    )]
    PrecisionExhausted {
        /// Index of the offending coefficient.
        index: usize,
        /// Raw real part produced by the inverse transform.
        value: f64,
        /// Distance between `value` and its rounded integer.
        residual: f64,
    },

    /// A stage worker thread could not be created.
    #[error("failed to spawn stage worker: {0}")]
    ThreadSpawn(#[source] io::Error),

    /// A stage worker panicked before the barrier.
    #[error("stage worker panicked")]
    WorkerPanicked,

    /// The persistent worker pool could not be built.
    #[error("failed to create thread pool: {0}")]
    ThreadPool(String),

    /// Requested parallelism was zero.
    #[error("parallelism must be at least 1")]
    ZeroParallelism,
}
