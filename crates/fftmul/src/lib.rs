//! FFTMul-rs library: application logic for the FFT multiplier.

pub mod app;
pub mod config;
pub mod errors;
