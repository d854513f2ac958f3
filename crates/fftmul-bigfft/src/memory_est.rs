//! Working length, precision ceiling and memory estimation.
//!
//! Double-precision convolution recovers exact digits only while the
//! rounding error of every coefficient stays below one half. Coefficients
//! grow with `81 * min(len_a, len_b)` and the twiddle recurrence loses
//! accuracy with the block length, so both bounds scale with `n`. Working
//! lengths up to [`MAX_WORKING_LENGTH`] (a combined operand size of
//! 4,194,304 digits) are the supported range.

use num_complex::Complex64;

/// Largest working length for which exact digit recovery is supported.
pub const MAX_WORKING_LENGTH: usize = 1 << 22;

/// Smallest power of two `>= len_a + len_b` (at least 1).
#[must_use]
pub fn working_length(len_a: usize, len_b: usize) -> usize {
    (len_a + len_b).max(1).next_power_of_two()
}

/// Whether a `len_a x len_b` digit product is inside the supported range.
#[must_use]
pub fn within_precision_ceiling(len_a: usize, len_b: usize) -> bool {
    working_length(len_a, len_b) <= MAX_WORKING_LENGTH
}

/// Estimate peak memory in bytes for multiplying `len_a` by `len_b` digits.
#[must_use]
pub fn estimate_fft_memory(len_a: usize, len_b: usize) -> usize {
    let n = working_length(len_a, len_b);
    let buffers = 2 * n * std::mem::size_of::<Complex64>();
    // Result digits plus the residual carry expansion.
    let digits = n + 32;
    buffers + digits
}
