//! Carry normalization: inexact convolution coefficients to base-10 digits.

use num_complex::Complex64;
use num_integer::Integer;
use tracing::warn;

use crate::error::MulError;

/// Digits recovered from an inverse-transformed buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    /// Least-significant digit first, no leading zeros (except `[0]`).
    pub digits: Vec<u8>,
    /// Largest distance seen between a coefficient and its rounded integer.
    pub max_residual: f64,
}

/// Round each real part, propagate carries in base 10 and trim leading zeros.
///
/// Fails with [`MulError::PrecisionExhausted`] as soon as a coefficient is
/// more than `max_residual` away from its nearest integer, or rounds to a
/// negative value. No partial result is returned.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn normalize_carries(coeffs: &[Complex64], max_residual: f64) -> Result<Normalized, MulError> {
    let mut digits = Vec::with_capacity(coeffs.len() + 4);
    let mut carry: u64 = 0;
    let mut max_seen = 0.0_f64;

    for (index, c) in coeffs.iter().enumerate() {
        let value = c.re;
        let rounded = value.round();
        let residual = (value - rounded).abs();
        if residual > max_residual || rounded < 0.0 {
            return Err(MulError::PrecisionExhausted {
                index,
                value,
                residual: if rounded < 0.0 { value.abs() } else { residual },
            });
        }
        max_seen = max_seen.max(residual);

        let (next, digit) = (rounded as u64 + carry).div_rem(&10);
        digits.push(digit as u8);
        carry = next;
    }

    while carry > 0 {
        let (next, digit) = carry.div_rem(&10);
        digits.push(digit as u8);
        carry = next;
    }

    while digits.len() > 1 && digits.last() == Some(&0) {
        digits.pop();
    }
    if digits.is_empty() {
        digits.push(0);
    }

    if max_seen > max_residual * 0.5 {
        warn!(
            max_residual = max_seen,
            limit = max_residual,
            "rounding residual is approaching the precision ceiling"
        );
    }

    Ok(Normalized {
        digits,
        max_residual: max_seen,
    })
}
