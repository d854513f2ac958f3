//! Typed sample buffers for the two sides of the transform.
//!
//! A buffer of digit coefficients and a buffer of frequency samples have the
//! same layout but cannot be used interchangeably: [`TimeDomain::forward`]
//! and [`Spectrum::inverse`] are the only ways to move between them.

use num_complex::Complex64;

use crate::error::MulError;
use crate::executor::StageExecutor;
use crate::fft_core::{transform, Direction};

/// Time-domain coefficients, length a power of two.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeDomain {
    samples: Vec<Complex64>,
}

/// Frequency-domain samples produced by a forward transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    samples: Vec<Complex64>,
}

impl TimeDomain {
    /// Place `digits` in the real parts of a zero-padded buffer of length `n`.
    ///
    /// `n` must be a power of two no smaller than `digits.len()`.
    #[must_use]
    pub fn from_digits(digits: &[u8], n: usize) -> Self {
        debug_assert!(n.is_power_of_two() && n >= digits.len());
        let mut samples = vec![Complex64::new(0.0, 0.0); n];
        for (slot, &d) in samples.iter_mut().zip(digits) {
            slot.re = f64::from(d);
        }
        Self { samples }
    }

    /// Forward-transform into a spectrum.
    pub fn forward(mut self, executor: &dyn StageExecutor) -> Result<Spectrum, MulError> {
        transform(&mut self.samples, Direction::Forward, executor)?;
        Ok(Spectrum {
            samples: self.samples,
        })
    }

    #[must_use]
    pub fn samples(&self) -> &[Complex64] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl Spectrum {
    /// Multiply by `other` sample by sample.
    pub fn pointwise_mul(&mut self, other: &Spectrum) {
        pointwise_multiply(&mut self.samples, &other.samples);
    }

    /// Inverse-transform back to time-domain coefficients.
    pub fn inverse(mut self, executor: &dyn StageExecutor) -> Result<TimeDomain, MulError> {
        transform(&mut self.samples, Direction::Inverse, executor)?;
        Ok(TimeDomain {
            samples: self.samples,
        })
    }

    #[must_use]
    pub fn samples(&self) -> &[Complex64] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// `a[i] *= b[i]` for every `i`.
pub fn pointwise_multiply(a: &mut [Complex64], b: &[Complex64]) {
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter_mut().zip(b) {
        *x *= *y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::SpawnExecutor;

    #[test]
    fn from_digits_pads_with_zeros() {
        let buf = TimeDomain::from_digits(&[3, 2, 1], 8);
        assert_eq!(buf.len(), 8);
        assert_eq!(buf.samples()[0], Complex64::new(3.0, 0.0));
        assert_eq!(buf.samples()[2], Complex64::new(1.0, 0.0));
        assert!(buf.samples()[3..].iter().all(|x| *x == Complex64::new(0.0, 0.0)));
    }

    #[test]
    fn pointwise_multiply_simple() {
        let mut a = vec![Complex64::new(3.0, 0.0), Complex64::new(0.0, 1.0)];
        let b = vec![Complex64::new(7.0, 0.0), Complex64::new(0.0, 1.0)];
        pointwise_multiply(&mut a, &b);
        assert_eq!(a[0], Complex64::new(21.0, 0.0));
        assert_eq!(a[1], Complex64::new(-1.0, 0.0));
    }

    #[test]
    #[should_panic(expected = "assertion")]
    fn pointwise_multiply_length_mismatch() {
        let mut a = vec![Complex64::new(1.0, 0.0); 2];
        pointwise_multiply(&mut a, &[Complex64::new(1.0, 0.0)]);
    }

    #[test]
    fn spectrum_roundtrip() {
        let exec = SpawnExecutor::new(2).unwrap();
        let original = TimeDomain::from_digits(&[9, 8, 7, 6, 5], 8);
        let back = original
            .clone()
            .forward(&exec)
            .unwrap()
            .inverse(&exec)
            .unwrap();
        for (got, want) in back.samples().iter().zip(original.samples()) {
            assert!((got - want).norm() < 1e-9);
        }
    }

    #[test]
    fn convolution_of_small_polynomials() {
        // (1 + 2x)(3 + 4x) = 3 + 10x + 8x^2
        let exec = SpawnExecutor::new(1).unwrap();
        let mut a = TimeDomain::from_digits(&[1, 2], 4).forward(&exec).unwrap();
        let b = TimeDomain::from_digits(&[3, 4], 4).forward(&exec).unwrap();
        a.pointwise_mul(&b);
        let c = a.inverse(&exec).unwrap();
        let re: Vec<f64> = c.samples().iter().map(|x| x.re.round()).collect();
        assert_eq!(re, vec![3.0, 10.0, 8.0, 0.0]);
    }
}
