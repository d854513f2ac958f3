//! Core FFT transform: iterative radix-2 Cooley-Tukey over `Complex64`.

use std::f64::consts::PI;

use num_complex::Complex64;
use tracing::trace;

use crate::bit_reverse::bit_reverse_permutation;
use crate::error::MulError;
use crate::executor::StageExecutor;

/// Transform direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Positive twiddle angle, no scaling.
    Forward,
    /// Negative twiddle angle, result scaled by `1/n`.
    Inverse,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Inverse => -1.0,
        }
    }
}

/// Principal root of unity for block length `len`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn stage_root(len: usize, direction: Direction) -> Complex64 {
    let angle = direction.sign() * 2.0 * PI / len as f64;
    Complex64::new(angle.cos(), angle.sin())
}

/// Apply the butterflies of block length `len` to every block in `blocks`.
///
/// `blocks.len()` must be a multiple of `len`. The twiddle `w` restarts at 1
/// for each block and is advanced by repeated multiplication with `w_len`,
/// so the arithmetic for a block does not depend on which worker runs it.
pub fn butterfly_blocks(blocks: &mut [Complex64], len: usize, w_len: Complex64) {
    let half = len / 2;
    for block in blocks.chunks_exact_mut(len) {
        let (lo, hi) = block.split_at_mut(half);
        let mut w = Complex64::new(1.0, 0.0);
        for (u, v) in lo.iter_mut().zip(hi.iter_mut()) {
            let x = *u;
            let t = *v * w;
            *u = x + t;
            *v = x - t;
            w *= w_len;
        }
    }
}

/// Transform `data` in place.
///
/// `data.len()` must be a power of two; this is not checked. The bit-reversal
/// permutation runs on the calling thread, then each stage `len = 2, 4, .., n`
/// is handed to `executor`, which joins its workers before the next stage.
#[allow(clippy::cast_precision_loss)]
pub fn transform(
    data: &mut [Complex64],
    direction: Direction,
    executor: &dyn StageExecutor,
) -> Result<(), MulError> {
    let n = data.len();
    if n <= 1 {
        return Ok(());
    }

    bit_reverse_permutation(data);

    let mut len = 2;
    while len <= n {
        trace!(len, blocks = n / len, "fft stage");
        executor.run_stage(data, len, stage_root(len, direction))?;
        len <<= 1;
    }

    if direction == Direction::Inverse {
        let scale = 1.0 / n as f64;
        for x in data.iter_mut() {
            *x *= scale;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::{build_executor, ExecutorKind, SpawnExecutor};

    fn sequential() -> SpawnExecutor {
        SpawnExecutor::new(1).unwrap()
    }

    fn naive_dft(input: &[Complex64]) -> Vec<Complex64> {
        let n = input.len();
        (0..n)
            .map(|k| {
                input
                    .iter()
                    .enumerate()
                    .map(|(j, &x)| {
                        let angle = 2.0 * PI * (j * k) as f64 / n as f64;
                        x * Complex64::new(angle.cos(), angle.sin())
                    })
                    .sum()
            })
            .collect()
    }

    #[test]
    fn matches_naive_dft() {
        let input: Vec<Complex64> = (0..16)
            .map(|i| Complex64::new(f64::from(i % 7), f64::from(i % 3) - 1.0))
            .collect();
        let expected = naive_dft(&input);
        let mut data = input;
        transform(&mut data, Direction::Forward, &sequential()).unwrap();
        for (i, (got, want)) in data.iter().zip(&expected).enumerate() {
            assert!((got - want).norm() < 1e-9, "bin {i}: {got} != {want}");
        }
    }

    #[test]
    fn impulse_gives_flat_spectrum() {
        let mut data = vec![Complex64::new(0.0, 0.0); 8];
        data[0] = Complex64::new(1.0, 0.0);
        transform(&mut data, Direction::Forward, &sequential()).unwrap();
        assert!(data.iter().all(|x| (x - Complex64::new(1.0, 0.0)).norm() < 1e-12));
    }

    #[test]
    fn forward_then_inverse_roundtrip() {
        let original: Vec<Complex64> = (0..1024)
            .map(|i| Complex64::new(f64::from(i % 10), f64::from(i % 5) * 0.25))
            .collect();
        for kind in [ExecutorKind::Spawn, ExecutorKind::Pool] {
            let exec = build_executor(kind, 4).unwrap();
            let mut data = original.clone();
            transform(&mut data, Direction::Forward, exec.as_ref()).unwrap();
            transform(&mut data, Direction::Inverse, exec.as_ref()).unwrap();
            for (i, (got, want)) in data.iter().zip(&original).enumerate() {
                assert!((got.re - want.re).abs() < 1e-6, "{kind} re at {i}");
                assert!((got.im - want.im).abs() < 1e-6, "{kind} im at {i}");
            }
        }
    }

    #[test]
    fn single_element_untouched() {
        let mut data = vec![Complex64::new(42.0, -1.0)];
        transform(&mut data, Direction::Inverse, &sequential()).unwrap();
        assert_eq!(data[0], Complex64::new(42.0, -1.0));
    }

    #[test]
    fn thread_count_does_not_change_bits() {
        let input: Vec<Complex64> = (0..512)
            .map(|i| Complex64::new(f64::from((i * 7) % 10), 0.0))
            .collect();
        let mut reference = input.clone();
        transform(&mut reference, Direction::Forward, &sequential()).unwrap();
        for threads in [2, 4, 8] {
            let exec = build_executor(ExecutorKind::Pool, threads).unwrap();
            let mut data = input.clone();
            transform(&mut data, Direction::Forward, exec.as_ref()).unwrap();
            assert_eq!(data, reference, "threads = {threads}");
        }
    }

    #[test]
    fn butterfly_single_pair() {
        let mut block = [Complex64::new(3.0, 0.0), Complex64::new(1.0, 0.0)];
        butterfly_blocks(&mut block, 2, stage_root(2, Direction::Forward));
        assert_eq!(block[0], Complex64::new(4.0, 0.0));
        assert_eq!(block[1], Complex64::new(2.0, 0.0));
    }

    #[test]
    fn inverse_root_is_conjugate() {
        let f = stage_root(8, Direction::Forward);
        let i = stage_root(8, Direction::Inverse);
        assert!((f.conj() - i).norm() < 1e-15);
    }
}
