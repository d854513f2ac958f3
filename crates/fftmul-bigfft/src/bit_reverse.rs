//! Bit-reversal permutation for the in-place iterative transform.

/// Reverse the low `lg_n` bits of `i`.
#[must_use]
pub fn reverse_bits(i: usize, lg_n: u32) -> usize {
    if lg_n == 0 {
        return 0;
    }
    i.reverse_bits() >> (usize::BITS - lg_n)
}

/// The full permutation table for a power-of-two length `n`.
#[must_use]
pub fn bit_reversal_indices(n: usize) -> Vec<usize> {
    let lg_n = n.trailing_zeros();
    (0..n).map(|i| reverse_bits(i, lg_n)).collect()
}

/// Permute `data` in place into bit-reversed order.
///
/// Every pair `(i, rev(i))` with `i < rev(i)` is swapped exactly once.
/// `data.len()` must be a power of two.
pub fn bit_reverse_permutation<T>(data: &mut [T]) {
    let n = data.len();
    let mut j = 0;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;
        if i < j {
            data.swap(i, j);
        }
    }
}
