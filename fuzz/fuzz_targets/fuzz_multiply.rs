#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First byte: parallelism 1..=8 and split point; the rest become digits.
    let parallelism = usize::from(data[0] % 8) + 1;
    let digits: Vec<u8> = data[1..].iter().map(|b| b % 10).collect();
    let split = usize::from(data[0]) % digits.len();
    let (a, b) = digits.split_at(split);
    let (a, b) = (if a.is_empty() { &[0][..] } else { a }, b);

    let product = fftmul_bigfft::multiply(a, b, parallelism).expect("multiply failed");

    let expected = BigUint::from_radix_le(a, 10).unwrap() * BigUint::from_radix_le(b, 10).unwrap();
    let mut expected_digits = expected.to_radix_le(10);
    if expected_digits.is_empty() {
        expected_digits.push(0);
    }
    assert_eq!(product, expected_digits, "FFT != num-bigint (parallelism {parallelism})");
});
