//! Property-based tests for digit sequences and multipliers.

use num_bigint::BigUint;
use proptest::prelude::*;

use fftmul_core::{
    generate_random, seeded_rng, Digits, FftDigitMultiplier, Multiplier, ReferenceMultiplier,
};
use fftmul_bigfft::{ExecutorKind, MulOptions};

fn fft(kind: ExecutorKind, threads: usize) -> FftDigitMultiplier {
    FftDigitMultiplier::new(MulOptions {
        threads,
        executor: kind,
        ..MulOptions::default()
    })
    .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    /// Decimal text survives parse and display, minus leading zeros.
    #[test]
    fn parse_display_roundtrip(text in "[0-9]{1,200}") {
        let d = Digits::parse(&text).unwrap();
        let expected = BigUint::parse_bytes(text.as_bytes(), 10).unwrap();
        prop_assert_eq!(d.to_string(), expected.to_string());
        prop_assert_eq!(d.to_biguint(), expected);
    }

    /// FFT and reference multipliers agree.
    #[test]
    fn fft_equals_reference(a in "[0-9]{1,300}", b in "[0-9]{1,300}", threads in 1usize..6) {
        let a = Digits::parse(&a).unwrap();
        let b = Digits::parse(&b).unwrap();
        let reference = ReferenceMultiplier.multiply(&a, &b).unwrap();
        for kind in [ExecutorKind::Spawn, ExecutorKind::Pool] {
            let got = fft(kind, threads).multiply(&a, &b).unwrap();
            prop_assert_eq!(&got, &reference);
        }
    }

    /// Generated operands always form valid digit sequences.
    #[test]
    fn generated_operands_are_valid(len in 1usize..2000, seed in any::<u64>()) {
        let raw = generate_random(len, &mut seeded_rng(Some(seed)));
        let d = Digits::from_le_digits(raw).unwrap();
        prop_assert!(d.len() <= len);
        prop_assert!(d.len() == 1 || *d.as_slice().last().unwrap() != 0);
    }
}

#[test]
fn random_operands_ten_thousand_digits() {
    let mut rng = seeded_rng(Some(2024));
    let a = Digits::from_le_digits(generate_random(10_000, &mut rng)).unwrap();
    let b = Digits::from_le_digits(generate_random(10_000, &mut rng)).unwrap();
    let got = fft(ExecutorKind::Pool, 4).multiply(&a, &b).unwrap();
    assert_eq!(got.to_biguint(), a.to_biguint() * b.to_biguint());
}
