//! Validated decimal digit sequences.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::multiplier::CoreError;

/// A non-negative integer as base-10 digits, least significant first.
///
/// Every digit is in `0..=9` and there are no most-significant zeros except
/// for the value zero itself, which is `[0]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digits(Vec<u8>);

impl Digits {
    /// The value zero.
    #[must_use]
    pub fn zero() -> Self {
        Self(vec![0])
    }

    /// Validate little-endian digits and trim most-significant zeros.
    pub fn from_le_digits(mut digits: Vec<u8>) -> Result<Self, CoreError> {
        if digits.is_empty() {
            return Err(CoreError::Empty);
        }
        if let Some(position) = digits.iter().position(|&d| d > 9) {
            return Err(CoreError::InvalidDigit {
                position,
                found: digits[position],
            });
        }
        while digits.len() > 1 && digits.last() == Some(&0) {
            digits.pop();
        }
        Ok(Self(digits))
    }

    /// Parse decimal text, most significant digit first.
    ///
    /// Surrounding whitespace is ignored; anything else that is not an ASCII
    /// digit is rejected with its position in the trimmed text.
    #[allow(clippy::cast_possible_truncation)]
    pub fn parse(text: &str) -> Result<Self, CoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CoreError::Empty);
        }
        let mut digits = Vec::with_capacity(text.len());
        for (position, c) in text.char_indices() {
            match c.to_digit(10) {
                Some(d) => digits.push(d as u8),
                None => return Err(CoreError::InvalidChar { position, found: c }),
            }
        }
        digits.reverse();
        Self::from_le_digits(digits)
    }

    #[must_use]
    pub fn from_biguint(value: &BigUint) -> Self {
        if value.is_zero() {
            return Self::zero();
        }
        Self(value.to_radix_le(10))
    }

    #[must_use]
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_radix_le(&self.0, 10).unwrap_or_default()
    }

    /// Wrap digits produced by the multiplication engine, which are already
    /// in range and trimmed.
    pub(crate) fn from_engine(digits: Vec<u8>) -> Self {
        debug_assert!(!digits.is_empty() && digits.iter().all(|&d| d <= 9));
        Self(digits)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Number of decimal digits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: a value has at least one digit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0]
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.0.iter().rev().map(|&d| char::from(b'0' + d)).collect();
        f.write_str(&text)
    }
}

impl FromStr for Digits {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
