//! Validated Brazilian CPF tax id value object.

use super::CpfError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of digits in a CPF, the last two being verification digits.
const CPF_LENGTH: usize = 11;

/// Validated CPF held in its 11-digit normalised form.
///
/// Construction strips punctuation and checks both verification digits, so
/// an instance is always a structurally valid tax id. `Display` renders the
/// punctuated form (`###.###.###-##`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cpf(String);

impl Cpf {
    /// Parses a CPF from arbitrary input, with or without punctuation.
    ///
    /// # Errors
    ///
    /// Returns [`CpfError::InvalidFormat`] when the input does not contain
    /// exactly 11 digits or all digits are identical, and
    /// [`CpfError::InvalidChecksum`] when either verification digit does not
    /// match the weighted-sum rule.
    pub fn parse(input: &str) -> Result<Self, CpfError> {
        let digits: Vec<u32> = input.chars().filter_map(|c| c.to_digit(10)).collect();

        if digits.len() != CPF_LENGTH {
            return Err(CpfError::InvalidFormat);
        }
        if digits.iter().all(|digit| Some(digit) == digits.first()) {
            return Err(CpfError::InvalidFormat);
        }

        let first = verification_digit(digits.iter().take(9), 10);
        let second = verification_digit(digits.iter().take(10), 11);
        if digits.get(9) != Some(&first) || digits.get(10) != Some(&second) {
            return Err(CpfError::InvalidChecksum);
        }

        let normalized = digits
            .iter()
            .filter_map(|digit| char::from_digit(*digit, 10))
            .collect();
        Ok(Self(normalized))
    }

    /// Returns the raw 11-digit form.
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// Returns the punctuated display form (`###.###.###-##`).
    #[must_use]
    pub fn formatted(&self) -> String {
        let mut out = String::with_capacity(14);
        for (position, digit) in self.0.chars().enumerate() {
            match position {
                3 | 6 => out.push('.'),
                9 => out.push('-'),
                _ => {}
            }
            out.push(digit);
        }
        out
    }

    /// Returns the masked display form (`***.***.***-##`), keeping only the
    /// verification digits visible.
    #[must_use]
    pub fn masked(&self) -> String {
        let suffix: String = self.0.chars().skip(9).collect();
        format!("***.***.***-{suffix}")
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Computes one verification digit over `digits` with weights descending
/// from `top_weight` down to 2.
#[expect(
    clippy::integer_division_remainder_used,
    reason = "CPF verification digits are defined by a weighted sum modulo 11"
)]
fn verification_digit<'a>(digits: impl Iterator<Item = &'a u32>, top_weight: u32) -> u32 {
    let sum: u32 = digits
        .zip((2..=top_weight).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();
    let remainder = sum % 11;
    if remainder < 2 { 0 } else { 11 - remainder }
}
