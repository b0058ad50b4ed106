mod variants;

use crate::parts::{AccountParts, Part};
use crate::str_utils::pad_left;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

pub use variants::get_checksum_algorithm;

/// Number of digits in a fully padded account number (2 + 4 + 8 + 4).
pub const ACCOUNT_DIGITS: usize = 18;

/// The checksum rules published for NZ bank account numbers.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, strum::Display,
)]
pub enum ChecksumVariant {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    X,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ChecksumAlgorithm {
    /// One multiplier per digit of the padded account number.
    pub weighting: [u32; ACCOUNT_DIGITS],
    pub modulo: u32,
    /// Products of 10 or more are reduced to a single digit before summing.
    pub special_case: bool,
}

impl ChecksumAlgorithm {
    pub fn weighted_sum(&self, digits: &[u32; ACCOUNT_DIGITS]) -> u32 {
        digits
            .iter()
            .zip(self.weighting.iter())
            .map(|(digit, weight)| {
                let product = digit * weight;
                if !self.special_case || product < 10 {
                    product
                } else {
                    reduce_to_single_digit(product)
                }
            })
            .sum()
    }

    pub fn is_valid(&self, digits: &[u32; ACCOUNT_DIGITS]) -> bool {
        self.weighted_sum(digits) % self.modulo == 0
    }
}

/// Sum all the digits from a number
#[inline]
fn sum_all_digits(digits: u32) -> u32 {
    let mut sum = 0;
    let mut num = digits;
    while num > 0 {
        sum += num % 10;
        num /= 10;
    }
    sum
}

// Products are at most 9 * 10, so two passes always reach a single digit.
fn reduce_to_single_digit(product: u32) -> u32 {
    let summed = sum_all_digits(product);
    if summed < 10 {
        summed
    } else {
        sum_all_digits(summed)
    }
}

/// Zero-pad every part to its full width and lay the digits out in account
/// order. Returns `None` if a part is missing, too long, or not numeric.
pub fn padded_account_digits(parts: &AccountParts) -> Option<[u32; ACCOUNT_DIGITS]> {
    let mut digits = [0; ACCOUNT_DIGITS];
    let mut index = 0;
    for part in Part::iter() {
        let padded = pad_left(parts.get(part)?, part.max_len());
        if padded.len() != part.max_len() {
            return None;
        }
        for c in padded.chars() {
            digits[index] = c.to_digit(10)?;
            index += 1;
        }
    }
    Some(digits)
}

impl ChecksumVariant {
    pub fn algorithm(self) -> &'static ChecksumAlgorithm {
        get_checksum_algorithm(self)
    }
}
