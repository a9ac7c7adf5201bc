//! Luhn algorithm (ISO/IEC 7812-1).
//!
//! Weighted-sum scheme used by payment card numbers. Every digit at an
//! alternating position from the right is doubled, values above 9 fold to
//! their digit cross-sum, and the total must be divisible by 10.
//!
//! Luhn detects every single-digit substitution but NOT every adjacent
//! transposition: a pair `(a, b)` whose doubled values collide after the
//! cross-sum validates on both sides. Concretely `09 <-> 90` and
//! `22 <-> 55` swaps go undetected. That blind spot is an intrinsic
//! property of the algorithm and is preserved here.

use crate::GenerateError;
use crate::digits::{normalize, to_code};

/// Append the Luhn check digit to the normalized code.
///
/// The rightmost payload digit is doubled first, since it will sit
/// immediately left of the appended check digit.
pub fn generate(input: &str) -> Result<String, GenerateError> {
    let mut digits = normalize(input);
    if digits.is_empty() {
        return Err(GenerateError::EmptyInput);
    }
    let sum = weighted_sum(&digits, true);
    digits.push(((10 - sum % 10) % 10) as u8);
    Ok(to_code(&digits))
}

/// Validate a code whose trailing digit is the claimed Luhn check digit.
///
/// The check digit occupies the rightmost, undoubled slot, so the fold
/// starts with doubling off; length parity falls out of the alternation.
pub fn check(input: &str) -> bool {
    let digits = normalize(input);
    if digits.len() < 2 {
        return false;
    }
    weighted_sum(&digits, false) % 10 == 0
}

/// Right-to-left weighted sum.
///
/// `double` applies to the rightmost digit and alternates moving left.
/// A doubled value above 9 is replaced by its digit cross-sum, which for
/// a single doubled digit is `2d - 9`.
fn weighted_sum(digits: &[u8], mut double: bool) -> u32 {
    let mut sum = 0;
    for &d in digits.iter().rev() {
        let mut value = u32::from(d);
        if double {
            value *= 2;
            if value > 9 {
                value -= 9;
            }
        }
        sum += value;
        double = !double;
    }
    sum
}
