//! Modulo-7 courier code checksum.
//!
//! Japanese parcel-tracking codes (Yamato, Sagawa, Japan Post) carry a
//! trailing `value mod 7` digit. The remainder is computed by folding one
//! digit at a time, so the sequence may be arbitrarily long; nothing is
//! ever parsed into a fixed-width integer.

use crate::GenerateError;
use crate::digits::{normalize, to_code};

/// Append the modulo-7 check digit (0-6) to the normalized code.
pub fn generate(input: &str) -> Result<String, GenerateError> {
    let mut digits = normalize(input);
    if digits.is_empty() {
        return Err(GenerateError::EmptyInput);
    }
    let check_digit = remainder(&digits);
    digits.push(check_digit);
    Ok(to_code(&digits))
}

/// Validate a code whose trailing digit is the claimed modulo-7 remainder.
///
/// Codes with fewer than two digits have no payload and are always invalid.
/// A trailing digit of 7-9 can never match a remainder.
pub fn check(input: &str) -> bool {
    let digits = normalize(input);
    match digits.split_last() {
        Some((&claimed, payload)) if !payload.is_empty() => remainder(payload) == claimed,
        _ => false,
    }
}

/// Remainder of the digit sequence, read as a base-10 integer, modulo 7.
fn remainder(digits: &[u8]) -> u8 {
    digits
        .iter()
        .fold(0u32, |acc, &d| (acc * 10 + u32::from(d)) % 7) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_tracking_codes() {
        // 12345678901 % 7 == 3, 11111111111 % 7 == 2
        assert_eq!(generate("12345678901").unwrap(), "123456789013");
        assert_eq!(generate("11111111111").unwrap(), "111111111112");
    }

    #[test]
    fn test_check_valid_and_invalid() {
        assert!(check("123456789013"));
        assert!(!check("111111111111"));
        assert!(check("111111111112"));
    }

    #[test]
    fn test_check_digit_above_six_never_validates() {
        for claimed in 7..=9u8 {
            let code = format!("1234567890{}", claimed);
            assert!(!check(&code));
        }
    }

    #[test]
    fn test_generate_longer_than_u64() {
        // 30 digits; value mod 7 must still be exact
        let code = generate("123456789012345678901234567890").unwrap();
        assert_eq!(code.len(), 31);
        assert!(check(&code));
    }

    #[test]
    fn test_generate_empty_input() {
        assert_eq!(generate(""), Err(GenerateError::EmptyInput));
        assert_eq!(generate("---"), Err(GenerateError::EmptyInput));
    }

    #[test]
    fn test_check_too_short() {
        assert!(!check(""));
        assert!(!check("3"));
        assert!(!check("-0-"));
    }

    #[test]
    fn test_remainder_matches_integer_division() {
        for value in [0u64, 6, 7, 49, 50, 12345678901, 999999999999] {
            let digits = crate::digits::normalize(&value.to_string());
            assert_eq!(u64::from(remainder(&digits)), value % 7);
        }
    }
}
