//! Digit-sequence normalization shared by all algorithms.
//!
//! Real-world codes arrive with formatting characters (hyphenated card
//! numbers, spaced tracking codes). Normalization reduces any input to its
//! ordered sequence of decimal digits so that `"4111-1111-1111-1111"` and
//! `"4111111111111111"` mean the same thing everywhere.

/// Extract the decimal digits of `input`, in order, as values 0-9.
///
/// Every character that is not an ASCII digit is discarded. Leading zeros
/// are preserved. Never fails; input without digits yields an empty vector.
pub fn normalize(input: &str) -> Vec<u8> {
    input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

/// Render a digit sequence back to its decimal-string form.
pub fn to_code(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}
