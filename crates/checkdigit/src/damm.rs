//! Damm algorithm.
//!
//! Fold over a totally anti-symmetric quasigroup of order 10. The table
//! has zeros exactly on its diagonal, so a valid code folds to 0 when the
//! trailing check digit is included; `check` never strips the last digit.
//! Detects all single-digit substitutions and all adjacent transpositions.

use crate::GenerateError;
use crate::digits::{normalize, to_code};

/// Damm quasigroup operation table, indexed `[interim][digit]`.
///
/// Totally anti-symmetric: `T[a][b] != T[b][a]` for `a != b`, and
/// `T[a][a] == 0` along the diagonal.
const TABLE: [[u8; 10]; 10] = [
    [0, 3, 1, 7, 5, 9, 8, 6, 4, 2],
    [7, 0, 9, 2, 1, 5, 4, 8, 6, 3],
    [4, 2, 0, 6, 8, 7, 1, 3, 5, 9],
    [1, 7, 5, 0, 9, 8, 3, 4, 2, 6],
    [6, 1, 2, 3, 0, 4, 5, 9, 7, 8],
    [3, 6, 7, 4, 2, 0, 9, 5, 8, 1],
    [5, 8, 6, 9, 7, 2, 0, 1, 3, 4],
    [8, 9, 4, 5, 3, 6, 2, 0, 1, 7],
    [9, 4, 3, 8, 6, 1, 7, 2, 0, 5],
    [2, 5, 8, 1, 4, 3, 6, 7, 9, 0],
];

/// Append the Damm check digit to the normalized code.
pub fn generate(input: &str) -> Result<String, GenerateError> {
    let mut digits = normalize(input);
    if digits.is_empty() {
        return Err(GenerateError::EmptyInput);
    }
    let check_digit = fold(&digits);
    digits.push(check_digit);
    Ok(to_code(&digits))
}

/// Validate a code whose trailing digit is the claimed Damm check digit.
///
/// The fold runs over the entire sequence, check digit included; a valid
/// code drives the accumulator back to 0.
pub fn check(input: &str) -> bool {
    let digits = normalize(input);
    digits.len() >= 2 && fold(&digits) == 0
}

/// Left-to-right table fold with the accumulator starting at 0.
fn fold(digits: &[u8]) -> u8 {
    digits
        .iter()
        .fold(0, |interim, &d| TABLE[usize::from(interim)][usize::from(d)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_a_quasigroup() {
        // Every row and every column is a permutation of 0-9
        for i in 0..10 {
            let mut row_seen = [false; 10];
            let mut col_seen = [false; 10];
            for j in 0..10 {
                row_seen[usize::from(TABLE[i][j])] = true;
                col_seen[usize::from(TABLE[j][i])] = true;
            }
            assert_eq!(row_seen, [true; 10], "row {} is not a permutation", i);
            assert_eq!(col_seen, [true; 10], "column {} is not a permutation", i);
        }
    }

    #[test]
    fn test_table_zero_diagonal() {
        for i in 0..10 {
            assert_eq!(TABLE[i][i], 0);
        }
    }

    #[test]
    fn test_generate_reference_values() {
        // 572 -> 4 is the worked example from the algorithm literature
        assert_eq!(generate("572").unwrap(), "5724");
        assert_eq!(generate("0123456789").unwrap(), "01234567894");
    }

    #[test]
    fn test_check_reference_values() {
        assert!(check("5724"));
        assert!(check("01234567894"));
        assert!(!check("01234567893"));
    }

    #[test]
    fn test_generate_empty_input() {
        assert_eq!(generate(""), Err(GenerateError::EmptyInput));
        assert_eq!(generate("x-y"), Err(GenerateError::EmptyInput));
    }

    #[test]
    fn test_check_too_short() {
        assert!(!check(""));
        // a lone digit has no payload, even though folding "0" yields 0
        assert!(!check("0"));
    }
}
