//! Verhoeff algorithm.
//!
//! Check-digit scheme built on the dihedral group D5 (the symmetries of a
//! pentagon, order 10). Three constant tables drive a right-to-left fold:
//! the group operation `MUL`, a position permutation `PERM` with period 8,
//! and the group inverse `INV`. The permutation is what lets the group's
//! non-commutativity catch adjacent transpositions; like Damm, the scheme
//! detects all single-digit substitutions and all adjacent transpositions.

use crate::GenerateError;
use crate::digits::{normalize, to_code};

/// D5 group operation, indexed `[accumulator][permuted digit]`.
///
/// Elements 0-4 are rotations, 5-9 are reflections.
const MUL: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

/// Position permutation, indexed `[position % 8][digit]`.
///
/// Row `k` is the base permutation iterated `k` times; row 0 is the
/// identity.
const PERM: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Group inverse: `MUL[x][INV[x]] == 0` for every element.
const INV: [u8; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

/// Append the Verhoeff check digit to the normalized code.
pub fn generate(input: &str) -> Result<String, GenerateError> {
    let mut digits = normalize(input);
    if digits.is_empty() {
        return Err(GenerateError::EmptyInput);
    }
    let check_digit = INV[usize::from(fold(&digits))];
    digits.push(check_digit);
    Ok(to_code(&digits))
}

/// Validate a code whose trailing digit is the claimed Verhoeff check digit.
///
/// The fold runs over everything except the last digit; the code is valid
/// iff the inverse of the fold result equals that trailing digit.
pub fn check(input: &str) -> bool {
    let digits = normalize(input);
    match digits.split_last() {
        Some((&claimed, payload)) if !payload.is_empty() => {
            INV[usize::from(fold(payload))] == claimed
        }
        _ => false,
    }
}

/// Right-to-left table fold with the accumulator starting at 0.
///
/// Position `i` counts from the right; the permutation row is
/// `(i + 1) % 8` because the appended check digit will occupy position 0.
fn fold(digits: &[u8]) -> u8 {
    let mut c = 0u8;
    for (i, &d) in digits.iter().rev().enumerate() {
        let permuted = PERM[(i + 1) % 8][usize::from(d)];
        c = MUL[usize::from(c)][usize::from(permuted)];
    }
    c
}
