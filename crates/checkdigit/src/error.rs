//! Error type shared by the `generate` operations.

use thiserror::Error;

/// Errors from check-digit generation.
///
/// Validation (`check`) never fails; it reports malformed codes as plain
/// `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The input contained no decimal digits after normalization.
    #[error("input contains no decimal digits")]
    EmptyInput,
}
