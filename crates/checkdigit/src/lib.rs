//! checkdigit - Check-digit generation and validation
//!
//! This crate provides four independent check-digit algorithms:
//! - [`code12`] - modulo-7 checksum used by parcel-tracking codes
//! - [`luhn`] - Luhn weighted sum (ISO/IEC 7812-1 payment card numbers)
//! - [`damm`] - Damm quasigroup algorithm
//! - [`verhoeff`] - Verhoeff dihedral-group algorithm
//!
//! Every algorithm exposes the same two-operation surface:
//! `generate` appends a check digit to the normalized digits of its input,
//! `check` validates a code that already carries its trailing check digit.
//! All functions are pure; lookup tables are compile-time constants.

pub mod code12;
pub mod damm;
pub mod digits;
pub mod luhn;
pub mod verhoeff;

mod error;

pub use error::GenerateError;
