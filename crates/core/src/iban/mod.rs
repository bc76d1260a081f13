//! IBAN module - structural and checksum validation.

mod iban_errors;
mod iban_validator;

#[cfg(test)]
mod iban_validator_tests;

pub use iban_errors::IbanError;
pub use iban_validator::{is_valid_iban, validate_iban};
