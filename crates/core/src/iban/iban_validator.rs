//! IBAN structure and ISO 7064 mod-97 checksum validation.
//!
//! The validator only accepts 26-character IBANs (the Turkish layout: two
//! letters, two check digits, five digit bank code, seventeen alphanumerics).
//!
//! ```
//! use yardimci_core::iban::is_valid_iban;
//!
//! assert!(is_valid_iban("TR33 0006 1005 1978 6457 8413 26"));
//! assert!(!is_valid_iban("TR33 0006 1005 1978 6457 8413 27"));
//! ```

use lazy_static::lazy_static;
use regex::Regex;

use super::IbanError;
use crate::constants::{IBAN_LENGTH, RESERVED_IBAN_CHECK_DIGITS};

/// Number of digits folded into the running remainder per step.
const CHUNK_SIZE: usize = 7;

const MODULUS: u64 = 97;

lazy_static! {
    /// Country code followed by two check digits and at least one more character
    static ref PREFIX_REGEX: Regex =
        Regex::new(r"^[A-Z]{2}[0-9]{2}.+$").expect("Invalid regex pattern");

    /// Account part after the four-character prefix
    static ref ACCOUNT_REGEX: Regex =
        Regex::new(r"^[0-9]{5}[A-Z0-9]{17}$").expect("Invalid regex pattern");
}

/// Returns `true` when `text` is a structurally valid IBAN with a correct checksum.
///
/// Whitespace anywhere in the input is ignored and letters are compared
/// case-insensitively. Never panics.
pub fn is_valid_iban(text: &str) -> bool {
    validate_iban(text).is_ok()
}

/// Validates an IBAN candidate, reporting the first check that failed.
pub fn validate_iban(text: &str) -> Result<(), IbanError> {
    let iban = normalize(text);

    if !iban.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(IbanError::InvalidCharacter);
    }

    if !PREFIX_REGEX.is_match(&iban) {
        return Err(IbanError::MalformedPrefix);
    }

    // The prefix regex guarantees four ASCII characters up front.
    let check_digits = &iban[2..4];
    if RESERVED_IBAN_CHECK_DIGITS.contains(&check_digits) {
        return Err(IbanError::ReservedCheckDigits(check_digits.to_string()));
    }

    if iban.len() != IBAN_LENGTH {
        return Err(IbanError::InvalidLength {
            expected: IBAN_LENGTH,
            actual: iban.chars().count(),
        });
    }

    let (prefix, account) = iban.split_at(4);
    if !ACCOUNT_REGEX.is_match(account) {
        return Err(IbanError::MalformedAccount);
    }

    let rearranged = format!("{}{}", account, prefix);
    let remainder = mod97(&to_numeric_string(&rearranged));
    if remainder != 1 {
        return Err(IbanError::ChecksumMismatch(remainder));
    }

    Ok(())
}

/// Strips all whitespace and uppercases ASCII letters, one character each.
/// Non-ASCII characters are kept as-is so the character check rejects them.
fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Replaces each letter with its two-digit code (A=10 ... Z=35).
fn to_numeric_string(iban: &str) -> String {
    let mut digits = String::with_capacity(iban.len() * 2);
    for c in iban.chars() {
        if c.is_ascii_uppercase() {
            digits.push_str(&(u32::from(c) - 55).to_string());
        } else {
            digits.push(c);
        }
    }
    digits
}

/// Folds a digit string into its remainder modulo 97.
///
/// Takes seven digits at a time and prepends the running remainder, which
/// keeps every intermediate value well below `u64::MAX`.
fn mod97(digits: &str) -> u32 {
    let mut remainder: u64 = 0;
    for chunk in digits.as_bytes().chunks(CHUNK_SIZE) {
        for &b in chunk {
            remainder = remainder * 10 + u64::from(b - b'0');
        }
        remainder %= MODULUS;
    }
    remainder as u32
}
