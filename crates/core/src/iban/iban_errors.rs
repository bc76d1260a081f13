use thiserror::Error;

/// Reason an IBAN candidate was rejected.
///
/// Variants are ordered the way the validator checks them; the first failing
/// check wins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IbanError {
    #[error("IBAN contains a non-alphanumeric character")]
    InvalidCharacter,

    #[error("IBAN must start with a two-letter country code and two check digits")]
    MalformedPrefix,

    #[error("IBAN check digits '{0}' are reserved")]
    ReservedCheckDigits(String),

    #[error("IBAN must be exactly {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("IBAN account part must be 5 digits followed by 17 alphanumerics")]
    MalformedAccount,

    #[error("IBAN checksum remainder is {0}, expected 1")]
    ChecksumMismatch(u32),
}
