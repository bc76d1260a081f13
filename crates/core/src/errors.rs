//! Core error types for the Yardımcı helpers.
//!
//! Most helpers follow a default-on-failure convention and never return an
//! error. The ones that can fail in a way the caller must see (encryption,
//! JSON, file writes, enum parsing) return this crate's [`Result`].

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the helper library.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Encryption failed: {0}")]
    Encryption(String),

    #[error("Decryption failed: {0}")]
    Decryption(String),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("'{value}' is not a variant of {type_name}")]
    EnumParse {
        type_name: &'static str,
        value: String,
    },

    #[error("Missing configuration key: {0}")]
    MissingConfigKey(String),
}
