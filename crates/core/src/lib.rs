//! Yardımcı Core - coercion, validation and formatting helpers.
//!
//! Every helper is a pure function (or a thin wrapper over the file system)
//! with no state shared between calls. Failed conversions fall back to a
//! default value, but the fallback is always visible through
//! [`convert::Coerced`] rather than swallowed.

pub mod config;
pub mod constants;
pub mod convert;
pub mod dates;
pub mod enums;
pub mod errors;
pub mod files;
pub mod iban;
pub mod mapping;
pub mod money;
pub mod security;
pub mod strings;

pub use config::HelperConfig;
pub use convert::{Coerce, Coerced};
pub use enums::DisplayEnum;
pub use iban::{is_valid_iban, validate_iban, IbanError};
pub use money::money_to_words;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
