//! Security module - passphrase based string encryption.

mod string_cipher;

pub use string_cipher::StringCipher;
