//! AES-256-GCM encryption of short strings (tokens, query parameters, cookie values).
//!
//! The key is the SHA-256 digest of a passphrase. Every call to
//! [`StringCipher::encrypt`] draws a fresh random nonce, so encrypting the same
//! text twice gives different output. The output is unpadded base64 of
//! `nonce || ciphertext`, which survives being placed in a URL query string
//! without `=` characters.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use base64::{
    engine::general_purpose::{STANDARD as BASE64, STANDARD_NO_PAD as BASE64_NO_PAD},
    Engine as _,
};
use sha2::{Digest, Sha256};

use crate::config::HelperConfig;
use crate::constants::ENCRYPTION_KEY_ENV;
use crate::errors::{Error, Result};

const NONCE_LEN: usize = 12;

pub struct StringCipher {
    cipher: Aes256Gcm,
}

impl StringCipher {
    /// Derives the AES key from `passphrase`.
    pub fn new(passphrase: &str) -> Result<Self> {
        if passphrase.is_empty() {
            return Err(Error::InvalidInput("Encryption passphrase is empty".into()));
        }
        let digest = Sha256::digest(passphrase.as_bytes());
        let key = Key::<Aes256Gcm>::from_slice(&digest);
        Ok(Self {
            cipher: Aes256Gcm::new(key),
        })
    }

    /// Builds a cipher from the configured passphrase.
    pub fn from_config(config: &HelperConfig) -> Result<Self> {
        let passphrase = config
            .encryption_key
            .as_deref()
            .ok_or_else(|| Error::MissingConfigKey(ENCRYPTION_KEY_ENV.to_string()))?;
        Self::new(passphrase)
    }

    pub fn encrypt(&self, plain_text: &str) -> Result<String> {
        if plain_text.is_empty() {
            return Err(Error::InvalidInput("Nothing to encrypt".into()));
        }

        let mut nonce_bytes = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = self
            .cipher
            .encrypt(nonce, plain_text.as_bytes())
            .map_err(|e| Error::Encryption(e.to_string()))?;

        let mut payload = nonce_bytes.to_vec();
        payload.extend(ciphertext);
        Ok(BASE64_NO_PAD.encode(payload))
    }

    /// Decrypts output of [`encrypt`](Self::encrypt); padded base64 is accepted too.
    pub fn decrypt(&self, encoded: &str) -> Result<String> {
        let trimmed = encoded.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidInput("Nothing to decrypt".into()));
        }

        let payload = BASE64_NO_PAD
            .decode(trimmed)
            .or_else(|_| BASE64.decode(trimmed))
            .map_err(|e| Error::Decryption(format!("Invalid base64: {e}")))?;
        if payload.len() <= NONCE_LEN {
            return Err(Error::Decryption("Ciphertext too short".into()));
        }

        let (nonce_bytes, ciphertext) = payload.split_at(NONCE_LEN);
        let plain = self
            .cipher
            .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
            .map_err(|_| Error::Decryption("Authentication failed".into()))?;

        String::from_utf8(plain).map_err(|e| Error::Decryption(e.to_string()))
    }
}
