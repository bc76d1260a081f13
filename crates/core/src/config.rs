use std::path::PathBuf;

use crate::constants::{CONTENT_ROOT_ENV, ENCRYPTION_KEY_ENV};

/// Settings shared by the file and encryption helpers.
#[derive(Debug, Clone)]
pub struct HelperConfig {
    /// Directory that `~/...` virtual paths resolve against.
    pub content_root: PathBuf,
    /// Passphrase for [`StringCipher`](crate::security::StringCipher).
    pub encryption_key: Option<String>,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            content_root: PathBuf::from("."),
            encryption_key: None,
        }
    }
}

impl HelperConfig {
    /// Reads settings from the environment, loading a `.env` file first if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let content_root = non_empty(CONTENT_ROOT_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        let encryption_key = non_empty(ENCRYPTION_KEY_ENV);

        if encryption_key.is_none() {
            log::debug!("{} is not set; string encryption is unavailable", ENCRYPTION_KEY_ENV);
        }

        Self {
            content_root,
            encryption_key,
        }
    }
}
