//! Resolution of application-relative paths such as `~/uploads/logo.png`.
//!
//! Virtual paths are always resolved inside a content root. `.` and `..`
//! segments are dropped, so a virtual path can never climb out of the root.

use std::fs;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::errors::{Error, Result};

/// Maps a virtual path onto `content_root`.
///
/// Both `/` and `\` separate segments.
pub fn map_path(virtual_path: &str, content_root: &Path) -> PathBuf {
    let relative = virtual_path
        .trim()
        .strip_prefix('~')
        .unwrap_or(virtual_path.trim());

    relative
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty() && *segment != "." && *segment != "..")
        .fold(content_root.to_path_buf(), |path, segment| path.join(segment))
}

pub fn file_exists(virtual_path: &str, content_root: &Path) -> bool {
    map_path(virtual_path, content_root).is_file()
}

/// Deletes the file if it exists. Returns `true` only when a file was removed.
pub fn delete_file(virtual_path: &str, content_root: &Path) -> bool {
    let path = map_path(virtual_path, content_root);
    if !path.is_file() {
        return false;
    }
    match fs::remove_file(&path) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Failed to delete {}: {}", path.display(), e);
            false
        }
    }
}

/// Decodes base64 `data` (a `data:` URL prefix is allowed) and writes it to the
/// virtual path, creating parent directories. Returns the virtual path.
pub fn write_base64_file(data: &str, virtual_path: &str, content_root: &Path) -> Result<String> {
    let encoded = match data.split_once(";base64,") {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => data,
    };
    let bytes = BASE64
        .decode(encoded.trim())
        .map_err(|e| Error::InvalidInput(format!("Invalid base64 file content: {e}")))?;

    let path = map_path(virtual_path, content_root);
    if path == content_root {
        return Err(Error::InvalidInput(format!(
            "'{}' does not name a file",
            virtual_path
        )));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, bytes)?;
    log::debug!("Wrote {}", path.display());

    Ok(virtual_path.to_string())
}
