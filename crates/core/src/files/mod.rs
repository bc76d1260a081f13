//! Files module - virtual path resolution and small file operations.

mod file_utils;

pub use file_utils::{delete_file, file_exists, map_path, write_base64_file};
