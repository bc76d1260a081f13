//! General purpose text helpers: sizes, base64, casing, splitting, mojibake repair.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use uuid::Uuid;

const SIZE_SUFFIXES: [&str; 7] = [" byte", " KB", " MB", " GB", " TB", " PB", " EB"];

/// UTF-8 Turkish text that was decoded as Windows-1252, or as Latin-1 when it
/// was really Windows-1254. Two-character sequences must be replaced first.
const MOJIBAKE_FIXES: &[(&str, &str)] = &[
    ("Ã‡", "Ç"),
    ("Ã§", "ç"),
    ("Äž", "Ğ"),
    ("ÄŸ", "ğ"),
    ("Ä°", "İ"),
    ("Ä±", "ı"),
    ("Ã–", "Ö"),
    ("Ã¶", "ö"),
    ("Åž", "Ş"),
    ("ÅŸ", "ş"),
    ("Ãœ", "Ü"),
    ("Ã¼", "ü"),
    ("Ã¢", "â"),
    ("Ã®", "î"),
    ("Ã»", "û"),
    ("Ã©", "é"),
    ("Ã´", "ô"),
    ("Ãº", "ú"),
    ("Ð", "Ğ"),
    ("ð", "ğ"),
    ("Ý", "İ"),
    ("ý", "ı"),
    ("Þ", "Ş"),
    ("þ", "ş"),
];

/// Formats a byte count with 1024-based units and one fractional digit.
///
/// ```
/// use yardimci_core::strings::bytes_to_string;
///
/// assert_eq!(bytes_to_string(0), "0 byte");
/// assert_eq!(bytes_to_string(1536), "1.5 KB");
/// assert_eq!(bytes_to_string(-1048576), "-1 MB");
/// ```
pub fn bytes_to_string(byte_count: i64) -> String {
    if byte_count == 0 {
        return format!("0{}", SIZE_SUFFIXES[0]);
    }

    let bytes = byte_count.unsigned_abs();
    let mut place = 0;
    while place + 1 < SIZE_SUFFIXES.len() && bytes >= 1u64 << (10 * (place + 1)) {
        place += 1;
    }

    let scaled = bytes as f64 / (1u64 << (10 * place)) as f64;
    let rounded = (scaled * 10.0).round() / 10.0;
    let signed = if byte_count < 0 { -rounded } else { rounded };

    format!("{}{}", signed, SIZE_SUFFIXES[place])
}

pub fn to_base64(text: &str) -> String {
    BASE64.encode(text.as_bytes())
}

/// Decodes base64 into UTF-8 text; invalid input yields an empty string.
pub fn from_base64(text: &str) -> String {
    BASE64
        .decode(text.trim())
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or_default()
}

/// A random v4 GUID, hyphenated when `with_dash` is set.
pub fn generate_guid(with_dash: bool) -> String {
    let id = Uuid::new_v4();
    if with_dash {
        id.hyphenated().to_string()
    } else {
        id.simple().to_string()
    }
}

/// Lowercases the text, then uppercases the first letter of every word.
pub fn to_capitalize(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            result.push(c);
            at_word_start = true;
        } else if at_word_start {
            result.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }
    result
}

pub fn clear_text(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Returns the text when present and non-empty, otherwise `default` (or "").
pub fn to_safe(value: Option<&str>, default: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.unwrap_or_default().to_string(),
    }
}

/// Splits on `separator`, dropping empty entries.
pub fn split_safe(value: &str, separator: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    if separator.is_empty() {
        return vec![value.to_string()];
    }
    value
        .split(separator)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses a comma separated list of integers, skipping entries that don't parse.
pub fn to_int_array(text: &str) -> Vec<i32> {
    split_safe(text, ",")
        .iter()
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}

/// Checks whether a comma separated integer list contains `value`.
///
/// Returns `default` when the list is missing or has no parseable entries.
pub fn int_array_contains(text: Option<&str>, value: i32, default: bool) -> bool {
    let Some(text) = text else {
        return default;
    };
    let values = to_int_array(text);
    if values.is_empty() {
        return default;
    }
    values.contains(&value)
}

/// Repairs Turkish characters mangled by a wrong code page.
pub fn fix_chars(text: &str) -> String {
    MOJIBAKE_FIXES
        .iter()
        .fold(text.to_string(), |acc, (corrupted, fixed)| {
            if acc.contains(corrupted) {
                acc.replace(corrupted, fixed)
            } else {
                acc
            }
        })
}
