//! Regex based format checks.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Dot-atom local part, then a hostname or a bracketed IPv4 literal
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"(?i)^[\w!#$%&'*+\-/=?^`{|}~]+(?:\.[\w!#$%&'*+\-/=?^`{|}~]+)*@(?:(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?|\[(?:(?:25[0-5]|2[0-4]\d|[01]?\d{1,2})\.){3}(?:25[0-5]|2[0-4]\d|[01]?\d{1,2})\])$"
    )
    .expect("Invalid regex pattern");

    static ref WEB_URL_REGEX: Regex = Regex::new(
        r"^(ht|f)tps?://[0-9a-zA-Z]([-.\w]*[0-9a-zA-Z])*(:[0-9]+)?/?([a-zA-Z0-9\-.?,'/\\+&;%$#_=~]*)?$"
    )
    .expect("Invalid regex pattern");

    static ref NUMERIC_REGEX: Regex =
        Regex::new(r"^-*[0-9,.]+$").expect("Invalid regex pattern");

    static ref IPV4_REGEX: Regex = Regex::new(
        r"^(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$"
    )
    .expect("Invalid regex pattern");

    /// Language code with an optional region, e.g. `tr` or `tr-TR`
    static ref CULTURE_CODE_REGEX: Regex =
        Regex::new(r"^[a-z]{2}(-[A-Z]{2})?$").expect("Invalid regex pattern");

    /// Hyphenated GUID, optionally wrapped in braces
    static ref GUID_REGEX: Regex = Regex::new(
        r"^\{?[a-fA-F0-9]{8}(?:-[a-fA-F0-9]{4}){3}-[a-fA-F0-9]{12}\}?$"
    )
    .expect("Invalid regex pattern");

    static ref ALPHA_REGEX: Regex =
        Regex::new(r"^[a-zA-Z]+$").expect("Invalid regex pattern");

    static ref ALPHA_NUMERIC_REGEX: Regex =
        Regex::new(r"^[a-zA-Z0-9]+$").expect("Invalid regex pattern");
}

pub fn is_valid_email(text: &str) -> bool {
    EMAIL_REGEX.is_match(text)
}

/// `http`, `https`, `ftp` or `ftps` URLs.
pub fn is_web_url(text: &str) -> bool {
    WEB_URL_REGEX.is_match(text)
}

/// Digits with optional leading minus signs and `,`/`.` separators.
pub fn is_numeric(text: &str) -> bool {
    NUMERIC_REGEX.is_match(text)
}

/// Dotted-quad IPv4 address.
pub fn is_valid_ip_address(text: &str) -> bool {
    IPV4_REGEX.is_match(text)
}

pub fn is_culture_code(text: &str) -> bool {
    CULTURE_CODE_REGEX.is_match(text)
}

pub fn is_guid(text: &str) -> bool {
    GUID_REGEX.is_match(text)
}

/// Non-empty and ASCII letters only.
pub fn is_alpha(text: &str) -> bool {
    ALPHA_REGEX.is_match(text)
}

/// Non-empty and ASCII letters or digits only.
pub fn is_alpha_numeric(text: &str) -> bool {
    ALPHA_NUMERIC_REGEX.is_match(text)
}
