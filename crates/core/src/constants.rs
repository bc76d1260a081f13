/// Length of a Turkish IBAN, the only length the validator accepts
pub const IBAN_LENGTH: usize = 26;

/// Check digit pairs that are never issued
pub const RESERVED_IBAN_CHECK_DIGITS: [&str; 3] = ["00", "01", "99"];

/// Fraction digits rendered for lira amounts
pub const MONEY_DECIMAL_PRECISION: u32 = 2;

/// Number of three-digit groups rendered for the lira part
pub const MONEY_GROUP_COUNT: usize = 6;

/// Environment variable holding the content root for virtual paths
pub const CONTENT_ROOT_ENV: &str = "YARDIMCI_CONTENT_ROOT";

/// Environment variable holding the string encryption passphrase
pub const ENCRYPTION_KEY_ENV: &str = "YARDIMCI_ENCRYPTION_KEY";

/// Date-time layout used by the JSON helpers
pub const JSON_DATETIME_FORMAT: &str = "%d.%m.%Y %H:%M:%S";
