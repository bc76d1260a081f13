//! JSON helpers with the `dd.MM.yyyy HH:mm:ss` date layout.

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::Result;

/// Serializes `value` as indented JSON.
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn from_json_string<T: DeserializeOwned>(text: &str) -> Result<T> {
    Ok(serde_json::from_str(text)?)
}

/// Serde adapter for `NaiveDateTime` fields in the Turkish date layout.
///
/// ```
/// use chrono::NaiveDateTime;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Invoice {
///     #[serde(with = "yardimci_core::strings::turkish_datetime")]
///     issued_at: NaiveDateTime,
/// }
/// ```
pub mod turkish_datetime {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::constants::JSON_DATETIME_FORMAT;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(JSON_DATETIME_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, JSON_DATETIME_FORMAT).map_err(de::Error::custom)
    }
}
