//! "N minutes ago" style phrases in Turkish.

use chrono::{Local, NaiveDateTime};

use crate::constants::JSON_DATETIME_FORMAT;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 12 * MONTH;

/// Describes how long before `now` the `source` instant was.
///
/// Returns an empty string when `source` is not in the past. A gap shorter
/// than one second reads `0 saniye önce`. Anything older than about two
/// years is printed as a plain date instead.
///
/// ```
/// use chrono::{Duration, NaiveDate};
/// use yardimci_core::dates::to_relative_format;
///
/// let now = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// assert_eq!(to_relative_format(now - Duration::minutes(10), now), "10 dakika önce");
/// assert_eq!(to_relative_format(now - Duration::hours(30), now), "dün");
/// ```
pub fn to_relative_format(source: NaiveDateTime, now: NaiveDateTime) -> String {
    let elapsed = now - source;
    let millis = elapsed.num_milliseconds();
    if millis <= 0 {
        return String::new();
    }

    let seconds = elapsed.num_seconds();
    match seconds {
        s if s < MINUTE => {
            if s == 1 {
                "bir saniye önce".to_string()
            } else {
                format!("{} saniye önce", s)
            }
        }
        s if s < 2 * MINUTE => "1 dakika önce".to_string(),
        s if s < 45 * MINUTE => format!("{} dakika önce", elapsed.num_minutes()),
        s if s < 90 * MINUTE => "bir saat önce".to_string(),
        s if s < DAY => {
            // 90 minutes to 2 hours would otherwise read "1 saat önce".
            let hours = elapsed.num_hours().max(2);
            format!("{} saat önce", hours)
        }
        s if s < 2 * DAY => "dün".to_string(),
        s if s < MONTH => format!("{} gün önce", elapsed.num_days()),
        s if s < YEAR => {
            let months = elapsed.num_days() / 30;
            if months <= 1 {
                "bir ay önce".to_string()
            } else {
                format!("{} ay önce", months)
            }
        }
        _ => {
            let years = elapsed.num_days() / 365;
            if years <= 1 {
                "bir yıl önce".to_string()
            } else {
                source.format(JSON_DATETIME_FORMAT).to_string()
            }
        }
    }
}

/// [`to_relative_format`] measured against the local wall clock.
pub fn to_relative_format_from_now(source: NaiveDateTime) -> String {
    to_relative_format(source, Local::now().naive_local())
}
