use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};

use crate::convert::{Coerce, Coerced};

/// Layouts tried, in order, when coercing free-form text to a date-time.
const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Layouts tried for date-only text, which coerces to midnight.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y"];

impl Coerce for NaiveDateTime {
    fn default_value() -> Self {
        NaiveDateTime::MIN
    }

    fn parse_text(text: &str) -> Option<Self> {
        if let Ok(with_offset) = chrono::DateTime::parse_from_rfc3339(text) {
            return Some(with_offset.naive_utc());
        }
        DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
            .or_else(|| {
                DATE_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
                    .map(|date| date.and_time(NaiveTime::default()))
            })
    }
}

pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    first_day_of_month(date) + Duration::days(i64::from(days_in_month(date)) - 1)
}

pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = (date.year(), date.month());
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(start), Some(end)) => (end - start).num_days() as u32,
        // Only December of the last representable year gets here.
        _ => 31,
    }
}

/// Coerces free-form text to a date-time, defaulting to `NaiveDateTime::MIN`.
///
/// Accepts RFC 3339 (converted to UTC), ISO 8601 without offset, and the
/// Turkish `dd.MM.yyyy [HH:mm[:ss]]` layouts. Date-only text maps to midnight.
pub fn to_datetime(text: &str) -> Coerced<NaiveDateTime> {
    NaiveDateTime::coerce(text)
}

/// Coerces text with an explicit `chrono` format string.
pub fn to_datetime_with_format(text: &str, format: &str) -> Coerced<NaiveDateTime> {
    let text = text.trim();
    NaiveDateTime::parse_from_str(text, format)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(text, format)
                .ok()
                .map(|date| date.and_time(NaiveTime::default()))
        })
        .map(Coerced::Parsed)
        .unwrap_or_else(|| {
            log::debug!("'{}' does not match date format '{}'", text, format);
            Coerced::Defaulted(NaiveDateTime::MIN)
        })
}

/// Calendar months from `date` to `now`, ignoring the day of month.
pub fn month_difference(now: &impl Datelike, date: &impl Datelike) -> i32 {
    (now.month() as i32 - date.month() as i32) + 12 * (now.year() - date.year())
}

pub fn day_difference(now: NaiveDate, date: NaiveDate) -> i64 {
    (now - date).num_days()
}

/// Whole years between two dates, counting a year only once its anniversary has passed.
///
/// The anniversary is `end` shifted back by the year delta, so a February 29
/// start is one day short of a full year on February 28.
pub fn year_difference(start: NaiveDate, end: NaiveDate) -> i32 {
    let mut years = end.year() - start.year();
    let months = Months::new(years.unsigned_abs() * 12);
    let shifted = if years >= 0 {
        end.checked_sub_months(months)
    } else {
        end.checked_add_months(months)
    };

    if let Some(anniversary) = shifted {
        if start > anniversary {
            years -= 1;
        }
    }
    years
}

pub fn is_same_day(a: NaiveDate, b: NaiveDate) -> bool {
    a == b
}

pub fn is_same_month(a: &impl Datelike, b: &impl Datelike) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

pub fn is_same_year(a: &impl Datelike, b: &impl Datelike) -> bool {
    a.year() == b.year()
}

/// Every date from `start` to `end`, inclusive. Empty when `start > end`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    days
}
