use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Default timezone for turning instants into calendar dates.
pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::Europe::Istanbul;

/// Converts a wall-clock time in `source_zone` to UTC.
///
/// Returns `None` for times skipped by a DST transition. For times repeated
/// by a transition the earlier instant wins.
pub fn convert_to_utc(local: NaiveDateTime, source_zone: Tz) -> Option<DateTime<Utc>> {
    let converted = source_zone
        .from_local_datetime(&local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc));

    if converted.is_none() {
        log::warn!("{} does not exist in time zone {}", local, source_zone.name());
    }
    converted
}

/// Calendar date of a UTC instant as seen in `zone`.
pub fn date_in_zone(instant: DateTime<Utc>, zone: Tz) -> NaiveDate {
    instant.with_timezone(&zone).date_naive()
}

/// Today's date in [`DEFAULT_TIME_ZONE`].
pub fn today() -> NaiveDate {
    date_in_zone(Utc::now(), DEFAULT_TIME_ZONE)
}

/// IANA names of every time zone known to the library.
pub fn time_zone_names() -> Vec<&'static str> {
    chrono_tz::TZ_VARIANTS.iter().map(|tz| tz.name()).collect()
}

/// Looks up a time zone by IANA name, e.g. `Europe/Istanbul`.
pub fn find_time_zone(name: &str) -> Option<Tz> {
    name.trim().parse().ok()
}
