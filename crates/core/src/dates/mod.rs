//! Dates module - calendar arithmetic, relative phrases and time zones.

mod date_utils;
mod relative_time;
mod time_zones;


pub use date_utils::{
    day_difference, days_between, days_in_month, first_day_of_month, is_same_day, is_same_month,
    is_same_year, last_day_of_month, month_difference, to_datetime, to_datetime_with_format,
    year_difference,
};
pub use relative_time::{to_relative_format, to_relative_format_from_now};
pub use time_zones::{
    convert_to_utc, date_in_zone, find_time_zone, time_zone_names, today, DEFAULT_TIME_ZONE,
};
