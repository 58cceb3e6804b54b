// Date utility functions
// Day boundaries used to clamp created ranges

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

pub const MILLISECONDS_PER_MINUTE: i64 = 60_000;
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// First instant of `date` (00:00:00.000).
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last representable millisecond of `date` (23:59:59.999).
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or_else(|| start_of_day(date))
}

pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

pub fn minutes(count: u32) -> Duration {
    Duration::minutes(i64::from(count))
}
