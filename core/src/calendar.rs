//! Calendar arithmetic for the trailing sample window.

use chrono::{Datelike, Duration, NaiveDate};

/// Days of history behind "today" in every time-series window.
pub const WINDOW_DAYS: i64 = 365;

/// Every calendar day in `[today - WINDOW_DAYS, today]`, ascending.
/// Both endpoints are included, so a year window yields 366 rows.
pub fn daily_index(today: NaiveDate) -> Vec<NaiveDate> {
    let start = today - Duration::days(WINDOW_DAYS);
    (0..=WINDOW_DAYS).map(|d| start + Duration::days(d)).collect()
}

/// Last day of `date`'s calendar month — the monthly bucket label.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let first_of_next = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    // The first of a month always exists.
    first_of_next.expect("valid first-of-month date") - Duration::days(1)
}
