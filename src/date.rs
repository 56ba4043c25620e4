//! Tolerant `YYYYMMDD` date field decoding.

use chrono::{Days, NaiveDate};

/// Decode the 8-byte ASCII date field.
///
/// Year, month, and day are parsed independently; a component that is not a
/// valid base-10 number contributes zero instead of failing.  Out-of-range
/// components normalize through the proleptic calendar: month 0 rolls back
/// into December of the previous year, day 0 into the last day of the
/// previous month.  The result is only as sane as the source bytes.
pub fn parse_date(field: &[u8; 8]) -> NaiveDate {
    let year = int_or_zero(&field[0..4]);
    let month = int_or_zero(&field[4..6]);
    let day = int_or_zero(&field[6..8]);

    let months = year * 12 + month - 1;
    let first = NaiveDate::from_ymd_opt(
        months.div_euclid(12) as i32,
        (months.rem_euclid(12) + 1) as u32,
        1,
    )
    .unwrap_or_default();
    if day >= 1 {
        first
            .checked_add_days(Days::new(day as u64 - 1))
            .unwrap_or(first)
    } else {
        first
            .checked_sub_days(Days::new((1 - day) as u64))
            .unwrap_or(first)
    }
}

fn int_or_zero(digits: &[u8]) -> i64 {
    std::str::from_utf8(digits)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}
