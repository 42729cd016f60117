use chrono::NaiveDate;

use crate::error::{Result, StardateError};

/// Display and input format for calendar dates (DD-MM-YYYY)
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given year (365 or 366)
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Parse a date in DD-MM-YYYY format.
///
/// Impossible dates such as `31-02-2024` are rejected rather than rolled
/// over into the following month.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let parts: Vec<&str> = input.split('-').collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(StardateError::Date(format!(
            "'{}': invalid date format, expected DD-MM-YYYY",
            input
        )));
    };

    let not_numeric = || {
        StardateError::Date(format!(
            "'{}': must be numbers in DD-MM-YYYY format",
            input
        ))
    };
    let day: u32 = day.trim().parse().map_err(|_| not_numeric())?;
    let month: u32 = month.trim().parse().map_err(|_| not_numeric())?;
    let year: i32 = year.trim().parse().map_err(|_| not_numeric())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        StardateError::Date(format!("'{}' is not a valid calendar date", input))
    })
}

/// Format a date as DD-MM-YYYY
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
