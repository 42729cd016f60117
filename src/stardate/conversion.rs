use chrono::{Datelike, Duration, NaiveDate};

use super::calendar::days_in_year;
use crate::error::{Result, StardateError};

/// Stardate units per calendar year
const UNITS_PER_YEAR: f64 = 1000.0;

/// Convert a calendar date to a stardate relative to `base_year`.
///
/// `1000 * (year - base_year) + (day_of_year / days_in_year) * 1000`
pub fn date_to_stardate(date: NaiveDate, base_year: i32) -> f64 {
    let year_offset = (i64::from(date.year()) - i64::from(base_year)) as f64;
    let progress = f64::from(date.ordinal()) / f64::from(days_in_year(date.year()));
    UNITS_PER_YEAR * year_offset + progress * UNITS_PER_YEAR
}

/// Convert a stardate back to a calendar date relative to `base_year`.
///
/// The day of year is rounded half-up, so this is only an inverse of
/// [`date_to_stardate`] to within a day. A rounded day of zero lands on
/// December 31st of the previous year.
pub fn stardate_to_date(stardate: f64, base_year: i32) -> Result<NaiveDate> {
    if !stardate.is_finite() {
        return Err(StardateError::Conversion(format!(
            "stardate {} is not a finite number",
            stardate
        )));
    }

    let year_offset = (stardate / UNITS_PER_YEAR).floor();
    let year = f64::from(base_year) + year_offset;
    if year < f64::from(NaiveDate::MIN.year()) || year > f64::from(NaiveDate::MAX.year()) {
        return Err(StardateError::Conversion(format!(
            "stardate {:.2} with base year {} is outside the supported calendar range",
            stardate, base_year
        )));
    }
    let year = year as i32;

    let fraction = stardate - year_offset * UNITS_PER_YEAR;
    let total_days = f64::from(days_in_year(year));
    let day_of_year = (fraction / UNITS_PER_YEAR * total_days + 0.5).floor() as i64;

    NaiveDate::from_yo_opt(year, 1)
        .and_then(|jan_first| jan_first.checked_add_signed(Duration::days(day_of_year - 1)))
        .ok_or_else(|| {
            StardateError::Conversion(format!(
                "stardate {:.2} with base year {} is outside the supported calendar range",
                stardate, base_year
            ))
        })
}
