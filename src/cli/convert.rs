use chrono::Local;

use crate::error::Result;
use crate::stardate::{date_to_stardate, format_date, parse_date, stardate_to_date};

/// Convert a stardate to a calendar date
pub fn to_date(stardate: f64, base_year: i32) -> Result<()> {
    let date = stardate_to_date(stardate, base_year)?;

    println!(
        "Converted stardate {:.2} to human date: {} (using base year {})",
        stardate,
        format_date(date),
        base_year
    );
    Ok(())
}

/// Convert a DD-MM-YYYY date (defaults to today) to a stardate
pub fn to_stardate(date: Option<&str>, base_year: i32) -> Result<()> {
    let date = match date {
        Some(date_str) => parse_date(date_str)?,
        None => Local::now().date_naive(),
    };
    let stardate = date_to_stardate(date, base_year);

    println!(
        "Converted date {} to stardate: {:.2} (using base year {})",
        format_date(date),
        stardate,
        base_year
    );
    Ok(())
}
