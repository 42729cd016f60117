use chrono::Local;

use crate::error::Result;
use crate::stardate::{date_to_stardate, format_date};

/// Print today's date and stardate with a pointer to the help text
pub fn summary(base_year: i32) -> Result<()> {
    let today = Local::now().date_naive();
    let stardate = date_to_stardate(today, base_year);

    println!("Current Date: {}", format_date(today));
    println!(
        "Current Stardate (using base year {}): {:.2}",
        base_year, stardate
    );
    println!("\nFor more details on available commands and usage, run:");
    println!("  stardate -h or --help");

    Ok(())
}

/// Print the persisted base year
pub fn base(base_year: i32) -> Result<()> {
    println!("Current Reference base year: {}", base_year);
    Ok(())
}
