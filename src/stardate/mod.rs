//! Stardate arithmetic module
//!
//! Calendar helpers (leap years, DD-MM-YYYY parsing) and the
//! date <-> stardate conversion formulas.

pub mod calendar;
pub mod conversion;

pub use calendar::{format_date, parse_date};
pub use conversion::{date_to_stardate, stardate_to_date};
