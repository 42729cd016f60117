//! Command-line interface module
//!
//! One function per mode, dispatched from `main` in priority order:
//! - show: current date summary and the persisted base year
//! - base: persist a new base year
//! - convert: stardate -> date and date -> stardate
pub mod base;
pub mod convert;
pub mod show;
