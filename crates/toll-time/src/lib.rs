//! # toll-time
//!
//! Time-of-day rate bands, rate tables, and holiday calendars.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCalendar` trait and the weekends-only calendar.
pub mod calendar;

/// Concrete holiday calendars (set-backed, rule-based, joint).
pub mod calendars;

/// `RateTable` — time of day to fee.
pub mod rate_table;

/// `TimeRate` — a single priced time-of-day band.
pub mod time_rate;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{HolidayCalendar, NoHolidays};
pub use calendars::bespoke_calendar::BespokeCalendar;
pub use calendars::joint_calendar::JointCalendar;
pub use calendars::sweden::Sweden;
pub use rate_table::RateTable;
pub use time_rate::TimeRate;
