//! # toll-fees
//!
//! Daily toll fee calculation: vehicle exemptions, toll-free days, hourly
//! windows charged at their highest rate, and the daily cap.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Whole-unit entry points for callers.
pub mod api;

/// `TollCalculator` and its itemised result.
pub mod calculator;

/// Gothenburg congestion-tax preset.
pub mod gothenburg;

/// Vehicle descriptors and exempt categories.
pub mod vehicle;

/// Anchor-relative hourly windowing.
pub mod window;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use api::{multi_day_toll_fee, toll_fee, toll_fee_at};
pub use calculator::{DailyFee, Exemption, TollCalculator};
pub use vehicle::{Vehicle, VehicleType};
pub use window::{hourly_windows, HourlyWindow};
