//! Caller-facing entry points returning whole currency units.
//!
//! The calculator works in fractional units throughout; these functions
//! floor the final total and nothing else.

use crate::calculator::TollCalculator;
use crate::vehicle::Vehicle;
use chrono::{DateTime, NaiveDateTime, TimeZone};
use toll_core::{truncate_fee, Result, WholeFee};

/// Whole-unit fee for one day's passes.
///
/// # Errors
/// `Error::NotSameDay` if the passes span more than one calendar date.
pub fn toll_fee(calc: &TollCalculator, vehicle: &Vehicle, passes: &[NaiveDateTime]) -> Result<WholeFee> {
    calc.compute_daily_fee(vehicle, passes).map(truncate_fee)
}

/// Whole-unit fee for one day's zoned passes.
///
/// Each instant is read on the wall clock of its own zone, so the caller
/// decides the zone by choosing `Tz` (e.g. `chrono::Local`).
///
/// # Errors
/// `Error::NotSameDay` if the local dates differ.
pub fn toll_fee_at<Tz: TimeZone>(
    calc: &TollCalculator,
    vehicle: &Vehicle,
    passes: &[DateTime<Tz>],
) -> Result<WholeFee> {
    let local: Vec<NaiveDateTime> = passes.iter().map(DateTime::naive_local).collect();
    toll_fee(calc, vehicle, &local)
}

/// Whole-unit fee for passes spanning any number of days.
pub fn multi_day_toll_fee(calc: &TollCalculator, vehicle: &Vehicle, passes: &[NaiveDateTime]) -> WholeFee {
    truncate_fee(calc.compute_multi_day_fee(vehicle, passes))
}
