//! `TollCalculator` — the daily fee rule.
//!
//! A day's passes are charged as follows:
//!
//! 1. Passes must all fall on one calendar date; mixed input is rejected
//!    before anything is priced. Use
//!    [`TollCalculator::compute_multi_day_fee`] for mixed-date batches.
//! 2. Toll-free vehicles, weekends, and holidays are charged nothing.
//! 3. Passes are split into anchor-relative hourly windows
//!    (see [`hourly_windows`]).
//! 4. Each window is charged once, at the highest rate among its passes.
//! 5. Window charges are summed, and the sum never exceeds the daily cap.
//!
//! All amounts stay fractional here; truncation to whole units happens only
//! in [`crate::api`].

use crate::vehicle::{Vehicle, VehicleType};
use crate::window::{hourly_windows, HourlyWindow};
use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, trace};
use std::collections::BTreeMap;
use toll_core::{Error, Fee, FeeSettings, Result};
use toll_time::{HolidayCalendar, RateTable};

/// Why a day was charged nothing without pricing any pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exemption {
    /// The batch held no passes.
    NoPasses,
    /// The vehicle category is never charged.
    TollFreeVehicle(VehicleType),
    /// Saturday or Sunday.
    Weekend,
    /// Any other date the holiday calendar marks toll-free.
    Holiday,
}

impl std::fmt::Display for Exemption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Exemption::NoPasses => write!(f, "no passes"),
            Exemption::TollFreeVehicle(kind) => write!(f, "toll-free vehicle ({kind})"),
            Exemption::Weekend => write!(f, "weekend"),
            Exemption::Holiday => write!(f, "holiday"),
        }
    }
}

/// Itemised result of charging one day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyFee {
    date: Option<NaiveDate>,
    exemption: Option<Exemption>,
    windows: Vec<(HourlyWindow, Fee)>,
    billed: Fee,
    total: Fee,
}

impl DailyFee {
    fn exempt(date: Option<NaiveDate>, reason: Exemption) -> Self {
        Self {
            date,
            exemption: Some(reason),
            windows: Vec::new(),
            billed: 0.0,
            total: 0.0,
        }
    }

    /// The charged date; `None` for an empty batch.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Set when the day was not priced at all.
    pub fn exemption(&self) -> Option<Exemption> {
        self.exemption
    }

    /// Each window with the fee it was charged, in chronological order.
    pub fn windows(&self) -> &[(HourlyWindow, Fee)] {
        &self.windows
    }

    /// Sum of window charges before the daily cap.
    pub fn billed(&self) -> Fee {
        self.billed
    }

    /// Amount due: `min(billed, daily cap)`.
    pub fn total(&self) -> Fee {
        self.total
    }

    /// Return `true` if the daily cap reduced the amount due.
    pub fn is_capped(&self) -> bool {
        self.billed > self.total
    }
}

/// Computes toll fees from a rate table, a holiday calendar, and settings.
///
/// Immutable once built; share it by reference or `Arc` across threads.
#[derive(Debug)]
pub struct TollCalculator {
    rates: RateTable,
    calendar: Box<dyn HolidayCalendar>,
    settings: FeeSettings,
}

impl TollCalculator {
    /// Build a calculator with default [`FeeSettings`].
    pub fn new(rates: RateTable, calendar: impl HolidayCalendar + 'static) -> Self {
        Self {
            rates,
            calendar: Box::new(calendar),
            settings: FeeSettings::default(),
        }
    }

    /// Replace the settings.
    pub fn with_settings(mut self, settings: FeeSettings) -> Self {
        self.settings = settings;
        self
    }

    /// The rate table in use.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// The holiday calendar in use.
    pub fn calendar(&self) -> &dyn HolidayCalendar {
        self.calendar.as_ref()
    }

    /// The settings in use.
    pub fn settings(&self) -> &FeeSettings {
        &self.settings
    }

    /// Why `vehicle` is not charged on `date`, if it is not.
    pub fn exemption(&self, vehicle: &Vehicle, date: NaiveDate) -> Option<Exemption> {
        if vehicle.is_toll_free() {
            Some(Exemption::TollFreeVehicle(vehicle.kind()))
        } else if !self.calendar.is_toll_free_day(date) {
            None
        } else if self.calendar.is_weekend(date) {
            Some(Exemption::Weekend)
        } else {
            Some(Exemption::Holiday)
        }
    }

    /// Fee due for one day's passes.
    ///
    /// # Errors
    /// `Error::NotSameDay` if the passes span more than one calendar date.
    pub fn compute_daily_fee(&self, vehicle: &Vehicle, passes: &[NaiveDateTime]) -> Result<Fee> {
        let Some(date) = shared_date(passes)? else {
            debug!("{vehicle}: no passes, nothing to charge");
            return Ok(0.0);
        };
        Ok(self.charge_day(vehicle, date, passes))
    }

    /// Like [`compute_daily_fee`](Self::compute_daily_fee), itemised per
    /// window.
    ///
    /// # Errors
    /// `Error::NotSameDay` if the passes span more than one calendar date.
    pub fn daily_breakdown(&self, vehicle: &Vehicle, passes: &[NaiveDateTime]) -> Result<DailyFee> {
        let Some(date) = shared_date(passes)? else {
            return Ok(DailyFee::exempt(None, Exemption::NoPasses));
        };
        if let Some(reason) = self.exemption(vehicle, date) {
            return Ok(DailyFee::exempt(Some(date), reason));
        }

        let windows: Vec<(HourlyWindow, Fee)> = hourly_windows(passes, self.settings.window())
            .into_iter()
            .map(|window| {
                let fee = window.fee(&self.rates);
                (window, fee)
            })
            .collect();
        let billed: Fee = windows.iter().map(|(_, fee)| fee).sum();
        Ok(DailyFee {
            date: Some(date),
            exemption: None,
            windows,
            billed,
            total: billed.min(self.settings.daily_max_fee()),
        })
    }

    /// Fee due for passes spanning any number of days.
    ///
    /// Passes are grouped by calendar date and each day is charged, and
    /// capped, on its own.
    pub fn compute_multi_day_fee(&self, vehicle: &Vehicle, passes: &[NaiveDateTime]) -> Fee {
        self.daily_fees(vehicle, passes).values().sum()
    }

    /// Fee due per calendar date for passes spanning any number of days.
    pub fn daily_fees(&self, vehicle: &Vehicle, passes: &[NaiveDateTime]) -> BTreeMap<NaiveDate, Fee> {
        let mut by_day: BTreeMap<NaiveDate, Vec<NaiveDateTime>> = BTreeMap::new();
        for pass in passes {
            by_day.entry(pass.date()).or_default().push(*pass);
        }
        by_day
            .into_iter()
            .map(|(date, day_passes)| (date, self.charge_day(vehicle, date, &day_passes)))
            .collect()
    }

    /// Charge passes already known to share `date`.
    fn charge_day(&self, vehicle: &Vehicle, date: NaiveDate, passes: &[NaiveDateTime]) -> Fee {
        if let Some(reason) = self.exemption(vehicle, date) {
            match self.calendar.holiday_name(date) {
                Some(holiday) if reason == Exemption::Holiday => {
                    debug!("{vehicle} on {date}: not charged ({reason}: {holiday})")
                }
                _ => debug!("{vehicle} on {date}: not charged ({reason})"),
            }
            return 0.0;
        }

        let cap = self.settings.daily_max_fee();
        let windows = hourly_windows(passes, self.settings.window());
        let mut total: Fee = 0.0;
        for (i, window) in windows.iter().enumerate() {
            let fee = window.fee(&self.rates);
            trace!(
                "{vehicle} on {date}: window {} anchored at {} ({} pass(es)) charged {fee}",
                i + 1,
                window.anchor().time(),
                window.len()
            );
            total += fee;
            if total >= cap {
                debug!("{vehicle} on {date}: daily cap {cap} reached after {} window(s)", i + 1);
                return cap;
            }
        }
        debug!("{vehicle} on {date}: {} window(s), total {total}", windows.len());
        total
    }
}

/// The date every pass falls on, or `None` for an empty batch.
fn shared_date(passes: &[NaiveDateTime]) -> Result<Option<NaiveDate>> {
    let Some(first) = passes.first().map(NaiveDateTime::date) else {
        return Ok(None);
    };
    match passes.iter().map(NaiveDateTime::date).find(|d| *d != first) {
        Some(other) => Err(Error::NotSameDay { first, other }),
        None => Ok(Some(first)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::{Datelike, Weekday};
    use toll_time::{BespokeCalendar, NoHolidays, TimeRate};

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    fn flat_rate(fee: Fee) -> RateTable {
        RateTable::new(vec![TimeRate::hms((0, 0, 0), (23, 59, 59), fee).unwrap()])
    }

    fn car() -> Vehicle {
        Vehicle::new(VehicleType::Car)
    }

    #[test]
    fn shared_date_detection() {
        assert_eq!(shared_date(&[]), Ok(None));
        let d = NaiveDate::from_ymd_opt(2023, 5, 10).unwrap();
        assert_eq!(shared_date(&[at(2023, 5, 10, 6, 0), at(2023, 5, 10, 23, 0)]), Ok(Some(d)));
        assert!(matches!(
            shared_date(&[at(2023, 5, 10, 6, 0), at(2023, 5, 11, 6, 0)]),
            Err(Error::NotSameDay { .. })
        ));
    }

    #[test]
    fn validation_precedes_exemption() {
        let calc = TollCalculator::new(flat_rate(10.0), NoHolidays);
        let motorbike = Vehicle::new(VehicleType::Motorbike);
        let passes = [at(2023, 5, 10, 6, 0), at(2023, 5, 11, 6, 0)];
        assert!(calc.compute_daily_fee(&motorbike, &passes).is_err());
    }

    #[test]
    fn custom_cap_and_window() {
        let settings = FeeSettings::new(25.0, 30).unwrap();
        let calc = TollCalculator::new(flat_rate(10.0), NoHolidays).with_settings(settings);
        // 30-minute windows: {6:00, 6:30}, {7:00}, {7:45}
        let passes = [
            at(2023, 5, 10, 6, 0),
            at(2023, 5, 10, 6, 30),
            at(2023, 5, 10, 7, 0),
            at(2023, 5, 10, 7, 45),
        ];
        assert_abs_diff_eq!(calc.compute_daily_fee(&car(), &passes).unwrap(), 25.0);
        let breakdown = calc.daily_breakdown(&car(), &passes).unwrap();
        assert_eq!(breakdown.windows().len(), 3);
        assert_abs_diff_eq!(breakdown.billed(), 30.0);
        assert!(breakdown.is_capped());
    }

    #[test]
    fn exemption_reasons() {
        let cal = BespokeCalendar::with_holidays("H", [NaiveDate::from_ymd_opt(2023, 5, 1).unwrap()]);
        let calc = TollCalculator::new(flat_rate(10.0), cal);
        let date = |d| NaiveDate::from_ymd_opt(2023, 5, d).unwrap();
        assert_eq!(calc.exemption(&car(), date(1)), Some(Exemption::Holiday));
        assert_eq!(calc.exemption(&car(), date(6)), Some(Exemption::Weekend));
        assert_eq!(calc.exemption(&car(), date(10)), None);
        assert_eq!(
            calc.exemption(&Vehicle::new(VehicleType::Diplomat), date(10)),
            Some(Exemption::TollFreeVehicle(VehicleType::Diplomat))
        );
    }

    /// Frees every Wednesday through `is_toll_free_day` alone.
    #[derive(Debug)]
    struct FreeWednesdays;

    impl HolidayCalendar for FreeWednesdays {
        fn name(&self) -> &str {
            "Free Wednesdays"
        }

        fn is_holiday(&self, _date: NaiveDate) -> bool {
            false
        }

        fn is_toll_free_day(&self, date: NaiveDate) -> bool {
            date.weekday() == Weekday::Wed || self.is_weekend(date)
        }
    }

    #[test]
    fn calendar_toll_free_days_are_honoured() {
        let calc = TollCalculator::new(flat_rate(10.0), FreeWednesdays);
        let wednesday = [at(2023, 5, 10, 6, 0)];
        let thursday = [at(2023, 5, 11, 6, 0)];
        assert_abs_diff_eq!(calc.compute_daily_fee(&car(), &wednesday).unwrap(), 0.0);
        assert_abs_diff_eq!(calc.compute_daily_fee(&car(), &thursday).unwrap(), 10.0);
        assert_eq!(
            calc.daily_breakdown(&car(), &wednesday).unwrap().exemption(),
            Some(Exemption::Holiday)
        );
        assert_eq!(
            calc.exemption(&car(), NaiveDate::from_ymd_opt(2023, 5, 13).unwrap()),
            Some(Exemption::Weekend)
        );
    }

    #[test]
    fn empty_breakdown() {
        let calc = TollCalculator::new(flat_rate(10.0), NoHolidays);
        let breakdown = calc.daily_breakdown(&car(), &[]).unwrap();
        assert_eq!(breakdown.date(), None);
        assert_eq!(breakdown.exemption(), Some(Exemption::NoPasses));
        assert_abs_diff_eq!(breakdown.total(), 0.0);
    }

    #[test]
    fn fractional_fees_are_kept() {
        let calc = TollCalculator::new(flat_rate(8.4), NoHolidays);
        let passes = [at(2023, 5, 10, 6, 0), at(2023, 5, 10, 8, 0)];
        assert_abs_diff_eq!(calc.compute_daily_fee(&car(), &passes).unwrap(), 16.8, epsilon = 1e-9);
    }

    #[test]
    fn exemption_display() {
        assert_eq!(Exemption::Weekend.to_string(), "weekend");
        assert_eq!(
            Exemption::TollFreeVehicle(VehicleType::Military).to_string(),
            "toll-free vehicle (Military)"
        );
    }
}
