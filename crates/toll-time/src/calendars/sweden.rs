//! Sweden calendar.

use super::easter_sunday;
use crate::calendar::HolidayCalendar;
use chrono::{Datelike, NaiveDate, Weekday};

/// Swedish public holidays, computed for any year.
///
/// The following holidays are observed (weekends are toll-free regardless):
/// * New Year's Day (Jan 1)
/// * Epiphany (Jan 6)
/// * Good Friday (Easter − 2)
/// * Easter Monday (Easter + 1)
/// * Labour Day (May 1)
/// * Ascension Thursday (Easter + 39)
/// * National Day (Jun 6)
/// * Midsummer Eve (Friday between Jun 19–25)
/// * Christmas Eve (Dec 24)
/// * Christmas Day (Dec 25)
/// * Boxing Day (Dec 26)
/// * New Year's Eve (Dec 31)
///
/// Easter-relative holidays are only observed from 1583 on.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sweden;

impl Sweden {
    fn holiday(date: NaiveDate) -> Option<&'static str> {
        let name = match (date.month(), date.day()) {
            (1, 1) => "New Year's Day",
            (1, 6) => "Epiphany",
            (5, 1) => "Labour Day",
            (6, 6) => "National Day",
            (6, 19..=25) if date.weekday() == Weekday::Fri => "Midsummer Eve",
            (12, 24) => "Christmas Eve",
            (12, 25) => "Christmas Day",
            (12, 26) => "Boxing Day",
            (12, 31) => "New Year's Eve",
            _ => return Self::easter_holiday(date),
        };
        Some(name)
    }

    fn easter_holiday(date: NaiveDate) -> Option<&'static str> {
        let easter = easter_sunday(date.year())?;
        match (date - easter).num_days() {
            -2 => Some("Good Friday"),
            1 => Some("Easter Monday"),
            39 => Some("Ascension Thursday"),
            _ => None,
        }
    }
}

impl HolidayCalendar for Sweden {
    fn name(&self) -> &str {
        "Sweden"
    }

    fn is_holiday(&self, date: NaiveDate) -> bool {
        Self::holiday(date).is_some()
    }

    fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        Self::holiday(date)
    }
}
