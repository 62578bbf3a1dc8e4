//! Bespoke calendar — a calendar whose holidays are an explicit date set.
//!
//! This is the shape a configuration loader produces: a name plus a finite
//! list of dates, each optionally named. Membership is exact; there are no ranges or recurrence
//! rules, so a yearly list has to be refreshed every year (or combined with a
//! rule-based calendar through [`JointCalendar`](super::joint_calendar::JointCalendar)).

use crate::calendar::HolidayCalendar;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// A calendar whose holidays are added explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BespokeCalendar {
    name: String,
    holidays: BTreeMap<NaiveDate, Option<String>>,
}

impl BespokeCalendar {
    /// Create a new bespoke calendar with the given name and no holidays.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: BTreeMap::new(),
        }
    }

    /// Create a calendar holding exactly `holidays`.
    pub fn with_holidays(
        name: impl Into<String>,
        holidays: impl IntoIterator<Item = NaiveDate>,
    ) -> Self {
        Self {
            name: name.into(),
            holidays: holidays.into_iter().map(|date| (date, None)).collect(),
        }
    }

    /// Create a calendar holding exactly `holidays`, each with its name.
    pub fn with_named_holidays<S: Into<String>>(
        name: impl Into<String>,
        holidays: impl IntoIterator<Item = (NaiveDate, S)>,
    ) -> Self {
        Self {
            name: name.into(),
            holidays: holidays
                .into_iter()
                .map(|(date, holiday)| (date, Some(holiday.into())))
                .collect(),
        }
    }

    /// Add a holiday. Weekends are toll-free already.
    ///
    /// A name given earlier for the same date is kept.
    pub fn add_holiday(&mut self, date: NaiveDate) {
        self.holidays.entry(date).or_insert(None);
    }

    /// Add a holiday with a name, replacing any earlier name.
    pub fn add_named_holiday(&mut self, date: NaiveDate, holiday: impl Into<String>) {
        self.holidays.insert(date, Some(holiday.into()));
    }

    /// Remove a previously added holiday.
    pub fn remove_holiday(&mut self, date: NaiveDate) {
        self.holidays.remove(&date);
    }

    /// Return the number of explicitly-added holidays.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    /// Iterate the holidays in date order.
    pub fn holidays(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.holidays.keys().copied()
    }
}

impl HolidayCalendar for BespokeCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }

    fn holiday_list(&self, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
        if from > to {
            return Vec::new();
        }
        self.holidays.range(from..=to).map(|(date, _)| *date).collect()
    }

    fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        self.holidays.get(&date)?.as_deref()
    }
}
