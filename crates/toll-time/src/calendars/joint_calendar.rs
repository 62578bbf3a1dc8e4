//! Joint calendar — the union of several holiday calendars.
//!
//! Typical use is a rule-based national calendar plus a [`BespokeCalendar`]
//! of locally declared extra days.
//!
//! [`BespokeCalendar`]: super::bespoke_calendar::BespokeCalendar

use crate::calendar::HolidayCalendar;
use chrono::{Datelike, NaiveDate, Weekday};
use log::debug;

/// A calendar whose holidays are the holidays of **any** constituent.
pub struct JointCalendar {
    calendars: Vec<Box<dyn HolidayCalendar>>,
    name: String,
}

impl std::fmt::Debug for JointCalendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JointCalendar")
            .field("name", &self.name)
            .field("calendars", &self.calendars.len())
            .finish()
    }
}

impl JointCalendar {
    /// Combine `calendars`. An empty list behaves like
    /// [`NoHolidays`](crate::calendar::NoHolidays).
    pub fn new(calendars: Vec<Box<dyn HolidayCalendar>>) -> Self {
        let name = calendars
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ");
        debug!("joint calendar [{name}] built from {} calendar(s)", calendars.len());
        Self { calendars, name }
    }
}

impl HolidayCalendar for JointCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.calendars.iter().any(|c| c.is_holiday(date))
    }

    fn is_weekend(&self, date: NaiveDate) -> bool {
        if self.calendars.is_empty() {
            return matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
        }
        self.calendars.iter().any(|c| c.is_weekend(date))
    }

    fn is_toll_free_day(&self, date: NaiveDate) -> bool {
        if self.calendars.is_empty() {
            return self.is_weekend(date);
        }
        self.calendars.iter().any(|c| c.is_toll_free_day(date))
    }

    /// The first constituent's name for the holiday, in construction order.
    fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        self.calendars.iter().find_map(|c| c.holiday_name(date))
    }
}
