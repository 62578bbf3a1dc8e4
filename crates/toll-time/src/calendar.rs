//! `HolidayCalendar` trait and the weekends-only calendar.
//!
//! A holiday calendar knows which calendar dates are toll-free. Weekends are
//! toll-free everywhere; each implementation decides which other dates are
//! holidays.

use chrono::{Datelike, NaiveDate, Weekday};

/// A source of toll-free dates.
///
/// Implementations are immutable after construction and shared across
/// threads by the fee calculator.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Sweden"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a configured holiday.
    ///
    /// Weekends are not holidays unless a calendar says so explicitly; see
    /// [`HolidayCalendar::is_toll_free_day`].
    fn is_holiday(&self, date: NaiveDate) -> bool;

    /// Return `true` if `date` is a weekend according to this calendar.
    ///
    /// Most calendars consider Saturday and Sunday as weekends.
    fn is_weekend(&self, date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Return `true` if passes on `date` are never charged.
    fn is_toll_free_day(&self, date: NaiveDate) -> bool {
        self.is_weekend(date) || self.is_holiday(date)
    }

    /// Collect the holidays in the inclusive range `[from, to]`.
    ///
    /// Weekend days are only listed when the calendar marks them as holidays
    /// in their own right.
    fn holiday_list(&self, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
        from.iter_days()
            .take_while(|d| *d <= to)
            .filter(|d| self.is_holiday(*d))
            .collect()
    }

    /// Name of the holiday on `date`, if the calendar knows one.
    fn holiday_name(&self, _date: NaiveDate) -> Option<&str> {
        None
    }
}

impl<C: HolidayCalendar + ?Sized> HolidayCalendar for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_holiday(&self, date: NaiveDate) -> bool {
        (**self).is_holiday(date)
    }

    fn is_weekend(&self, date: NaiveDate) -> bool {
        (**self).is_weekend(date)
    }

    fn is_toll_free_day(&self, date: NaiveDate) -> bool {
        (**self).is_toll_free_day(date)
    }

    fn holiday_list(&self, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
        (**self).holiday_list(from, to)
    }

    fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        (**self).holiday_name(date)
    }
}

/// A calendar with no holidays: only Saturdays and Sundays are toll-free.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_holiday(&self, _date: NaiveDate) -> bool {
        false
    }
}
