//! Concrete holiday calendars.

/// Calendar backed by an explicit set of holiday dates.
pub mod bespoke_calendar;

/// Union of several calendars.
pub mod joint_calendar;

/// Rule-based Swedish public holidays.
pub mod sweden;

const FIRST_GREGORIAN_YEAR: i32 = 1583;

/// Easter Sunday for `year` (Gregorian computus, Oudin's algorithm).
///
/// Returns `None` before 1583, the first full Gregorian year, and for years
/// `chrono` cannot represent.
pub(crate) fn easter_sunday(year: i32) -> Option<chrono::NaiveDate> {
    if year < FIRST_GREGORIAN_YEAR {
        return None;
    }
    let g = year % 19;
    let c = year / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (year + year / 4 + i + 2 - c + c / 4) % 7;
    let p = i - j;
    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;
    chrono::NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}
