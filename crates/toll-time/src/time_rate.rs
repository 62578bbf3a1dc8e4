//! `TimeRate` — a fee charged for passes inside one time-of-day band.

use chrono::NaiveTime;
use toll_core::{fail, Fee, Result};

/// A priced time-of-day band.
///
/// Both ends are inclusive: a band `06:00:00–06:29:59` contains `06:00:00`
/// and `06:29:59` but not `06:30:00`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawTimeRate")
)]
pub struct TimeRate {
    start: NaiveTime,
    end: NaiveTime,
    fee: Fee,
}

impl TimeRate {
    /// Create a band from `start` to `end` (inclusive) charging `fee`.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if `start > end` (bands never wrap midnight)
    /// or if `fee` is negative or not finite.
    pub fn new(start: NaiveTime, end: NaiveTime, fee: Fee) -> Result<Self> {
        if start > end {
            fail!("rate band starts at {start} after it ends at {end}");
        }
        if !fee.is_finite() || fee < 0.0 {
            fail!("rate band {start}-{end} has invalid fee {fee}");
        }
        Ok(Self { start, end, fee })
    }

    /// Create a band from `(hour, minute, second)` triples.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if either triple is not a valid time of day,
    /// plus everything [`TimeRate::new`] rejects.
    pub fn hms(start: (u32, u32, u32), end: (u32, u32, u32), fee: Fee) -> Result<Self> {
        let Some(start_time) = NaiveTime::from_hms_opt(start.0, start.1, start.2) else {
            fail!("invalid band start {:02}:{:02}:{:02}", start.0, start.1, start.2);
        };
        let Some(end_time) = NaiveTime::from_hms_opt(end.0, end.1, end.2) else {
            fail!("invalid band end {:02}:{:02}:{:02}", end.0, end.1, end.2);
        };
        Self::new(start_time, end_time, fee)
    }

    /// First instant of the band.
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// Last instant of the band.
    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Fee charged for a pass inside the band.
    pub fn fee(&self) -> Fee {
        self.fee
    }

    /// Return `true` if `time` lies inside the band, ends included.
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time <= self.end
    }

    /// Return `true` if the two bands share at least one instant.
    pub fn overlaps(&self, other: &TimeRate) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTimeRate {
    start: NaiveTime,
    end: NaiveTime,
    fee: Fee,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTimeRate> for TimeRate {
    type Error = toll_core::Error;

    fn try_from(raw: RawTimeRate) -> Result<Self> {
        Self::new(raw.start, raw.end, raw.fee)
    }
}

impl std::fmt::Display for TimeRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} @ {}", self.start, self.end, self.fee)
    }
}
