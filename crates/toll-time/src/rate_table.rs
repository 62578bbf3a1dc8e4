//! `RateTable` — maps a time of day to the fee charged at that moment.
//!
//! The table is an immutable list of [`TimeRate`] bands. Bands may overlap;
//! a lookup considers every band that contains the query time and returns the
//! highest fee among them, so the result does not depend on band order.
//! Times covered by no band are free.

use crate::time_rate::TimeRate;
use chrono::NaiveTime;
use log::debug;
use toll_core::{fail, Fee, Result};

/// An immutable collection of priced time-of-day bands.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RateTable {
    rates: Vec<TimeRate>,
}

impl RateTable {
    /// Build a table from caller-supplied bands.
    pub fn new(rates: Vec<TimeRate>) -> Self {
        let overlaps = count_overlaps(&rates);
        if overlaps > 0 {
            debug!("rate table has {overlaps} overlapping band pair(s); highest fee wins");
        }
        Self { rates }
    }

    /// Fee charged at `time`.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if `time` is `None`: a pass without a time of
    /// day cannot be priced.
    pub fn lookup(&self, time: Option<NaiveTime>) -> Result<Fee> {
        let Some(time) = time else {
            fail!("time of day is required to look up a rate");
        };
        Ok(self.fee_at(time))
    }

    /// Fee charged at `time`, or `0.0` if no band contains it.
    pub fn fee_at(&self, time: NaiveTime) -> Fee {
        self.rates
            .iter()
            .filter(|rate| rate.contains(time))
            .map(TimeRate::fee)
            .fold(0.0, Fee::max)
    }

    /// The configured bands, in the order they were supplied.
    pub fn rates(&self) -> &[TimeRate] {
        &self.rates
    }

    /// Number of configured bands.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Return `true` if no band is configured (every time is free).
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl FromIterator<TimeRate> for RateTable {
    fn from_iter<I: IntoIterator<Item = TimeRate>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn count_overlaps(rates: &[TimeRate]) -> usize {
    rates
        .iter()
        .enumerate()
        .map(|(i, a)| rates[i + 1..].iter().filter(|b| a.overlaps(b)).count())
        .sum()
}
