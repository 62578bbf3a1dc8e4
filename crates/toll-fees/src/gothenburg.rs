//! Gothenburg congestion-tax preset.
//!
//! Weekday rate bands, Swedish public holidays, a 60-unit daily cap, and
//! 60-minute windows.

use crate::calculator::TollCalculator;
use toll_core::{Fee, Result};
use toll_time::{RateTable, Sweden, TimeRate};

type Clock = (u32, u32, u32);

const BANDS: [(Clock, Clock, Fee); 9] = [
    ((6, 0, 0), (6, 29, 59), 8.0),
    ((6, 30, 0), (6, 59, 59), 13.0),
    ((7, 0, 0), (7, 59, 59), 18.0),
    ((8, 0, 0), (8, 29, 59), 13.0),
    ((8, 30, 0), (14, 59, 59), 8.0),
    ((15, 0, 0), (15, 29, 59), 13.0),
    ((15, 30, 0), (16, 59, 59), 18.0),
    ((17, 0, 0), (17, 59, 59), 13.0),
    ((18, 0, 0), (18, 29, 59), 8.0),
];

fn bands() -> Result<Vec<TimeRate>> {
    BANDS
        .iter()
        .map(|&(start, end, fee)| TimeRate::hms(start, end, fee))
        .collect()
}

/// The Gothenburg weekday rate bands.
pub fn rate_table() -> RateTable {
    RateTable::new(bands().expect("Gothenburg rate bands are well-formed"))
}

/// A calculator preloaded with the Gothenburg rules.
pub fn calculator() -> TollCalculator {
    TollCalculator::new(rate_table(), Sweden)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::NaiveTime;

    #[test]
    fn all_bands_are_valid() {
        assert_eq!(bands().map(|b| b.len()), Ok(BANDS.len()));
        assert_eq!(rate_table().len(), BANDS.len());
    }

    #[test]
    fn bands_do_not_overlap() {
        let table = rate_table();
        let rates = table.rates();
        for (i, a) in rates.iter().enumerate() {
            for b in &rates[i + 1..] {
                assert!(!a.overlaps(b), "{a} overlaps {b}");
            }
        }
    }

    #[test]
    fn preset_settings() {
        let calc = calculator();
        assert_eq!(calc.calendar().name(), "Sweden");
        assert_abs_diff_eq!(calc.settings().daily_max_fee(), 60.0);
        assert_eq!(calc.settings().window_minutes(), 60);
        let t = NaiveTime::from_hms_opt(7, 18, 45).unwrap();
        assert_abs_diff_eq!(calc.rates().fee_at(t), 18.0);
    }
}
