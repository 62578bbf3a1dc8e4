//! Rate table behaviour against the Gothenburg-style band layout, plus
//! property tests for overlap resolution.

use approx::assert_abs_diff_eq;
use chrono::NaiveTime;
use proptest::prelude::*;
use toll_core::Error;
use toll_time::{RateTable, TimeRate};

fn t(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).unwrap()
}

fn weekday_table() -> RateTable {
    [
        ((6, 0, 0), (6, 29, 59), 8.0),
        ((6, 30, 0), (6, 59, 59), 13.0),
        ((7, 0, 0), (7, 59, 59), 18.0),
        ((8, 0, 0), (8, 29, 59), 13.0),
        ((8, 30, 0), (14, 59, 59), 8.0),
        ((15, 0, 0), (15, 29, 59), 13.0),
        ((15, 30, 0), (16, 59, 59), 18.0),
        ((17, 0, 0), (17, 59, 59), 13.0),
        ((18, 0, 0), (18, 29, 59), 8.0),
    ]
    .into_iter()
    .map(|(start, end, fee)| TimeRate::hms(start, end, fee).unwrap())
    .collect()
}

#[test]
fn before_the_first_band() {
    assert_abs_diff_eq!(weekday_table().lookup(Some(t(3, 0, 0))).unwrap(), 0.0);
}

#[test]
fn start_of_a_band() {
    assert_abs_diff_eq!(weekday_table().lookup(Some(t(8, 30, 0))).unwrap(), 8.0);
}

#[test]
fn inside_a_band() {
    assert_abs_diff_eq!(weekday_table().lookup(Some(t(11, 30, 0))).unwrap(), 8.0);
}

#[test]
fn end_of_a_band() {
    assert_abs_diff_eq!(weekday_table().lookup(Some(t(14, 59, 59))).unwrap(), 8.0);
}

#[test]
fn after_the_last_band() {
    assert_abs_diff_eq!(weekday_table().lookup(Some(t(23, 0, 0))).unwrap(), 0.0);
}

#[test]
fn rush_hour_peaks() {
    let table = weekday_table();
    assert_abs_diff_eq!(table.fee_at(t(7, 18, 45)), 18.0);
    assert_abs_diff_eq!(table.fee_at(t(15, 25, 0)), 13.0);
    assert_abs_diff_eq!(table.fee_at(t(16, 15, 0)), 18.0);
}

#[test]
fn missing_time_is_rejected() {
    let err = weekday_table().lookup(None).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(err.to_string().contains("time of day"));
}

fn arb_time() -> impl Strategy<Value = NaiveTime> {
    (0u32..24, 0u32..60, 0u32..60).prop_map(|(h, m, s)| t(h, m, s))
}

proptest! {
    #[test]
    fn overlapping_bands_yield_the_larger_fee(
        a in arb_time(),
        b in arb_time(),
        c in arb_time(),
        d in arb_time(),
        q in arb_time(),
        fee1 in 0.0f64..100.0,
        fee2 in 0.0f64..100.0,
    ) {
        let first = TimeRate::new(a.min(b), a.max(b), fee1).unwrap();
        let second = TimeRate::new(c.min(d), c.max(d), fee2).unwrap();
        let table = RateTable::new(vec![first, second]);
        let expected = match (first.contains(q), second.contains(q)) {
            (true, true) => fee1.max(fee2),
            (true, false) => fee1,
            (false, true) => fee2,
            (false, false) => 0.0,
        };
        prop_assert_eq!(table.fee_at(q), expected);
    }

    #[test]
    fn lookup_never_negative(q in arb_time()) {
        prop_assert!(weekday_table().fee_at(q) >= 0.0);
    }
}

#[cfg(feature = "serde")]
#[test]
fn rate_table_from_json_rejects_bad_bands() {
    let good = r#"[{"start":"06:00:00","end":"06:29:59","fee":8.0},
                   {"start":"06:30:00","end":"06:59:59","fee":13.0}]"#;
    let table: RateTable = serde_json::from_str(good).unwrap();
    assert_eq!(table.len(), 2);

    let bad = r#"[{"start":"06:00:00","end":"06:29:59","fee":8.0},
                  {"start":"06:59:59","end":"06:30:00","fee":13.0}]"#;
    assert!(serde_json::from_str::<RateTable>(bad).is_err());
}
