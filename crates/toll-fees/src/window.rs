//! Hourly windowing of same-day passes.
//!
//! Passes are sorted chronologically and split greedily into windows. A pass
//! joins the open window while it lies at most one window width after the
//! window's **first** pass (its anchor), ends included. Distances count whole
//! elapsed minutes, so a pass 60m30s after the anchor still falls inside a
//! 60-minute window. The first pass past that limit closes the window and
//! anchors the next one. Distances are never measured from the previous
//! pass, so a steady stream of passes 40 minutes apart still opens a new
//! window every other pass.

use chrono::{Duration, NaiveDateTime};
use toll_core::Fee;
use toll_time::RateTable;

/// A maximal run of passes within one window width of its first pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyWindow {
    passes: Vec<NaiveDateTime>,
}

impl HourlyWindow {
    fn open(anchor: NaiveDateTime) -> Self {
        Self {
            passes: vec![anchor],
        }
    }

    /// The pass that opened the window.
    pub fn anchor(&self) -> NaiveDateTime {
        self.passes[0]
    }

    /// Every pass in the window, in chronological order.
    pub fn passes(&self) -> &[NaiveDateTime] {
        &self.passes
    }

    /// Number of passes charged through this window.
    pub fn len(&self) -> usize {
        self.passes.len()
    }

    /// Always `false`: a window holds at least its anchor.
    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// The window's charge: the highest rate among its passes.
    pub fn fee(&self, rates: &RateTable) -> Fee {
        self.passes
            .iter()
            .map(|pass| rates.fee_at(pass.time()))
            .fold(0.0, Fee::max)
    }

    fn admits(&self, pass: NaiveDateTime, width: Duration) -> bool {
        (pass - self.anchor()).num_minutes() <= width.num_minutes()
    }
}

/// Partition `passes` into anchor-relative windows of `width`.
///
/// The input need not be sorted; a stable chronological sort is applied
/// first. An empty input yields no windows.
pub fn hourly_windows(passes: &[NaiveDateTime], width: Duration) -> Vec<HourlyWindow> {
    let mut sorted = passes.to_vec();
    sorted.sort();

    let mut windows: Vec<HourlyWindow> = Vec::new();
    for pass in sorted {
        match windows.last_mut() {
            Some(current) if current.admits(pass, width) => current.passes.push(pass),
            _ => windows.push(HourlyWindow::open(pass)),
        }
    }
    windows
}
