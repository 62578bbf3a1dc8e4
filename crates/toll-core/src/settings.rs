//! Fee computation settings.
//!
//! [`FeeSettings`] holds the two tunables of the daily fee rule: the cap on
//! what one vehicle pays per calendar day and the width of the hourly window
//! inside which repeated passes are charged once.
//!
//! Settings are a plain value handed to the calculator at construction. There
//! is no process-wide instance, so two calculators with different caps can
//! coexist in one process.

use crate::{fail, Fee, Minutes, Result};

/// Daily cap used when none is configured.
pub const DEFAULT_DAILY_MAX_FEE: Fee = 60.0;

/// Window width used when none is configured.
pub const DEFAULT_WINDOW_MINUTES: Minutes = 60;

/// Widest accepted window: one day.
pub const MAX_WINDOW_MINUTES: Minutes = 24 * 60;

/// Tunables of the daily fee rule.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawFeeSettings")
)]
pub struct FeeSettings {
    daily_max_fee: Fee,
    window_minutes: Minutes,
}

impl FeeSettings {
    /// Build validated settings.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if the cap is negative or not finite, or if
    /// the window is not between one minute and [`MAX_WINDOW_MINUTES`].
    pub fn new(daily_max_fee: Fee, window_minutes: Minutes) -> Result<Self> {
        if !daily_max_fee.is_finite() || daily_max_fee < 0.0 {
            fail!("daily maximum fee must be a non-negative amount, got {daily_max_fee}");
        }
        if !(1..=MAX_WINDOW_MINUTES).contains(&window_minutes) {
            fail!("hourly window must be 1 to {MAX_WINDOW_MINUTES} minutes, got {window_minutes}");
        }
        Ok(Self {
            daily_max_fee,
            window_minutes,
        })
    }

    /// Maximum total chargeable to one vehicle in one calendar day.
    pub fn daily_max_fee(&self) -> Fee {
        self.daily_max_fee
    }

    /// Width of an hourly window, measured from its first pass.
    pub fn window_minutes(&self) -> Minutes {
        self.window_minutes
    }

    /// Window width as a `chrono` duration.
    pub fn window(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.window_minutes)
    }
}

/// Unchecked wire shape of [`FeeSettings`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawFeeSettings {
    daily_max_fee: Fee,
    window_minutes: Minutes,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFeeSettings> for FeeSettings {
    type Error = crate::Error;

    fn try_from(raw: RawFeeSettings) -> Result<Self> {
        Self::new(raw.daily_max_fee, raw.window_minutes)
    }
}

impl Default for FeeSettings {
    fn default() -> Self {
        Self {
            daily_max_fee: DEFAULT_DAILY_MAX_FEE,
            window_minutes: DEFAULT_WINDOW_MINUTES,
        }
    }
}
