//! # toll-core
//!
//! Core types, settings, and error definitions for tollcalc.
//!
//! This crate provides the building blocks shared across the other crates in
//! the workspace – the fee type aliases, the error enum with its `ensure!` /
//! `fail!` macros, and [`FeeSettings`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Fee computation settings (daily cap, window width).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Fractional currency amount used for every internal fee computation.
pub type Fee = f64;

/// Whole currency units handed out at the caller-facing boundary.
pub type WholeFee = u32;

/// A duration expressed in whole minutes.
pub type Minutes = i64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::FeeSettings;

/// Truncate a fractional fee to whole currency units.
///
/// Floors towards zero; negative and non-finite inputs collapse to `0`.
pub fn truncate_fee(fee: Fee) -> WholeFee {
    if fee.is_finite() && fee > 0.0 {
        fee.floor() as WholeFee
    } else {
        0
    }
}
