//! # tollcalc
//!
//! Daily road-toll fees from a vehicle's pass timestamps.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `toll-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use tollcalc::fees::{gothenburg, toll_fee, Vehicle, VehicleType};
//!
//! let calc = gothenburg::calculator();
//! let car = Vehicle::new(VehicleType::Car);
//! let pass = NaiveDate::from_ymd_opt(2023, 5, 10)
//!     .unwrap()
//!     .and_hms_opt(7, 18, 45)
//!     .unwrap();
//! assert_eq!(toll_fee(&calc, &car, &[pass]), Ok(18));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Fee aliases, settings, and error definitions.
pub use toll_core as core;

/// Rate tables and holiday calendars.
pub use toll_time as time;

/// Vehicles, windowing, and the fee calculator.
pub use toll_fees as fees;
