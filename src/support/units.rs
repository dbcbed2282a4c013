//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., velocity, force, mass rate).
//! This module provides the quantity aliases that are useful for modeling but
//! aren't included in [`uom`].
//!
//! Airspeeds and altitudes are plain [`Velocity`](uom::si::f64::Velocity) and
//! [`Length`](uom::si::f64::Length) quantities, so the aviation units used at
//! the call boundary come straight from [`uom`]:
//!
//! ```
//! use uom::si::{
//!     f64::{Length, Velocity},
//!     length::{foot, meter},
//!     velocity::{foot_per_minute, knot, meter_per_second},
//! };
//!
//! let tas = Velocity::new::<knot>(1.0);
//! assert!((tas.get::<meter_per_second>() - 0.514_444).abs() < 1e-6);
//!
//! let altitude = Length::new::<foot>(1.0);
//! assert!((altitude.get::<meter>() - 0.3048).abs() < 1e-12);
//!
//! let vs = Velocity::new::<foot_per_minute>(1.0);
//! assert!((vs.get::<meter_per_second>() - 0.005_08).abs() < 1e-12);
//! ```

mod quantities;

pub use quantities::{EmissionIndex, SpecificGasConstant};
