//! # Aeroperf Models
//!
//! Semi-empirical performance models for fixed-wing transport aircraft:
//! thrust, drag, fuel flow, and emissions, evaluated at a single flight state.
//!
//! ## Crate layout
//!
//! - [`models`]: Aircraft performance models, each with a [`twine_core::Model`] adapter.
//! - [`support`]: Atmosphere, airspeed, interpolation, and parameter catalog utilities.
//!
//! ## Units
//!
//! Every physical input and output is a [`uom`] quantity.
//! Callers pick the unit at the boundary (knots, feet, ft/min, ...) and the
//! models work in SI internally.
//!
//! ```
//! use aeroperf_models::models::aircraft::{ModelConfig, Thrust};
//! use aeroperf_models::support::catalog::Catalog;
//! use uom::si::{
//!     f64::{Length, Velocity},
//!     force::kilonewton,
//!     length::foot,
//!     velocity::knot,
//! };
//!
//! let thrust = Thrust::new(Catalog::reference(), "A320", &ModelConfig::default()).unwrap();
//! let f = thrust.takeoff(
//!     Velocity::new::<knot>(140.0),
//!     Length::new::<foot>(0.0),
//! );
//! assert!(f.get::<kilonewton>() > 0.0);
//! ```

pub mod models;
pub mod support;
