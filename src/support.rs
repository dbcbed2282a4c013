//! Supporting utilities used by the models.
//!
//! These modules are public because they are useful on their own
//! (e.g., ISA atmosphere and airspeed conversions), but their APIs are not
//! stable.

pub mod airspeed;
pub mod atmosphere;
pub mod catalog;
pub mod constraint;
pub mod interpolate;
pub mod units;
