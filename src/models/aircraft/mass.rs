//! Take-off mass estimated from trip distance.
//!
//! A trip of the type's nominal cruise range is flown at MTOW. Shorter trips
//! carry proportionally less fuel and payload, down to a floor of 20 % of the
//! useful load (MTOW − OEW).

use uom::si::{
    f64::{Length, Mass},
    ratio::ratio,
};

use crate::support::catalog::{AircraftSpec, ConfigurationError};

const MIN_FRACTION: f64 = 0.2;
const MAX_FRACTION: f64 = 1.0;

/// Take-off mass for a trip, with the share of useful load it carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeMass {
    /// Share of the useful load, in `[0.2, 1]`.
    pub fraction: f64,
    pub mass: Mass,
}

/// Estimates take-off mass for a trip of `distance`.
///
/// # Errors
///
/// Returns [`ConfigurationError::MissingCruise`] or
/// [`ConfigurationError::MissingCruiseRange`] if the aircraft has no nominal range.
///
/// # Example
///
/// ```
/// use aeroperf_models::models::aircraft::takeoff_mass;
/// use aeroperf_models::support::catalog::{Catalog, ParameterProvider};
/// use uom::si::{f64::Length, length::kilometer, mass::kilogram};
///
/// let a320 = Catalog::reference().aircraft("A320", false).unwrap();
/// let trip = takeoff_mass(&a320, Length::new::<kilometer>(6_100.0)).unwrap();
///
/// assert_eq!(trip.fraction, 1.0);
/// assert_eq!(trip.mass.get::<kilogram>(), 78_000.0);
/// ```
pub fn takeoff_mass(aircraft: &AircraftSpec, distance: Length) -> Result<RangeMass, ConfigurationError> {
    let range = aircraft.cruise_range()?;
    let fraction = (distance / range)
        .get::<ratio>()
        .clamp(MIN_FRACTION, MAX_FRACTION);

    let limits = &aircraft.limits;
    let mass = limits.oew + (limits.mtow - limits.oew) * fraction;

    Ok(RangeMass { fraction, mass })
}
