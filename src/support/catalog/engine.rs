use uom::si::f64::{Force, Length, MassRate};

use crate::support::units::EmissionIndex;

/// Values at the four ICAO landing and take-off (LTO) power settings.
///
/// Ordered idle → approach → climb-out → take-off, i.e. by increasing fuel flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lto<T> {
    pub idle: T,
    pub approach: T,
    pub climb_out: T,
    pub takeoff: T,
}

impl<T: Copy> Lto<T> {
    /// Returns the values in LTO order.
    #[must_use]
    pub fn to_array(&self) -> [T; 4] {
        [self.idle, self.approach, self.climb_out, self.takeoff]
    }

    /// Applies `f` to every point.
    #[must_use]
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Lto<U> {
        Lto {
            idle: f(self.idle),
            approach: f(self.approach),
            climb_out: f(self.climb_out),
            takeoff: f(self.takeoff),
        }
    }
}

/// Engine-specific cruise thrust reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineCruise {
    pub thrust: Force,
    pub mach: f64,
    pub altitude: Length,
}

/// Parameters of one engine type (per engine, not per aircraft).
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSpec {
    pub name: String,
    pub bypass_ratio: f64,
    pub max_thrust: Force,
    pub cruise: Option<EngineCruise>,
    pub fuel_flow: Lto<MassRate>,
    pub ei_nox: Lto<EmissionIndex>,
    pub ei_co: Lto<EmissionIndex>,
    pub ei_hc: Lto<EmissionIndex>,
    /// Fuel flow altitude coefficient, 1/ft.
    pub fuel_altitude_coefficient: f64,
}

/// Typical fuel flow altitude coefficient for high-bypass turbofans, 1/ft.
pub const DEFAULT_FUEL_ALTITUDE_COEFFICIENT: f64 = 6.7e-7;
