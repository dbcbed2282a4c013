use uom::{
    ConstZero,
    si::f64::{Length, Mass, Velocity},
};

/// Instantaneous flight state of one aircraft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightState {
    pub mass: Mass,
    /// True airspeed.
    pub tas: Velocity,
    /// Geopotential altitude on a standard day.
    pub altitude: Length,
    /// Rate of climb, negative when descending.
    pub vertical_speed: Velocity,
}

impl FlightState {
    /// Creates a level-flight state.
    #[must_use]
    pub fn level(mass: Mass, tas: Velocity, altitude: Length) -> Self {
        Self {
            mass,
            tas,
            altitude,
            vertical_speed: Velocity::ZERO,
        }
    }

    /// Returns the state with a new vertical speed.
    #[must_use]
    pub fn with_vertical_speed(self, vertical_speed: Velocity) -> Self {
        Self {
            vertical_speed,
            ..self
        }
    }
}
