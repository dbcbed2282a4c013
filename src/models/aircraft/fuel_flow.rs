//! Fuel flow model.
//!
//! The computational core is in the internal `core` module.

mod core;
mod error;
mod throttle;

use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::{Acceleration, Force, Length, MassRate, Velocity};

pub use self::core::FuelFlow;
pub use error::FuelFlowError;
pub use throttle::Throttle;

use super::FlightState;

/// Operation and state for a [`FuelFlow`] evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FuelFlowInput {
    /// Fuel flow at a known total thrust.
    AtThrust { thrust: Force, limit: bool },
    /// Fuel flow on the take-off roll.
    Takeoff {
        tas: Velocity,
        altitude: Length,
        throttle: Throttle,
    },
    /// Fuel flow en route from the flight state.
    Enroute {
        state: FlightState,
        acceleration: Acceleration,
        limit: bool,
    },
}

impl Model for FuelFlow {
    type Input = FuelFlowInput;
    type Output = MassRate;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(match *input {
            FuelFlowInput::AtThrust { thrust, limit } => self.at_thrust(thrust, limit),
            FuelFlowInput::Takeoff {
                tas,
                altitude,
                throttle,
            } => self.takeoff(tas, altitude, throttle),
            FuelFlowInput::Enroute {
                state,
                acceleration,
                limit,
            } => self.enroute(
                state.mass,
                state.tas,
                state.altitude,
                state.vertical_speed,
                acceleration,
                limit,
            ),
        })
    }
}
