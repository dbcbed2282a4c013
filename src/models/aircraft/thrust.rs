//! Engine thrust model.
//!
//! [`Thrust`] evaluates total installed thrust in four regimes. The
//! [`twine_core::Model`] adapter selects the regime through [`ThrustInput`].

mod core;
mod error;

use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::{Force, Length, Velocity};

pub use self::core::Thrust;
pub use error::ThrustError;

/// Flight regime and state for a [`Thrust`] evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThrustInput {
    Takeoff {
        tas: Velocity,
        altitude: Length,
    },
    Climb {
        tas: Velocity,
        altitude: Length,
        rate_of_climb: Velocity,
    },
    Cruise {
        tas: Velocity,
        altitude: Length,
    },
    DescentIdle {
        tas: Velocity,
        altitude: Length,
    },
}

impl Model for Thrust {
    type Input = ThrustInput;
    type Output = Force;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(match *input {
            ThrustInput::Takeoff { tas, altitude } => self.takeoff(tas, altitude),
            ThrustInput::Climb {
                tas,
                altitude,
                rate_of_climb,
            } => self.climb(tas, altitude, rate_of_climb),
            ThrustInput::Cruise { tas, altitude } => self.cruise(tas, altitude),
            ThrustInput::DescentIdle { tas, altitude } => self.descent_idle(tas, altitude),
        })
    }
}
