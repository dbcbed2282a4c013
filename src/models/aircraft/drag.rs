//! Aerodynamic drag model.
//!
//! The computational core is in the internal `core` module.

mod core;
mod error;

use twine_core::Model;
use uom::si::f64::{Angle, Force};

pub use self::core::Drag;
pub use error::DragError;

use super::FlightState;

/// Configuration and state for a [`Drag`] evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragInput {
    /// Flaps and gear retracted.
    Clean(FlightState),
    /// Flaps deflected, gear optionally extended.
    NonClean {
        state: FlightState,
        flap_angle: Angle,
        landing_gear: bool,
    },
}

impl Model for Drag {
    type Input = DragInput;
    type Output = Force;
    type Error = DragError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        match *input {
            DragInput::Clean(state) => Ok(self.clean(
                state.mass,
                state.tas,
                state.altitude,
                state.vertical_speed,
            )),
            DragInput::NonClean {
                state,
                flap_angle,
                landing_gear,
            } => self.non_clean(
                state.mass,
                state.tas,
                state.altitude,
                flap_angle,
                state.vertical_speed,
                landing_gear,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        angle::degree,
        f64::{Length, Mass, Velocity},
        length::foot,
        mass::kilogram,
        velocity::knot,
    };

    use crate::{models::aircraft::ModelConfig, support::catalog::Catalog};

    #[test]
    fn adapter_selects_configuration() {
        let drag = Drag::new(Catalog::reference(), "CRJ9", &ModelConfig::default()).unwrap();
        let state = FlightState::level(
            Mass::new::<kilogram>(33_000.0),
            Velocity::new::<knot>(150.0),
            Length::new::<foot>(1_000.0),
        );

        let clean = drag.call(&DragInput::Clean(state)).unwrap();
        let landing = drag
            .call(&DragInput::NonClean {
                state,
                flap_angle: Angle::new::<degree>(30.0),
                landing_gear: true,
            })
            .unwrap();

        assert_eq!(
            clean,
            drag.clean(state.mass, state.tas, state.altitude, state.vertical_speed)
        );
        assert!(landing > clean);
    }
}
