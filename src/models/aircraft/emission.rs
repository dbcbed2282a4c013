//! Pollutant emission model.
//!
//! The computational core is in the internal `core` module.

mod core;
mod error;

use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::{Length, MassRate, Velocity};

pub use self::core::Emission;
pub use error::EmissionError;

/// Fuel flow and flight state for an [`Emission`] evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionInput {
    /// Total fuel flow over all engines.
    pub fuel_flow: MassRate,
    pub tas: Velocity,
    pub altitude: Length,
}

/// Emission rates of every species, summed over all engines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionRates {
    pub co2: MassRate,
    pub h2o: MassRate,
    pub soot: MassRate,
    pub sox: MassRate,
    pub nox: MassRate,
    pub co: MassRate,
    pub hc: MassRate,
}

impl Model for Emission {
    type Input = EmissionInput;
    type Output = EmissionRates;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.rates(input.fuel_flow, input.tas, input.altitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{length::foot, mass_rate::kilogram_per_second, velocity::knot};

    use crate::{
        models::aircraft::{FuelFlow, ModelConfig},
        support::catalog::Catalog,
    };

    #[test]
    fn chains_from_fuel_flow() {
        let catalog = Catalog::reference();
        let config = ModelConfig::default();
        let fuel_flow = FuelFlow::new(catalog, "CRJ9", &config).unwrap();
        let emission = Emission::new(catalog, "CRJ9", &config).unwrap();

        let tas = Velocity::new::<knot>(420.0);
        let altitude = Length::new::<foot>(33_000.0);
        let thrust = fuel_flow.thrust().cruise(tas, altitude);
        let ff = fuel_flow.at_thrust(thrust, true);

        let rates = emission
            .call(&EmissionInput {
                fuel_flow: ff,
                tas,
                altitude,
            })
            .unwrap();

        assert_eq!(rates, emission.rates(ff, tas, altitude));
        assert!(rates.nox.get::<kilogram_per_second>() > 0.0);
    }
}
