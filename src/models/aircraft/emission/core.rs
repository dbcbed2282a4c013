//! Emission rates from fuel flow.
//!
//! CO₂, H₂O, soot, and SOₓ scale with fuel burn through fixed emission
//! indices. NOₓ, CO, and HC use Boeing Fuel Flow Method 2: the in-flight
//! fuel flow is corrected to a sea-level equivalent, the certified LTO
//! indices are interpolated there, and the result is corrected back to
//! flight conditions.

use uom::si::{
    f64::{Length, MassRate, Velocity},
    length::meter,
    mass_rate::kilogram_per_second,
    ratio::per_mille,
    velocity::meter_per_second,
};

use crate::{
    models::aircraft::{ModelConfig, powerplant::Powerplant},
    support::{
        airspeed::tas_to_mach_si,
        atmosphere::{T0, state_si},
        catalog::{EngineSpec, Lto, ParameterProvider},
        interpolate::PiecewiseLinear,
        units::EmissionIndex,
    },
};

use super::{EmissionError, EmissionRates};

const FT: f64 = 0.3048;

// Fixed emission indices, g per kg of fuel.
const EI_CO2: f64 = 3160.0;
const EI_H2O: f64 = 1230.0;
const EI_SOOT: f64 = 0.03;
const EI_SOX: f64 = 1.2;

/// Emission model for one engine installation.
///
/// # Example
///
/// ```
/// use aeroperf_models::models::aircraft::{Emission, ModelConfig};
/// use aeroperf_models::support::catalog::Catalog;
/// use uom::si::{
///     f64::{Length, MassRate, Velocity},
///     length::foot,
///     mass_rate::kilogram_per_second,
///     velocity::knot,
/// };
///
/// let emission = Emission::new(Catalog::reference(), "A320", &ModelConfig::default()).unwrap();
/// let fuel_flow = MassRate::new::<kilogram_per_second>(0.7);
///
/// let co2 = emission.co2(fuel_flow);
/// assert!((co2.get::<kilogram_per_second>() - 0.7 * 3.16).abs() < 1e-12);
///
/// let nox = emission.nox(fuel_flow, Velocity::new::<knot>(450.0), Length::new::<foot>(35_000.0));
/// assert!(nox < co2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Emission {
    engine: EngineSpec,
    engine_count: u32,
    nox: PiecewiseLinear<4>,
    co: PiecewiseLinear<4>,
    hc: PiecewiseLinear<4>,
}

/// Fuel flow per engine at sea-level equivalent conditions.
struct SeaLevel {
    /// kg/s per engine.
    fuel_flow: f64,
    /// Correction ratio `θ^3.3 / δ^1.02`.
    ratio: f64,
}

impl Emission {
    /// Resolves the aircraft and engine and builds the LTO index tables.
    ///
    /// # Errors
    ///
    /// Returns [`EmissionError`] if a record cannot be resolved, the aircraft
    /// lacks an engine installation or default engine, or an LTO table is not
    /// finite.
    pub fn new(
        provider: &(impl ParameterProvider + ?Sized),
        code: &str,
        config: &ModelConfig,
    ) -> Result<Self, EmissionError> {
        let Powerplant {
            engine,
            engine_count,
            ..
        } = Powerplant::resolve::<EmissionError>(provider, code, config)?;

        let fuel_flow = engine
            .fuel_flow
            .map(|ff| ff.get::<kilogram_per_second>())
            .to_array();
        let table = |ei: &Lto<EmissionIndex>| {
            PiecewiseLinear::new(fuel_flow, ei.map(|v| v.get::<per_mille>()).to_array())
        };

        Ok(Self {
            nox: table(&engine.ei_nox)?,
            co: table(&engine.ei_co)?,
            hc: table(&engine.ei_hc)?,
            engine,
            engine_count,
        })
    }

    #[must_use]
    pub fn co2(&self, fuel_flow: MassRate) -> MassRate {
        rate(EI_CO2, fuel_flow)
    }

    #[must_use]
    pub fn h2o(&self, fuel_flow: MassRate) -> MassRate {
        rate(EI_H2O, fuel_flow)
    }

    #[must_use]
    pub fn soot(&self, fuel_flow: MassRate) -> MassRate {
        rate(EI_SOOT, fuel_flow)
    }

    #[must_use]
    pub fn sox(&self, fuel_flow: MassRate) -> MassRate {
        rate(EI_SOX, fuel_flow)
    }

    /// NOₓ rate, including the humidity correction.
    #[must_use]
    pub fn nox(&self, fuel_flow: MassRate, tas: Velocity, altitude: Length) -> MassRate {
        let h = altitude.get::<meter>();
        let sea_level = self.sea_level(fuel_flow, tas, h);

        let omega = 1e-3 * (-0.000_142_6 * (h / FT - 12_900.0)).exp();
        let ei = self.nox.eval(sea_level.fuel_flow)
            * (1.0 / sea_level.ratio).sqrt()
            * (-19.0 * (omega - 0.006_34)).exp();

        rate(ei, fuel_flow)
    }

    /// CO rate.
    #[must_use]
    pub fn co(&self, fuel_flow: MassRate, tas: Velocity, altitude: Length) -> MassRate {
        let sea_level = self.sea_level(fuel_flow, tas, altitude.get::<meter>());
        rate(self.co.eval(sea_level.fuel_flow) * sea_level.ratio, fuel_flow)
    }

    /// Unburnt hydrocarbon rate.
    #[must_use]
    pub fn hc(&self, fuel_flow: MassRate, tas: Velocity, altitude: Length) -> MassRate {
        let sea_level = self.sea_level(fuel_flow, tas, altitude.get::<meter>());
        rate(self.hc.eval(sea_level.fuel_flow) * sea_level.ratio, fuel_flow)
    }

    /// All species at once.
    #[must_use]
    pub fn rates(&self, fuel_flow: MassRate, tas: Velocity, altitude: Length) -> EmissionRates {
        EmissionRates {
            co2: self.co2(fuel_flow),
            h2o: self.h2o(fuel_flow),
            soot: self.soot(fuel_flow),
            sox: self.sox(fuel_flow),
            nox: self.nox(fuel_flow, tas, altitude),
            co: self.co(fuel_flow, tas, altitude),
            hc: self.hc(fuel_flow, tas, altitude),
        }
    }

    #[must_use]
    pub fn engine(&self) -> &EngineSpec {
        &self.engine
    }

    #[must_use]
    pub fn engine_count(&self) -> u32 {
        self.engine_count
    }

    fn sea_level(&self, fuel_flow: MassRate, tas: Velocity, h: f64) -> SeaLevel {
        let mach = tas_to_mach_si(tas.get::<meter_per_second>(), h, 0.0);
        let beta = (0.2 * mach * mach).exp();

        let (_, _, t) = state_si(h, 0.0);
        let theta = t / T0 / beta;
        let delta = (1.0 - 0.001_981_2 * (h / FT) / T0).powf(5.255_876) / beta.powf(3.5);

        let per_engine = fuel_flow.get::<kilogram_per_second>() / f64::from(self.engine_count);

        SeaLevel {
            fuel_flow: per_engine * theta.powf(3.8) / delta * beta,
            ratio: theta.powf(3.3) / delta.powf(1.02),
        }
    }
}

/// Converts an emission index in g/kg into a rate for `fuel_flow`.
fn rate(ei: f64, fuel_flow: MassRate) -> MassRate {
    fuel_flow * (ei * 1e-3)
}
