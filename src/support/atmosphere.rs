//! International Standard Atmosphere (ISA).
//!
//! The model covers the troposphere and the lower stratosphere:
//!
//! - Below 11 000 m the temperature follows a linear lapse rate of
//!   −0.0065 K/m from `288.15 K + ΔT`, and density follows the barotropic
//!   relation `ρ = ρ₀·(T/T₀)^4.256848`.
//! - Above 11 000 m the temperature is held at `216.65 K + ΔT` and density
//!   decays exponentially with a scale height of 6341.552 m.
//! - Pressure closes the state through the ideal gas law `p = ρ·R·T`.
//!
//! The ISA deviation `ΔT` is clamped to ±15 K.

use uom::{
    ConstZero,
    si::{
        f64::{Length, MassDensity, Pressure, TemperatureInterval, ThermodynamicTemperature},
        length::meter,
        mass_density::kilogram_per_cubic_meter,
        pressure::pascal,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::kelvin,
    },
};

use crate::support::units::SpecificGasConstant;

/// Sea-level standard pressure, Pa.
pub const P0: f64 = 101_325.0;

/// Sea-level standard density, kg/m³.
pub const RHO0: f64 = 1.225;

/// Sea-level standard temperature, K.
pub const T0: f64 = 288.15;

/// Tropopause temperature, K.
pub const T_TROPOPAUSE: f64 = 216.65;

/// Tropopause altitude, m.
pub const H_TROPOPAUSE: f64 = 11_000.0;

/// Specific gas constant of dry air, J/(kg·K).
pub const R: f64 = 287.052_87;

/// Ratio of specific heats of air.
pub const GAMMA: f64 = 1.4;

/// Standard gravitational acceleration, m/s².
pub const G0: f64 = 9.806_65;

/// Temperature lapse rate in the troposphere, K/m.
pub const LAPSE_RATE: f64 = -0.0065;

const MAX_ISA_DELTA: f64 = 15.0;
const DENSITY_EXPONENT: f64 = 4.256_848;
const SCALE_HEIGHT: f64 = 6_341.552_161;

/// Thermodynamic state of the atmosphere at one altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphericState {
    pub pressure: Pressure,
    pub density: MassDensity,
    pub temperature: ThermodynamicTemperature,
}

/// Returns the gas constant of air as a quantity.
#[must_use]
pub fn gas_constant() -> SpecificGasConstant {
    SpecificGasConstant::new::<joule_per_kilogram_kelvin>(R)
}

/// Computes the atmospheric state at `altitude` for an ISA deviation `isa_delta`.
///
/// # Example
///
/// ```
/// use aeroperf_models::support::atmosphere::atmosphere;
/// use uom::si::{
///     f64::{Length, TemperatureInterval},
///     length::meter,
///     pressure::pascal,
///     temperature_interval,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let delta = TemperatureInterval::new::<temperature_interval::kelvin>(0.0);
/// let state = atmosphere(Length::new::<meter>(0.0), delta);
/// assert!((state.pressure.get::<pascal>() - 101_325.0).abs() < 1.0);
/// assert!((state.temperature.get::<kelvin>() - 288.15).abs() < 1e-9);
/// ```
#[must_use]
pub fn atmosphere(altitude: Length, isa_delta: TemperatureInterval) -> AtmosphericState {
    let (p, rho, t) = state_si(
        altitude.get::<meter>(),
        isa_delta.get::<delta_kelvin>(),
    );

    AtmosphericState {
        pressure: Pressure::new::<pascal>(p),
        density: MassDensity::new::<kilogram_per_cubic_meter>(rho),
        temperature: ThermodynamicTemperature::new::<kelvin>(t),
    }
}

/// Computes the standard-day (`ΔT = 0`) atmospheric state at `altitude`.
#[must_use]
pub fn isa(altitude: Length) -> AtmosphericState {
    atmosphere(altitude, TemperatureInterval::ZERO)
}

/// Returns the static pressure at `altitude`.
#[must_use]
pub fn pressure(altitude: Length, isa_delta: TemperatureInterval) -> Pressure {
    atmosphere(altitude, isa_delta).pressure
}

/// Returns the air density at `altitude`.
#[must_use]
pub fn density(altitude: Length, isa_delta: TemperatureInterval) -> MassDensity {
    atmosphere(altitude, isa_delta).density
}

/// Returns the static temperature at `altitude`.
#[must_use]
pub fn temperature(altitude: Length, isa_delta: TemperatureInterval) -> ThermodynamicTemperature {
    atmosphere(altitude, isa_delta).temperature
}

/// Returns the standard-day altitude at which the static pressure equals `pressure`.
///
/// This inverts the standard-day profile of [`atmosphere`]: a power law in
/// the troposphere and an exponential decay above the tropopause.
#[must_use]
pub fn pressure_altitude(pressure: Pressure) -> Length {
    let p = pressure.get::<pascal>();
    let (p_trop, _, _) = state_si(H_TROPOPAUSE, 0.0);

    let h = if p >= p_trop {
        // p ∝ T^(exponent + 1) below the tropopause.
        let p_sl = RHO0 * R * T0;
        let t = T0 * (p / p_sl).powf(1.0 / (DENSITY_EXPONENT + 1.0));
        (t - T0) / LAPSE_RATE
    } else {
        H_TROPOPAUSE - SCALE_HEIGHT * (p / p_trop).ln()
    };

    Length::new::<meter>(h)
}

/// Atmospheric state in SI as `(pressure [Pa], density [kg/m³], temperature [K])`.
pub(crate) fn state_si(h: f64, isa_delta: f64) -> (f64, f64, f64) {
    let dt = isa_delta.clamp(-MAX_ISA_DELTA, MAX_ISA_DELTA);

    let t_sl = T0 + dt;
    let t = (t_sl + LAPSE_RATE * h).max(T_TROPOPAUSE + dt);

    let rho_trop = RHO0 * (t / t_sl).powf(DENSITY_EXPONENT);
    let dh_strat = (h - H_TROPOPAUSE).max(0.0);
    let rho = rho_trop * (-dh_strat / SCALE_HEIGHT).exp();

    let p = rho * R * t;
    (p, rho, t)
}

/// Speed of sound in SI for a temperature in kelvin.
pub(crate) fn speed_of_sound_si(t: f64) -> f64 {
    (GAMMA * R * t).sqrt()
}
