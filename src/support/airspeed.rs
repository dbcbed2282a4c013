//! Airspeed conversions between true airspeed, calibrated airspeed, and Mach number.
//!
//! Calibrated airspeed is related to true airspeed through the compressible
//! impact pressure `q_c`:
//!
//! - From TAS at altitude: `q_c = p·((1 + ρ·v²/(7p))^3.5 − 1)`
//! - To CAS at sea level: `v_cas = sqrt(7·P₀/ρ₀·((q_c/P₀ + 1)^(2/7) − 1))`
//!
//! The two directions are exact inverses of each other.
//! All conversions accept an ISA temperature deviation; pass
//! [`TemperatureInterval::ZERO`](uom::ConstZero::ZERO) for a standard day.

use uom::si::{
    f64::{Length, Pressure, TemperatureInterval, Velocity},
    length::meter,
    pressure::pascal,
    temperature_interval::kelvin as delta_kelvin,
    velocity::meter_per_second,
};

use super::atmosphere::{self, P0, RHO0, speed_of_sound_si, state_si};

/// Returns the speed of sound at `altitude`.
#[must_use]
pub fn speed_of_sound(altitude: Length, isa_delta: TemperatureInterval) -> Velocity {
    let (_, _, t) = state_si(altitude.get::<meter>(), isa_delta.get::<delta_kelvin>());
    Velocity::new::<meter_per_second>(speed_of_sound_si(t))
}

/// Converts true airspeed to Mach number.
#[must_use]
pub fn tas_to_mach(tas: Velocity, altitude: Length, isa_delta: TemperatureInterval) -> f64 {
    tas_to_mach_si(
        tas.get::<meter_per_second>(),
        altitude.get::<meter>(),
        isa_delta.get::<delta_kelvin>(),
    )
}

/// Converts Mach number to true airspeed.
#[must_use]
pub fn mach_to_tas(mach: f64, altitude: Length, isa_delta: TemperatureInterval) -> Velocity {
    Velocity::new::<meter_per_second>(mach_to_tas_si(
        mach,
        altitude.get::<meter>(),
        isa_delta.get::<delta_kelvin>(),
    ))
}

/// Converts calibrated airspeed to true airspeed.
///
/// # Example
///
/// ```
/// use aeroperf_models::support::airspeed::{cas_to_tas, tas_to_cas};
/// use uom::si::{
///     f64::{Length, TemperatureInterval, Velocity},
///     length::foot,
///     temperature_interval::kelvin,
///     velocity::knot,
/// };
///
/// let altitude = Length::new::<foot>(35_000.0);
/// let standard = TemperatureInterval::new::<kelvin>(0.0);
///
/// let tas = cas_to_tas(Velocity::new::<knot>(250.0), altitude, standard);
/// assert!(tas.get::<knot>() > 400.0);
///
/// let cas = tas_to_cas(tas, altitude, standard);
/// assert!((cas.get::<knot>() - 250.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn cas_to_tas(cas: Velocity, altitude: Length, isa_delta: TemperatureInterval) -> Velocity {
    Velocity::new::<meter_per_second>(cas_to_tas_si(
        cas.get::<meter_per_second>(),
        altitude.get::<meter>(),
        isa_delta.get::<delta_kelvin>(),
    ))
}

/// Converts true airspeed to calibrated airspeed.
#[must_use]
pub fn tas_to_cas(tas: Velocity, altitude: Length, isa_delta: TemperatureInterval) -> Velocity {
    Velocity::new::<meter_per_second>(tas_to_cas_si(
        tas.get::<meter_per_second>(),
        altitude.get::<meter>(),
        isa_delta.get::<delta_kelvin>(),
    ))
}

/// Converts Mach number to calibrated airspeed.
#[must_use]
pub fn mach_to_cas(mach: f64, altitude: Length, isa_delta: TemperatureInterval) -> Velocity {
    tas_to_cas(mach_to_tas(mach, altitude, isa_delta), altitude, isa_delta)
}

/// Converts calibrated airspeed to Mach number.
#[must_use]
pub fn cas_to_mach(cas: Velocity, altitude: Length, isa_delta: TemperatureInterval) -> f64 {
    tas_to_mach(cas_to_tas(cas, altitude, isa_delta), altitude, isa_delta)
}

/// Returns the standard-day altitude where `cas` and `mach` give the same true airspeed.
///
/// Climbing at constant CAS, the Mach number rises with altitude; the
/// crossover altitude is where a CAS/Mach climb schedule switches from
/// holding CAS to holding Mach.
#[must_use]
pub fn crossover_altitude(cas: Velocity, mach: f64) -> Length {
    let v = cas.get::<meter_per_second>();

    let impact_sl = (1.0 + RHO0 * v * v / (7.0 * P0)).powf(3.5) - 1.0;
    let impact_mach = (1.0 + 0.2 * mach * mach).powf(3.5) - 1.0;

    let pressure = Pressure::new::<pascal>(P0 * impact_sl / impact_mach);
    atmosphere::pressure_altitude(pressure)
}

pub(crate) fn tas_to_mach_si(tas: f64, h: f64, isa_delta: f64) -> f64 {
    let (_, _, t) = state_si(h, isa_delta);
    tas / speed_of_sound_si(t)
}

pub(crate) fn mach_to_tas_si(mach: f64, h: f64, isa_delta: f64) -> f64 {
    let (_, _, t) = state_si(h, isa_delta);
    mach * speed_of_sound_si(t)
}

pub(crate) fn cas_to_tas_si(cas: f64, h: f64, isa_delta: f64) -> f64 {
    let (p, rho, _) = state_si(h, isa_delta);
    let qdyn = P0 * ((1.0 + RHO0 * cas * cas / (7.0 * P0)).powf(3.5) - 1.0);
    (7.0 * p / rho * ((1.0 + qdyn / p).powf(2.0 / 7.0) - 1.0)).sqrt()
}

pub(crate) fn tas_to_cas_si(tas: f64, h: f64, isa_delta: f64) -> f64 {
    let (p, rho, _) = state_si(h, isa_delta);
    let qdyn = p * ((1.0 + rho * tas * tas / (7.0 * p)).powf(3.5) - 1.0);
    (7.0 * P0 / RHO0 * ((qdyn / P0 + 1.0).powf(2.0 / 7.0) - 1.0)).sqrt()
}
