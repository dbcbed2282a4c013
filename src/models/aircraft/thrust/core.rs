//! Turbofan thrust as a fraction of rated take-off thrust.
//!
//! Take-off thrust follows a Mach/pressure-ratio correlation driven by the
//! engine bypass ratio. Climb and cruise thrust are anchored to a cruise
//! reference point and split into three altitude segments:
//!
//! - above 30 000 ft, a log-pressure law in the Mach ratio,
//! - between 10 000 ft and 30 000 ft, a power law in the CAS ratio,
//! - below 10 000 ft, a linear pressure law joined continuously to the
//!   middle segment at 10 000 ft.

use log::warn;
use uom::si::{
    f64::{Force, Length, Velocity},
    force::newton,
    length::meter,
    velocity::meter_per_second,
};

use crate::{
    models::aircraft::{ModelConfig, powerplant::Powerplant},
    support::{
        airspeed::{mach_to_tas_si, tas_to_cas_si, tas_to_mach_si},
        atmosphere::{P0, T0, speed_of_sound_si, state_si},
        catalog::{AircraftSpec, EngineSpec, ParameterProvider},
    },
};

use super::ThrustError;

const FT: f64 = 0.3048;
const FT_PER_MIN: f64 = 0.005_08;
const KT: f64 = 0.514_444;

const H_LOW: f64 = 10_000.0 * FT;
const H_HIGH: f64 = 30_000.0 * FT;
const MIN_CLIMB_TAS: f64 = 10.0 * KT;

const DESCENT_IDLE_FRACTION: f64 = 0.07;

/// Cruise reference used to scale climb and cruise thrust.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CruiseAnchor {
    /// Total thrust over all engines, N.
    thrust: f64,
    mach: f64,
    /// Calibrated airspeed at the anchor Mach and altitude, m/s.
    cas: f64,
}

/// Thrust model for one aircraft type and engine.
///
/// # Example
///
/// ```
/// use aeroperf_models::models::aircraft::{ModelConfig, Thrust};
/// use aeroperf_models::support::catalog::Catalog;
/// use uom::si::{
///     f64::{Length, Velocity},
///     length::foot,
///     velocity::{foot_per_minute, knot},
/// };
///
/// let thrust = Thrust::new(Catalog::reference(), "A320", &ModelConfig::default()).unwrap();
///
/// let tas = Velocity::new::<knot>(280.0);
/// let altitude = Length::new::<foot>(15_000.0);
/// let climb = thrust.climb(tas, altitude, Velocity::new::<foot_per_minute>(1_500.0));
///
/// assert!(climb < thrust.max_total_thrust());
/// assert!(thrust.descent_idle(tas, altitude) < climb);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Thrust {
    aircraft: AircraftSpec,
    engine: EngineSpec,
    engine_count: u32,
    anchor: CruiseAnchor,
}

impl Thrust {
    /// Resolves the aircraft and engine and builds the cruise anchor.
    ///
    /// The engine's own cruise reference is preferred. Engines without one
    /// fall back to `0.2·F_max + 890 N` at the aircraft's cruise Mach and height.
    ///
    /// # Errors
    ///
    /// Returns [`ThrustError`] if a record cannot be resolved, if the aircraft
    /// lacks an engine installation, default engine, or cruise reference, or if
    /// the engine is not certified on the type and `force_engine` is not set.
    pub fn new(
        provider: &(impl ParameterProvider + ?Sized),
        code: &str,
        config: &ModelConfig,
    ) -> Result<Self, ThrustError> {
        let powerplant = Powerplant::resolve::<ThrustError>(provider, code, config)?;

        if !powerplant.certified {
            if !config.force_engine {
                return Err(ThrustError::IncompatibleEngine {
                    engine: powerplant.engine.name.clone(),
                    aircraft: powerplant.aircraft.code.clone(),
                    options: powerplant.options(),
                });
            }
            warn!(
                "thrust: forcing engine {} on {} (allowed: {:?})",
                powerplant.engine.name,
                powerplant.aircraft.code,
                powerplant.options()
            );
        }

        let Powerplant {
            aircraft,
            engine,
            engine_count,
            ..
        } = powerplant;

        let (thrust, mach, altitude) = match engine.cruise {
            Some(cruise) => (
                cruise.thrust.get::<newton>(),
                cruise.mach,
                cruise.altitude.get::<meter>(),
            ),
            None => {
                let cruise = aircraft.cruise_point()?;
                (
                    0.2 * engine.max_thrust.get::<newton>() + 890.0,
                    cruise.mach,
                    cruise.height.get::<meter>(),
                )
            }
        };

        let anchor = CruiseAnchor {
            thrust: thrust * f64::from(engine_count),
            mach,
            cas: tas_to_cas_si(mach_to_tas_si(mach, altitude, 0.0), altitude, 0.0),
        };

        Ok(Self {
            aircraft,
            engine,
            engine_count,
            anchor,
        })
    }

    /// Total take-off thrust at a true airspeed and altitude.
    #[must_use]
    pub fn takeoff(&self, tas: Velocity, altitude: Length) -> Force {
        Force::new::<newton>(
            self.takeoff_si(tas.get::<meter_per_second>(), altitude.get::<meter>()),
        )
    }

    /// Total climb thrust; the sign of `rate_of_climb` is ignored.
    #[must_use]
    pub fn climb(&self, tas: Velocity, altitude: Length, rate_of_climb: Velocity) -> Force {
        Force::new::<newton>(self.climb_si(
            tas.get::<meter_per_second>(),
            altitude.get::<meter>(),
            rate_of_climb.get::<meter_per_second>(),
        ))
    }

    /// Total cruise thrust, i.e. climb thrust at zero rate of climb.
    #[must_use]
    pub fn cruise(&self, tas: Velocity, altitude: Length) -> Force {
        Force::new::<newton>(self.climb_si(
            tas.get::<meter_per_second>(),
            altitude.get::<meter>(),
            0.0,
        ))
    }

    /// Total idle thrust in descent.
    #[must_use]
    pub fn descent_idle(&self, tas: Velocity, altitude: Length) -> Force {
        self.takeoff(tas, altitude) * DESCENT_IDLE_FRACTION
    }

    #[must_use]
    pub fn aircraft(&self) -> &AircraftSpec {
        &self.aircraft
    }

    #[must_use]
    pub fn engine(&self) -> &EngineSpec {
        &self.engine
    }

    #[must_use]
    pub fn engine_count(&self) -> u32 {
        self.engine_count
    }

    /// Rated take-off thrust summed over all engines.
    #[must_use]
    pub fn max_total_thrust(&self) -> Force {
        self.engine.max_thrust * f64::from(self.engine_count)
    }

    fn takeoff_si(&self, tas: f64, h: f64) -> f64 {
        let bpr = self.engine.bypass_ratio;
        let mach = tas / speed_of_sound_si(T0);

        let (p, _, _) = state_si(h, 0.0);
        let delta = p / P0;
        let delta2 = delta * delta;
        let delta3 = delta2 * delta;

        let g0 = 0.0606 * bpr + 0.6337;
        let a = -0.4327 * delta2 + 1.3855 * delta + 0.0472;
        let z = 0.9106 * delta3 - 1.7736 * delta2 + 1.8697 * delta;
        let x = 0.1377 * delta3 - 0.4374 * delta2 + 1.3003 * delta;

        let ratio = a - 0.377 * (1.0 + bpr) / ((1.0 + 0.82 * bpr) * g0).sqrt() * z * mach
            + (0.23 + 0.19 * bpr.sqrt()) * x * mach * mach;

        ratio * self.max_total_thrust().get::<newton>()
    }

    fn climb_si(&self, tas: f64, h: f64, rate_of_climb: f64) -> f64 {
        let roc = (rate_of_climb / FT_PER_MIN).abs();
        let tas = tas.max(MIN_CLIMB_TAS);

        let mach = tas_to_mach_si(tas, h, 0.0);
        let vr = tas_to_cas_si(tas, h, 0.0) / self.anchor.cas;

        let (p, _, _) = state_si(h, 0.0);
        let (p10, _, _) = state_si(H_LOW, 0.0);
        let (p30, _, _) = state_si(H_HIGH, 0.0);

        let middle = |pressure_ratio: f64| {
            let n = 2.667e-5 * roc + 0.8633;
            vr.powf(-0.1) * pressure_ratio.powf(-0.355 * vr + n)
        };

        let ratio = if h > H_HIGH {
            let mr = mach / self.anchor.mach;
            let d = -0.4204 * mr + 1.0824;
            d * (p / p30).ln() + mr.powf(-0.11)
        } else if h > H_LOW {
            middle(p / p30)
        } else {
            let f10 = middle(p10 / p30);
            let m = -0.12043 * vr - 8.8889e-9 * roc * roc + 2.4444e-5 * roc + 0.47379;
            m * (p / p30) + (f10 - m * p10 / p30)
        };

        ratio * self.anchor.thrust
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        force::kilonewton,
        length::foot,
        velocity::{foot_per_minute, knot},
    };

    use crate::support::catalog::{
        Catalog, ConfigurationError, ResolveError, test_support,
    };

    fn a320() -> Thrust {
        Thrust::new(Catalog::reference(), "A320", &ModelConfig::default()).unwrap()
    }

    fn kt(v: f64) -> Velocity {
        Velocity::new::<knot>(v)
    }

    fn ft(h: f64) -> Length {
        Length::new::<foot>(h)
    }

    #[test]
    fn takeoff_thrust_is_a_fraction_of_rated() {
        let thrust = a320();
        let max = thrust.max_total_thrust();

        for speed in [0.0, 80.0, 140.0, 180.0] {
            for altitude in [0.0, 2_000.0, 8_000.0] {
                let f = thrust.takeoff(kt(speed), ft(altitude));
                assert!(f.get::<newton>() > 0.0 && f < max * 1.5, "{speed} kt at {altitude} ft");
            }
        }

        let static_sea_level = thrust.takeoff(kt(0.0), ft(0.0));
        assert_relative_eq!(
            static_sea_level.get::<kilonewton>(),
            2.0 * 120.1,
            max_relative = 1e-3
        );
        assert!(thrust.takeoff(kt(140.0), ft(0.0)) < static_sea_level);
    }

    #[test]
    fn climb_thrust_is_bounded() {
        let thrust = a320();
        let max = thrust.max_total_thrust();

        let f = thrust.climb(kt(100.0), ft(0.0), Velocity::new::<foot_per_minute>(0.0));
        assert!(f.get::<newton>() > 0.0 && f.get::<newton>() < 1e7);

        for (speed, altitude) in [(180.0, 3_000.0), (290.0, 20_000.0), (450.0, 35_000.0)] {
            let f = thrust.climb(kt(speed), ft(altitude), Velocity::new::<foot_per_minute>(2_000.0));
            assert!(f.is_finite());
            assert!(f.get::<newton>() > 0.0 && f < max * 1.5, "{speed} kt at {altitude} ft");
        }
    }

    #[test]
    fn climb_thrust_in_each_segment() {
        // Anchor: 2 × 25 kN at M 0.8 and 35 000 ft, CAS 271.9 kt.
        let thrust = a320();
        let fpm = |v: f64| Velocity::new::<foot_per_minute>(v);

        // Lower segment, CAS ratio 0.856.
        assert_relative_eq!(
            thrust.climb(kt(250.0), ft(5_000.0), fpm(2_000.0)).get::<newton>(),
            94_299.133_023_537,
            max_relative = 1e-9
        );
        // Middle segment, CAS ratio 0.818.
        assert_relative_eq!(
            thrust.climb(kt(300.0), ft(20_000.0), fpm(1_500.0)).get::<newton>(),
            66_672.582_894_807,
            max_relative = 1e-9
        );
        // Upper segment, Mach ratio 0.998.
        assert_relative_eq!(
            thrust.climb(kt(460.0), ft(35_000.0), fpm(500.0)).get::<newton>(),
            42_297.122_893_181,
            max_relative = 1e-9
        );
    }

    #[test]
    fn cruise_at_anchor_state_is_below_anchor_thrust() {
        // The upper segment is normalized at 30 000 ft, not at the anchor
        // altitude, so the anchor thrust is not recovered at the anchor state.
        let thrust = a320();
        let h = ft(35_000.0);
        let tas = Velocity::new::<meter_per_second>(mach_to_tas_si(0.8, h.get::<meter>(), 0.0));

        let cruise = thrust.cruise(tas, h).get::<newton>();
        assert_relative_eq!(cruise, 42_295.609_481_308, max_relative = 1e-9);
        assert_relative_eq!(cruise / 50_000.0, 0.845_912, max_relative = 1e-5);
    }

    #[test]
    fn climb_is_continuous_at_10000_ft() {
        let thrust = a320();
        let roc = Velocity::new::<foot_per_minute>(1_800.0);

        let below = thrust.climb(kt(250.0), ft(10_000.0), roc);
        let above = thrust.climb(kt(250.0), ft(10_000.001), roc);

        assert_relative_eq!(below.get::<newton>(), above.get::<newton>(), max_relative = 1e-6);
    }

    #[test]
    fn climb_ignores_sign_of_vertical_speed() {
        let thrust = a320();

        let up = thrust.climb(kt(250.0), ft(5_000.0), Velocity::new::<foot_per_minute>(1_000.0));
        let down = thrust.climb(kt(250.0), ft(5_000.0), Velocity::new::<foot_per_minute>(-1_000.0));

        assert_eq!(up, down);
    }

    #[test]
    fn cruise_and_idle_derive_from_other_regimes() {
        let thrust = a320();
        let (tas, h) = (kt(450.0), ft(35_000.0));

        assert_eq!(thrust.cruise(tas, h), thrust.climb(tas, h, Velocity::new::<knot>(0.0)));
        assert_relative_eq!(
            thrust.descent_idle(tas, h).get::<newton>(),
            0.07 * thrust.takeoff(tas, h).get::<newton>()
        );
    }

    #[test]
    fn anchor_falls_back_to_aircraft_cruise() {
        // The A319 default engine carries no cruise reference.
        let thrust = Thrust::new(Catalog::reference(), "A319", &ModelConfig::default()).unwrap();

        assert!(thrust.engine().cruise.is_none());
        assert_relative_eq!(
            thrust.anchor.thrust,
            2.0 * (0.2 * 104_500.0 + 890.0),
            max_relative = 1e-12
        );
        assert_relative_eq!(thrust.anchor.mach, 0.78);
    }

    #[test]
    fn synonym_resolution() {
        let catalog = Catalog::reference();

        assert_eq!(
            Thrust::new(catalog, "A20N", &ModelConfig::default()),
            Err(ThrustError::Resolve(ResolveError::AircraftNotFound {
                code: "A20N".to_owned()
            }))
        );

        let thrust = Thrust::new(catalog, "A20N", &ModelConfig::default().with_synonym(true)).unwrap();
        assert_eq!(thrust.aircraft().code, "A320");
        assert_eq!(thrust.engine_count(), 2);
    }

    #[test]
    fn incompatible_engine_requires_force() {
        let catalog = Catalog::reference();
        let config = ModelConfig::default().with_engine("CFM56-7B26");

        assert!(matches!(
            Thrust::new(catalog, "A320", &config),
            Err(ThrustError::IncompatibleEngine { ref engine, .. }) if engine == "CFM56-7B26"
        ));

        let forced = Thrust::new(catalog, "A320", &config.with_force_engine(true)).unwrap();
        assert_eq!(forced.engine().name, "CFM56-7B26");
    }

    #[test]
    fn alternative_engine_option() {
        let config = ModelConfig::default().with_engine("v2527");
        let thrust = Thrust::new(Catalog::reference(), "A320", &config).unwrap();

        assert_eq!(thrust.engine().name, "V2527-A5");
    }

    #[test]
    fn missing_configuration() {
        let mut catalog = test_support::catalog();

        let mut no_default = test_support::aircraft("TST2");
        if let Some(installation) = no_default.engine.as_mut() {
            installation.default = None;
        }
        catalog.insert_aircraft(no_default).unwrap();

        assert_eq!(
            Thrust::new(&catalog, "TST2", &ModelConfig::default()),
            Err(ThrustError::Configuration(
                ConfigurationError::MissingDefaultEngine {
                    aircraft: "TST2".to_owned()
                }
            ))
        );

        let mut no_cruise = test_support::aircraft("TST3");
        no_cruise.cruise = None;
        catalog.insert_aircraft(no_cruise).unwrap();

        assert_eq!(
            Thrust::new(&catalog, "TST3", &ModelConfig::default()),
            Err(ThrustError::Configuration(ConfigurationError::MissingCruise {
                aircraft: "TST3".to_owned()
            }))
        );

        let mut no_engines = test_support::aircraft("TST4");
        no_engines.engine = None;
        catalog.insert_aircraft(no_engines).unwrap();

        assert!(matches!(
            Thrust::new(&catalog, "TST4", &ModelConfig::default()),
            Err(ThrustError::Configuration(
                ConfigurationError::MissingEngineInstallation { .. }
            ))
        ));
    }
}
