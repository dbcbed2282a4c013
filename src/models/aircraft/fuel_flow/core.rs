//! Fuel flow from the total thrust ratio.
//!
//! Fuel flow is `f(x)·scale`, where `f` is the aircraft type's fuel curve and
//! `x` is thrust over rated take-off thrust. A type-specific curve is already
//! dimensional for its reference engine and is only rescaled for other
//! engines; the catalog default curve is normalized and scales with the
//! engine's take-off fuel flow and count.

use log::debug;
use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{Acceleration, Force, Length, Mass, MassRate, Velocity},
    force::newton,
    mass::kilogram,
    mass_rate::kilogram_per_second,
    ratio::ratio,
    velocity::meter_per_second,
};

use crate::{
    models::aircraft::{Drag, ModelConfig, Thrust},
    support::{
        atmosphere::G0,
        catalog::{FuelCurve, FuelCurveSource, ParameterProvider},
    },
};

use super::{FuelFlowError, Throttle};

/// Thrust ratio where the soft floor takes over.
const RATIO_FLOOR: f64 = 0.03;
const FLOOR_SHARPNESS: f64 = 50.0;

const MAX_FLIGHT_PATH_ANGLE: f64 = 0.175;
const MAX_ACCELERATION: f64 = 5.0;

const IDLE_MARGIN: f64 = 0.8;
const CLIMB_MARGIN: f64 = 1.2;

/// Fuel flow model for one aircraft type and engine.
///
/// # Example
///
/// ```
/// use aeroperf_models::models::aircraft::{FuelFlow, ModelConfig, Throttle};
/// use aeroperf_models::support::catalog::Catalog;
/// use uom::si::{
///     f64::{Length, Velocity},
///     length::foot,
///     mass_rate::kilogram_per_second,
///     velocity::knot,
/// };
///
/// let fuel_flow = FuelFlow::new(Catalog::reference(), "A320", &ModelConfig::default()).unwrap();
///
/// let full = fuel_flow.takeoff(
///     Velocity::new::<knot>(140.0),
///     Length::new::<foot>(0.0),
///     Throttle::full(),
/// );
/// assert!(full.get::<kilogram_per_second>() > 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FuelFlow {
    thrust: Thrust,
    drag: Drag,
    curve: FuelCurve,
    /// Multiplier on the curve output, kg/s per curve unit.
    scale: f64,
}

impl FuelFlow {
    /// Builds the thrust and drag models and loads the fuel curve.
    ///
    /// # Errors
    ///
    /// Returns [`FuelFlowError`] if either underlying model fails to build or
    /// the fuel curve names a reference engine the provider does not know.
    pub fn new(
        provider: &(impl ParameterProvider + ?Sized),
        code: &str,
        config: &ModelConfig,
    ) -> Result<Self, FuelFlowError> {
        let thrust = Thrust::new(provider, code, config)?;
        let drag = Drag::new(provider, code, config)?;

        let aircraft = &thrust.aircraft().code;
        let engine = thrust.engine();
        let takeoff_flow = engine.fuel_flow.takeoff.get::<kilogram_per_second>();

        let row = provider.fuel_curve(aircraft);
        let scale = match row.source {
            FuelCurveSource::Default => {
                debug!("fuel flow: no curve for {aircraft}, using the default curve");
                takeoff_flow * f64::from(thrust.engine_count())
            }
            FuelCurveSource::Type(_) => match &row.curve.reference_engine {
                Some(reference) if !reference.eq_ignore_ascii_case(&engine.name) => {
                    let reference = provider.engine(reference)?;
                    debug!(
                        "fuel flow: rescaling {aircraft} curve from {} to {}",
                        reference.name, engine.name
                    );
                    takeoff_flow / reference.fuel_flow.takeoff.get::<kilogram_per_second>()
                }
                _ => 1.0,
            },
        };

        Ok(Self {
            thrust,
            drag,
            curve: row.curve,
            scale,
        })
    }

    /// Fuel flow at a total thrust.
    ///
    /// Thrust ratios below a few percent are floored smoothly, so idle never
    /// yields zero flow. With `limit`, ratios above one are capped at one.
    #[must_use]
    pub fn at_thrust(&self, total_thrust: Force, limit: bool) -> MassRate {
        let x = soft_floor((total_thrust / self.thrust.max_total_thrust()).get::<ratio>());
        let x = if limit { x.min(1.0) } else { x };

        MassRate::new::<kilogram_per_second>(self.curve.eval(x) * self.scale)
    }

    /// Fuel flow during the take-off roll at a throttle setting.
    #[must_use]
    pub fn takeoff(&self, tas: Velocity, altitude: Length, throttle: Throttle) -> MassRate {
        let thrust = self.thrust.takeoff(tas, altitude) * throttle.get::<ratio>();
        self.at_thrust(thrust, true)
    }

    /// Fuel flow en route, from the thrust needed to balance drag, weight, and inertia.
    ///
    /// The required thrust is held between 80 % of descent idle and 120 % of
    /// climb thrust. With `limit`, the flight path angle is capped at ±0.175 rad
    /// and the acceleration at ±5 m/s².
    #[must_use]
    pub fn enroute(
        &self,
        mass: Mass,
        tas: Velocity,
        altitude: Length,
        vertical_speed: Velocity,
        acceleration: Acceleration,
        limit: bool,
    ) -> MassRate {
        let drag = self.drag.clean(mass, tas, altitude, vertical_speed);

        let mut gamma = vertical_speed
            .get::<meter_per_second>()
            .atan2(tas.get::<meter_per_second>());
        let mut a = acceleration.get::<meter_per_second_squared>();
        if limit {
            gamma = gamma.clamp(-MAX_FLIGHT_PATH_ANGLE, MAX_FLIGHT_PATH_ANGLE);
            a = a.clamp(-MAX_ACCELERATION, MAX_ACCELERATION);
        }

        let m = mass.get::<kilogram>();
        let required = drag.get::<newton>() + m * G0 * gamma.sin() + m * a;

        let floor = IDLE_MARGIN * self.thrust.descent_idle(tas, altitude).get::<newton>();
        let ceiling = CLIMB_MARGIN
            * self
                .thrust
                .climb(tas, altitude, vertical_speed)
                .get::<newton>();
        let thrust = required.max(floor).min(ceiling);

        self.at_thrust(Force::new::<newton>(thrust), limit)
    }

    #[must_use]
    pub fn thrust(&self) -> &Thrust {
        &self.thrust
    }

    #[must_use]
    pub fn drag(&self) -> &Drag {
        &self.drag
    }

    #[must_use]
    pub fn fuel_curve(&self) -> &FuelCurve {
        &self.curve
    }
}

/// Smooth floor `ln(1 + e^(50(x − 0.03)))/50 + 0.03`, in overflow-free form.
fn soft_floor(x: f64) -> f64 {
    let z = FLOOR_SHARPNESS * (x - RATIO_FLOOR);
    let softplus = z.max(0.0) + (-z.abs()).exp().ln_1p();
    softplus / FLOOR_SHARPNESS + RATIO_FLOOR
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        length::foot,
        velocity::{foot_per_minute, knot},
    };

    use crate::{
        models::aircraft::ThrustError,
        support::catalog::{Catalog, ResolveError, test_support},
    };

    fn a320(config: &ModelConfig) -> FuelFlow {
        FuelFlow::new(Catalog::reference(), "A320", config).unwrap()
    }

    fn kt(v: f64) -> Velocity {
        Velocity::new::<knot>(v)
    }

    fn ft(h: f64) -> Length {
        Length::new::<foot>(h)
    }

    fn still() -> Acceleration {
        Acceleration::new::<meter_per_second_squared>(0.0)
    }

    #[test]
    fn soft_floor_shape() {
        assert_relative_eq!(soft_floor(0.5), 0.5, max_relative = 1e-9);
        assert!(soft_floor(0.0) > RATIO_FLOOR);
        assert!(soft_floor(-10.0) >= RATIO_FLOOR);
        assert!(soft_floor(1e6).is_finite());
    }

    #[test]
    fn at_thrust_evaluates_curve_at_thrust_ratio() {
        let fuel_flow = a320(&ModelConfig::default());
        let max = fuel_flow.thrust().max_total_thrust();

        // Native engine, so the type curve is used unscaled.
        for x in [0.3, 0.6, 0.9] {
            let expected = fuel_flow.fuel_curve().eval(soft_floor(x));
            assert_relative_eq!(
                fuel_flow.at_thrust(max * x, true).get::<kilogram_per_second>(),
                expected,
                max_relative = 1e-12
            );
        }

        // Above full thrust the cap only applies with `limit`.
        assert_relative_eq!(
            fuel_flow.at_thrust(max * 1.2, false).get::<kilogram_per_second>(),
            fuel_flow.fuel_curve().eval(soft_floor(1.2)),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            fuel_flow.at_thrust(max * 1.2, true).get::<kilogram_per_second>(),
            fuel_flow.fuel_curve().eval(1.0),
            max_relative = 1e-12
        );
    }

    #[test]
    fn at_thrust_is_non_decreasing() {
        let fuel_flow = a320(&ModelConfig::default());
        let max = fuel_flow.thrust().max_total_thrust();

        let mut previous = fuel_flow.at_thrust(max * 0.0, true);
        assert!(previous.get::<kilogram_per_second>() > 0.0);

        for step in 1..=100 {
            let current = fuel_flow.at_thrust(max * (f64::from(step) / 100.0), true);
            assert!(current >= previous, "step {step}");
            previous = current;
        }
    }

    #[test]
    fn limit_caps_thrust_ratio() {
        let fuel_flow = a320(&ModelConfig::default());
        let max = fuel_flow.thrust().max_total_thrust();

        assert_eq!(
            fuel_flow.at_thrust(max * 1.5, true),
            fuel_flow.at_thrust(max * 2.0, true)
        );
        assert!(fuel_flow.at_thrust(max * 2.0, false) > fuel_flow.at_thrust(max * 2.0, true));
    }

    #[test]
    fn takeoff_scales_with_throttle() {
        let fuel_flow = a320(&ModelConfig::default());
        let (tas, h) = (kt(140.0), ft(0.0));

        let full = fuel_flow.takeoff(tas, h, Throttle::full());
        let half = fuel_flow.takeoff(tas, h, Throttle::new(0.5).unwrap());

        assert!(half < full);
        assert_eq!(
            full,
            fuel_flow.at_thrust(fuel_flow.thrust().takeoff(tas, h), true)
        );
    }

    #[test]
    fn enroute_cruise_burn_is_positive() {
        let fuel_flow = a320(&ModelConfig::default());

        let ff = fuel_flow.enroute(
            Mass::new::<kilogram>(65_000.0),
            kt(250.0),
            ft(30_000.0),
            Velocity::new::<foot_per_minute>(0.0),
            still(),
            true,
        );

        assert!(ff.get::<kilogram_per_second>() > 0.0);
    }

    #[test]
    fn enroute_climb_burns_more_than_descent() {
        let fuel_flow = a320(&ModelConfig::default());
        let mass = Mass::new::<kilogram>(65_000.0);
        let (tas, h) = (kt(300.0), ft(20_000.0));

        let burn = |fpm: f64| {
            let vs = Velocity::new::<foot_per_minute>(fpm);
            fuel_flow.enroute(mass, tas, h, vs, still(), true)
        };
        let (climb, level, descent) = (burn(2_000.0), burn(0.0), burn(-2_000.0));

        assert!(climb > level && level > descent);
    }

    #[test]
    fn steep_descent_is_held_at_idle_floor() {
        let fuel_flow = a320(&ModelConfig::default());
        let (tas, h) = (kt(280.0), ft(15_000.0));

        let ff = fuel_flow.enroute(
            Mass::new::<kilogram>(65_000.0),
            tas,
            h,
            Velocity::new::<foot_per_minute>(-5_000.0),
            still(),
            true,
        );
        let idle = fuel_flow.at_thrust(fuel_flow.thrust().descent_idle(tas, h) * 0.8, true);

        assert_relative_eq!(
            ff.get::<kilogram_per_second>(),
            idle.get::<kilogram_per_second>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn type_curve_scales_for_other_engines() {
        let native = a320(&ModelConfig::default());
        assert_relative_eq!(native.scale, 1.0);

        let alternative = a320(&ModelConfig::default().with_engine("V2527"));
        assert_relative_eq!(alternative.scale, 1.153 / 1.104, max_relative = 1e-12);
    }

    #[test]
    fn default_curve_scales_with_takeoff_flow() {
        // The A319 has no curve of its own.
        let fuel_flow = FuelFlow::new(Catalog::reference(), "A319", &ModelConfig::default()).unwrap();

        assert!(fuel_flow.fuel_curve().reference_engine.is_none());
        assert_relative_eq!(fuel_flow.scale, 2.0 * 0.936, max_relative = 1e-12);
    }

    #[test]
    fn synonym_uses_target_curve() {
        let config = ModelConfig::default().with_synonym(true);
        let fuel_flow = FuelFlow::new(Catalog::reference(), "A20N", &config).unwrap();

        assert_eq!(
            fuel_flow.fuel_curve().reference_engine.as_deref(),
            Some("CFM56-5B4")
        );
    }

    #[test]
    fn construction_errors() {
        let catalog = test_support::catalog();

        assert!(matches!(
            FuelFlow::new(&catalog, "NOPE", &ModelConfig::default()),
            Err(FuelFlowError::Thrust(ThrustError::Resolve(
                ResolveError::AircraftNotFound { .. }
            )))
        ));

        let mut catalog = test_support::catalog();
        catalog.insert_aircraft(test_support::aircraft("TST6")).unwrap();
        catalog
            .insert_fuel_curve(
                "TST6",
                FuelCurve {
                    reference_engine: Some("XX-9".to_owned()),
                    ..test_support::normalized_curve()
                },
            )
            .unwrap();
        catalog.insert_drag_polar("TST6", test_support::polar()).unwrap();

        assert!(matches!(
            FuelFlow::new(&catalog, "TST6", &ModelConfig::default()),
            Err(FuelFlowError::Resolve(ResolveError::EngineNotFound { .. }))
        ));
    }
}
