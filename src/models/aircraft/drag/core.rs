//! Parabolic drag polar with flap, gear, and compressibility increments.

use std::f64::consts::PI;

use uom::si::{
    angle::{degree, radian},
    area::square_meter,
    f64::{Angle, Force, Length, Mass, Velocity},
    force::newton,
    length::meter,
    mass::kilogram,
    velocity::meter_per_second,
};

use crate::{
    models::aircraft::ModelConfig,
    support::{
        airspeed::tas_to_mach_si,
        atmosphere::{G0, state_si},
        catalog::{
            AircraftSpec, ConfigurationError, DragPolar, EngineMount, FlapPolar, ParameterProvider,
        },
    },
};

use super::DragError;

/// Korn technology factor for supercritical airfoils.
const KORN: f64 = 0.95;
const DEFAULT_THICKNESS_TO_CHORD: f64 = 0.11;
const MIN_DYNAMIC_FORCE: f64 = 1e-3;

/// Drag model for one aircraft type.
///
/// # Example
///
/// ```
/// use aeroperf_models::models::aircraft::{Drag, ModelConfig};
/// use aeroperf_models::support::catalog::Catalog;
/// use uom::si::{
///     angle::degree,
///     f64::{Angle, Length, Mass, Velocity},
///     length::foot,
///     mass::kilogram,
///     velocity::knot,
/// };
///
/// let drag = Drag::new(Catalog::reference(), "A320", &ModelConfig::default()).unwrap();
///
/// let mass = Mass::new::<kilogram>(60_000.0);
/// let tas = Velocity::new::<knot>(160.0);
/// let altitude = Length::new::<foot>(2_000.0);
/// let level = Velocity::new::<knot>(0.0);
///
/// let clean = drag.clean(mass, tas, altitude, level);
/// let landing = drag
///     .non_clean(mass, tas, altitude, Angle::new::<degree>(20.0), level, true)
///     .unwrap();
///
/// assert!(landing > clean);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Drag {
    aircraft: AircraftSpec,
    polar: DragPolar,
    wave_drag: bool,
    mount: Option<EngineMount>,
}

/// Lift demand at one flight state.
struct Lift {
    /// Dynamic pressure times wing area, N.
    q_s: f64,
    cl: f64,
    mach: f64,
}

impl Drag {
    /// Resolves the aircraft and its drag polar.
    ///
    /// The engine mount comes from `config.mount` when set, otherwise from the
    /// aircraft's engine installation. It may be absent; only
    /// [`Drag::non_clean`] needs it.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::Resolve`] if the aircraft or drag polar cannot be resolved.
    pub fn new(
        provider: &(impl ParameterProvider + ?Sized),
        code: &str,
        config: &ModelConfig,
    ) -> Result<Self, DragError> {
        let aircraft = provider.aircraft(code, config.use_synonym)?;
        let polar = provider.drag_polar(code, config.use_synonym)?;
        let mount = config
            .mount
            .or_else(|| aircraft.engine.as_ref().map(|installation| installation.mount));

        Ok(Self {
            aircraft,
            polar,
            wave_drag: config.wave_drag,
            mount,
        })
    }

    /// Drag in clean configuration (flaps and gear retracted).
    #[must_use]
    pub fn clean(
        &self,
        mass: Mass,
        tas: Velocity,
        altitude: Length,
        vertical_speed: Velocity,
    ) -> Force {
        let lift = self.lift(mass, tas, altitude, vertical_speed);

        let cd0 = self.polar.clean.cd0 + self.wave_drag_increment(&lift);
        let cd = cd0 + self.polar.clean.k * lift.cl * lift.cl;

        Force::new::<newton>(cd * lift.q_s)
    }

    /// Drag with flaps deflected and, optionally, landing gear extended.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::Configuration`] if the engine mount is unknown.
    pub fn non_clean(
        &self,
        mass: Mass,
        tas: Velocity,
        altitude: Length,
        flap_angle: Angle,
        vertical_speed: Velocity,
        landing_gear: bool,
    ) -> Result<Force, DragError> {
        let mount = self
            .mount
            .ok_or_else(|| ConfigurationError::MissingEngineMount {
                aircraft: self.aircraft.code.clone(),
            })?;

        let lift = self.lift(mass, tas, altitude, vertical_speed);
        let wing = &self.aircraft.wing;

        let FlapPolar {
            lambda_f,
            cf_c,
            sf_s,
        } = self.polar.flaps;
        let d_cd_flap = lambda_f * cf_c.powf(1.38) * sf_s * flap_angle.get::<radian>().sin().powi(2);

        let d_cd_gear = if landing_gear {
            let mtow = self.aircraft.limits.mtow.get::<kilogram>();
            mtow * 9.8065 / wing.area.get::<square_meter>() * 3.16e-5 * mtow.powf(-0.215)
        } else {
            0.0
        };

        let oswald_gain = match mount {
            EngineMount::Rear => 0.0046,
            EngineMount::Wing | EngineMount::Fuselage => 0.0026,
        };
        let d_e = oswald_gain * flap_angle.get::<degree>();
        let k = 1.0 / (1.0 / self.polar.clean.k + PI * wing.aspect_ratio() * d_e);

        let cd0 = self.polar.clean.cd0 + d_cd_flap + d_cd_gear + self.wave_drag_increment(&lift);
        let cd = cd0 + k * lift.cl * lift.cl;

        Ok(Force::new::<newton>(cd * lift.q_s))
    }

    #[must_use]
    pub fn aircraft(&self) -> &AircraftSpec {
        &self.aircraft
    }

    #[must_use]
    pub fn polar(&self) -> &DragPolar {
        &self.polar
    }

    /// Engine mount position used for the flap Oswald-factor increment.
    #[must_use]
    pub fn mount(&self) -> Option<EngineMount> {
        self.mount
    }

    fn lift(&self, mass: Mass, tas: Velocity, altitude: Length, vertical_speed: Velocity) -> Lift {
        let v = tas.get::<meter_per_second>();
        let h = altitude.get::<meter>();
        let gamma = vertical_speed.get::<meter_per_second>().atan2(v);

        let (_, rho, _) = state_si(h, 0.0);
        let s = self.aircraft.wing.area.get::<square_meter>();
        let q_s = (0.5 * rho * v * v * s).max(MIN_DYNAMIC_FORCE);

        let lift = mass.get::<kilogram>() * G0 * gamma.cos();

        Lift {
            q_s,
            cl: lift / q_s,
            mach: tas_to_mach_si(v, h, 0.0),
        }
    }

    /// Compressibility drag from the Korn equation; zero when disabled.
    fn wave_drag_increment(&self, lift: &Lift) -> f64 {
        if !self.wave_drag {
            return 0.0;
        }

        let wing = &self.aircraft.wing;
        let cos = wing.sweep.get::<radian>().cos();
        let tc = wing.thickness_to_chord.unwrap_or(DEFAULT_THICKNESS_TO_CHORD);

        let mach_dd = KORN / cos - tc / cos.powi(2) - lift.cl / (10.0 * cos.powi(3));
        let mach_crit = mach_dd - (0.1_f64 / 80.0).cbrt();

        20.0 * (lift.mach - mach_crit).max(0.0).powi(4)
    }
}
