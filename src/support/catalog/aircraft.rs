use uom::si::{
    f64::{Angle, Area, Length, Mass},
    ratio::ratio,
};

use super::ConfigurationError;

/// Where the engines are mounted on the airframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineMount {
    /// Under-wing pods.
    Wing,
    /// Rear-fuselage pods.
    Rear,
    /// Engines buried in or mounted on the fuselage.
    Fuselage,
}

/// Wing planform geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wing {
    pub area: Area,
    pub span: Length,
    pub mean_chord: Length,
    pub sweep: Angle,
    pub thickness_to_chord: Option<f64>,
}

impl Wing {
    /// Aspect ratio `b²/S`.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        (self.span * self.span / self.area).get::<ratio>()
    }
}

/// Certified mass limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassLimits {
    pub mtow: Mass,
    pub mlw: Mass,
    pub oew: Mass,
    pub max_fuel: Mass,
}

/// Nominal cruise condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CruisePoint {
    pub height: Length,
    pub mach: f64,
    pub range: Option<Length>,
}

/// Engine installation on an airframe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineInstallation {
    pub mount: EngineMount,
    pub count: u32,
    pub default: Option<String>,
    /// Name fragments of the engines certified on this type.
    pub options: Vec<String>,
}

impl EngineInstallation {
    /// Returns true if `engine` contains any permitted option, ignoring case.
    #[must_use]
    pub fn permits(&self, engine: &str) -> bool {
        let engine = engine.to_uppercase();
        self.options
            .iter()
            .any(|option| engine.contains(&option.to_uppercase()))
    }
}

/// Parameters of one aircraft type.
#[derive(Debug, Clone, PartialEq)]
pub struct AircraftSpec {
    /// ICAO type designator, e.g. `A320`.
    pub code: String,
    pub name: String,
    pub wing: Wing,
    pub limits: MassLimits,
    pub cruise: Option<CruisePoint>,
    pub engine: Option<EngineInstallation>,
}

impl AircraftSpec {
    /// Returns the engine installation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingEngineInstallation`] if the record has none.
    pub fn engine_installation(&self) -> Result<&EngineInstallation, ConfigurationError> {
        self.engine
            .as_ref()
            .ok_or_else(|| ConfigurationError::MissingEngineInstallation {
                aircraft: self.code.clone(),
            })
    }

    /// Returns the cruise reference point.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingCruise`] if the record has none.
    pub fn cruise_point(&self) -> Result<&CruisePoint, ConfigurationError> {
        self.cruise
            .as_ref()
            .ok_or_else(|| ConfigurationError::MissingCruise {
                aircraft: self.code.clone(),
            })
    }

    /// Returns the nominal cruise range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingCruise`] or
    /// [`ConfigurationError::MissingCruiseRange`] if either is absent.
    pub fn cruise_range(&self) -> Result<Length, ConfigurationError> {
        self.cruise_point()?
            .range
            .ok_or_else(|| ConfigurationError::MissingCruiseRange {
                aircraft: self.code.clone(),
            })
    }
}
