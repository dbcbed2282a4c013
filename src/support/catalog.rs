//! Aircraft, engine, and drag polar parameters.
//!
//! Models never read parameter files themselves. They resolve records
//! through a [`ParameterProvider`] once, at construction, and own the
//! resolved copies from then on.
//!
//! [`Catalog`] is an in-memory provider. It resolves aircraft codes in at
//! most two steps: a direct lookup, then a single hop through the synonym
//! table. Synonyms never chain.
//!
//! [`Catalog::reference`] returns a small built-in dataset, initialized once
//! per process, that is enough to exercise every model.
//!
//! # Example
//!
//! ```
//! use aeroperf_models::support::catalog::{Catalog, ParameterProvider};
//!
//! let catalog = Catalog::reference();
//!
//! // `A20N` has no record of its own and resolves through its synonym.
//! assert!(catalog.aircraft("A20N", false).is_err());
//! let aircraft = catalog.aircraft("A20N", true).unwrap();
//! assert_eq!(aircraft.code, "A320");
//!
//! // Engines match by case-insensitive name prefix.
//! let engine = catalog.engine("cfm56-5b4").unwrap();
//! assert_eq!(engine.name, "CFM56-5B4");
//! ```

mod aircraft;
mod drag_polar;
mod engine;
mod error;
mod fuel_curve;
mod reference;
mod wrap;

pub use aircraft::{AircraftSpec, CruisePoint, EngineInstallation, EngineMount, MassLimits, Wing};
pub use drag_polar::{CleanPolar, DragPolar, FlapPolar};
pub use engine::{DEFAULT_FUEL_ALTITUDE_COEFFICIENT, EngineCruise, EngineSpec, Lto};
pub use error::{ConfigurationError, RecordError, ResolveError};
pub use fuel_curve::{FuelCurve, FuelCurveRow, FuelCurveSource};
pub use wrap::WrapParameter;

use std::{collections::HashMap, sync::LazyLock};

use log::{debug, trace};
use uom::si::{
    area::square_meter, force::newton, length::meter, mass::kilogram,
    mass_rate::kilogram_per_second,
};

use crate::support::{
    constraint::{Constraint, ConstraintError, NonNegative, StrictlyPositive},
    interpolate::PiecewiseLinear,
};

/// Source of aircraft, engine, and drag polar records.
///
/// Lookups are fallible and return owned records so that each model owns
/// its parameters outright.
pub trait ParameterProvider {
    /// Resolves an aircraft type code, optionally through one synonym hop.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::AircraftNotFound`] if neither a direct record
    /// nor (when allowed) a synonym target exists.
    fn aircraft(&self, code: &str, use_synonym: bool) -> Result<AircraftSpec, ResolveError>;

    /// Resolves the first engine whose name starts with `name`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::EngineNotFound`] if no engine name matches.
    fn engine(&self, name: &str) -> Result<EngineSpec, ResolveError>;

    /// Resolves the drag polar of an aircraft type, optionally through one synonym hop.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::DragPolarNotFound`] if no polar exists.
    fn drag_polar(&self, code: &str, use_synonym: bool) -> Result<DragPolar, ResolveError>;

    /// Returns the fuel flow curve for an aircraft type, or the default curve.
    fn fuel_curve(&self, code: &str) -> FuelCurveRow;

    /// Resolves one WRAP kinematic parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::WrapParameterNotFound`] if the pair is unknown.
    fn wrap_parameter(&self, code: &str, variable: &str) -> Result<WrapParameter, ResolveError>;
}

/// In-memory [`ParameterProvider`].
#[derive(Debug, Clone)]
pub struct Catalog {
    aircraft: HashMap<String, AircraftSpec>,
    synonyms: HashMap<String, String>,
    engines: Vec<EngineSpec>,
    drag_polars: HashMap<String, DragPolar>,
    fuel_curves: HashMap<String, FuelCurve>,
    default_fuel_curve: FuelCurve,
    wrap: HashMap<(String, String), WrapParameter>,
}

static REFERENCE: LazyLock<Catalog> = LazyLock::new(reference::catalog);

impl Catalog {
    /// Creates an empty catalog with the given default fuel curve.
    #[must_use]
    pub fn new(default_fuel_curve: FuelCurve) -> Self {
        Self {
            aircraft: HashMap::new(),
            synonyms: HashMap::new(),
            engines: Vec::new(),
            drag_polars: HashMap::new(),
            fuel_curves: HashMap::new(),
            default_fuel_curve,
            wrap: HashMap::new(),
        }
    }

    /// Returns the built-in reference catalog.
    #[must_use]
    pub fn reference() -> &'static Catalog {
        &REFERENCE
    }

    /// Adds an aircraft record, replacing any record with the same code.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] if the code is empty or a geometric, mass, or
    /// engine count field is not strictly positive.
    pub fn insert_aircraft(&mut self, spec: AircraftSpec) -> Result<(), RecordError> {
        let key = key(&spec.code)?;
        let record = spec.code.as_str();

        check::<StrictlyPositive, _>(record, "wing area", spec.wing.area.get::<square_meter>())?;
        check::<StrictlyPositive, _>(record, "wing span", spec.wing.span.get::<meter>())?;
        check::<StrictlyPositive, _>(record, "MTOW", spec.limits.mtow.get::<kilogram>())?;
        check::<StrictlyPositive, _>(record, "OEW", spec.limits.oew.get::<kilogram>())?;
        if let Some(engine) = &spec.engine {
            check::<StrictlyPositive, _>(record, "engine count", engine.count)?;
        }

        trace!("catalog: aircraft {key}");
        self.aircraft.insert(key, spec);
        Ok(())
    }

    /// Appends an engine record; earlier records win prefix ties.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] if the name is empty, the maximum thrust is not
    /// strictly positive, the bypass ratio is negative, or the LTO fuel flows
    /// are negative or decrease from idle to take-off.
    pub fn insert_engine(&mut self, spec: EngineSpec) -> Result<(), RecordError> {
        key(&spec.name)?;
        let record = spec.name.as_str();

        check::<StrictlyPositive, _>(record, "max thrust", spec.max_thrust.get::<newton>())?;
        check::<NonNegative, _>(record, "bypass ratio", spec.bypass_ratio)?;

        let fuel_flow = spec.fuel_flow.map(|ff| ff.get::<kilogram_per_second>());
        check::<NonNegative, _>(record, "idle fuel flow", fuel_flow.idle)?;
        PiecewiseLinear::new(fuel_flow.to_array(), [0.0; 4]).map_err(|source| {
            RecordError::LtoTable {
                engine: spec.name.clone(),
                source,
            }
        })?;

        trace!("catalog: engine {}", spec.name);
        self.engines.push(spec);
        Ok(())
    }

    /// Adds a drag polar for an aircraft code.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::EmptyCode`] for an empty code.
    pub fn insert_drag_polar(&mut self, code: &str, polar: DragPolar) -> Result<(), RecordError> {
        self.drag_polars.insert(key(code)?, polar);
        Ok(())
    }

    /// Adds a type-specific fuel curve.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::EmptyCode`] for an empty code.
    pub fn insert_fuel_curve(&mut self, code: &str, curve: FuelCurve) -> Result<(), RecordError> {
        self.fuel_curves.insert(key(code)?, curve);
        Ok(())
    }

    /// Maps `code` onto the aircraft record `target`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::DanglingSynonym`] unless `target` already has a
    /// direct aircraft record, which keeps synonyms one level deep.
    pub fn insert_synonym(&mut self, code: &str, target: &str) -> Result<(), RecordError> {
        let code_key = key(code)?;
        let target_key = key(target)?;

        if !self.aircraft.contains_key(&target_key) {
            return Err(RecordError::DanglingSynonym {
                code: code.to_owned(),
                target: target.to_owned(),
            });
        }

        self.synonyms.insert(code_key, target_key);
        Ok(())
    }

    /// Adds a WRAP parameter for an aircraft code.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::EmptyCode`] for an empty code.
    pub fn insert_wrap_parameter(
        &mut self,
        code: &str,
        variable: &str,
        parameter: WrapParameter,
    ) -> Result<(), RecordError> {
        self.wrap
            .insert((key(code)?, variable.to_lowercase()), parameter);
        Ok(())
    }

    /// Looks `code` up in `table`, then through one synonym hop when allowed.
    fn resolve<'a, T>(
        &'a self,
        table: &'a HashMap<String, T>,
        code: &str,
        use_synonym: bool,
    ) -> Option<&'a T> {
        let code = code.to_uppercase();

        if let Some(record) = table.get(&code) {
            return Some(record);
        }
        if !use_synonym {
            return None;
        }

        let target = self.synonyms.get(&code)?;
        debug!("catalog: {code} resolved through synonym {target}");
        table.get(target)
    }
}

impl ParameterProvider for Catalog {
    fn aircraft(&self, code: &str, use_synonym: bool) -> Result<AircraftSpec, ResolveError> {
        self.resolve(&self.aircraft, code, use_synonym)
            .cloned()
            .ok_or_else(|| ResolveError::AircraftNotFound {
                code: code.to_owned(),
            })
    }

    fn engine(&self, name: &str) -> Result<EngineSpec, ResolveError> {
        let prefix = name.to_uppercase();

        self.engines
            .iter()
            .find(|engine| engine.name.to_uppercase().starts_with(&prefix))
            .cloned()
            .ok_or_else(|| ResolveError::EngineNotFound {
                name: name.to_owned(),
            })
    }

    fn drag_polar(&self, code: &str, use_synonym: bool) -> Result<DragPolar, ResolveError> {
        self.resolve(&self.drag_polars, code, use_synonym)
            .copied()
            .ok_or_else(|| ResolveError::DragPolarNotFound {
                code: code.to_owned(),
            })
    }

    fn fuel_curve(&self, code: &str) -> FuelCurveRow {
        let code = code.to_uppercase();

        match self.fuel_curves.get(&code) {
            Some(curve) => FuelCurveRow {
                curve: curve.clone(),
                source: FuelCurveSource::Type(code),
            },
            None => FuelCurveRow {
                curve: self.default_fuel_curve.clone(),
                source: FuelCurveSource::Default,
            },
        }
    }

    fn wrap_parameter(&self, code: &str, variable: &str) -> Result<WrapParameter, ResolveError> {
        self.wrap
            .get(&(code.to_uppercase(), variable.to_lowercase()))
            .cloned()
            .ok_or_else(|| ResolveError::WrapParameterNotFound {
                code: code.to_owned(),
                variable: variable.to_owned(),
            })
    }
}

/// Normalizes a record code to its lookup key.
fn key(code: &str) -> Result<String, RecordError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(RecordError::EmptyCode);
    }
    Ok(code.to_uppercase())
}

fn check<C, T>(record: &str, field: &'static str, value: T) -> Result<(), RecordError>
where
    C: Constraint<T>,
{
    C::check(&value).map_err(|source: ConstraintError| RecordError::Constraint {
        record: record.to_owned(),
        field,
        source,
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Small hand-built records for exercising edge cases.

    use uom::si::{
        angle::degree,
        f64::{Angle, Area, Force, Length, Mass, MassRate, Ratio},
        force::kilonewton,
        length::{foot, kilometer},
        ratio::per_mille,
    };

    use super::*;

    pub(crate) fn aircraft(code: &str) -> AircraftSpec {
        AircraftSpec {
            code: code.to_owned(),
            name: format!("Test {code}"),
            wing: Wing {
                area: Area::new::<square_meter>(122.6),
                span: Length::new::<meter>(34.1),
                mean_chord: Length::new::<meter>(4.29),
                sweep: Angle::new::<degree>(25.0),
                thickness_to_chord: None,
            },
            limits: MassLimits {
                mtow: Mass::new::<kilogram>(78_000.0),
                mlw: Mass::new::<kilogram>(66_000.0),
                oew: Mass::new::<kilogram>(42_600.0),
                max_fuel: Mass::new::<kilogram>(19_000.0),
            },
            cruise: Some(CruisePoint {
                height: Length::new::<foot>(36_000.0),
                mach: 0.78,
                range: Some(Length::new::<kilometer>(5_000.0)),
            }),
            engine: Some(EngineInstallation {
                mount: EngineMount::Wing,
                count: 2,
                default: Some("TF-1A".to_owned()),
                options: vec!["TF-1".to_owned()],
            }),
        }
    }

    pub(crate) fn engine(name: &str) -> EngineSpec {
        let ei = |idle, approach, climb_out, takeoff| Lto {
            idle: Ratio::new::<per_mille>(idle),
            approach: Ratio::new::<per_mille>(approach),
            climb_out: Ratio::new::<per_mille>(climb_out),
            takeoff: Ratio::new::<per_mille>(takeoff),
        };

        EngineSpec {
            name: name.to_owned(),
            bypass_ratio: 5.5,
            max_thrust: Force::new::<kilonewton>(120.0),
            cruise: None,
            fuel_flow: Lto {
                idle: MassRate::new::<kilogram_per_second>(0.1),
                approach: MassRate::new::<kilogram_per_second>(0.3),
                climb_out: MassRate::new::<kilogram_per_second>(0.9),
                takeoff: MassRate::new::<kilogram_per_second>(1.1),
            },
            ei_nox: ei(4.5, 10.0, 21.0, 27.0),
            ei_co: ei(30.0, 2.5, 0.6, 0.5),
            ei_hc: ei(4.0, 0.1, 0.05, 0.04),
            fuel_altitude_coefficient: DEFAULT_FUEL_ALTITUDE_COEFFICIENT,
        }
    }

    pub(crate) fn polar() -> DragPolar {
        DragPolar {
            clean: CleanPolar {
                cd0: 0.018,
                k: 0.042,
                e: 0.8,
            },
            flaps: FlapPolar {
                lambda_f: 0.9,
                cf_c: 0.3,
                sf_s: 0.6,
            },
        }
    }

    pub(crate) fn normalized_curve() -> FuelCurve {
        FuelCurve {
            c1: 1.1,
            c2: 1.8,
            c3: 0.3,
            reference_engine: None,
        }
    }

    /// A catalog with one complete aircraft `TST1` and engine `TF-1A`.
    pub(crate) fn catalog() -> Catalog {
        let mut catalog = Catalog::new(normalized_curve());
        catalog.insert_aircraft(aircraft("TST1")).unwrap();
        catalog.insert_engine(engine("TF-1A")).unwrap();
        catalog.insert_drag_polar("TST1", polar()).unwrap();
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use super::test_support::{aircraft, catalog, engine};

    #[test]
    fn direct_lookup_ignores_case() {
        let catalog = catalog();

        assert_eq!(catalog.aircraft("tst1", false).unwrap().code, "TST1");
        assert_eq!(catalog.aircraft("TST1", true).unwrap().code, "TST1");
    }

    #[test]
    fn synonym_requires_opt_in() {
        let mut catalog = catalog();
        catalog.insert_synonym("TST2", "TST1").unwrap();

        assert_eq!(
            catalog.aircraft("TST2", false),
            Err(ResolveError::AircraftNotFound {
                code: "TST2".to_owned()
            })
        );
        assert_eq!(catalog.aircraft("TST2", true).unwrap().code, "TST1");
        assert!(catalog.drag_polar("TST2", true).is_ok());
    }

    #[test]
    fn synonyms_never_chain() {
        let mut catalog = catalog();
        catalog.insert_synonym("TST2", "TST1").unwrap();

        assert_eq!(
            catalog.insert_synonym("TST3", "TST2"),
            Err(RecordError::DanglingSynonym {
                code: "TST3".to_owned(),
                target: "TST2".to_owned(),
            })
        );
    }

    #[test]
    fn engine_prefix_takes_first_in_table_order() {
        let mut catalog = catalog();
        catalog.insert_engine(engine("TF-1B")).unwrap();

        assert_eq!(catalog.engine("tf-1").unwrap().name, "TF-1A");
        assert_eq!(catalog.engine("TF-1B").unwrap().name, "TF-1B");
        assert!(matches!(
            catalog.engine("XX"),
            Err(ResolveError::EngineNotFound { .. })
        ));
    }

    #[test]
    fn resolution_is_deterministic() {
        let catalog = Catalog::reference();

        assert_eq!(
            catalog.aircraft("A320", false).unwrap(),
            catalog.aircraft("A320", false).unwrap()
        );
        assert_eq!(
            catalog.engine("CFM56-5B4").unwrap(),
            catalog.engine("CFM56-5B4").unwrap()
        );
    }

    #[test]
    fn fuel_curve_falls_back_to_default() {
        let mut catalog = catalog();
        assert_eq!(catalog.fuel_curve("TST1").source, FuelCurveSource::Default);

        catalog
            .insert_fuel_curve("TST1", test_support::normalized_curve())
            .unwrap();
        assert_eq!(
            catalog.fuel_curve("tst1").source,
            FuelCurveSource::Type("TST1".to_owned())
        );
    }

    #[test]
    fn rejects_invalid_records() {
        let mut catalog = catalog();

        let mut zero_engines = aircraft("BAD1");
        if let Some(engine) = zero_engines.engine.as_mut() {
            engine.count = 0;
        }
        assert!(matches!(
            catalog.insert_aircraft(zero_engines),
            Err(RecordError::Constraint {
                field: "engine count",
                source: ConstraintError::Zero,
                ..
            })
        ));

        let mut backwards = engine("BAD-2");
        std::mem::swap(&mut backwards.fuel_flow.idle, &mut backwards.fuel_flow.takeoff);
        assert!(matches!(
            catalog.insert_engine(backwards),
            Err(RecordError::LtoTable { .. })
        ));

        assert_eq!(
            catalog.insert_aircraft(aircraft("  ")),
            Err(RecordError::EmptyCode)
        );
    }

    #[test]
    fn wrap_lookup() {
        let catalog = Catalog::reference();

        let parameter = catalog.wrap_parameter("A320", "TO_V_LOF").unwrap();
        assert!(parameter.minimum <= parameter.optimum && parameter.optimum <= parameter.maximum);

        assert!(matches!(
            catalog.wrap_parameter("A320", "nonexistent"),
            Err(ResolveError::WrapParameterNotFound { .. })
        ));
    }
}
