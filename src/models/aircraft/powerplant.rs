use log::trace;

use crate::support::catalog::{
    AircraftSpec, ConfigurationError, EngineSpec, ParameterProvider, ResolveError,
};

use super::ModelConfig;

/// An aircraft record together with the engine selected for it.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Powerplant {
    pub aircraft: AircraftSpec,
    pub engine: EngineSpec,
    pub engine_count: u32,
    /// Whether the engine is one of the installation's certified options.
    pub certified: bool,
}

impl Powerplant {
    /// Resolves the aircraft, then the configured engine or the installation default.
    pub(super) fn resolve<E>(
        provider: &(impl ParameterProvider + ?Sized),
        code: &str,
        config: &ModelConfig,
    ) -> Result<Self, E>
    where
        E: From<ResolveError> + From<ConfigurationError>,
    {
        let aircraft = provider.aircraft(code, config.use_synonym)?;
        let installation = aircraft.engine_installation()?;

        let name = config
            .engine
            .as_deref()
            .or(installation.default.as_deref())
            .ok_or_else(|| ConfigurationError::MissingDefaultEngine {
                aircraft: aircraft.code.clone(),
            })?;

        let engine = provider.engine(name)?;
        let engine_count = installation.count;
        let certified = installation.permits(&engine.name);

        trace!(
            "powerplant: {} x{engine_count} {} (certified: {certified})",
            aircraft.code, engine.name
        );

        Ok(Self {
            aircraft,
            engine,
            engine_count,
            certified,
        })
    }

    /// Permitted engine name fragments of the installation.
    pub(super) fn options(&self) -> Vec<String> {
        self.aircraft
            .engine
            .as_ref()
            .map(|installation| installation.options.clone())
            .unwrap_or_default()
    }
}
