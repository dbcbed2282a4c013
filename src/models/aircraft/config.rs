use crate::support::catalog::EngineMount;

/// Options shared by all aircraft model constructors.
///
/// The default resolves the aircraft code directly, uses the installation's
/// default engine, and disables the wave-drag correction.
///
/// ```
/// use aeroperf_models::models::aircraft::ModelConfig;
///
/// let config = ModelConfig::default()
///     .with_engine("V2527")
///     .with_synonym(true);
///
/// assert_eq!(config.engine.as_deref(), Some("V2527"));
/// assert!(config.use_synonym);
/// assert!(!config.wave_drag);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelConfig {
    /// Engine name prefix overriding the installation default.
    pub engine: Option<String>,

    /// Allow one synonym hop when resolving the aircraft code.
    pub use_synonym: bool,

    /// Accept an engine that is not certified on the aircraft type.
    pub force_engine: bool,

    /// Add the compressibility (wave drag) correction to clean drag.
    pub wave_drag: bool,

    /// Engine mount position overriding the aircraft record.
    pub mount: Option<EngineMount>,
}

impl ModelConfig {
    #[must_use]
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = Some(engine.into());
        self
    }

    #[must_use]
    pub fn with_synonym(mut self, use_synonym: bool) -> Self {
        self.use_synonym = use_synonym;
        self
    }

    #[must_use]
    pub fn with_force_engine(mut self, force_engine: bool) -> Self {
        self.force_engine = force_engine;
        self
    }

    #[must_use]
    pub fn with_wave_drag(mut self, wave_drag: bool) -> Self {
        self.wave_drag = wave_drag;
        self
    }

    #[must_use]
    pub fn with_mount(mut self, mount: EngineMount) -> Self {
        self.mount = Some(mount);
        self
    }
}
