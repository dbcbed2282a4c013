use thiserror::Error;

use crate::support::catalog::{ConfigurationError, ResolveError};

/// Errors that can occur while building a [`Thrust`](super::Thrust) model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThrustError {
    /// The aircraft or engine could not be resolved.
    #[error("parameter resolution failed")]
    Resolve(#[from] ResolveError),

    /// The aircraft record lacks data the thrust model needs.
    #[error("incomplete aircraft configuration")]
    Configuration(#[from] ConfigurationError),

    /// The engine is not certified on the aircraft type.
    #[error("engine {engine} is not an option for {aircraft} (allowed: {options:?})")]
    IncompatibleEngine {
        engine: String,
        aircraft: String,
        options: Vec<String>,
    },
}
