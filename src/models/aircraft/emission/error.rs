use thiserror::Error;

use crate::support::{
    catalog::{ConfigurationError, ResolveError},
    interpolate::InterpolationError,
};

/// Errors that can occur while building an [`Emission`](super::Emission) model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EmissionError {
    /// The aircraft or engine could not be resolved.
    #[error("parameter resolution failed")]
    Resolve(#[from] ResolveError),

    /// The aircraft record lacks data the emission model needs.
    #[error("incomplete aircraft configuration")]
    Configuration(#[from] ConfigurationError),

    /// An LTO emission index table is not usable for interpolation.
    #[error("invalid LTO emission table")]
    Table(#[from] InterpolationError),
}
