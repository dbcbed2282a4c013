use thiserror::Error;

use crate::support::catalog::{ConfigurationError, ResolveError};

/// Errors that can occur while building or evaluating a [`Drag`](super::Drag) model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DragError {
    /// The aircraft or its drag polar could not be resolved.
    #[error("parameter resolution failed")]
    Resolve(#[from] ResolveError),

    /// The aircraft record lacks data the evaluation needs.
    #[error("incomplete aircraft configuration")]
    Configuration(#[from] ConfigurationError),
}
