use thiserror::Error;

use crate::{
    models::aircraft::{DragError, ThrustError},
    support::catalog::ResolveError,
};

/// Errors that can occur while building a [`FuelFlow`](super::FuelFlow) model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FuelFlowError {
    /// The underlying thrust model could not be built.
    #[error("thrust model failed")]
    Thrust(#[from] ThrustError),

    /// The underlying drag model could not be built.
    #[error("drag model failed")]
    Drag(#[from] DragError),

    /// The fuel curve's reference engine could not be resolved.
    #[error("fuel curve reference engine not found")]
    Resolve(#[from] ResolveError),
}
