use thiserror::Error;

use crate::support::{constraint::ConstraintError, interpolate::InterpolationError};

/// A code or name could not be resolved to a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no aircraft record for {code:?}")]
    AircraftNotFound { code: String },

    #[error("no engine whose name starts with {name:?}")]
    EngineNotFound { name: String },

    #[error("no drag polar for {code:?}")]
    DragPolarNotFound { code: String },

    #[error("no WRAP parameter {variable:?} for {code:?}")]
    WrapParameterNotFound { code: String, variable: String },
}

/// A resolved record lacks a field that an operation needs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("{aircraft}: no engine installation")]
    MissingEngineInstallation { aircraft: String },

    #[error("{aircraft}: no default engine configured and none supplied")]
    MissingDefaultEngine { aircraft: String },

    #[error("{aircraft}: no cruise reference point")]
    MissingCruise { aircraft: String },

    #[error("{aircraft}: no cruise range")]
    MissingCruiseRange { aircraft: String },

    #[error("{aircraft}: engine mount position unknown")]
    MissingEngineMount { aircraft: String },
}

/// A record was rejected on insertion into a [`Catalog`](super::Catalog).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("record code must not be empty")]
    EmptyCode,

    #[error("{record}: invalid {field}")]
    Constraint {
        record: String,
        field: &'static str,
        #[source]
        source: ConstraintError,
    },

    #[error("{engine}: invalid LTO fuel flow table")]
    LtoTable {
        engine: String,
        #[source]
        source: InterpolationError,
    },

    #[error("synonym {code} -> {target}: target has no aircraft record")]
    DanglingSynonym { code: String, target: String },
}
