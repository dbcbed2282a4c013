//! Public performance models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are grouped by domain. [`aircraft`] holds the thrust, drag, fuel
//! flow, and emission models of fixed-wing transport aircraft.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation lives. The model type built there exposes the
//! evaluation methods directly.
//!
//! The [`twine_core::Model`] implementation is a thin adapter that delegates to
//! those methods, selecting one of them through an input enum.

pub mod aircraft;
