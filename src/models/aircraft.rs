//! Aircraft performance models.
//!
//! Every model is built from a [`ParameterProvider`], an aircraft type code,
//! and a [`ModelConfig`]. Construction resolves all records once; evaluation
//! afterwards is pure and never touches the provider again.
//!
//! | Model         | Evaluates                                  |
//! |---------------|--------------------------------------------|
//! | [`Thrust`]    | take-off, climb, cruise, and idle thrust   |
//! | [`Drag`]      | clean and non-clean aerodynamic drag       |
//! | [`FuelFlow`]  | fuel flow from thrust or from flight state |
//! | [`Emission`]  | pollutant emission rates from fuel flow    |
//!
//! [`ParameterProvider`]: crate::support::catalog::ParameterProvider

mod config;
mod powerplant;
mod state;

pub mod drag;
pub mod emission;
pub mod fuel_flow;
pub mod mass;
pub mod thrust;

pub use config::ModelConfig;
pub use drag::{Drag, DragError, DragInput};
pub use emission::{Emission, EmissionError, EmissionInput, EmissionRates};
pub use fuel_flow::{FuelFlow, FuelFlowError, FuelFlowInput, Throttle};
pub use mass::{RangeMass, takeoff_mass};
pub use state::FlightState;
pub use thrust::{Thrust, ThrustError, ThrustInput};
