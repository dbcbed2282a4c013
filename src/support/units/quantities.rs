use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P2, Z0},
};

/// Specific gas constant, J/kg·K in SI.
pub type SpecificGasConstant = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Emission index, mass of pollutant per mass of fuel burned.
///
/// Dimensionless; certification tables quote it in g/kg, which is
/// [`uom::si::ratio::per_mille`].
pub type EmissionIndex = uom::si::f64::Ratio;
