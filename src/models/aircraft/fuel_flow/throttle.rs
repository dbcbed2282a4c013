use std::ops::Deref;

use uom::si::{f64::Ratio, ratio::ratio};

use crate::support::constraint::{Constrained, ConstraintResult, UnitInterval};

/// Throttle setting as a fraction of take-off thrust.
///
/// The setting must fall in the closed interval [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throttle(Constrained<Ratio, UnitInterval>);

impl Throttle {
    /// Create a [`Throttle`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside the interval [0, 1].
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Create a [`Throttle`] from a quantity with ratio units.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity lies outside the interval [0, 1].
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(quantity)?))
    }

    /// Full take-off thrust.
    #[must_use]
    pub fn full() -> Self {
        Self(UnitInterval::one())
    }
}

impl Deref for Throttle {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::ratio::percent;

    use super::*;
    use crate::support::constraint::ConstraintError;

    #[test]
    fn accepts_unit_interval() -> ConstraintResult<()> {
        let throttle = Throttle::from_quantity(Ratio::new::<percent>(85.0))?;
        assert_relative_eq!(throttle.get::<ratio>(), 0.85, max_relative = 1e-12);

        Ok(())
    }

    #[test]
    fn full_is_unit_throttle() -> ConstraintResult<()> {
        assert_eq!(Throttle::full(), Throttle::new(1.0)?);
        assert_relative_eq!(Throttle::full().get::<ratio>(), 1.0);
        Ok(())
    }

    #[test]
    fn rejects_values_outside() {
        assert_eq!(Throttle::new(1.2), Err(ConstraintError::AboveMaximum));
        assert_eq!(Throttle::new(-0.1), Err(ConstraintError::BelowMinimum));
        assert_eq!(Throttle::new(f64::NAN), Err(ConstraintError::NotANumber));
    }
}
