/// Fuel flow curve `f(x) = c1 − exp(−c2·(x·e^(c3·x) − ln(c1)/c2))` over thrust ratio `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelCurve {
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
    /// Engine the curve was fitted for; `None` for normalized curves.
    pub reference_engine: Option<String>,
}

impl FuelCurve {
    /// Evaluates the curve at thrust ratio `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        let Self { c1, c2, c3, .. } = *self;
        c1 - (-c2 * (x * (c3 * x).exp() - c1.ln() / c2)).exp()
    }
}

/// Where a fuel curve came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FuelCurveSource {
    /// A row fitted for this aircraft type.
    Type(String),
    /// The catalog-wide default row.
    Default,
}

/// A fuel curve together with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelCurveRow {
    pub curve: FuelCurve,
    pub source: FuelCurveSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn curve_starts_at_zero() {
        let curve = FuelCurve {
            c1: 2.45,
            c2: 1.9,
            c3: 0.25,
            reference_engine: None,
        };

        assert_relative_eq!(curve.eval(0.0), 0.0, epsilon = 1e-12);
        assert!(curve.eval(1.0) < curve.c1);
    }
}
