//! Piecewise-linear table lookup.
//!
//! [`PiecewiseLinear`] interpolates a fixed-size table whose abscissae are
//! non-decreasing. Outside the table the end values are held constant:
//! the lookup clamps, it never extrapolates.

use thiserror::Error;

/// Errors raised when building a [`PiecewiseLinear`] table.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InterpolationError {
    /// A table entry is `NaN` or infinite.
    #[error("table entry {index} is not finite")]
    NonFinite { index: usize },

    /// The abscissae decrease between two consecutive entries.
    #[error("abscissae must be non-decreasing: x[{index}]={current} follows {previous}")]
    Decreasing {
        index: usize,
        previous: f64,
        current: f64,
    },
}

/// A clamped piecewise-linear interpolant over `N` points.
///
/// # Minimum Point Count
///
/// `N` must be at least 2, enforced at compile time.
///
/// # Example
///
/// ```
/// use aeroperf_models::support::interpolate::PiecewiseLinear;
///
/// let table = PiecewiseLinear::new([0.0, 2.0, 4.0, 8.0], [4.0, 10.0, 20.0, 28.0]).unwrap();
///
/// assert_eq!(table.eval(1.0), 7.0);
/// assert_eq!(table.eval(-1.0), 4.0); // clamped below
/// assert_eq!(table.eval(9.0), 28.0); // clamped above
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiecewiseLinear<const N: usize> {
    x: [f64; N],
    y: [f64; N],
}

impl<const N: usize> PiecewiseLinear<N> {
    /// Builds a table from abscissae `x` and ordinates `y`.
    ///
    /// Repeated abscissae are allowed; the lookup never lands inside a
    /// zero-width segment.
    ///
    /// # Errors
    ///
    /// Returns [`InterpolationError`] if any entry is not finite or if `x`
    /// decreases anywhere.
    pub fn new(x: [f64; N], y: [f64; N]) -> Result<Self, InterpolationError> {
        const {
            assert!(N >= 2, "piecewise-linear table requires at least 2 points");
        };

        for (index, (xi, yi)) in x.iter().zip(&y).enumerate() {
            if !xi.is_finite() || !yi.is_finite() {
                return Err(InterpolationError::NonFinite { index });
            }
        }

        for index in 1..N {
            if x[index] < x[index - 1] {
                return Err(InterpolationError::Decreasing {
                    index,
                    previous: x[index - 1],
                    current: x[index],
                });
            }
        }

        Ok(Self { x, y })
    }

    /// Evaluates the table at `xp`, holding the end values outside its domain.
    #[must_use]
    pub fn eval(&self, xp: f64) -> f64 {
        if xp.is_nan() {
            return f64::NAN;
        }
        if xp <= self.x[0] {
            return self.y[0];
        }
        if xp >= self.x[N - 1] {
            return self.y[N - 1];
        }

        // x[i] <= xp < x[i + 1] guarantees a segment of non-zero width.
        let i = self.x.partition_point(|&x| x <= xp) - 1;
        let (x0, x1) = (self.x[i], self.x[i + 1]);
        let (y0, y1) = (self.y[i], self.y[i + 1]);

        y0 + (y1 - y0) * (xp - x0) / (x1 - x0)
    }

    /// Returns the table abscissae.
    #[must_use]
    pub fn x(&self) -> &[f64; N] {
        &self.x
    }

    /// Returns the table ordinates.
    #[must_use]
    pub fn y(&self) -> &[f64; N] {
        &self.y
    }
}
