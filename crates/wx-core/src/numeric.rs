use ndarray::{ArrayBase, Data, Dimension};

/// Floating point type used throughout system
pub type Real = f64;

/// Absolute/relative tolerance pair for comparing computed values.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    /// Purely absolute tolerance.
    pub const fn absolute(abs: Real) -> Self {
        Self { abs, rel: 0.0 }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Element-wise `nearly_equal` over two arrays of identical shape.
///
/// NaN in the same position of both arrays counts as a match, so batches with
/// degenerate elements can be compared directly.
pub fn all_close<S1, S2, D1, D2>(
    a: &ArrayBase<S1, D1>,
    b: &ArrayBase<S2, D2>,
    tol: Tolerances,
) -> bool
where
    S1: Data<Elem = Real>,
    S2: Data<Elem = Real>,
    D1: Dimension,
    D2: Dimension,
{
    a.shape() == b.shape()
        && a
            .iter()
            .zip(b.iter())
            .all(|(&x, &y)| (x.is_nan() && y.is_nan()) || nearly_equal(x, y, tol))
}
