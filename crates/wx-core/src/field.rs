//! Array-like inputs and element-wise broadcasting.
//!
//! Every formula in wxparams accepts a scalar or an n-dimensional array for each
//! argument and evaluates element-wise. This module defines that contract once:
//!
//! - [`ArrayLike`] turns `f64`, slices, `Vec<f64>`, fixed arrays and any
//!   `ndarray` array or view into a dynamic-dimension view without copying
//!   array data.
//! - [`broadcast_shape`] applies NumPy broadcasting rules to a set of shapes.
//! - [`zip_map`] broadcasts N inputs together and applies a scalar kernel.
//! - [`map_field`] is the unary case, which cannot fail.
//!
//! Scalar inputs produce 0-dimensional results; use [`into_scalar`] to unwrap.
//!
//! # Example
//!
//! ```
//! use ndarray::array;
//! use wx_core::{into_scalar, zip_map, ArrayLike};
//!
//! let t = array![[0.0, 5.0], [10.0, 20.0]];
//! let shifted = zip_map([t.to_field(), 273.15_f64.to_field()], |[t, k]| t + k).unwrap();
//! assert_eq!(shifted.shape(), &[2, 2]);
//!
//! let single = zip_map([1.0_f64.to_field(), 2.0_f64.to_field()], |[a, b]| a + b).unwrap();
//! assert_eq!(into_scalar(single), Some(3.0));
//! ```

use crate::error::{WxError, WxResult};
use crate::numeric::Real;
use ndarray::{Array, ArrayBase, ArrayD, ArrayView1, CowArray, Data, Dimension, Ix0, IxDyn, arr0};

/// Owned, dynamically-shaped result of an element-wise formula.
pub type Field = ArrayD<Real>;

/// A scalar or array of `f64` usable as a formula argument.
pub trait ArrayLike {
    /// Borrow (or, for scalars, wrap) the value as a dynamic-dimension array.
    fn to_field(&self) -> CowArray<'_, Real, IxDyn>;
}

impl ArrayLike for Real {
    fn to_field(&self) -> CowArray<'_, Real, IxDyn> {
        CowArray::from(arr0(*self).into_dyn())
    }
}

impl ArrayLike for [Real] {
    fn to_field(&self) -> CowArray<'_, Real, IxDyn> {
        ArrayView1::from(self).into_dyn().into()
    }
}

impl<const N: usize> ArrayLike for [Real; N] {
    fn to_field(&self) -> CowArray<'_, Real, IxDyn> {
        self.as_slice().to_field()
    }
}

impl ArrayLike for Vec<Real> {
    fn to_field(&self) -> CowArray<'_, Real, IxDyn> {
        self.as_slice().to_field()
    }
}

impl<S, D> ArrayLike for ArrayBase<S, D>
where
    S: Data<Elem = Real>,
    D: Dimension,
{
    fn to_field(&self) -> CowArray<'_, Real, IxDyn> {
        self.view().into_dyn().into()
    }
}

impl<T: ArrayLike + ?Sized> ArrayLike for &T {
    fn to_field(&self) -> CowArray<'_, Real, IxDyn> {
        (**self).to_field()
    }
}

/// Combined shape of `shapes` under NumPy broadcasting rules.
///
/// Shapes are right-aligned; each axis must either match or be 1.
pub fn broadcast_shape(shapes: &[&[usize]]) -> WxResult<Vec<usize>> {
    let ndim = shapes.iter().map(|s| s.len()).max().unwrap_or(0);
    let mut out = vec![1_usize; ndim];

    for shape in shapes {
        let offset = ndim - shape.len();
        for (axis, &len) in shape.iter().enumerate() {
            let slot = &mut out[offset + axis];
            if *slot == 1 {
                *slot = len;
            } else if len != 1 && len != *slot {
                let shapes: Vec<Vec<usize>> = shapes.iter().map(|s| s.to_vec()).collect();
                tracing::debug!(?shapes, "inputs are not broadcast-compatible");
                return Err(WxError::ShapeMismatch { shapes });
            }
        }
    }

    Ok(out)
}

/// Broadcast `inputs` together and evaluate `kernel` at every element.
///
/// The kernel receives one value per input, in input order. Elements are
/// independent: a NaN produced at one position never affects another.
pub fn zip_map<const N: usize, T, F>(inputs: [CowArray<'_, Real, IxDyn>; N], kernel: F) -> WxResult<ArrayD<T>>
where
    F: Fn([Real; N]) -> T,
{
    let shapes: Vec<&[usize]> = inputs.iter().map(|a| a.shape()).collect();
    let dim = IxDyn(&broadcast_shape(&shapes)?);

    let mut views = Vec::with_capacity(N);
    for input in &inputs {
        let view = input.broadcast(dim.clone()).ok_or(WxError::InvalidArg {
            what: "input cannot be broadcast to the common shape",
        })?;
        views.push(view);
    }

    // Broadcast views share one logical shape, so their iterators stay in lockstep.
    let mut lanes: Vec<_> = views.iter().map(|v| v.iter()).collect();
    let mut out = Vec::with_capacity(dim.size());
    for _ in 0..dim.size() {
        let args: [Real; N] =
            std::array::from_fn(|i| lanes[i].next().copied().unwrap_or(Real::NAN));
        out.push(kernel(args));
    }

    Array::from_shape_vec(dim, out).map_err(|_| WxError::InvalidArg {
        what: "output length does not match broadcast shape",
    })
}

/// Apply a unary scalar kernel element-wise.
pub fn map_field<A, T, F>(input: A, kernel: F) -> ArrayD<T>
where
    A: ArrayLike,
    F: Fn(Real) -> T,
{
    input.to_field().map(|&x| kernel(x))
}

/// Unwrap a 0-dimensional result (from all-scalar inputs).
///
/// Returns `None` when the array has one or more axes.
pub fn into_scalar<T>(field: ArrayD<T>) -> Option<T> {
    field
        .into_dimensionality::<Ix0>()
        .ok()
        .map(|a| a.into_scalar())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn scalar_broadcasts_against_any_shape(shape in prop::collection::vec(1_usize..5, 0..4)) {
            let scalar: &[usize] = &[];
            let out = broadcast_shape(&[scalar, shape.as_slice()]).unwrap();
            prop_assert_eq!(out, shape);
        }

        #[test]
        fn broadcast_is_order_independent(
            a in prop::collection::vec(prop_oneof![Just(1_usize), Just(3_usize)], 0..4),
            b in prop::collection::vec(prop_oneof![Just(1_usize), Just(3_usize)], 0..4),
        ) {
            let (a, b) = (a.as_slice(), b.as_slice());
            prop_assert_eq!(broadcast_shape(&[a, b]).unwrap(), broadcast_shape(&[b, a]).unwrap());
        }
    }
}
