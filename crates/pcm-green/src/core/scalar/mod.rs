//! # Differentiable Scalars
//!
//! Kernel formulas are written once against [`DiffScalar`] and instantiated with a scalar
//! type whose arithmetic carries as many derivatives as the caller needs:
//!
//! - [`f64`] - the plain value, no derivatives.
//! - [`Dual`] - first-order forward mode with `N` independent tangent directions.
//! - [`HyperDual`] - second-order forward mode carrying the mixed derivative along two
//!   seed directions.
//!
//! The three-component helpers ([`sub3`], [`dot3`], [`norm3`]) operate on plain arrays so
//! that formulas stay independent of the linear algebra backend used at the public API.

mod dual;
mod hyper;

pub use dual::Dual;
pub use hyper::HyperDual;

use num_traits::{One, Zero};
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A scalar supporting the operations needed by the Green's function formulas.
///
/// Mixed arithmetic with `f64` is required so that physical constants enter a formula
/// as constants, without being lifted into the differentiable type first.
pub trait DiffScalar:
    Copy
    + Debug
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Add<f64, Output = Self>
    + Sub<f64, Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
{
    /// Lifts a constant; all derivative parts are zero.
    fn constant(value: f64) -> Self;

    /// The real part, discarding derivative information.
    fn value(&self) -> f64;

    fn exp(self) -> Self;

    fn sqrt(self) -> Self;

    fn powi(self, n: i32) -> Self;

    fn recip(self) -> Self;
}

impl DiffScalar for f64 {
    #[inline]
    fn constant(value: f64) -> Self {
        value
    }

    #[inline]
    fn value(&self) -> f64 {
        *self
    }

    #[inline]
    fn exp(self) -> Self {
        f64::exp(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    #[inline]
    fn powi(self, n: i32) -> Self {
        f64::powi(self, n)
    }

    #[inline]
    fn recip(self) -> Self {
        f64::recip(self)
    }
}

#[inline]
pub fn sub3<T: DiffScalar>(a: &[T; 3], b: &[T; 3]) -> [T; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
pub fn dot3<T: DiffScalar>(a: &[T; 3], b: &[T; 3]) -> T {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
pub fn norm3<T: DiffScalar>(a: &[T; 3]) -> T {
    dot3(a, a).sqrt()
}
