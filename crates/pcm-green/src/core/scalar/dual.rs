use super::DiffScalar;
use num_traits::{One, Zero};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// First-order forward-mode dual number with `N` tangent directions.
///
/// `Dual<1>` propagates a single directional derivative, `Dual<3>` the full gradient
/// with respect to the three coordinates of one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dual<const N: usize> {
    pub re: f64,
    pub eps: [f64; N],
}

impl<const N: usize> Dual<N> {
    pub fn new(re: f64, eps: [f64; N]) -> Self {
        Self { re, eps }
    }

    /// A variable seeded with the unit tangent along `direction`.
    pub fn variable(re: f64, direction: usize) -> Self {
        let mut eps = [0.0; N];
        eps[direction] = 1.0;
        Self { re, eps }
    }

    #[inline]
    fn map_eps(self, factor: f64) -> [f64; N] {
        let mut eps = self.eps;
        for e in &mut eps {
            *e *= factor;
        }
        eps
    }

    // f(re) + f'(re) * eps
    #[inline]
    fn chain(self, f0: f64, f1: f64) -> Self {
        Self {
            re: f0,
            eps: self.map_eps(f1),
        }
    }
}

impl<const N: usize> Add for Dual<N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let mut eps = self.eps;
        for (e, r) in eps.iter_mut().zip(rhs.eps) {
            *e += r;
        }
        Self {
            re: self.re + rhs.re,
            eps,
        }
    }
}

impl<const N: usize> Sub for Dual<N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let mut eps = self.eps;
        for (e, r) in eps.iter_mut().zip(rhs.eps) {
            *e -= r;
        }
        Self {
            re: self.re - rhs.re,
            eps,
        }
    }
}

impl<const N: usize> Mul for Dual<N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let mut eps = [0.0; N];
        for (i, e) in eps.iter_mut().enumerate() {
            *e = self.eps[i] * rhs.re + rhs.eps[i] * self.re;
        }
        Self {
            re: self.re * rhs.re,
            eps,
        }
    }
}

impl<const N: usize> Div for Dual<N> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        let denom = rhs.re * rhs.re;
        let mut eps = [0.0; N];
        for (i, e) in eps.iter_mut().enumerate() {
            *e = (self.eps[i] * rhs.re - self.re * rhs.eps[i]) / denom;
        }
        Self {
            re: self.re / rhs.re,
            eps,
        }
    }
}

impl<const N: usize> Neg for Dual<N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            eps: self.map_eps(-1.0),
        }
    }
}

impl<const N: usize> Add<f64> for Dual<N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f64) -> Self {
        Self {
            re: self.re + rhs,
            eps: self.eps,
        }
    }
}

impl<const N: usize> Sub<f64> for Dual<N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f64) -> Self {
        Self {
            re: self.re - rhs,
            eps: self.eps,
        }
    }
}

impl<const N: usize> Mul<f64> for Dual<N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self {
            re: self.re * rhs,
            eps: self.map_eps(rhs),
        }
    }
}

impl<const N: usize> Div<f64> for Dual<N> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        let mut eps = self.eps;
        for e in &mut eps {
            *e /= rhs;
        }
        Self {
            re: self.re / rhs,
            eps,
        }
    }
}

impl<const N: usize> Zero for Dual<N> {
    fn zero() -> Self {
        Self::constant(0.0)
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.eps.iter().all(|e| *e == 0.0)
    }
}

impl<const N: usize> One for Dual<N> {
    fn one() -> Self {
        Self::constant(1.0)
    }
}

impl<const N: usize> DiffScalar for Dual<N> {
    #[inline]
    fn constant(value: f64) -> Self {
        Self {
            re: value,
            eps: [0.0; N],
        }
    }

    #[inline]
    fn value(&self) -> f64 {
        self.re
    }

    #[inline]
    fn exp(self) -> Self {
        let e = self.re.exp();
        self.chain(e, e)
    }

    #[inline]
    fn sqrt(self) -> Self {
        let s = self.re.sqrt();
        self.chain(s, 0.5 / s)
    }

    #[inline]
    fn powi(self, n: i32) -> Self {
        self.chain(self.re.powi(n), f64::from(n) * self.re.powi(n - 1))
    }

    #[inline]
    fn recip(self) -> Self {
        let r = self.re.recip();
        self.chain(r, -r * r)
    }
}
