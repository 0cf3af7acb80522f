use super::DiffScalar;
use num_traits::{One, Zero};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Second-order forward-mode number `re + e1 ε₁ + e2 ε₂ + e12 ε₁ε₂` with
/// `ε₁² = ε₂² = 0`.
///
/// Seeding one point along direction `u` on `ε₁` and another along `v` on `ε₂` yields
/// the two directional derivatives in `e1`/`e2` and the mixed second derivative
/// `uᵀ H v` in `e12`, without truncation error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HyperDual {
    pub re: f64,
    pub e1: f64,
    pub e2: f64,
    pub e12: f64,
}

impl HyperDual {
    pub fn new(re: f64, e1: f64, e2: f64, e12: f64) -> Self {
        Self { re, e1, e2, e12 }
    }

    // f(x) = f(re) + f'(re)(e1 ε₁ + e2 ε₂) + (f'(re) e12 + f''(re) e1 e2) ε₁ε₂
    #[inline]
    fn chain(self, f0: f64, f1: f64, f2: f64) -> Self {
        Self {
            re: f0,
            e1: f1 * self.e1,
            e2: f1 * self.e2,
            e12: f1 * self.e12 + f2 * self.e1 * self.e2,
        }
    }
}

impl Add for HyperDual {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            e1: self.e1 + rhs.e1,
            e2: self.e2 + rhs.e2,
            e12: self.e12 + rhs.e12,
        }
    }
}

impl Sub for HyperDual {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            re: self.re - rhs.re,
            e1: self.e1 - rhs.e1,
            e2: self.e2 - rhs.e2,
            e12: self.e12 - rhs.e12,
        }
    }
}

impl Mul for HyperDual {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            re: self.re * rhs.re,
            e1: self.e1 * rhs.re + self.re * rhs.e1,
            e2: self.e2 * rhs.re + self.re * rhs.e2,
            e12: self.e12 * rhs.re + self.e1 * rhs.e2 + self.e2 * rhs.e1 + self.re * rhs.e12,
        }
    }
}

impl Div for HyperDual {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.recip()
    }
}

impl Neg for HyperDual {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            e1: -self.e1,
            e2: -self.e2,
            e12: -self.e12,
        }
    }
}

impl Add<f64> for HyperDual {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f64) -> Self {
        Self {
            re: self.re + rhs,
            ..self
        }
    }
}

impl Sub<f64> for HyperDual {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f64) -> Self {
        Self {
            re: self.re - rhs,
            ..self
        }
    }
}

impl Mul<f64> for HyperDual {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self {
            re: self.re * rhs,
            e1: self.e1 * rhs,
            e2: self.e2 * rhs,
            e12: self.e12 * rhs,
        }
    }
}

impl Div<f64> for HyperDual {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self {
            re: self.re / rhs,
            e1: self.e1 / rhs,
            e2: self.e2 / rhs,
            e12: self.e12 / rhs,
        }
    }
}

impl Zero for HyperDual {
    fn zero() -> Self {
        Self::constant(0.0)
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.e1 == 0.0 && self.e2 == 0.0 && self.e12 == 0.0
    }
}

impl One for HyperDual {
    fn one() -> Self {
        Self::constant(1.0)
    }
}

impl DiffScalar for HyperDual {
    #[inline]
    fn constant(value: f64) -> Self {
        Self::new(value, 0.0, 0.0, 0.0)
    }

    #[inline]
    fn value(&self) -> f64 {
        self.re
    }

    #[inline]
    fn exp(self) -> Self {
        let e = self.re.exp();
        self.chain(e, e, e)
    }

    #[inline]
    fn sqrt(self) -> Self {
        let s = self.re.sqrt();
        self.chain(s, 0.5 / s, -0.25 / (s * self.re))
    }

    #[inline]
    fn powi(self, n: i32) -> Self {
        let nf = f64::from(n);
        self.chain(
            self.re.powi(n),
            nf * self.re.powi(n - 1),
            nf * (nf - 1.0) * self.re.powi(n - 2),
        )
    }

    #[inline]
    fn recip(self) -> Self {
        let r = self.re.recip();
        self.chain(r, -r * r, 2.0 * r * r * r)
    }
}
