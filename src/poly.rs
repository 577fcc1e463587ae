use std::ops::Index;

use num::{Complex, One, Zero};

use crate::RealScalar;

mod calculus;
mod special_funcs;

/// Read access to the coefficients of a univariate polynomial.
///
/// Coefficients are indexed from the constant term (`0`) up to the leading
/// term (`order()`).
pub trait Polynomial<T> {
    /// The degree of the polynomial, i.e. the index of the leading coefficient
    fn order(&self) -> usize;

    /// The coefficient of `x^i`, `None` if out of range
    fn coeff(&self, i: usize) -> Option<T>;
}

/// A real polynomial stored as coefficients of ascending degree.
///
/// Unlike many polynomial types, zero coefficients at the top are kept as
/// given, so `order()` is always `coeffs().len() - 1`. Use [`Poly::trim`]
/// to drop them.
#[derive(Clone, Debug, PartialEq)]
pub struct Poly<T: RealScalar>(pub(crate) Vec<T>);

pub type Poly32 = Poly<f32>;
pub type Poly64 = Poly<f64>;

impl<T: RealScalar> Poly<T> {
    /// Polynomial from coefficients of ascending degree. An empty slice gives
    /// the zero polynomial.
    #[must_use]
    pub fn new(coeffs: &[T]) -> Self {
        Self::from_vec(coeffs.to_vec())
    }

    #[must_use]
    pub fn from_vec(coeffs: Vec<T>) -> Self {
        if coeffs.is_empty() {
            return Self(vec![T::zero()]);
        }
        Self(coeffs)
    }

    /// Expand `(x - r_0)(x - r_1)...`
    ///
    /// ```
    /// use eigenroots::{poly, Poly};
    ///
    /// assert_eq!(Poly::from_roots(&[1.0, -1.0]), poly![-1.0, 0.0, 1.0]);
    /// ```
    #[must_use]
    pub fn from_roots(roots: &[T]) -> Self {
        let mut coeffs = vec![T::one()];
        for r in roots {
            coeffs = mul_by_linear(&coeffs, *r);
        }
        Self(coeffs)
    }

    /// Expand `(x - z_0)(x - z_1)...` for a set of roots that is closed under
    /// conjugation, so that the product is real. Imaginary parts left over by
    /// rounding are discarded.
    #[must_use]
    pub fn from_conjugate_roots(roots: &[Complex<T>]) -> Self {
        let mut coeffs = vec![Complex::<T>::one()];
        for z in roots {
            coeffs = mul_by_linear(&coeffs, *z);
        }
        Self(coeffs.into_iter().map(|c| c.re).collect())
    }

    #[must_use]
    pub fn coeffs(&self) -> &[T] {
        &self.0
    }

    /// The highest degree coefficient
    #[must_use]
    pub fn leading(&self) -> T {
        *self.0.last().unwrap_or(&T::zero())
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(Zero::is_zero)
    }

    /// Drop zero coefficients above the highest nonzero one
    #[must_use]
    pub fn trim(mut self) -> Self {
        while self.0.len() > 1 && self.leading().is_zero() {
            self.0.pop();
        }
        self
    }

    /// Evaluate at a real point
    #[must_use]
    pub fn eval(&self, x: T) -> T {
        // Horner's method
        self.0.iter().rev().fold(T::zero(), |acc, c| acc * x + *c)
    }

    /// Evaluate at a complex point
    #[must_use]
    pub fn eval_complex(&self, z: Complex<T>) -> Complex<T> {
        self.0
            .iter()
            .rev()
            .fold(Complex::zero(), |acc, c| acc * z + Complex::new(*c, T::zero()))
    }
}

/// Multiply a coefficient list of ascending degree by `(x - r)`
fn mul_by_linear<U>(coeffs: &[U], r: U) -> Vec<U>
where
    U: Copy + Zero + std::ops::Sub<Output = U> + std::ops::Mul<Output = U>,
{
    let mut out = vec![U::zero(); coeffs.len() + 1];
    for (i, c) in coeffs.iter().enumerate() {
        out[i + 1] = out[i + 1] + *c;
        out[i] = out[i] - r * *c;
    }
    out
}

impl<T: RealScalar> Polynomial<T> for Poly<T> {
    fn order(&self) -> usize {
        self.0.len() - 1
    }

    fn coeff(&self, i: usize) -> Option<T> {
        self.0.get(i).copied()
    }
}

impl<T: RealScalar> Index<usize> for Poly<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T: Copy> Polynomial<T> for [T] {
    fn order(&self) -> usize {
        self.len().saturating_sub(1)
    }

    fn coeff(&self, i: usize) -> Option<T> {
        self.get(i).copied()
    }
}

impl<T: Copy> Polynomial<T> for Vec<T> {
    fn order(&self) -> usize {
        self.as_slice().order()
    }

    fn coeff(&self, i: usize) -> Option<T> {
        self.as_slice().coeff(i)
    }
}
