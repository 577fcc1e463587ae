//! Generalized eigenvalue problems `A v = λ B v` on dense matrix pencils.

use num::{Complex, Float};

use crate::{DenseMatrix, SolverError, Wide};

mod schur;
pub use schur::SchurSolver;
mod symmetric;
pub use symmetric::SymmetricSolver;

/// One eigenvalue `λ = (re + i im) / denom`.
///
/// Backends that solve the pencil by reduction to a standard eigenvalue
/// problem report `denom = 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EigenTriple<T> {
    pub re: T,
    pub im: T,
    pub denom: T,
}

impl<T: Float> EigenTriple<T> {
    pub const fn new(re: T, im: T, denom: T) -> Self {
        Self { re, im, denom }
    }

    /// A real eigenvalue with unit denominator
    pub fn real(re: T) -> Self {
        Self::new(re, T::zero(), T::one())
    }

    /// The eigenvalue itself, `None` if the denominator is zero
    pub fn value(&self) -> Option<Complex<T>> {
        if self.denom.is_zero() {
            return None;
        }
        Some(Complex::new(self.re / self.denom, self.im / self.denom))
    }
}

/// Output of a successful [`GeneralizedEigenSolver::solve`].
#[derive(Clone, Debug)]
pub struct GepSolution<T, M> {
    /// One row per eigenvalue, in the order the backend found them
    pub eigenvalues: Vec<EigenTriple<T>>,

    /// Eigenvectors as columns, if the backend computes them
    pub eigenvectors: Option<M>,
}

/// Tuning shared by the iterative backends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfig {
    /// Convergence tolerance of the decomposition
    pub epsilon: Wide,

    /// Maximum number of iterations, `0` means no limit
    pub max_iter: usize,
}

impl SolverConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            epsilon: Wide::EPSILON,
            max_iter: 10_000,
        }
    }

    #[must_use]
    pub fn with_epsilon(mut self, epsilon: Wide) -> Self {
        self.epsilon = epsilon;
        self
    }

    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A backend that solves `A v = λ B v` for square `A` and `B` of equal size.
///
/// Implementations return exactly one [`EigenTriple`] per row of `A` on
/// success.
pub trait GeneralizedEigenSolver<T: Clone> {
    type Matrix: DenseMatrix<T>;

    /// # Errors
    /// Any [`SolverError`], the contents of the pencil are left untouched.
    fn solve(
        &self,
        a: &Self::Matrix,
        b: &Self::Matrix,
    ) -> Result<GepSolution<T, Self::Matrix>, SolverError>;
}

/// Check that `a` and `b` form a valid pencil
pub(crate) fn check_pencil<T: Clone, M: DenseMatrix<T>>(a: &M, b: &M) -> Result<(), SolverError> {
    if a.is_square() && b.is_square() && a.nrows() == b.nrows() {
        return Ok(());
    }
    Err(SolverError::DimensionMismatch {
        a: (a.nrows(), a.ncols()),
        b: (b.nrows(), b.ncols()),
    })
}
