#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
//! Polynomial roots from generalized eigenvalue problems.
//!
//! Three solvers reduce root finding to the eigenvalues of a matrix pencil
//! `(A, I)`:
//!
//! - [`companion_roots`]: every root of an arbitrary real polynomial, from its
//!   companion matrix.
//! - [`lobatto_roots`] and [`lobatto_points`]: Gauss-Lobatto-Legendre nodes,
//!   from the Jacobi matrix of the derivative of a Legendre polynomial.
//! - [`laguerre_roots`]: roots of the derivative of a Laguerre polynomial.
//!
//! Pencils are always assembled and solved in [`Wide`] precision. Results are
//! narrowed to the caller's type only after sorting.
//!
//! ```
//! use eigenroots::{companion_roots, lobatto_roots, poly};
//!
//! let roots = companion_roots(&poly![1.0, 0.0, 1.0]).unwrap();
//! assert_eq!(roots.nreal(), 0);
//! assert_eq!(roots.ncomplex(), 2);
//!
//! let nodes = lobatto_roots::<f32>(4).unwrap();
//! assert_eq!(nodes.nreal(), 3);
//! ```

/// Build a [`Poly`] from coefficients, constant term first.
///
/// ```
/// use eigenroots::{poly, Poly64};
///
/// assert_eq!(poly![1.0, 2.0], Poly64::new(&[1.0, 2.0]));
/// ```
#[macro_export]
macro_rules! poly {
    () => {
        $crate::Poly::new(&[])
    };
    ($($c:expr),+ $(,)?) => {
        $crate::Poly::new(&[$($c),+])
    };
}

pub use nalgebra;
pub use num;

mod error;
pub use error::{Error, SolverError};

mod scalar;
pub use scalar::{RealScalar, Wide};

mod linalg;
pub use linalg::DenseMatrix;

pub mod eigen;
pub use eigen::{
    EigenTriple, GeneralizedEigenSolver, GepSolution, SchurSolver, SolverConfig, SymmetricSolver,
};

mod poly;
pub use poly::{Poly, Poly32, Poly64, Polynomial};

pub mod roots;
pub use roots::{
    companion_roots, laguerre_roots, lobatto_points, lobatto_roots, Classification, EigenRoots,
    Roots,
};

mod util;

#[doc(hidden)]
pub use util::__testing;
