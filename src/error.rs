use thiserror::Error;

/// Failures reported by a [`crate::GeneralizedEigenSolver`] backend, or
/// detected while reading its output.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SolverError {
    /// The iterative decomposition did not converge within the configured
    /// number of iterations
    #[error("eigenvalue decomposition did not converge")]
    NoConvergence,

    /// `B` could not be factored or inverted
    #[error("matrix pencil is singular")]
    SingularPencil,

    /// The backend only supports symmetric `A`
    #[error("matrix is not symmetric")]
    NotSymmetric,

    #[error("pencil dimensions do not match: A is {a:?}, B is {b:?}")]
    DimensionMismatch {
        a: (usize, usize),
        b: (usize, usize),
    },

    #[error("expected {expected} eigenvalues, solver returned {got}")]
    EigenvalueCount { expected: usize, got: usize },

    /// An eigenvalue row with a zero denominator, i.e. an infinite eigenvalue
    #[error("eigenvalue {index} has a zero denominator")]
    ZeroDenominator { index: usize },
}

/// The top-level error type for this crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("failed to compute eigenvalues: {0}")]
    Solver(#[from] SolverError),

    /// The input polynomial cannot be turned into a companion matrix
    #[error("invalid polynomial: {0}")]
    InvalidPolynomial(&'static str),

    /// A root does not fit in the requested output type
    #[error("root {0} cannot be represented in the requested type")]
    Narrowing(f64),

    /// The backend output is inconsistent, e.g. unpaired complex eigenvalues
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Whether this error originated in the eigenvalue solver
    #[must_use]
    pub const fn is_solver_failure(&self) -> bool {
        matches!(self, Self::Solver(_))
    }
}
