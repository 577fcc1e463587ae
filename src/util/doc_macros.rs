//! Reusable documentation snippets

/// Documents the errors shared by every root solver.
macro_rules! errors_solver {
    () => {
        r"- [`Error::Solver`](crate::Error::Solver): the eigenvalue backend failed (no convergence, singular or malformed pencil) or returned an eigenvalue with a zero denominator.
- [`Error::Narrowing`](crate::Error::Narrowing): a root does not fit in `T`.
- [`Error::Other`](crate::Error::Other): the backend returned complex eigenvalues that do not form conjugate pairs.
"
    };
}
pub(crate) use errors_solver;

/// Documents the input checks of the companion matrix solver.
macro_rules! errors_invalid_polynomial {
    () => {
        r"- [`Error::InvalidPolynomial`](crate::Error::InvalidPolynomial): the polynomial has no coefficients, a zero leading coefficient, or a coefficient that is not finite in the working precision.
"
    };
}
pub(crate) use errors_invalid_polynomial;
