use super::{from_wide_real, pack_real, solve_pencil, Classification, Result, Roots};
use crate::{util::casting::usize_to_wide, DenseMatrix, GeneralizedEigenSolver, RealScalar, Wide};

/// Roots of `L'_{order + 1}`, equivalently of the generalized Laguerre
/// polynomial `L^(1)_order`, from its `order x order` Jacobi matrix.
pub(super) fn roots<T, S>(order: usize, solver: &S, classification: Classification) -> Result<T>
where
    T: RealScalar,
    S: GeneralizedEigenSolver<Wide>,
{
    match order {
        0 => Ok(Roots::empty()),
        1 => from_wide_real(&[2.0]),
        n => {
            let mut a = S::Matrix::zeros(n, n);
            for i in 0..n {
                a[(i, i)] = 2.0 * usize_to_wide(i + 1);
            }
            for i in 0..n - 1 {
                let v = (usize_to_wide(i + 1) * usize_to_wide(i + 2)).sqrt();
                a.set_symmetric(i, i + 1, v);
            }
            let b = S::Matrix::identity(n);

            let solution = solve_pencil(solver, &a, &b, n)?;
            pack_real(&solution.eigenvalues, classification)
        }
    }
}
