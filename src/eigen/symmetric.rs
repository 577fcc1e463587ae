use nalgebra::{Cholesky, DMatrix, SymmetricEigen};

use super::{check_pencil, EigenTriple, GeneralizedEigenSolver, GepSolution, SolverConfig};
use crate::{SolverError, Wide};

/// Backend for symmetric-definite pencils: `A` symmetric, `B` symmetric
/// positive definite.
///
/// With `B = L Lᵀ` the pencil is reduced to the standard symmetric problem
/// `L⁻¹ A L⁻ᵀ ψ = λ ψ`, so every eigenvalue is real. Eigenvectors are
/// transformed back with `v = L⁻ᵀ ψ`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SymmetricSolver {
    config: SolverConfig,
}

impl SymmetricSolver {
    #[must_use]
    pub const fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }
}

impl GeneralizedEigenSolver<Wide> for SymmetricSolver {
    type Matrix = DMatrix<Wide>;

    fn solve(
        &self,
        a: &Self::Matrix,
        b: &Self::Matrix,
    ) -> Result<GepSolution<Wide, Self::Matrix>, SolverError> {
        check_pencil::<Wide, _>(a, b)?;

        if !is_symmetric(a, self.config.epsilon) {
            return Err(SolverError::NotSymmetric);
        }

        let l_inv = Cholesky::new(b.clone())
            .and_then(|chol| chol.l().try_inverse())
            .ok_or(SolverError::SingularPencil)?;

        let reduced = &l_inv * a * l_inv.transpose();
        let eigen = SymmetricEigen::try_new(reduced, self.config.epsilon, self.config.max_iter)
            .ok_or(SolverError::NoConvergence)?;

        let eigenvalues: Vec<_> = eigen
            .eigenvalues
            .iter()
            .copied()
            .map(EigenTriple::real)
            .collect();
        log::trace!("symmetric eigenvalues: {eigenvalues:?}");

        Ok(GepSolution {
            eigenvalues,
            eigenvectors: Some(l_inv.transpose() * eigen.eigenvectors),
        })
    }
}

fn is_symmetric(m: &DMatrix<Wide>, epsilon: Wide) -> bool {
    let n = m.nrows();
    (0..n).all(|i| {
        (0..i).all(|j| {
            let (x, y) = (m[(i, j)], m[(j, i)]);
            (x - y).abs() <= epsilon * (x.abs() + y.abs())
        })
    })
}

#[cfg(test)]
mod test {
    use nalgebra::{dmatrix, DMatrix};

    use super::{is_symmetric, SymmetricSolver};
    use crate::{GeneralizedEigenSolver, SolverError};

    fn sorted_eigenvalues(a: &DMatrix<f64>, b: &DMatrix<f64>) -> Vec<f64> {
        let mut eigs: Vec<_> = SymmetricSolver::default()
            .solve(a, b)
            .unwrap()
            .eigenvalues
            .iter()
            .map(|t| {
                assert_eq!(t.im, 0.0);
                t.re / t.denom
            })
            .collect();
        eigs.sort_by(f64::total_cmp);
        eigs
    }

    #[test]
    fn tridiagonal() {
        // [[2, 1], [1, 2]] has eigenvalues 1 and 3
        let a = dmatrix![2.0, 1.0; 1.0, 2.0];
        let b = dmatrix![1.0, 0.0; 0.0, 1.0];
        let eigs = sorted_eigenvalues(&a, &b);
        assert!((eigs[0] - 1.0).abs() < 1E-14);
        assert!((eigs[1] - 3.0).abs() < 1E-14);
    }

    #[test]
    fn diagonal_b() {
        let a = dmatrix![2.0, 0.0; 0.0, 9.0];
        let b = dmatrix![4.0, 0.0; 0.0, 1.0];
        let eigs = sorted_eigenvalues(&a, &b);
        assert!((eigs[0] - 0.5).abs() < 1E-14);
        assert!((eigs[1] - 9.0).abs() < 1E-14);
    }

    #[test]
    fn eigenvectors_satisfy_pencil() {
        let a = dmatrix![2.0, 1.0, 0.0; 1.0, 2.0, 1.0; 0.0, 1.0, 2.0];
        let b = dmatrix![2.0, 0.0, 0.0; 0.0, 1.0, 0.0; 0.0, 0.0, 3.0];
        let solution = SymmetricSolver::default().solve(&a, &b).unwrap();
        let vecs = solution.eigenvectors.unwrap();
        for (k, t) in solution.eigenvalues.iter().enumerate() {
            let v = vecs.column(k);
            let residual = &a * &v - (&b * &v) * (t.re / t.denom);
            assert!(residual.norm() < 1E-12, "{residual}");
        }
    }

    #[test]
    fn rejects_non_symmetric() {
        let a = dmatrix![0.0, 1.0; 2.0, 0.0];
        let b = dmatrix![1.0, 0.0; 0.0, 1.0];
        assert_eq!(
            SymmetricSolver::default().solve(&a, &b).unwrap_err(),
            SolverError::NotSymmetric
        );
    }

    #[test]
    fn rejects_indefinite_b() {
        let a = dmatrix![1.0, 0.0; 0.0, 1.0];
        let b = dmatrix![1.0, 0.0; 0.0, -1.0];
        assert_eq!(
            SymmetricSolver::default().solve(&a, &b).unwrap_err(),
            SolverError::SingularPencil
        );
    }

    #[test]
    fn symmetry_check() {
        assert!(is_symmetric(&dmatrix![1.0, 2.0; 2.0, 1.0], 0.0));
        assert!(!is_symmetric(&dmatrix![1.0, 2.0; 2.5, 1.0], 1E-12));
    }
}
