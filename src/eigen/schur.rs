use nalgebra::DMatrix;

use super::{check_pencil, EigenTriple, GeneralizedEigenSolver, GepSolution, SolverConfig};
use crate::{SolverError, Wide};

/// General purpose backend based on the real Schur decomposition.
///
/// A pencil with `B != I` is first reduced to `B⁻¹A` with an LU solve, so
/// `B` has to be invertible. Complex eigenvalues come out as adjacent
/// conjugate pairs, real eigenvalues have an imaginary part of exactly zero.
/// Does not compute eigenvectors.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SchurSolver {
    config: SolverConfig,
}

impl SchurSolver {
    #[must_use]
    pub const fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }
}

impl GeneralizedEigenSolver<Wide> for SchurSolver {
    type Matrix = DMatrix<Wide>;

    fn solve(
        &self,
        a: &Self::Matrix,
        b: &Self::Matrix,
    ) -> Result<GepSolution<Wide, Self::Matrix>, SolverError> {
        check_pencil::<Wide, _>(a, b)?;

        let m = if b.is_identity(0.0) {
            a.clone()
        } else {
            b.clone().lu().solve(a).ok_or(SolverError::SingularPencil)?
        };

        let schur = m
            .try_schur(self.config.epsilon, self.config.max_iter)
            .ok_or(SolverError::NoConvergence)?;

        let eigenvalues: Vec<_> = schur
            .complex_eigenvalues()
            .iter()
            .map(|z| EigenTriple::new(z.re, z.im, 1.0))
            .collect();
        log::trace!("schur eigenvalues: {eigenvalues:?}");

        Ok(GepSolution {
            eigenvalues,
            eigenvectors: None,
        })
    }
}
