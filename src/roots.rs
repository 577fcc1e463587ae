//! Root solvers built on eigenvalues of companion and Jacobi matrices.
//!
//! Every solver assembles an `N x N` pencil `(A, I)` in [`Wide`] precision,
//! hands it to a [`GeneralizedEigenSolver`], sorts the real eigenvalues and
//! only then narrows them to the requested type.

use anyhow::ensure;
use num::Complex;

use crate::{
    eigen::{EigenTriple, GepSolution},
    util::{
        casting::narrow_all,
        doc_macros::{errors_invalid_polynomial, errors_solver},
    },
    Error, GeneralizedEigenSolver, Polynomial, RealScalar, SchurSolver, SolverError,
    SymmetricSolver, Wide,
};

mod companion;
mod laguerre;
mod lobatto;

pub type Result<T> = std::result::Result<Roots<T>, Error>;

/// Roots found by one of the solvers.
///
/// Real roots occupy the front of [`Roots::re`] in ascending order. For the
/// companion matrix solver, complex roots fill the tail from the back, with
/// matching real and imaginary parts at the same index in [`Roots::re`] and
/// [`Roots::im`]. The complex tail is kept in the order the eigenvalue
/// backend produced it, i.e. reversed, and is not sorted.
#[derive(Clone, Debug, PartialEq)]
pub struct Roots<T> {
    re: Vec<T>,
    im: Vec<T>,
    nreal: usize,
}

impl<T: RealScalar> Roots<T> {
    pub(crate) const fn empty() -> Self {
        Self {
            re: vec![],
            im: vec![],
            nreal: 0,
        }
    }

    /// Real roots only, must already be sorted
    pub(crate) fn from_real(re: Vec<T>) -> Self {
        debug_assert!(re.windows(2).all(|w| w[0] <= w[1]));
        let nreal = re.len();
        Self {
            im: vec![T::zero(); nreal],
            re,
            nreal,
        }
    }

    /// Number of real roots
    #[must_use]
    pub const fn nreal(&self) -> usize {
        self.nreal
    }

    /// Number of complex roots, each conjugate pair counts as two
    #[must_use]
    pub fn ncomplex(&self) -> usize {
        self.re.len() - self.nreal
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.re.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.re.is_empty()
    }

    /// The real roots in ascending order
    #[must_use]
    pub fn real(&self) -> &[T] {
        &self.re[..self.nreal]
    }

    /// Real parts of every root
    #[must_use]
    pub fn re(&self) -> &[T] {
        &self.re
    }

    /// Imaginary parts of every root, zero for the real ones
    #[must_use]
    pub fn im(&self) -> &[T] {
        &self.im
    }

    /// The complex roots, in storage order
    #[must_use]
    pub fn complex(&self) -> Vec<Complex<T>> {
        self.re[self.nreal..]
            .iter()
            .zip(&self.im[self.nreal..])
            .map(|(re, im)| Complex::new(*re, *im))
            .collect()
    }

    /// Every root as a complex number
    #[must_use]
    pub fn to_complex_vec(&self) -> Vec<Complex<T>> {
        self.re
            .iter()
            .zip(&self.im)
            .map(|(re, im)| Complex::new(*re, *im))
            .collect()
    }
}

/// How eigenvalues are split into real and complex roots.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Classification {
    /// Real if and only if the imaginary numerator is exactly zero
    #[default]
    Exact,

    /// Real if `|Im λ| <= tol`. The imaginary part of such roots is dropped.
    Tolerance(Wide),
}

impl Classification {
    #[allow(clippy::float_cmp)]
    pub(crate) fn is_real(self, t: &EigenTriple<Wide>) -> bool {
        match self {
            Self::Exact => t.im == 0.0,
            Self::Tolerance(tol) => t.im.abs() <= tol * t.denom.abs(),
        }
    }
}

/// Configurable entry point to all root solvers.
///
/// ```
/// use eigenroots::{Classification, EigenRoots, SchurSolver, poly};
///
/// let roots = EigenRoots::new(SchurSolver::default())
///     .with_classification(Classification::Tolerance(1E-12))
///     .roots(&poly![-1.0, 0.0, 1.0])
///     .unwrap();
/// assert_eq!(roots.nreal(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EigenRoots<S> {
    solver: S,
    classification: Classification,
}

impl<S: GeneralizedEigenSolver<Wide>> EigenRoots<S> {
    pub const fn new(solver: S) -> Self {
        Self {
            solver,
            classification: Classification::Exact,
        }
    }

    #[must_use]
    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classification = classification;
        self
    }

    /// All roots of `poly`, real and complex, from the eigenvalues of its
    /// companion matrix.
    ///
    /// # Errors
    #[doc = errors_invalid_polynomial!()]
    #[doc = errors_solver!()]
    pub fn roots<T, P>(&self, poly: &P) -> Result<T>
    where
        T: RealScalar,
        P: Polynomial<T> + ?Sized,
    {
        companion::roots(poly, &self.solver, self.classification)
    }

    /// Interior roots of the derivative of the Legendre polynomial of degree
    /// `order`. Orders 0 to 2 use closed forms.
    ///
    /// # Errors
    #[doc = errors_solver!()]
    pub fn lobatto<T: RealScalar>(&self, order: usize) -> Result<T> {
        lobatto::roots(order, &self.solver, self.classification)
    }

    /// Full Gauss-Lobatto-Legendre node set of degree `order`, i.e. the
    /// interior roots of [`EigenRoots::lobatto`] with `-1` and `1` attached.
    ///
    /// # Errors
    #[doc = errors_solver!()]
    pub fn lobatto_points<T: RealScalar>(&self, order: usize) -> Result<T> {
        lobatto::points(order, &self.solver, self.classification)
    }

    /// Roots of the derivative of the Laguerre polynomial for `order`.
    /// Orders 0 and 1 use closed forms.
    ///
    /// # Errors
    #[doc = errors_solver!()]
    pub fn laguerre<T: RealScalar>(&self, order: usize) -> Result<T> {
        laguerre::roots(order, &self.solver, self.classification)
    }
}

/// All roots of a polynomial using the default [`SchurSolver`].
///
/// ```
/// use eigenroots::{companion_roots, poly};
///
/// let roots = companion_roots::<f64, _>(&poly![-1.0, 0.0, 1.0]).unwrap();
/// assert_eq!(roots.nreal(), 2);
/// assert!((roots.real()[0] + 1.0).abs() < 1E-12);
/// assert!((roots.real()[1] - 1.0).abs() < 1E-12);
/// ```
///
/// # Errors
#[doc = errors_invalid_polynomial!()]
#[doc = errors_solver!()]
pub fn companion_roots<T, P>(poly: &P) -> Result<T>
where
    T: RealScalar,
    P: Polynomial<T> + ?Sized,
{
    EigenRoots::new(SchurSolver::default()).roots(poly)
}

/// Interior Gauss-Lobatto-Legendre nodes using the default [`SymmetricSolver`].
///
/// ```
/// use eigenroots::lobatto_roots;
///
/// let nodes = lobatto_roots::<f64>(3).unwrap();
/// assert!((nodes.real()[1] - 0.2f64.sqrt()).abs() < 1E-14);
/// ```
///
/// # Errors
#[doc = errors_solver!()]
pub fn lobatto_roots<T: RealScalar>(order: usize) -> Result<T> {
    EigenRoots::new(SymmetricSolver::default()).lobatto(order)
}

/// Gauss-Lobatto-Legendre nodes including the endpoints, using the default
/// [`SymmetricSolver`].
///
/// # Errors
#[doc = errors_solver!()]
pub fn lobatto_points<T: RealScalar>(order: usize) -> Result<T> {
    EigenRoots::new(SymmetricSolver::default()).lobatto_points(order)
}

/// Gauss-Laguerre derivative nodes using the default [`SymmetricSolver`].
///
/// # Errors
#[doc = errors_solver!()]
pub fn laguerre_roots<T: RealScalar>(order: usize) -> Result<T> {
    EigenRoots::new(SymmetricSolver::default()).laguerre(order)
}

/// Run the backend, logging failures where they are detected
#[allow(clippy::float_cmp)]
fn solve_pencil<S: GeneralizedEigenSolver<Wide>>(
    solver: &S,
    a: &S::Matrix,
    b: &S::Matrix,
    n: usize,
) -> std::result::Result<GepSolution<Wide, S::Matrix>, Error> {
    log::trace!("solving {n}x{n} pencil");
    let solution = solver.solve(a, b).map_err(|e| {
        log::error!("failed to compute eigenvalues: {e}");
        Error::Solver(e)
    })?;

    let got = solution.eigenvalues.len();
    if got != n {
        log::error!("failed to compute eigenvalues: expected {n}, got {got}");
        return Err(SolverError::EigenvalueCount { expected: n, got }.into());
    }

    if let Some(index) = solution.eigenvalues.iter().position(|t| t.denom == 0.0) {
        log::error!("failed to compute eigenvalues: eigenvalue {index} is infinite");
        return Err(SolverError::ZeroDenominator { index }.into());
    }

    Ok(solution)
}

/// Split eigenvalues into real roots packed at the front and complex roots
/// packed from the back, then sort the real ones.
fn pack_all<T: RealScalar>(
    eigenvalues: &[EigenTriple<Wide>],
    classification: Classification,
) -> Result<T> {
    let n = eigenvalues.len();
    let mut re = vec![0.0; n];
    let mut im = vec![0.0; n];
    let mut nreal = 0;
    let mut nimag = 0;

    for t in eigenvalues {
        if classification.is_real(t) {
            re[nreal] = t.re / t.denom;
            im[nreal] = 0.0;
            nreal += 1;
        } else {
            re[n - 1 - nimag] = t.re / t.denom;
            im[n - 1 - nimag] = t.im / t.denom;
            nimag += 1;
        }
    }

    check_conjugate_pairs(&im[nreal..]).map_err(|e| {
        log::error!("{e}");
        e
    })?;

    re[..nreal].sort_by(Wide::total_cmp);
    log::debug!("{{nreal: {nreal}, ncomplex: {nimag}}}");

    Ok(Roots {
        re: narrow_all(&re)?,
        im: narrow_all(&im)?,
        nreal,
    })
}

/// Non-real eigenvalues of a real matrix come in conjugate pairs, so the
/// imaginary parts of the complex tail cancel out in pairs
fn check_conjugate_pairs(im: &[Wide]) -> anyhow::Result<()> {
    ensure!(
        im.len() % 2 == 0,
        "backend returned {} complex eigenvalues, which cannot form conjugate pairs",
        im.len()
    );
    let (pos, neg) = im.iter().partition::<Vec<&Wide>, _>(|x| x.is_sign_positive());
    ensure!(
        pos.len() == neg.len(),
        "backend returned {} eigenvalues above and {} below the real axis",
        pos.len(),
        neg.len()
    );
    Ok(())
}

/// Keep only the real eigenvalues, sorted. Used by the node solvers whose
/// Jacobi matrices are symmetric.
fn pack_real<T: RealScalar>(
    eigenvalues: &[EigenTriple<Wide>],
    classification: Classification,
) -> Result<T> {
    let mut re: Vec<Wide> = eigenvalues
        .iter()
        .filter(|t| classification.is_real(t))
        .map(|t| t.re / t.denom)
        .collect();

    let dropped = eigenvalues.len() - re.len();
    if dropped > 0 {
        log::warn!("discarding {dropped} eigenvalues with nonzero imaginary part");
    }

    re.sort_by(Wide::total_cmp);
    log::debug!("{{nreal: {}}}", re.len());

    Ok(Roots::from_real(narrow_all(&re)?))
}

/// Closed form node sets
fn from_wide_real<T: RealScalar>(re: &[Wide]) -> Result<T> {
    Ok(Roots::from_real(narrow_all(re)?))
}

#[cfg(test)]
mod test {
    use nalgebra::DMatrix;
    use num::Complex;

    use super::{pack_all, pack_real, Classification, EigenRoots, Roots};
    use crate::{
        eigen::{EigenTriple, GepSolution},
        Error, GeneralizedEigenSolver, SolverError,
    };

    /// Backend that ignores the pencil and replays a fixed answer
    struct Replay(Result<Vec<EigenTriple<f64>>, SolverError>);

    impl GeneralizedEigenSolver<f64> for Replay {
        type Matrix = DMatrix<f64>;

        fn solve(
            &self,
            _a: &Self::Matrix,
            _b: &Self::Matrix,
        ) -> Result<GepSolution<f64, Self::Matrix>, SolverError> {
            self.0.clone().map(|eigenvalues| GepSolution {
                eigenvalues,
                eigenvectors: None,
            })
        }
    }

    #[test]
    fn reals_front_complex_back() {
        let eigs = [
            EigenTriple::new(1.0, 2.0, 1.0),
            EigenTriple::real(3.0),
            EigenTriple::new(4.0, -1.0, 2.0),
            EigenTriple::real(-1.0),
        ];
        let roots: Roots<f64> = pack_all(&eigs, Classification::Exact).unwrap();
        assert_eq!(roots.nreal(), 2);
        assert_eq!(roots.ncomplex(), 2);
        assert_eq!(roots.re(), &[-1.0, 3.0, 2.0, 1.0]);
        assert_eq!(roots.im(), &[0.0, 0.0, -0.5, 2.0]);
        assert_eq!(
            roots.complex(),
            vec![Complex::new(2.0, -0.5), Complex::new(1.0, 2.0)]
        );
    }

    #[test]
    fn denominators_divide() {
        let eigs = [EigenTriple::new(6.0, 0.0, -2.0), EigenTriple::new(1.0, 0.0, 4.0)];
        let roots: Roots<f64> = pack_all(&eigs, Classification::Exact).unwrap();
        assert_eq!(roots.real(), &[-3.0, 0.25]);
    }

    #[test]
    fn tolerance_classification() {
        let eigs = [EigenTriple::new(1.0, 1E-14, 1.0), EigenTriple::new(1.0, -1E-14, 1.0)];

        let exact: Roots<f64> = pack_all(&eigs, Classification::Exact).unwrap();
        assert_eq!(exact.nreal(), 0);
        assert_eq!(exact.ncomplex(), 2);

        let tolerant: Roots<f64> = pack_all(&eigs, Classification::Tolerance(1E-12)).unwrap();
        assert_eq!(tolerant.nreal(), 2);
        assert_eq!(tolerant.im(), &[0.0, 0.0]);
    }

    #[test]
    fn pack_real_drops_complex() {
        let eigs = [
            EigenTriple::real(0.5),
            EigenTriple::new(0.0, 1.0, 1.0),
            EigenTriple::real(-0.5),
        ];
        let roots: Roots<f32> = pack_real(&eigs, Classification::Exact).unwrap();
        assert_eq!(roots.real(), &[-0.5f32, 0.5]);
        assert_eq!(roots.ncomplex(), 0);
    }

    #[test]
    fn failing_backend() {
        let solver = EigenRoots::new(Replay(Err(SolverError::NoConvergence)));
        let err = solver.roots(&poly![1.0, 2.0, 1.0]).unwrap_err();
        assert!(matches!(err, Error::Solver(SolverError::NoConvergence)));

        let err = solver.lobatto::<f64>(5).unwrap_err();
        assert!(matches!(err, Error::Solver(SolverError::NoConvergence)));

        let err = solver.laguerre::<f64>(5).unwrap_err();
        assert!(matches!(err, Error::Solver(SolverError::NoConvergence)));
    }

    #[test]
    fn closed_forms_skip_backend() {
        let solver = EigenRoots::new(Replay(Err(SolverError::NoConvergence)));
        assert_eq!(solver.lobatto::<f64>(2).unwrap().real(), &[-1.0, 0.0, 1.0]);
        assert!(solver.laguerre::<f64>(0).unwrap().is_empty());
        assert!(solver.roots(&poly![4.0]).unwrap().is_empty());
    }

    #[test]
    fn zero_denominator() {
        let solver = EigenRoots::new(Replay(Ok(vec![
            EigenTriple::real(1.0),
            EigenTriple::new(1.0, 0.0, 0.0),
        ])));
        let err = solver.roots(&poly![1.0, 2.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::Solver(SolverError::ZeroDenominator { index: 1 })
        ));
    }

    #[test]
    fn unpaired_complex_eigenvalue() {
        let solver = EigenRoots::new(Replay(Ok(vec![
            EigenTriple::real(1.0),
            EigenTriple::new(0.0, 1.0, 1.0),
        ])));
        let err = solver.roots(&poly![1.0, 2.0, 1.0]).unwrap_err();
        assert!(matches!(err, Error::Other(_)));
        assert!(!err.is_solver_failure());

        let same_side = EigenRoots::new(Replay(Ok(vec![
            EigenTriple::new(0.0, 1.0, 1.0),
            EigenTriple::new(0.0, 2.0, 1.0),
        ])));
        assert!(matches!(
            same_side.roots(&poly![1.0, 2.0, 1.0]),
            Err(Error::Other(_))
        ));
    }

    #[test]
    fn wrong_eigenvalue_count() {
        let solver = EigenRoots::new(Replay(Ok(vec![EigenTriple::real(1.0)])));
        let err = solver.laguerre::<f64>(3).unwrap_err();
        assert!(matches!(
            err,
            Error::Solver(SolverError::EigenvalueCount {
                expected: 3,
                got: 1
            })
        ));
    }
}
