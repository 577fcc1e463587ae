use super::{pack_all, solve_pencil, Classification, Result, Roots};
use crate::{DenseMatrix, Error, GeneralizedEigenSolver, Polynomial, RealScalar, Wide};

/// Roots of an arbitrary polynomial from the eigenvalues of its companion
/// matrix.
///
/// The leading coefficient must be nonzero. A nonzero constant has no roots
/// and never reaches the backend.
pub(super) fn roots<T, P, S>(poly: &P, solver: &S, classification: Classification) -> Result<T>
where
    T: RealScalar,
    P: Polynomial<T> + ?Sized,
    S: GeneralizedEigenSolver<Wide>,
{
    let coeffs = widen_coeffs(poly)?;
    let n = coeffs.len() - 1;

    if n == 0 {
        return Ok(Roots::empty());
    }
    let row = normalized_row(&coeffs)?;

    // row 0 holds the normalized coefficients, ones on the subdiagonal
    let mut a = S::Matrix::zeros(n, n);
    for (i, c) in row.into_iter().enumerate() {
        a[(0, i)] = c;
        if i < n - 1 {
            a[(i + 1, i)] = 1.0;
        }
    }
    let b = S::Matrix::identity(n);

    let solution = solve_pencil(solver, &a, &b, n)?;
    pack_all(&solution.eigenvalues, classification)
}

/// Copy the coefficients into the working precision, rejecting polynomials
/// that have no valid companion matrix
#[allow(clippy::float_cmp)]
fn widen_coeffs<T, P>(poly: &P) -> std::result::Result<Vec<Wide>, Error>
where
    T: RealScalar,
    P: Polynomial<T> + ?Sized,
{
    let n = poly.order();
    let coeffs = (0..=n)
        .map(|i| {
            poly.coeff(i)
                .ok_or(Error::InvalidPolynomial("missing coefficient"))?
                .widen()
                .filter(|c| c.is_finite())
                .ok_or(Error::InvalidPolynomial("coefficient is not finite"))
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    if coeffs[n] == 0.0 {
        log::error!("order {n} polynomial has a zero leading coefficient");
        return Err(Error::InvalidPolynomial("leading coefficient is zero"));
    }
    Ok(coeffs)
}

/// First row of the companion matrix, `-c_{n-1-i} / c_n`
fn normalized_row(coeffs: &[Wide]) -> std::result::Result<Vec<Wide>, Error> {
    let n = coeffs.len() - 1;
    let denom = coeffs[n];
    let row: Vec<Wide> = coeffs[..n].iter().rev().map(|c| -c / denom).collect();

    if let Some(i) = row.iter().position(|c| !c.is_finite()) {
        log::error!("coefficient {} overflows when divided by {denom}", n - 1 - i);
        return Err(Error::InvalidPolynomial("normalized coefficient overflows"));
    }
    Ok(row)
}
