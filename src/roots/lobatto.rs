use super::{from_wide_real, pack_real, solve_pencil, Classification, Result, Roots};
use crate::{util::casting::usize_to_wide, DenseMatrix, GeneralizedEigenSolver, RealScalar, Wide};

/// Roots of `P'_order`, the derivative of the Legendre polynomial, from the
/// eigenvalues of its `(order - 1) x (order - 1)` Jacobi matrix.
///
/// Orders 0 to 2 are closed forms, and for these the endpoints `±1` are
/// included.
pub(super) fn roots<T, S>(order: usize, solver: &S, classification: Classification) -> Result<T>
where
    T: RealScalar,
    S: GeneralizedEigenSolver<Wide>,
{
    match order {
        0 => from_wide_real(&[0.0]),
        1 => from_wide_real(&[-1.0, 1.0]),
        2 => from_wide_real(&[-1.0, 0.0, 1.0]),
        _ => {
            let n = order - 1;
            let mut a = S::Matrix::zeros(n, n);
            for i in 0..n - 1 {
                a.set_symmetric(i, i + 1, off_diagonal(i));
            }
            let b = S::Matrix::identity(n);

            let solution = solve_pencil(solver, &a, &b, n)?;
            pack_real(&solution.eigenvalues, classification)
        }
    }
}

/// Interior roots with the interval endpoints attached
pub(super) fn points<T, S>(order: usize, solver: &S, classification: Classification) -> Result<T>
where
    T: RealScalar,
    S: GeneralizedEigenSolver<Wide>,
{
    let interior = roots(order, solver, classification)?;
    if order <= 2 {
        return Ok(interior);
    }

    let mut nodes = Vec::with_capacity(interior.len() + 2);
    nodes.push(-T::one());
    nodes.extend_from_slice(interior.real());
    nodes.push(T::one());
    Ok(Roots::from_real(nodes))
}

/// Entry `(i, i + 1)` of the Jacobi matrix
fn off_diagonal(i: usize) -> Wide {
    if i == 0 {
        return 5.0_f64.sqrt().recip();
    }
    let ii = usize_to_wide(i + 1);
    let k = 2.0f64.mul_add(ii, 2.0);
    2.0 * (ii * (ii + 1.0) * (ii + 1.0) * (ii + 2.0) / k.mul_add(k, -1.0)).sqrt() / k
}

#[cfg(test)]
mod test {
    use super::off_diagonal;
    use crate::{companion_roots, lobatto_points, lobatto_roots, Poly64, RealScalar, Roots};

    fn assert_symmetric<T: RealScalar>(roots: &Roots<T>, tol: T) {
        let r = roots.real();
        for (x, y) in r.iter().zip(r.iter().rev()) {
            assert!((*x + *y).abs() < tol, "{x} and {y} are not symmetric");
        }
    }

    #[test]
    fn closed_forms() {
        let r0 = lobatto_roots::<f64>(0).unwrap();
        assert_eq!(r0.real(), &[0.0]);
        assert_eq!(r0.nreal(), 1);

        let r1 = lobatto_roots::<f64>(1).unwrap();
        assert_eq!(r1.real(), &[-1.0, 1.0]);
        assert_eq!(r1.nreal(), 2);

        let r2 = lobatto_roots::<f32>(2).unwrap();
        assert_eq!(r2.real(), &[-1.0f32, 0.0, 1.0]);
        assert_eq!(r2.nreal(), 3);
    }

    #[test]
    fn first_entry_is_consistent_with_recurrence() {
        // the closed form 1/sqrt(5) is the i = 0 case of the general formula
        let ii = 1.0f64;
        let k = 2.0 * ii + 2.0;
        let general = 2.0 * (ii * (ii + 1.0) * (ii + 1.0) * (ii + 2.0) / (k * k - 1.0)).sqrt() / k;
        assert!((off_diagonal(0) - general).abs() < 1E-15);
    }

    #[test]
    fn order_3() {
        let roots = lobatto_roots::<f64>(3).unwrap();
        let x = 0.2f64.sqrt();
        assert_eq!(roots.nreal(), 2);
        assert!((roots.real()[0] + x).abs() < 1E-14);
        assert!((roots.real()[1] - x).abs() < 1E-14);
    }

    #[test]
    fn order_4() {
        let roots = lobatto_roots::<f64>(4).unwrap();
        assert_eq!(roots.nreal(), 3);
        assert!(roots.real().iter().all(|x| -1.0 < *x && *x < 1.0));
        assert_symmetric(&roots, 1E-14);

        let x = (3.0f64 / 7.0).sqrt();
        assert!((roots.real()[0] + x).abs() < 1E-14);
        assert!(roots.real()[1].abs() < 1E-14);
        assert!((roots.real()[2] - x).abs() < 1E-14);
    }

    #[test]
    fn symmetric_and_sorted() {
        for order in 3..40 {
            let roots = lobatto_roots::<f64>(order).unwrap();
            assert_eq!(roots.nreal(), order - 1);
            assert_eq!(roots.ncomplex(), 0);
            assert!(roots.real().windows(2).all(|w| w[0] < w[1]));
            assert!(roots.real().iter().all(|x| -1.0 < *x && *x < 1.0));
            assert_symmetric(&roots, 1E-12);
        }
    }

    #[test]
    fn matches_legendre_derivative() {
        for order in 3..10 {
            let nodes = lobatto_roots::<f64>(order).unwrap();
            let dp = Poly64::legendre(order).diff();
            let expected = companion_roots(&dp).unwrap();
            let expected = expected.to_complex_vec();
            assert!(expected.iter().all(|z| z.im.abs() < 1E-8));
            let mut expected: Vec<f64> = expected.iter().map(|z| z.re).collect();
            expected.sort_by(f64::total_cmp);
            for (x, y) in nodes.real().iter().zip(&expected) {
                assert!((x - y).abs() < 1E-8, "order {order}: {x} != {y}");
            }
        }
    }

    #[test]
    fn points_include_endpoints() {
        assert_eq!(lobatto_points::<f64>(0).unwrap().real(), &[0.0]);
        assert_eq!(lobatto_points::<f64>(2).unwrap().real(), &[-1.0, 0.0, 1.0]);

        let points = lobatto_points::<f64>(5).unwrap();
        assert_eq!(points.nreal(), 6);
        assert_eq!(points.real()[0], -1.0);
        assert_eq!(points.real()[5], 1.0);
        assert_symmetric(&points, 1E-14);
    }

    #[test]
    fn single_precision() {
        let wide = lobatto_roots::<f64>(12).unwrap();
        let narrow = lobatto_roots::<f32>(12).unwrap();
        for (w, n) in wide.real().iter().zip(narrow.real()) {
            #[allow(clippy::cast_possible_truncation)]
            let expected = *w as f32;
            assert_eq!(*n, expected);
        }
    }
}
