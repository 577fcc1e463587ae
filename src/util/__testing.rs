//! Testing utilities, do not depend on any of these in production!

use fastrand::Rng;
use itertools::Itertools;
use num::complex::Complex64;

use crate::Poly64;

struct RandStreamF64 {
    state: Rng,
}

impl RandStreamF64 {
    fn new(seed: u64) -> Self {
        Self {
            state: Rng::with_seed(seed),
        }
    }
}

impl Iterator for RandStreamF64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.state.f64())
    }
}

/// Uniformly distributed real numbers in `[min, max)`
pub struct RandStreamR64 {
    real_stream: RandStreamF64,
    min: f64,
    max: f64,
}

impl RandStreamR64 {
    #[must_use]
    pub fn new(seed: u64, min: f64, max: f64) -> Self {
        assert!(min <= max, "minimum should be smaller or equal to maximum");
        Self {
            real_stream: RandStreamF64::new(seed),
            min,
            max,
        }
    }
}

impl Iterator for RandStreamR64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some((self.real_stream.next()?).mul_add(self.max - self.min, self.min))
    }
}

/// Complex numbers with uniformly distributed real and imaginary parts
pub struct RandStreamC64Cartesian {
    real_stream: RandStreamF64,
    min_re: f64,
    max_re: f64,
    min_im: f64,
    max_im: f64,
}

impl RandStreamC64Cartesian {
    #[must_use]
    pub fn new(seed: u64, min_re: f64, max_re: f64, min_im: f64, max_im: f64) -> Self {
        assert!(
            min_re <= max_re && min_im <= max_im,
            "minimum should be smaller or equal to maximum"
        );
        Self {
            real_stream: RandStreamF64::new(seed),
            min_re,
            max_re,
            min_im,
            max_im,
        }
    }
}

impl Iterator for RandStreamC64Cartesian {
    type Item = Complex64;

    fn next(&mut self) -> Option<Self::Item> {
        let re = (self.real_stream.next()?).mul_add(self.max_re - self.min_re, self.min_re);
        let im = (self.real_stream.next()?).mul_add(self.max_im - self.min_im, self.min_im);
        Some(Complex64::new(re, im))
    }
}

fn scaled(poly: &Poly64, scale: f64) -> Poly64 {
    Poly64::from_vec(poly.coeffs().iter().map(|c| c * scale).collect())
}

/// Generate one test case with real roots, scaled by a random factor so that
/// the polynomial is not monic.
pub fn test_case_roots(
    roots_stream: impl Iterator<Item = f64>,
    mut scale_stream: impl Iterator<Item = f64>,
    degree: usize,
) -> (Poly64, Vec<Complex64>) {
    let roots = roots_stream.take(degree).collect_vec();
    let poly = scaled(
        &Poly64::from_roots(&roots),
        scale_stream.next().expect("rng stream should be infinite"),
    );
    (poly, roots.into_iter().map(Complex64::from).collect())
}

/// Generate one test case made of `pairs` complex conjugate root pairs.
pub fn test_case_conj_roots(
    roots_stream: impl Iterator<Item = Complex64>,
    mut scale_stream: impl Iterator<Item = f64>,
    pairs: usize,
) -> (Poly64, Vec<Complex64>) {
    let roots = roots_stream
        .take(pairs)
        .flat_map(|z| [z, z.conj()])
        .collect_vec();
    let poly = scaled(
        &Poly64::from_conjugate_roots(&roots),
        scale_stream.next().expect("rng stream should be infinite"),
    );
    (poly, roots)
}

/// Check that all roots have been found
#[must_use]
pub fn check_roots(roots1: Vec<Complex64>, mut roots2: Vec<Complex64>, tol: f64) -> bool {
    if roots1.len() != roots2.len() {
        return false;
    }

    for r1 in roots1 {
        let mut best_idx = 0;
        let mut best_d = f64::MAX;
        for (i, r2) in roots2.iter().enumerate() {
            let d = (r1 - r2).norm();
            if d < best_d {
                best_idx = i;
                best_d = d;
            }
        }
        if best_d > tol {
            return false;
        }
        roots2.swap_remove(best_idx);
    }
    true
}
