use crate::{Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// Get the nth [Legendre polynomial](https://en.wikipedia.org/wiki/Legendre_polynomials)
    ///
    /// ```
    /// use eigenroots::{poly, Poly64};
    ///
    /// assert_eq!(Poly64::legendre(2), poly![-0.5, 0.0, 1.5]);
    /// ```
    ///
    /// # Panics
    /// If `n` does not fit in `T`, which cannot happen for `f32` or `f64`.
    #[must_use]
    pub fn legendre(n: usize) -> Self {
        // memoized form of (k+1) P_{k+1} = (2k+1) x P_k - k P_{k-1}
        let mut prev = vec![T::one()];
        let mut curr = vec![T::zero(), T::one()];
        if n == 0 {
            return Self(prev);
        }

        for i in 2..=n {
            let ns = T::from_usize(i).expect("overflow");
            let a = T::from_usize(2 * i - 1).expect("overflow") / ns;
            let b = (T::one() - ns) / ns;

            let mut next = vec![T::zero(); i + 1];
            for (k, c) in curr.iter().enumerate() {
                next[k + 1] = a * *c;
            }
            for (k, c) in prev.iter().enumerate() {
                next[k] = next[k] + b * *c;
            }
            prev = curr;
            curr = next;
        }
        Self(curr)
    }

    /// Get the nth [Laguerre polynomial](https://en.wikipedia.org/wiki/Laguerre_polynomials)
    ///
    /// ```
    /// use eigenroots::{poly, Poly64};
    ///
    /// assert_eq!(Poly64::laguerre(2), poly![1.0, -2.0, 0.5]);
    /// ```
    ///
    /// # Panics
    /// If `n` does not fit in `T`, which cannot happen for `f32` or `f64`.
    #[must_use]
    pub fn laguerre(n: usize) -> Self {
        // c_{k+1} = -c_k (n - k) / (k + 1)^2
        let mut coeffs = Vec::with_capacity(n + 1);
        coeffs.push(T::one());
        for k in 0..n {
            let num = T::from_usize(n - k).expect("overflow");
            let den = T::from_usize((k + 1) * (k + 1)).expect("overflow");
            let c = coeffs[k];
            coeffs.push(-c * num / den);
        }
        Self(coeffs)
    }
}
