use crate::{Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// Derivative
    ///
    /// # Panics
    /// If a degree does not fit in `T`, which cannot happen for `f32` or `f64`.
    #[must_use]
    pub fn diff(&self) -> Self {
        // derivative of constant is zero
        if self.0.len() <= 1 {
            return Self::new(&[T::zero()]);
        }

        let coeffs: Vec<_> = self
            .0
            .iter()
            .enumerate()
            .skip(1) // shift degrees down
            .map(|(n, c)| T::from_usize(n).expect("degree too high to convert to T") * *c)
            .collect();
        Self::from_vec(coeffs)
    }
}
