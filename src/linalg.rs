use std::ops::{Index, IndexMut};

use nalgebra::{DMatrix, Scalar};
use num::{One, Zero};

/// A dense, row/column indexed matrix that the root solvers assemble their
/// pencils into.
///
/// Element access goes through `matrix[(row, col)]`.
pub trait DenseMatrix<T: Clone>:
    Index<(usize, usize), Output = T> + IndexMut<(usize, usize)> + Sized
{
    /// A 0x0 matrix
    fn empty() -> Self;

    /// Change the shape to `nrows` by `ncols`. The contents are unspecified
    /// afterwards, call [`DenseMatrix::set_zero`] before relying on them.
    fn resize(&mut self, nrows: usize, ncols: usize);

    /// Overwrite every entry with zero
    fn set_zero(&mut self);

    /// Become the `n` by `n` identity
    fn set_identity(&mut self, n: usize);

    fn nrows(&self) -> usize;

    fn ncols(&self) -> usize;

    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    /// A zero-filled `nrows` by `ncols` matrix
    fn zeros(nrows: usize, ncols: usize) -> Self {
        let mut m = Self::empty();
        m.resize(nrows, ncols);
        m.set_zero();
        m
    }

    /// The `n` by `n` identity
    fn identity(n: usize) -> Self {
        let mut m = Self::empty();
        m.set_identity(n);
        m
    }

    /// Write `value` to both `(i, j)` and `(j, i)`
    fn set_symmetric(&mut self, i: usize, j: usize, value: T) {
        self[(j, i)] = value.clone();
        self[(i, j)] = value;
    }
}

impl<T: Scalar + Zero + One> DenseMatrix<T> for DMatrix<T> {
    fn empty() -> Self {
        Self::from_element(0, 0, T::zero())
    }

    fn resize(&mut self, nrows: usize, ncols: usize) {
        self.resize_mut(nrows, ncols, T::zero());
    }

    fn set_zero(&mut self) {
        self.fill(T::zero());
    }

    fn set_identity(&mut self, n: usize) {
        *self = Self::from_diagonal_element(n, n, T::one());
    }

    fn nrows(&self) -> usize {
        self.shape().0
    }

    fn ncols(&self) -> usize {
        self.shape().1
    }
}
