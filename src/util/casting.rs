use num::cast;

use crate::{Error, RealScalar, Wide};

/// Lossy cast for matrix entries built from indices, saturates to infinity
pub(crate) fn usize_to_wide(x: usize) -> Wide {
    cast(x).unwrap_or(Wide::INFINITY)
}

/// Narrow a sequence of roots to the caller's type
pub(crate) fn narrow_all<T: RealScalar>(xs: &[Wide]) -> Result<Vec<T>, Error> {
    xs.iter()
        .map(|&x| T::narrow(x).ok_or(Error::Narrowing(x)))
        .collect()
}
