use std::fmt::{Debug, Display};

use num::{Float, FromPrimitive, ToPrimitive};

/// The fixed working precision of every matrix pencil built by this crate.
///
/// Coefficients are widened to this type before any matrix is assembled and
/// roots are only narrowed back to the caller's type once they have been
/// sorted.
pub type Wide = f64;

/// A real number type that roots can be requested in.
pub trait RealScalar: Float + FromPrimitive + ToPrimitive + Debug + Display + 'static {
    /// Convert to the working precision, `None` if the value does not fit.
    fn widen(self) -> Option<Wide> {
        self.to_f64()
    }

    /// Convert from the working precision, `None` if the value does not fit.
    fn narrow(x: Wide) -> Option<Self> {
        Self::from_f64(x)
    }
}

impl RealScalar for f32 {
    // `from_f64` saturates to infinity instead of failing
    fn narrow(x: Wide) -> Option<Self> {
        Self::from_f64(x).filter(|y| y.is_finite() || !x.is_finite())
    }
}

impl RealScalar for f64 {
    fn widen(self) -> Option<Wide> {
        Some(self)
    }

    fn narrow(x: Wide) -> Option<Self> {
        Some(x)
    }
}
