use crate::SgError;

/// Floating point type used for all coordinates.
pub type Real = f64;

/// Per-axis tolerance under which two positions count as the same spot.
pub const POSITION_TOLERANCE: Real = 0.01;

/// A position in the schematic plane.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: Real,
    pub y: Real,
}

impl Point2 {
    pub const fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point2) -> Real {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// True when both axes differ by strictly less than `tol`.
    pub fn near(self, other: Point2, tol: Real) -> bool {
        (self.x - other.x).abs() < tol && (self.y - other.y).abs() < tol
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(Real, Real)> for Point2 {
    fn from((x, y): (Real, Real)) -> Self {
        Self { x, y }
    }
}

pub fn ensure_finite(v: Real, what: &str) -> Result<Real, SgError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SgError::NonFinite {
            what: what.to_string(),
            value: v,
        })
    }
}

/// Reject a point with a NaN or infinite axis.
pub fn ensure_finite_point(p: Point2, what: &str) -> Result<Point2, SgError> {
    ensure_finite(p.x, what)?;
    ensure_finite(p.y, what)?;
    Ok(p)
}

/// Require a threshold to be finite and strictly positive.
pub fn ensure_positive(v: Real, what: &str) -> Result<Real, SgError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(SgError::InvalidArg {
            what: format!("{what} must be positive (got {v})"),
        })
    }
}
