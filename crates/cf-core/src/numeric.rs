use crate::CoreError;

/// Floating point type used throughout the system.
pub type Real = f64;

/// Absolute and relative tolerance pair for float comparisons.
///
/// The defaults suit quantities of order one, which covers gains, time
/// constants and normalized polynomial coefficients.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// True when `a` and `b` agree within the absolute tolerance, or within
/// the relative tolerance scaled by the larger magnitude.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Pass `v` through unchanged, or fail if it is NaN or infinite.
pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances::default();
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn nearly_equal_scales_with_magnitude() {
        let tol = Tolerances::default();
        assert!(nearly_equal(1e6, 1e6 + 1e-4, tol));
        assert!(!nearly_equal(1e6, 1e6 + 10.0, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_finite_rejects_infinity() {
        assert!(ensure_finite(Real::INFINITY, "test").is_err());
    }

    #[test]
    fn ensure_finite_passes_through() {
        assert_eq!(ensure_finite(2.5, "test").unwrap(), 2.5);
    }
}
