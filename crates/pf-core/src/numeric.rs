use crate::{PfError, PfResult};

/// Floating point type used throughout the hydraulic calculations
pub type Real = f64;

/// Absolute/relative tolerance pair used for float comparisons.
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

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> PfResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PfError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero (diameters, densities, viscosities).
/// A non-finite argument is an invalid argument, not a `NonFinite` result.
pub fn ensure_positive(v: Real, what: &'static str) -> PfResult<Real> {
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(PfError::InvalidArg { what })
    }
}

/// Finite and zero or greater (lengths, flow rates, roughness).
pub fn ensure_non_negative(v: Real, what: &'static str) -> PfResult<Real> {
    if v.is_finite() && v >= 0.0 {
        Ok(v)
    } else {
        Err(PfError::InvalidArg { what })
    }
}

/// Cross-sectional area of a circular bore, A = pi (d/2)^2.
#[inline]
pub fn circle_area(diameter: Real) -> Real {
    std::f64::consts::PI * (diameter / 2.0).powi(2)
}
