//! Common utilities for hydraulic calculations.

use crate::error::HydraulicsResult;
use pf_core::numeric::{ensure_finite, ensure_non_negative, ensure_positive};

/// Upper Reynolds bound of the laminar regime.
pub const RE_LAMINAR_MAX: f64 = 2300.0;

/// Lower Reynolds bound of the fully turbulent regime.
pub const RE_TURBULENT_MIN: f64 = 4000.0;

/// Ensure a value is finite, returning HydraulicsError if not.
pub fn check_finite(value: f64, what: &'static str) -> HydraulicsResult<f64> {
    Ok(ensure_finite(value, what)?)
}

/// Ensure an input is finite and > 0.
pub fn check_positive(value: f64, what: &'static str) -> HydraulicsResult<f64> {
    Ok(ensure_positive(value, what)?)
}

/// Ensure an input is finite and >= 0.
pub fn check_non_negative(value: f64, what: &'static str) -> HydraulicsResult<f64> {
    Ok(ensure_non_negative(value, what)?)
}

/// Dynamic pressure head V^2 / (2g), in metres of fluid column.
#[inline]
pub fn velocity_head(velocity: f64, gravity: f64) -> f64 {
    velocity * velocity / (2.0 * gravity)
}
