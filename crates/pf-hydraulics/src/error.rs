//! Error types for hydraulic calculations.

use pf_core::error::PfError;
use thiserror::Error;

/// Errors that can occur during hydraulic calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HydraulicsError {
    /// Physically invalid input: diameter <= 0, negative flow, Re = 0, empty chain.
    #[error("Domain error: {what}")]
    Domain { what: &'static str },

    /// Colebrook-White iteration did not reach tolerance within its budget.
    #[error("Friction factor did not converge after {iterations} iterations (last step {residual:e})")]
    Convergence { iterations: usize, residual: f64 },

    /// A derived quantity became NaN or infinite.
    #[error("Non-finite value: {what}")]
    NonFinite { what: &'static str },
}

pub type HydraulicsResult<T> = Result<T, HydraulicsError>;

impl From<PfError> for HydraulicsError {
    fn from(e: PfError) -> Self {
        match e {
            PfError::NonFinite { what, .. } => HydraulicsError::NonFinite { what },
            PfError::InvalidArg { what } => HydraulicsError::Domain { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = HydraulicsError::Domain { what: "diameter" };
        assert!(err.to_string().contains("diameter"));

        let err = HydraulicsError::Convergence {
            iterations: 50,
            residual: 1e-3,
        };
        assert!(err.to_string().contains("50 iterations"));
    }

    #[test]
    fn core_errors_map_onto_taxonomy() {
        let err: HydraulicsError = PfError::InvalidArg { what: "flow rate" }.into();
        assert_eq!(err, HydraulicsError::Domain { what: "flow rate" });

        let err: HydraulicsError = PfError::NonFinite {
            what: "head loss",
            value: f64::NAN,
        }
        .into();
        assert_eq!(err, HydraulicsError::NonFinite { what: "head loss" });
    }

    #[test]
    fn guard_failures_propagate_with_question_mark() {
        fn diameter(d: f64) -> HydraulicsResult<f64> {
            Ok(pf_core::numeric::ensure_positive(d, "diameter")?)
        }
        assert_eq!(diameter(0.1), Ok(0.1));
        assert_eq!(diameter(-0.1), Err(HydraulicsError::Domain { what: "diameter" }));
        assert_eq!(diameter(f64::NAN), Err(HydraulicsError::Domain { what: "diameter" }));
    }
}
