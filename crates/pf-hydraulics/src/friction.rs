//! Darcy friction factor with Reynolds-regime classification.
//!
//! Laminar flow uses the Hagen-Poiseuille result f = 64/Re. Everything at or
//! above Re = 2300 goes through the turbulent correlation, including the
//! 2300..4000 transitional band: that zone is physically indeterminate and is
//! reported as `Transitional` but computed with the turbulent formula. Do not
//! replace this with a blended model without a domain review.

use crate::common::{
    RE_LAMINAR_MAX, RE_TURBULENT_MIN, check_finite, check_non_negative, check_positive,
};
use crate::error::{HydraulicsError, HydraulicsResult};
use core::fmt;
use core::str::FromStr;
use tracing::trace;

/// Flow regime derived from the Reynolds number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowRegime {
    Laminar,
    Transitional,
    Turbulent,
}

impl FlowRegime {
    /// Classify a (positive) Reynolds number.
    pub fn classify(reynolds: f64) -> Self {
        if reynolds < RE_LAMINAR_MAX {
            FlowRegime::Laminar
        } else if reynolds < RE_TURBULENT_MIN {
            FlowRegime::Transitional
        } else {
            FlowRegime::Turbulent
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FlowRegime::Laminar => "laminar",
            FlowRegime::Transitional => "transitional",
            FlowRegime::Turbulent => "turbulent",
        }
    }
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Correlation used for transitional and turbulent flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurbulentCorrelation {
    /// Implicit Colebrook-White, solved by fixed-point iteration.
    #[default]
    ColebrookWhite,
    /// Explicit Swamee-Jain approximation.
    SwameeJain,
}

impl TurbulentCorrelation {
    pub fn as_str(self) -> &'static str {
        match self {
            TurbulentCorrelation::ColebrookWhite => "colebrook_white",
            TurbulentCorrelation::SwameeJain => "swamee_jain",
        }
    }
}

impl FromStr for TurbulentCorrelation {
    type Err = HydraulicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "colebrook_white" | "colebrook" => Ok(TurbulentCorrelation::ColebrookWhite),
            "swamee_jain" => Ok(TurbulentCorrelation::SwameeJain),
            _ => Err(HydraulicsError::Domain {
                what: "unknown friction correlation",
            }),
        }
    }
}

/// Friction solver configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionConfig {
    pub correlation: TurbulentCorrelation,
    /// Convergence tolerance on successive friction factor iterates
    pub tolerance: f64,
    /// Maximum Colebrook-White iterations
    pub max_iterations: usize,
}

impl FrictionConfig {
    /// Loosest tolerance accepted on f.
    pub const MAX_TOLERANCE: f64 = 1e-6;

    pub fn validate(&self) -> HydraulicsResult<()> {
        if !(self.tolerance.is_finite()
            && self.tolerance > 0.0
            && self.tolerance <= Self::MAX_TOLERANCE)
        {
            return Err(HydraulicsError::Domain {
                what: "friction tolerance must be in (0, 1e-6]",
            });
        }
        if self.max_iterations == 0 {
            return Err(HydraulicsError::Domain {
                what: "friction max_iterations must be at least 1",
            });
        }
        Ok(())
    }
}

impl Default for FrictionConfig {
    fn default() -> Self {
        Self {
            correlation: TurbulentCorrelation::ColebrookWhite,
            tolerance: 1e-10,
            max_iterations: 50,
        }
    }
}

/// Darcy friction factor together with the regime it was computed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionFactor {
    pub f: f64,
    pub regime: FlowRegime,
}

/// Compute the Darcy friction factor.
///
/// # Arguments
/// * `reynolds` - Reynolds number, must be > 0
/// * `roughness` - absolute wall roughness (m), >= 0
/// * `diameter` - internal diameter (m), > 0
/// * `config` - turbulent correlation and iteration budget
pub fn solve(
    reynolds: f64,
    roughness: f64,
    diameter: f64,
    config: &FrictionConfig,
) -> HydraulicsResult<FrictionFactor> {
    if !(reynolds.is_finite() && reynolds > 0.0) {
        return Err(HydraulicsError::Domain {
            what: "Reynolds number must be positive",
        });
    }
    let diameter = check_positive(diameter, "diameter")?;
    let roughness = check_non_negative(roughness, "roughness")?;
    config.validate()?;

    let regime = FlowRegime::classify(reynolds);
    let f = match regime {
        FlowRegime::Laminar => 64.0 / reynolds,
        FlowRegime::Transitional | FlowRegime::Turbulent => {
            let rel_roughness = roughness / diameter;
            match config.correlation {
                TurbulentCorrelation::ColebrookWhite => colebrook_white(
                    reynolds,
                    rel_roughness,
                    config.tolerance,
                    config.max_iterations,
                )?,
                TurbulentCorrelation::SwameeJain => swamee_jain(reynolds, rel_roughness),
            }
        }
    };

    let f = check_finite(f, "friction factor")?;
    Ok(FrictionFactor { f, regime })
}

/// Swamee-Jain explicit approximation of Colebrook-White.
pub fn swamee_jain(reynolds: f64, rel_roughness: f64) -> f64 {
    let a = rel_roughness / 3.7;
    let b = 5.74 / reynolds.powf(0.9);
    0.25 / (a + b).log10().powi(2)
}

/// Colebrook-White solved as a fixed point in 1/sqrt(f), seeded by Swamee-Jain.
///
/// Converged when two successive iterates differ by at most `tolerance`.
pub fn colebrook_white(
    reynolds: f64,
    rel_roughness: f64,
    tolerance: f64,
    max_iterations: usize,
) -> HydraulicsResult<f64> {
    let mut f = swamee_jain(reynolds, rel_roughness);
    let mut step = f64::INFINITY;

    for iteration in 1..=max_iterations {
        let x = -2.0 * (rel_roughness / 3.7 + 2.51 / (reynolds * f.sqrt())).log10();
        let f_next = check_finite(1.0 / (x * x), "friction factor")?;
        step = (f_next - f).abs();
        trace!(iteration, f = f_next, step, "colebrook-white iteration");
        f = f_next;

        if step <= tolerance {
            return Ok(f);
        }
    }

    Err(HydraulicsError::Convergence {
        iterations: max_iterations,
        residual: step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_solve(re: f64, roughness: f64, diameter: f64) -> HydraulicsResult<FrictionFactor> {
        solve(re, roughness, diameter, &FrictionConfig::default())
    }

    #[test]
    fn laminar_re_1000_is_exact() {
        let ff = default_solve(1000.0, 4.5e-5, 0.1).unwrap();
        assert_eq!(ff.regime, FlowRegime::Laminar);
        assert_eq!(ff.f, 0.064);
    }

    #[test]
    fn laminar_ignores_roughness() {
        let smooth = default_solve(1500.0, 0.0, 0.05).unwrap();
        let rough = default_solve(1500.0, 1e-3, 0.05).unwrap();
        assert_eq!(smooth.f, rough.f);
    }

    #[test]
    fn regime_boundaries() {
        assert_eq!(FlowRegime::classify(2299.9), FlowRegime::Laminar);
        assert_eq!(FlowRegime::classify(2300.0), FlowRegime::Transitional);
        assert_eq!(FlowRegime::classify(3999.9), FlowRegime::Transitional);
        assert_eq!(FlowRegime::classify(4000.0), FlowRegime::Turbulent);
    }

    #[test]
    fn transitional_uses_turbulent_formula() {
        let re = 3000.0;
        let rr = 4.5e-5 / 0.1;
        let ff = default_solve(re, 4.5e-5, 0.1).unwrap();
        assert_eq!(ff.regime, FlowRegime::Transitional);

        let cw = colebrook_white(re, rr, 1e-12, 50).unwrap();
        assert!((ff.f - cw).abs() < 1e-9);
        assert!((ff.f - 64.0 / re).abs() > 1e-3, "must not use the laminar formula");
    }

    #[test]
    fn colebrook_matches_moody_chart() {
        // eps/D = 1e-4, Re = 1e5 reads f ~ 0.0185 on the Moody chart.
        let ff = default_solve(1e5, 1e-5, 0.1).unwrap();
        assert_eq!(ff.regime, FlowRegime::Turbulent);
        assert!((ff.f - 0.0185).abs() < 6e-4, "f = {}", ff.f);
    }

    #[test]
    fn colebrook_satisfies_its_own_equation() {
        let (re, rr) = (2.5e5, 2e-4);
        let f = colebrook_white(re, rr, 1e-13, 50).unwrap();
        let lhs = 1.0 / f.sqrt();
        let rhs = -2.0 * (rr / 3.7 + 2.51 / (re * f.sqrt())).log10();
        assert!((lhs - rhs).abs() < 1e-8);
    }

    #[test]
    fn swamee_jain_within_two_percent_of_colebrook() {
        for &(re, rr) in &[(5e3, 0.0), (1e5, 1e-4), (1e6, 1e-3), (1e7, 1e-5)] {
            let sj = swamee_jain(re, rr);
            let cw = colebrook_white(re, rr, 1e-12, 50).unwrap();
            assert!(((sj - cw) / cw).abs() < 0.02, "Re={re} rr={rr}: {sj} vs {cw}");
        }
    }

    #[test]
    fn swamee_jain_correlation_selectable() {
        let config = FrictionConfig {
            correlation: TurbulentCorrelation::SwameeJain,
            ..FrictionConfig::default()
        };
        let ff = solve(1e5, 1e-5, 0.1, &config).unwrap();
        assert_eq!(ff.f, swamee_jain(1e5, 1e-4));
    }

    #[test]
    fn rougher_pipe_has_higher_turbulent_friction() {
        let smooth = default_solve(1e5, 1.5e-6, 0.1).unwrap();
        let rough = default_solve(1e5, 1e-3, 0.1).unwrap();
        assert!(rough.f > smooth.f);
    }

    #[test]
    fn zero_reynolds_is_domain_error() {
        assert!(matches!(
            default_solve(0.0, 4.5e-5, 0.1),
            Err(HydraulicsError::Domain { .. })
        ));
        assert!(default_solve(-10.0, 4.5e-5, 0.1).is_err());
        assert!(default_solve(f64::NAN, 4.5e-5, 0.1).is_err());
    }

    #[test]
    fn invalid_geometry_is_domain_error() {
        assert!(matches!(
            default_solve(1e5, 4.5e-5, 0.0),
            Err(HydraulicsError::Domain { what: "diameter" })
        ));
        assert!(matches!(
            default_solve(1e5, -1e-5, 0.1),
            Err(HydraulicsError::Domain { what: "roughness" })
        ));
    }

    #[test]
    fn exhausted_budget_is_convergence_error() {
        let config = FrictionConfig {
            correlation: TurbulentCorrelation::ColebrookWhite,
            tolerance: 1e-300,
            max_iterations: 1,
        };
        let err = solve(1e5, 1e-3, 0.1, &config).unwrap_err();
        assert!(matches!(err, HydraulicsError::Convergence { iterations: 1, .. }));
    }

    #[test]
    fn config_validation() {
        assert!(FrictionConfig::default().validate().is_ok());

        let loose = FrictionConfig {
            tolerance: 1e-3,
            ..FrictionConfig::default()
        };
        assert!(loose.validate().is_err());

        let no_budget = FrictionConfig {
            max_iterations: 0,
            ..FrictionConfig::default()
        };
        assert!(no_budget.validate().is_err());
    }

    #[test]
    fn correlation_from_str() {
        assert_eq!(
            "Colebrook-White".parse::<TurbulentCorrelation>().unwrap(),
            TurbulentCorrelation::ColebrookWhite
        );
        assert_eq!(
            "swamee_jain".parse::<TurbulentCorrelation>().unwrap(),
            TurbulentCorrelation::SwameeJain
        );
        assert!("haaland".parse::<TurbulentCorrelation>().is_err());
    }
}
