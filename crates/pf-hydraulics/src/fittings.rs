//! Local (minor) loss coefficients for fittings, valves, curves and tees.

use crate::common::check_non_negative;
use crate::error::{HydraulicsError, HydraulicsResult};
use core::str::FromStr;

/// Geometry class of a 90 degree curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CurveGeometry {
    LongRadius,
    MediumRadius,
    /// Standard (short radius) elbow
    #[default]
    Standard,
}

impl CurveGeometry {
    pub fn as_str(self) -> &'static str {
        match self {
            CurveGeometry::LongRadius => "long_radius",
            CurveGeometry::MediumRadius => "medium_radius",
            CurveGeometry::Standard => "standard",
        }
    }
}

impl FromStr for CurveGeometry {
    type Err = HydraulicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "long_radius" | "long" => Ok(CurveGeometry::LongRadius),
            "medium_radius" | "medium" => Ok(CurveGeometry::MediumRadius),
            "standard" | "short_radius" | "short" => Ok(CurveGeometry::Standard),
            _ => Err(HydraulicsError::Domain {
                what: "unknown curve geometry",
            }),
        }
    }
}

/// In-line valve type. Each valve is assumed fully open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValveKind {
    Gate,
    Globe,
    Ball,
    Check,
}

impl ValveKind {
    pub const ALL: [ValveKind; 4] = [
        ValveKind::Gate,
        ValveKind::Globe,
        ValveKind::Ball,
        ValveKind::Check,
    ];
}

/// Fittings installed on one pipe segment.
///
/// Flags contribute their table value once; counts scale linearly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FittingConfig {
    pub contraction: bool,
    pub expansion: bool,
    pub curves: u32,
    pub curve_geometry: CurveGeometry,
    pub gate_valve: bool,
    pub globe_valve: bool,
    pub ball_valve: bool,
    pub check_valve: bool,
    pub tees_through: u32,
    pub tees_branch: u32,
}

impl FittingConfig {
    /// A bare pipe run.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_contraction(mut self) -> Self {
        self.contraction = true;
        self
    }

    pub fn with_expansion(mut self) -> Self {
        self.expansion = true;
        self
    }

    pub fn with_curves(mut self, count: u32, geometry: CurveGeometry) -> Self {
        self.curves = count;
        self.curve_geometry = geometry;
        self
    }

    pub fn with_valve(mut self, kind: ValveKind) -> Self {
        match kind {
            ValveKind::Gate => self.gate_valve = true,
            ValveKind::Globe => self.globe_valve = true,
            ValveKind::Ball => self.ball_valve = true,
            ValveKind::Check => self.check_valve = true,
        }
        self
    }

    pub fn with_tees_through(mut self, count: u32) -> Self {
        self.tees_through = count;
        self
    }

    pub fn with_tees_branch(mut self, count: u32) -> Self {
        self.tees_branch = count;
        self
    }

    pub fn has_valve(&self, kind: ValveKind) -> bool {
        match kind {
            ValveKind::Gate => self.gate_valve,
            ValveKind::Globe => self.globe_valve,
            ValveKind::Ball => self.ball_valve,
            ValveKind::Check => self.check_valve,
        }
    }

    /// True if nothing on the segment contributes a local loss.
    pub fn is_empty(&self) -> bool {
        !self.contraction
            && !self.expansion
            && self.curves == 0
            && ValveKind::ALL.iter().all(|&k| !self.has_valve(k))
            && self.tees_through == 0
            && self.tees_branch == 0
    }
}

/// Loss coefficient (K) lookup table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittingTable {
    pub contraction: f64,
    pub expansion: f64,
    pub curve_long_radius: f64,
    pub curve_medium_radius: f64,
    pub curve_standard: f64,
    pub gate_valve: f64,
    pub globe_valve: f64,
    pub ball_valve: f64,
    pub check_valve: f64,
    pub tee_through: f64,
    pub tee_branch: f64,
}

impl Default for FittingTable {
    fn default() -> Self {
        Self {
            contraction: 0.5,
            expansion: 1.0,
            curve_long_radius: 0.3,
            curve_medium_radius: 0.6,
            curve_standard: 0.9,
            gate_valve: 0.2,
            globe_valve: 10.0,
            ball_valve: 0.05,
            check_valve: 2.0,
            tee_through: 0.6,
            tee_branch: 1.8,
        }
    }
}

impl FittingTable {
    pub fn curve(&self, geometry: CurveGeometry) -> f64 {
        match geometry {
            CurveGeometry::LongRadius => self.curve_long_radius,
            CurveGeometry::MediumRadius => self.curve_medium_radius,
            CurveGeometry::Standard => self.curve_standard,
        }
    }

    pub fn valve(&self, kind: ValveKind) -> f64 {
        match kind {
            ValveKind::Gate => self.gate_valve,
            ValveKind::Globe => self.globe_valve,
            ValveKind::Ball => self.ball_valve,
            ValveKind::Check => self.check_valve,
        }
    }

    /// Every entry must be finite and >= 0 so that aggregated K is never negative.
    pub fn validate(&self) -> HydraulicsResult<()> {
        check_non_negative(self.contraction, "K contraction")?;
        check_non_negative(self.expansion, "K expansion")?;
        check_non_negative(self.curve_long_radius, "K long radius curve")?;
        check_non_negative(self.curve_medium_radius, "K medium radius curve")?;
        check_non_negative(self.curve_standard, "K standard curve")?;
        check_non_negative(self.gate_valve, "K gate valve")?;
        check_non_negative(self.globe_valve, "K globe valve")?;
        check_non_negative(self.ball_valve, "K ball valve")?;
        check_non_negative(self.check_valve, "K check valve")?;
        check_non_negative(self.tee_through, "K tee through")?;
        check_non_negative(self.tee_branch, "K tee branch")?;
        Ok(())
    }
}

/// Total local loss coefficient of a segment.
///
/// Assumes `table` passed `FittingTable::validate`; under that precondition the
/// result is never negative.
pub fn aggregate(config: &FittingConfig, table: &FittingTable) -> f64 {
    let mut k_total = 0.0;

    if config.contraction {
        k_total += table.contraction;
    }
    if config.expansion {
        k_total += table.expansion;
    }

    k_total += f64::from(config.curves) * table.curve(config.curve_geometry);

    for kind in ValveKind::ALL {
        if config.has_valve(kind) {
            k_total += table.valve(kind);
        }
    }

    k_total += f64::from(config.tees_through) * table.tee_through;
    k_total += f64::from(config.tees_branch) * table.tee_branch;

    k_total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_pipe_has_no_local_loss() {
        let config = FittingConfig::none();
        assert!(config.is_empty());
        assert_eq!(aggregate(&config, &FittingTable::default()), 0.0);
    }

    #[test]
    fn gate_plus_globe_is_sum_of_table_values() {
        let table = FittingTable::default();
        let a = FittingConfig::none()
            .with_valve(ValveKind::Gate)
            .with_valve(ValveKind::Globe);
        let b = FittingConfig::none()
            .with_valve(ValveKind::Globe)
            .with_valve(ValveKind::Gate);

        assert_eq!(aggregate(&a, &table), table.gate_valve + table.globe_valve);
        assert_eq!(aggregate(&a, &table), aggregate(&b, &table));
    }

    #[test]
    fn counts_scale_linearly() {
        let table = FittingTable::default();
        let one = FittingConfig::none().with_curves(1, CurveGeometry::MediumRadius);
        let four = FittingConfig::none().with_curves(4, CurveGeometry::MediumRadius);
        assert!((aggregate(&four, &table) - 4.0 * aggregate(&one, &table)).abs() < 1e-12);

        let tees = FittingConfig::none().with_tees_through(2).with_tees_branch(3);
        let expected = 2.0 * table.tee_through + 3.0 * table.tee_branch;
        assert!((aggregate(&tees, &table) - expected).abs() < 1e-12);
    }

    #[test]
    fn curve_geometry_selects_coefficient() {
        let table = FittingTable::default();
        let k = |g| aggregate(&FittingConfig::none().with_curves(1, g), &table);
        assert!(k(CurveGeometry::LongRadius) < k(CurveGeometry::MediumRadius));
        assert!(k(CurveGeometry::MediumRadius) < k(CurveGeometry::Standard));
    }

    #[test]
    fn everything_enabled() {
        let table = FittingTable::default();
        let mut config = FittingConfig::none()
            .with_contraction()
            .with_expansion()
            .with_curves(2, CurveGeometry::Standard)
            .with_tees_through(1)
            .with_tees_branch(1);
        for kind in ValveKind::ALL {
            config = config.with_valve(kind);
        }
        let expected = 0.5 + 1.0 + 2.0 * 0.9 + 0.2 + 10.0 + 0.05 + 2.0 + 0.6 + 1.8;
        assert!((aggregate(&config, &table) - expected).abs() < 1e-12);
        assert!(!config.is_empty());
    }

    #[test]
    fn negative_table_entry_rejected() {
        let table = FittingTable {
            globe_valve: -1.0,
            ..FittingTable::default()
        };
        assert!(matches!(
            table.validate(),
            Err(HydraulicsError::Domain { what: "K globe valve" })
        ));
        assert!(FittingTable::default().validate().is_ok());
    }

    #[test]
    fn curve_geometry_from_str() {
        assert_eq!(
            "long radius".parse::<CurveGeometry>().unwrap(),
            CurveGeometry::LongRadius
        );
        assert_eq!(
            "Standard".parse::<CurveGeometry>().unwrap(),
            CurveGeometry::Standard
        );
        assert!("hairpin".parse::<CurveGeometry>().is_err());
    }
}
