//! Velocity advisory: compares segment velocities with recommended bands.
//!
//! Purely diagnostic. Findings never influence the loss calculation.

use crate::chain::SegmentResult;
use crate::fluid::FluidClass;
use pf_core::SegmentId;
use pf_core::units::{Velocity, mps};

/// Recommended velocity range. A missing bound is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VelocityBand {
    pub min: Option<Velocity>,
    pub max: Option<Velocity>,
}

/// Bands per fluid class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityThresholds {
    pub water: VelocityBand,
    pub air: VelocityBand,
    pub other: VelocityBand,
}

impl Default for VelocityThresholds {
    fn default() -> Self {
        Self {
            water: VelocityBand {
                min: Some(mps(0.5)),
                max: Some(mps(3.0)),
            },
            air: VelocityBand {
                min: None,
                max: Some(mps(20.0)),
            },
            other: VelocityBand::default(),
        }
    }
}

impl VelocityThresholds {
    pub fn band(&self, class: FluidClass) -> VelocityBand {
        match class {
            FluidClass::Water => self.water,
            FluidClass::Air => self.air,
            FluidClass::Other => self.other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VelocityStatus {
    /// Sedimentation risk
    BelowMinimum { limit: Velocity },
    /// Erosion and noise risk
    AboveMaximum { limit: Velocity },
    WithinRange,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityFinding {
    pub segment: SegmentId,
    pub velocity: Velocity,
    pub status: VelocityStatus,
}

impl VelocityFinding {
    pub fn is_warning(&self) -> bool {
        !matches!(self.status, VelocityStatus::WithinRange)
    }
}

/// Classify one velocity against a band. The minimum is checked first.
pub fn classify(velocity: Velocity, band: VelocityBand) -> VelocityStatus {
    match (band.min, band.max) {
        (Some(min), _) if velocity < min => VelocityStatus::BelowMinimum { limit: min },
        (_, Some(max)) if velocity > max => VelocityStatus::AboveMaximum { limit: max },
        _ => VelocityStatus::WithinRange,
    }
}

/// One finding per segment, in chain order.
pub fn check_velocities(
    results: &[SegmentResult],
    class: FluidClass,
    thresholds: &VelocityThresholds,
) -> Vec<VelocityFinding> {
    let band = thresholds.band(class);
    results
        .iter()
        .map(|r| VelocityFinding {
            segment: r.id,
            velocity: r.losses.velocity,
            status: classify(r.losses.velocity, band),
        })
        .collect()
}
