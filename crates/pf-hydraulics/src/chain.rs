//! Sequential pressure propagation along a series pipe chain.

use crate::common::{check_finite, check_non_negative};
use crate::error::{HydraulicsError, HydraulicsResult};
use crate::fluid::Fluid;
use crate::segment::{self, PipeSegment, SegmentLosses};
use crate::settings::CalcSettings;
use pf_core::SegmentId;
use pf_core::units::{Length, Pressure, Velocity, VolumeRate, m, m3ps, mps, pa};
use std::collections::HashSet;
use tracing::debug;

/// How the system flow is specified.
///
/// Inlet velocity refers to the first segment of the chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlowSpec {
    VolumeRate(VolumeRate),
    InletVelocity(Velocity),
}

impl FlowSpec {
    /// Volumetric flow rate, using the first segment's area if needed.
    pub fn flow_rate(&self, first: &PipeSegment) -> HydraulicsResult<VolumeRate> {
        match *self {
            FlowSpec::VolumeRate(q) => {
                check_non_negative(q.value, "flow rate")?;
                Ok(q)
            }
            FlowSpec::InletVelocity(v) => {
                let v = check_non_negative(v.value, "inlet velocity")?;
                Ok(m3ps(v * first.area()?.value))
            }
        }
    }

    /// Mean velocity in the first segment.
    pub fn inlet_velocity(&self, first: &PipeSegment) -> HydraulicsResult<Velocity> {
        match *self {
            FlowSpec::VolumeRate(q) => {
                let q = check_non_negative(q.value, "flow rate")?;
                Ok(mps(q / first.area()?.value))
            }
            FlowSpec::InletVelocity(v) => {
                check_non_negative(v.value, "inlet velocity")?;
                Ok(v)
            }
        }
    }
}

/// Losses of one segment plus the pressures at its ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentResult {
    pub id: SegmentId,
    pub length: Length,
    pub losses: SegmentLosses,
    pub pressure_in: Pressure,
    pub pressure_out: Pressure,
}

impl SegmentResult {
    /// P_in - P_out. Negative when the segment gains pressure.
    pub fn pressure_drop(&self) -> Pressure {
        self.pressure_in - self.pressure_out
    }
}

/// Point of the pressure profile along the chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    /// Cumulative pipe length from the chain inlet
    pub position: Length,
    pub pressure: Pressure,
}

/// Result of propagating a flow through the whole chain.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemResult {
    pub flow_rate: VolumeRate,
    /// Mean velocity in the first segment
    pub inlet_velocity: Velocity,
    /// Sum of per-segment total head losses
    pub total_head_loss: Length,
    pub total_length: Length,
    pub inlet_pressure: Pressure,
    pub outlet_pressure: Pressure,
    /// Per-segment results in flow order
    pub segments: Vec<SegmentResult>,
}

impl SystemResult {
    pub fn total_pressure_drop(&self) -> Pressure {
        self.inlet_pressure - self.outlet_pressure
    }

    /// Pressure at the inlet (position 0) and at the outlet of every segment.
    pub fn pressure_profile(&self) -> Vec<ProfilePoint> {
        let mut points = Vec::with_capacity(self.segments.len() + 1);
        points.push(ProfilePoint {
            position: m(0.0),
            pressure: self.inlet_pressure,
        });

        let mut position = m(0.0);
        for seg in &self.segments {
            position += seg.length;
            points.push(ProfilePoint {
                position,
                pressure: seg.pressure_out,
            });
        }
        points
    }

    pub fn segment(&self, id: SegmentId) -> Option<&SegmentResult> {
        self.segments.iter().find(|s| s.id == id)
    }
}

/// Propagate `flow` through `segments` in order, starting at `inlet_pressure`.
///
/// Each segment's head loss is converted to a pressure drop with
/// dp = h_total * rho * g and subtracted from the running pressure. The flow
/// rate is the same in every segment.
pub fn propagate(
    segments: &[PipeSegment],
    flow: FlowSpec,
    fluid: &Fluid,
    inlet_pressure: Pressure,
    settings: &CalcSettings,
) -> HydraulicsResult<SystemResult> {
    let first = segments.first().ok_or(HydraulicsError::Domain {
        what: "segment chain is empty",
    })?;

    let mut seen = HashSet::with_capacity(segments.len());
    if !segments.iter().all(|s| seen.insert(s.id)) {
        return Err(HydraulicsError::Domain {
            what: "duplicate segment id",
        });
    }

    check_finite(inlet_pressure.value, "inlet pressure")?;
    settings.validate()?;

    let flow_rate = flow.flow_rate(first)?;
    let inlet_velocity = flow.inlet_velocity(first)?;
    let rho_g = fluid.density().value * settings.gravity.value;

    let mut results = Vec::with_capacity(segments.len());
    let mut pressure = inlet_pressure.value;
    let mut total_head_loss = 0.0;
    let mut total_length = 0.0;

    for seg in segments {
        let losses = segment::compute(seg, flow_rate, fluid, settings)?;
        let pressure_out = pressure - losses.h_total.value * rho_g;

        debug!(
            segment = %seg.id,
            velocity = losses.velocity.value,
            reynolds = losses.reynolds,
            regime = %losses.regime,
            h_total = losses.h_total.value,
            pressure_out,
            "segment propagated"
        );

        results.push(SegmentResult {
            id: seg.id,
            length: seg.length,
            losses,
            pressure_in: pa(pressure),
            pressure_out: pa(pressure_out),
        });

        total_head_loss += losses.h_total.value;
        total_length += seg.length.value;
        pressure = pressure_out;
    }

    Ok(SystemResult {
        flow_rate,
        inlet_velocity,
        total_head_loss: m(total_head_loss),
        total_length: m(total_length),
        inlet_pressure,
        outlet_pressure: pa(pressure),
        segments: results,
    })
}
