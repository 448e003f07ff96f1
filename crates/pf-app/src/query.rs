//! Query helpers for flattening a run into plain SI numbers.

use pf_hydraulics::{FlowRegime, SystemResult};

/// One row of the per-segment detail table. All values in SI base units.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentRow {
    pub id: u32,
    pub length_m: f64,
    pub velocity_mps: f64,
    pub reynolds: f64,
    pub regime: FlowRegime,
    pub friction_factor: f64,
    pub k_total: f64,
    pub h_distributed_m: f64,
    pub h_local_m: f64,
    pub h_elevation_m: f64,
    pub h_total_m: f64,
    pub pressure_in_pa: f64,
    pub pressure_out_pa: f64,
    pub pressure_drop_pa: f64,
}

/// Headline numbers of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub segment_count: usize,
    pub flow_rate_m3ps: f64,
    pub inlet_velocity_mps: f64,
    pub total_length_m: f64,
    pub total_head_loss_m: f64,
    pub inlet_pressure_pa: f64,
    pub outlet_pressure_pa: f64,
    pub total_pressure_drop_pa: f64,
}

pub fn get_run_summary(result: &SystemResult) -> RunSummary {
    RunSummary {
        segment_count: result.segments.len(),
        flow_rate_m3ps: result.flow_rate.value,
        inlet_velocity_mps: result.inlet_velocity.value,
        total_length_m: result.total_length.value,
        total_head_loss_m: result.total_head_loss.value,
        inlet_pressure_pa: result.inlet_pressure.value,
        outlet_pressure_pa: result.outlet_pressure.value,
        total_pressure_drop_pa: result.total_pressure_drop().value,
    }
}

/// Detail rows in chain order.
pub fn segment_rows(result: &SystemResult) -> Vec<SegmentRow> {
    result
        .segments
        .iter()
        .map(|s| SegmentRow {
            id: s.id.get(),
            length_m: s.length.value,
            velocity_mps: s.losses.velocity.value,
            reynolds: s.losses.reynolds,
            regime: s.losses.regime,
            friction_factor: s.losses.friction_factor,
            k_total: s.losses.k_total,
            h_distributed_m: s.losses.h_distributed.value,
            h_local_m: s.losses.h_local.value,
            h_elevation_m: s.losses.h_elevation.value,
            h_total_m: s.losses.h_total.value,
            pressure_in_pa: s.pressure_in.value,
            pressure_out_pa: s.pressure_out.value,
            pressure_drop_pa: s.pressure_drop().value,
        })
        .collect()
}

/// Pressure profile as `(position_m, pressure_pa)` pairs, inlet first.
pub fn pressure_series(result: &SystemResult) -> Vec<(f64, f64)> {
    result
        .pressure_profile()
        .iter()
        .map(|p| (p.position.value, p.pressure.value))
        .collect()
}

/// Segment with the largest pressure drop, if any.
pub fn largest_drop(result: &SystemResult) -> Option<SegmentRow> {
    segment_rows(result)
        .into_iter()
        .max_by(|a, b| a.pressure_drop_pa.total_cmp(&b.pressure_drop_pa))
}
