//! Text and JSON rendering of a run report.

use pf_app::{RunReport, get_run_summary, pressure_series, segment_rows};
use pf_hydraulics::{VelocityFinding, VelocityStatus};
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonReport {
    pub system_id: String,
    pub system_name: String,
    pub fluid: String,
    pub flow_rate_m3_per_s: f64,
    pub inlet_velocity_m_per_s: f64,
    pub total_length_m: f64,
    pub total_head_loss_m: f64,
    pub inlet_pressure_pa: f64,
    pub outlet_pressure_pa: f64,
    pub total_pressure_drop_pa: f64,
    pub segments: Vec<JsonSegment>,
    pub velocity_checks: Vec<JsonFinding>,
    pub profile: Vec<JsonProfilePoint>,
}

#[derive(Serialize)]
pub struct JsonSegment {
    pub id: u32,
    pub length_m: f64,
    pub velocity_m_per_s: f64,
    pub reynolds: f64,
    pub regime: &'static str,
    pub friction_factor: f64,
    pub k_total: f64,
    pub h_distributed_m: f64,
    pub h_local_m: f64,
    pub h_elevation_m: f64,
    pub h_total_m: f64,
    pub pressure_in_pa: f64,
    pub pressure_out_pa: f64,
}

#[derive(Serialize)]
pub struct JsonFinding {
    pub segment: u32,
    pub velocity_m_per_s: f64,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_m_per_s: Option<f64>,
}

#[derive(Serialize)]
pub struct JsonProfilePoint {
    pub position_m: f64,
    pub pressure_pa: f64,
}

impl JsonReport {
    pub fn from_report(report: &RunReport) -> Self {
        let summary = get_run_summary(&report.result);
        Self {
            system_id: report.system_id.clone(),
            system_name: report.system_name.clone(),
            fluid: report.fluid_class.as_str().to_string(),
            flow_rate_m3_per_s: summary.flow_rate_m3ps,
            inlet_velocity_m_per_s: summary.inlet_velocity_mps,
            total_length_m: summary.total_length_m,
            total_head_loss_m: summary.total_head_loss_m,
            inlet_pressure_pa: summary.inlet_pressure_pa,
            outlet_pressure_pa: summary.outlet_pressure_pa,
            total_pressure_drop_pa: summary.total_pressure_drop_pa,
            segments: segment_rows(&report.result)
                .into_iter()
                .map(|r| JsonSegment {
                    id: r.id,
                    length_m: r.length_m,
                    velocity_m_per_s: r.velocity_mps,
                    reynolds: r.reynolds,
                    regime: r.regime.as_str(),
                    friction_factor: r.friction_factor,
                    k_total: r.k_total,
                    h_distributed_m: r.h_distributed_m,
                    h_local_m: r.h_local_m,
                    h_elevation_m: r.h_elevation_m,
                    h_total_m: r.h_total_m,
                    pressure_in_pa: r.pressure_in_pa,
                    pressure_out_pa: r.pressure_out_pa,
                })
                .collect(),
            velocity_checks: report
                .findings
                .iter()
                .map(|f| {
                    let (status, limit) = status_parts(f);
                    JsonFinding {
                        segment: f.segment.get(),
                        velocity_m_per_s: f.velocity.value,
                        status,
                        limit_m_per_s: limit,
                    }
                })
                .collect(),
            profile: pressure_series(&report.result)
                .into_iter()
                .map(|(position_m, pressure_pa)| JsonProfilePoint {
                    position_m,
                    pressure_pa,
                })
                .collect(),
        }
    }
}

fn status_parts(finding: &VelocityFinding) -> (&'static str, Option<f64>) {
    match finding.status {
        VelocityStatus::BelowMinimum { limit } => ("below_minimum", Some(limit.value)),
        VelocityStatus::AboveMaximum { limit } => ("above_maximum", Some(limit.value)),
        VelocityStatus::WithinRange => ("ok", None),
    }
}

pub fn print_report(report: &RunReport) {
    let summary = get_run_summary(&report.result);

    println!("System: {} ({})", report.system_name, report.system_id);
    println!("  Fluid:            {}", report.fluid_class);
    println!("  Segments:         {}", summary.segment_count);
    println!("  Flow rate:        {:.6} m³/s", summary.flow_rate_m3ps);
    println!("  Inlet velocity:   {:.3} m/s", summary.inlet_velocity_mps);
    println!("  Total length:     {:.2} m", summary.total_length_m);
    println!("  Total head loss:  {:.4} m", summary.total_head_loss_m);
    println!("  Inlet pressure:   {:.1} Pa", summary.inlet_pressure_pa);
    println!("  Outlet pressure:  {:.1} Pa", summary.outlet_pressure_pa);
    println!("  Pressure drop:    {:.1} Pa", summary.total_pressure_drop_pa);

    println!("\nVelocity checks:");
    for finding in &report.findings {
        let line = match finding.status {
            VelocityStatus::BelowMinimum { limit } => format!(
                "⚠ below {:.2} m/s, sedimentation risk",
                limit.value
            ),
            VelocityStatus::AboveMaximum { limit } => format!(
                "⚠ above {:.2} m/s, erosion and noise risk",
                limit.value
            ),
            VelocityStatus::WithinRange => "✓ ok".to_string(),
        };
        println!(
            "  Segment {:>3}: {:>7.3} m/s  {}",
            finding.segment.get(),
            finding.velocity.value,
            line
        );
    }

    println!("\nSegments:");
    println!(
        "  {:>3} {:>8} {:>7} {:>10} {:<13} {:>8} {:>6} {:>9} {:>9} {:>9} {:>9} {:>12}",
        "id", "L [m]", "v [m/s]", "Re", "regime", "f", "K", "hf [m]", "hl [m]", "hz [m]",
        "h [m]", "p_out [Pa]"
    );
    for row in segment_rows(&report.result) {
        println!(
            "  {:>3} {:>8.2} {:>7.3} {:>10.0} {:<13} {:>8.5} {:>6.2} {:>9.4} {:>9.4} {:>9.4} {:>9.4} {:>12.1}",
            row.id,
            row.length_m,
            row.velocity_mps,
            row.reynolds,
            row.regime.as_str(),
            row.friction_factor,
            row.k_total,
            row.h_distributed_m,
            row.h_local_m,
            row.h_elevation_m,
            row.h_total_m,
            row.pressure_out_pa
        );
    }

    println!("\nPressure profile:");
    for (position, pressure) in pressure_series(&report.result) {
        println!("  {position:>9.2} m  {pressure:>12.1} Pa");
    }
}
