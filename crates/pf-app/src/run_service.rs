//! Run execution and project editing service.

use std::path::Path;
use std::time::Instant;

use pf_hydraulics::{FluidClass, SystemResult, VelocityFinding, VelocityThresholds};
use pf_project::schema::{Project, SegmentDef};
use tracing::info;

use crate::error::AppResult;
use crate::project_service;
use crate::runtime_compile::{self, SystemRuntime};

/// Options for running a calculation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub thresholds: VelocityThresholds,
}

/// Outcome of one steady calculation with its velocity advisory.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub system_id: String,
    pub system_name: String,
    pub fluid_class: FluidClass,
    pub result: SystemResult,
    /// One finding per segment, in chain order
    pub findings: Vec<VelocityFinding>,
}

impl RunReport {
    /// Findings outside the recommended band.
    pub fn warnings(&self) -> impl Iterator<Item = &VelocityFinding> {
        self.findings.iter().filter(|f| f.is_warning())
    }
}

/// Compile and run one system of a loaded project with default options.
pub fn run_system(project: &Project, system_id: &str) -> AppResult<RunReport> {
    run_system_with(project, system_id, &RunOptions::default())
}

pub fn run_system_with(
    project: &Project,
    system_id: &str,
    options: &RunOptions,
) -> AppResult<RunReport> {
    let system = project_service::get_system(project, system_id)?;

    let compile_start = Instant::now();
    let runtime = runtime_compile::compile_system(system)?;
    let compile_time = compile_start.elapsed();

    let solve_start = Instant::now();
    let (result, findings) = run_runtime(&runtime, options)?;
    let solve_time = solve_start.elapsed();

    info!(
        system = system_id,
        segments = result.segments.len(),
        outlet_pressure_pa = result.outlet_pressure.value,
        warnings = findings.iter().filter(|f| f.is_warning()).count(),
        compile_us = compile_time.as_micros() as u64,
        solve_us = solve_time.as_micros() as u64,
        "run complete"
    );

    Ok(RunReport {
        system_id: system.id.clone(),
        system_name: system.name.clone(),
        fluid_class: runtime.fluid.class(),
        result,
        findings,
    })
}

/// Propagate a compiled system and check its velocities.
pub fn run_runtime(
    runtime: &SystemRuntime,
    options: &RunOptions,
) -> AppResult<(SystemResult, Vec<VelocityFinding>)> {
    let result = pf_hydraulics::propagate(
        &runtime.segments,
        runtime.flow,
        &runtime.fluid,
        runtime.inlet_pressure,
        &runtime.settings,
    )?;
    let findings = pf_hydraulics::check_velocities(
        &result.segments,
        runtime.fluid.class(),
        &options.thresholds,
    );
    Ok((result, findings))
}

/// Append a segment to a system in a project file and save it.
/// Returns the id the new segment received.
/// The incoming `segment.id` is ignored.
pub fn add_segment(
    project_path: &Path,
    system_id: &str,
    mut segment: SegmentDef,
) -> AppResult<u32> {
    let mut project = project_service::load_project(project_path)?;
    let system = project_service::get_system_mut(&mut project, system_id)?;

    segment.id = system.next_segment_id();
    // Reject names the calculation could not use before touching the file.
    runtime_compile::build_segment(&segment, system_id)?;

    let id = system.add_segment(segment);
    project_service::save_project(project_path, &project)?;

    info!(
        project = %project_path.display(),
        system = system_id,
        segment = id,
        "segment added"
    );
    Ok(id)
}

/// Remove the last segment of a system in a project file and save it.
pub fn remove_last_segment(project_path: &Path, system_id: &str) -> AppResult<SegmentDef> {
    let mut project = project_service::load_project(project_path)?;
    let removed = project_service::get_system_mut(&mut project, system_id)?.remove_last_segment()?;
    project_service::save_project(project_path, &project)?;

    info!(
        project = %project_path.display(),
        system = system_id,
        segment = removed.id,
        "segment removed"
    );
    Ok(removed)
}
