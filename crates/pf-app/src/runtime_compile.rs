//! Runtime compilation of SystemDef into calculation inputs.

use pf_core::SegmentId;
use pf_core::units::{Pressure, kgpm3, m, m3ps, mps, mps2, pa, pas};
use pf_hydraulics::{
    CalcSettings, CurveGeometry, FittingConfig, FlowSpec, Fluid, FluidClass, FrictionConfig,
    Material, PipeSegment, TurbulentCorrelation, ValveKind,
};
use pf_project::schema::{
    FittingsDef, FlowDef, FluidClassDef, FluidDef, FrictionDef, SegmentDef, SystemDef,
};

use crate::error::{AppError, AppResult};

/// Runtime representation of a compiled system.
#[derive(Debug, Clone)]
pub struct SystemRuntime {
    /// Segments in flow order
    pub segments: Vec<PipeSegment>,
    pub fluid: Fluid,
    pub flow: FlowSpec,
    pub inlet_pressure: Pressure,
    pub settings: CalcSettings,
}

/// Compile a system definition into runtime structures.
pub fn compile_system(system: &SystemDef) -> AppResult<SystemRuntime> {
    let segments = system
        .segments
        .iter()
        .map(|def| build_segment(def, &system.id))
        .collect::<AppResult<Vec<_>>>()?;

    Ok(SystemRuntime {
        segments,
        fluid: build_fluid(&system.fluid)?,
        flow: build_flow(&system.flow),
        inlet_pressure: pa(system.inlet_pressure_pa),
        settings: build_settings(system)?,
    })
}

/// Build one pipe segment. Material and curve names are parsed here.
pub fn build_segment(def: &SegmentDef, system_id: &str) -> AppResult<PipeSegment> {
    let id = SegmentId::new(def.id).ok_or_else(|| {
        AppError::Compile(format!("{system_id}: segment id must be at least 1"))
    })?;

    let material: Material = def.material.parse().map_err(|_| {
        AppError::Compile(format!(
            "{system_id}.segments[{}].material: unknown material '{}'",
            def.id, def.material
        ))
    })?;

    let fittings = build_fittings(&def.fittings).map_err(|what| {
        AppError::Compile(format!("{system_id}.segments[{}].fittings: {what}", def.id))
    })?;

    Ok(
        PipeSegment::new(id, material, m(def.diameter_m), m(def.length_m))
            .with_elevation_change(m(def.elevation_change_m))
            .with_fittings(fittings),
    )
}

fn build_fittings(def: &FittingsDef) -> Result<FittingConfig, String> {
    let geometry = match def.curve_geometry.as_deref() {
        Some(name) => name
            .parse::<CurveGeometry>()
            .map_err(|_| format!("unknown curve geometry '{name}'"))?,
        None => CurveGeometry::default(),
    };

    let mut config = FittingConfig::none()
        .with_curves(def.effective_curves(), geometry)
        .with_tees_through(def.effective_tees_through())
        .with_tees_branch(def.effective_tees_branch());

    if def.has_contraction {
        config = config.with_contraction();
    }
    if def.has_expansion {
        config = config.with_expansion();
    }

    let valves = [
        (def.has_valve_gate, ValveKind::Gate),
        (def.has_valve_globe, ValveKind::Globe),
        (def.has_valve_ball, ValveKind::Ball),
        (def.has_valve_check, ValveKind::Check),
    ];
    for (present, kind) in valves {
        if present {
            config = config.with_valve(kind);
        }
    }

    Ok(config)
}

/// Build the fluid model from its project definition.
pub fn build_fluid(def: &FluidDef) -> AppResult<Fluid> {
    let class = match def.class {
        FluidClassDef::Water => FluidClass::Water,
        FluidClassDef::Air => FluidClass::Air,
        FluidClassDef::Other => FluidClass::Other,
    };
    Ok(Fluid::new(
        kgpm3(def.density_kg_m3),
        pas(def.viscosity_pa_s),
        class,
    )?)
}

fn build_flow(def: &FlowDef) -> FlowSpec {
    match *def {
        FlowDef::VolumeRate { m3_per_s } => FlowSpec::VolumeRate(m3ps(m3_per_s)),
        FlowDef::InletVelocity { m_per_s } => FlowSpec::InletVelocity(mps(m_per_s)),
    }
}

/// Calculation settings: default tables with the system's gravity and
/// friction overrides applied.
pub fn build_settings(system: &SystemDef) -> AppResult<CalcSettings> {
    let mut settings = CalcSettings::default();
    if let Some(g) = system.gravity_mps2 {
        settings = settings.with_gravity(mps2(g));
    }
    if let Some(friction) = &system.friction {
        settings = settings.with_friction(build_friction(friction, &system.id)?);
    }
    settings.validate()?;
    Ok(settings)
}

fn build_friction(def: &FrictionDef, system_id: &str) -> AppResult<FrictionConfig> {
    let mut config = FrictionConfig::default();
    if let Some(name) = &def.correlation {
        config.correlation = name.parse::<TurbulentCorrelation>().map_err(|_| {
            AppError::Compile(format!(
                "{system_id}.friction.correlation: unknown correlation '{name}'"
            ))
        })?;
    }
    if let Some(tolerance) = def.tolerance {
        config.tolerance = tolerance;
    }
    if let Some(max_iterations) = def.max_iterations {
        config.max_iterations = max_iterations;
    }
    Ok(config)
}
