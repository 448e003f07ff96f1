//! Project validation logic.

use crate::schema::{FlowDef, FluidDef, FrictionDef, Project, SegmentDef, SystemDef};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("System '{system}' has no pipe segments")]
    EmptyChain { system: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    let mut system_ids = HashSet::new();
    for system in &project.systems {
        if !system_ids.insert(&system.id) {
            return Err(ValidationError::DuplicateId {
                id: system.id.clone(),
                context: "systems".to_string(),
            });
        }
        validate_system(system)?;
    }

    Ok(())
}

pub fn validate_system(system: &SystemDef) -> Result<(), ValidationError> {
    validate_fluid(&system.fluid, &system.id)?;
    validate_flow(&system.flow, &system.id)?;

    if !system.inlet_pressure_pa.is_finite() {
        return Err(invalid(
            format!("{}.inlet_pressure_pa", system.id),
            system.inlet_pressure_pa,
            "must be finite",
        ));
    }

    if let Some(g) = system.gravity_mps2 {
        require_positive(g, format!("{}.gravity_mps2", system.id))?;
    }

    if let Some(friction) = &system.friction {
        validate_friction(friction, &system.id)?;
    }

    if system.segments.is_empty() {
        return Err(ValidationError::EmptyChain {
            system: system.id.clone(),
        });
    }

    let mut segment_ids = HashSet::new();
    for segment in &system.segments {
        if !segment_ids.insert(segment.id) {
            return Err(ValidationError::DuplicateId {
                id: segment.id.to_string(),
                context: format!("system '{}' segments", system.id),
            });
        }
        validate_segment(segment, &system.id)?;
    }

    Ok(())
}

fn validate_fluid(fluid: &FluidDef, system_id: &str) -> Result<(), ValidationError> {
    require_positive(fluid.density_kg_m3, format!("{system_id}.fluid.density_kg_m3"))?;
    require_positive(
        fluid.viscosity_pa_s,
        format!("{system_id}.fluid.viscosity_pa_s"),
    )?;
    Ok(())
}

fn validate_flow(flow: &FlowDef, system_id: &str) -> Result<(), ValidationError> {
    let (field, value) = match flow {
        FlowDef::VolumeRate { m3_per_s } => ("flow.m3_per_s", *m3_per_s),
        FlowDef::InletVelocity { m_per_s } => ("flow.m_per_s", *m_per_s),
    };
    if !(value.is_finite() && value >= 0.0) {
        return Err(invalid(
            format!("{system_id}.{field}"),
            value,
            "must be finite and non-negative",
        ));
    }
    Ok(())
}

fn validate_friction(friction: &FrictionDef, system_id: &str) -> Result<(), ValidationError> {
    if let Some(tol) = friction.tolerance {
        require_positive(tol, format!("{system_id}.friction.tolerance"))?;
    }
    if friction.max_iterations == Some(0) {
        return Err(ValidationError::InvalidValue {
            field: format!("{system_id}.friction.max_iterations"),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(())
}

fn validate_segment(segment: &SegmentDef, system_id: &str) -> Result<(), ValidationError> {
    let prefix = format!("{system_id}.segments[{}]", segment.id);

    if segment.id == 0 {
        return Err(ValidationError::InvalidValue {
            field: format!("{prefix}.id"),
            value: "0".to_string(),
            reason: "segment ids start at 1".to_string(),
        });
    }
    if segment.material.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: format!("{prefix}.material"),
            value: String::new(),
            reason: "material is required".to_string(),
        });
    }

    require_positive(segment.diameter_m, format!("{prefix}.diameter_m"))?;

    if !(segment.length_m.is_finite() && segment.length_m >= 0.0) {
        return Err(invalid(
            format!("{prefix}.length_m"),
            segment.length_m,
            "must be finite and non-negative",
        ));
    }
    if !segment.elevation_change_m.is_finite() {
        return Err(invalid(
            format!("{prefix}.elevation_change_m"),
            segment.elevation_change_m,
            "must be finite",
        ));
    }

    Ok(())
}

fn require_positive(value: f64, field: String) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be finite and positive"))
    }
}

fn invalid(field: String, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
