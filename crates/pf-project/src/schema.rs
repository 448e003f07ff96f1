//! Project schema definitions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub systems: Vec<SystemDef>,
}

/// One series pipe chain with its fluid, flow and inlet condition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemDef {
    pub id: String,
    pub name: String,
    pub fluid: FluidDef,
    pub flow: FlowDef,
    pub inlet_pressure_pa: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gravity_mps2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friction: Option<FrictionDef>,
    /// Segments in flow order
    #[serde(default)]
    pub segments: Vec<SegmentDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FluidDef {
    #[serde(default)]
    pub class: FluidClassDef,
    pub density_kg_m3: f64,
    pub viscosity_pa_s: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FluidClassDef {
    #[default]
    Water,
    Air,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum FlowDef {
    VolumeRate { m3_per_s: f64 },
    InletVelocity { m_per_s: f64 },
}

/// Friction solver overrides; unset fields keep the solver defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FrictionDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SegmentDef {
    pub id: u32,
    pub material: String,
    pub diameter_m: f64,
    pub length_m: f64,
    #[serde(default)]
    pub elevation_change_m: f64,
    #[serde(default)]
    pub fittings: FittingsDef,
}

impl SegmentDef {
    pub const DEFAULT_MATERIAL: &'static str = "commercial_steel";
    pub const DEFAULT_DIAMETER_M: f64 = 0.1;
    pub const DEFAULT_LENGTH_M: f64 = 100.0;

    /// Horizontal 100 m commercial steel pipe of 0.1 m bore without fittings.
    pub fn default_pipe(id: u32) -> Self {
        Self {
            id,
            material: Self::DEFAULT_MATERIAL.to_string(),
            diameter_m: Self::DEFAULT_DIAMETER_M,
            length_m: Self::DEFAULT_LENGTH_M,
            elevation_change_m: 0.0,
            fittings: FittingsDef::default(),
        }
    }
}

/// Fittings as edited by a user: every count is gated by its `has_*` flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct FittingsDef {
    pub has_contraction: bool,
    pub has_expansion: bool,
    pub has_curves: bool,
    pub n_curves: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve_geometry: Option<String>,
    pub has_valve_gate: bool,
    pub has_valve_globe: bool,
    pub has_valve_ball: bool,
    pub has_valve_check: bool,
    pub has_tee_through: bool,
    pub n_tee_through: u32,
    pub has_tee_branch: bool,
    pub n_tee_branch: u32,
}

impl FittingsDef {
    /// Curves that actually count, i.e. zero unless `has_curves`.
    pub fn effective_curves(&self) -> u32 {
        if self.has_curves { self.n_curves } else { 0 }
    }

    pub fn effective_tees_through(&self) -> u32 {
        if self.has_tee_through {
            self.n_tee_through
        } else {
            0
        }
    }

    pub fn effective_tees_branch(&self) -> u32 {
        if self.has_tee_branch {
            self.n_tee_branch
        } else {
            0
        }
    }
}
