//! Explicit calculation settings: gravity, lookup tables and solver budget.

use crate::common::check_positive;
use crate::error::HydraulicsResult;
use crate::fittings::FittingTable;
use crate::friction::FrictionConfig;
use crate::material::RoughnessTable;
use pf_core::units::{Accel, constants};

/// Everything a loss calculation reads besides the segment and the fluid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalcSettings {
    /// Gravitational acceleration
    pub gravity: Accel,
    pub roughness: RoughnessTable,
    pub fittings: FittingTable,
    pub friction: FrictionConfig,
}

impl Default for CalcSettings {
    fn default() -> Self {
        Self {
            gravity: constants::g0(),
            roughness: RoughnessTable::default(),
            fittings: FittingTable::default(),
            friction: FrictionConfig::default(),
        }
    }
}

impl CalcSettings {
    pub fn with_gravity(mut self, gravity: Accel) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_friction(mut self, friction: FrictionConfig) -> Self {
        self.friction = friction;
        self
    }

    pub fn validate(&self) -> HydraulicsResult<()> {
        check_positive(self.gravity.value, "gravity")?;
        self.roughness.validate()?;
        self.fittings.validate()?;
        self.friction.validate()
    }
}
