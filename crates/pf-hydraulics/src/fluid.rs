//! Single-phase fluid properties supplied by the caller.

use crate::common::check_positive;
use crate::error::{HydraulicsError, HydraulicsResult};
use core::fmt;
use core::str::FromStr;
use pf_core::units::{Density, DynVisc, kgpm3, pas};

/// Fluid family. Only used to pick velocity advisory thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FluidClass {
    #[default]
    Water,
    Air,
    Other,
}

impl FluidClass {
    pub fn as_str(self) -> &'static str {
        match self {
            FluidClass::Water => "water",
            FluidClass::Air => "air",
            FluidClass::Other => "other",
        }
    }
}

impl fmt::Display for FluidClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FluidClass {
    type Err = HydraulicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "water" => Ok(FluidClass::Water),
            "air" => Ok(FluidClass::Air),
            "other" => Ok(FluidClass::Other),
            _ => Err(HydraulicsError::Domain {
                what: "unknown fluid class",
            }),
        }
    }
}

/// Incompressible fluid with constant density and viscosity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fluid {
    density: Density,
    viscosity: DynVisc,
    class: FluidClass,
}

impl Fluid {
    /// Create a fluid; density and dynamic viscosity must be finite and > 0.
    pub fn new(density: Density, viscosity: DynVisc, class: FluidClass) -> HydraulicsResult<Self> {
        check_positive(density.value, "density")?;
        check_positive(viscosity.value, "viscosity")?;
        Ok(Self {
            density,
            viscosity,
            class,
        })
    }

    /// Water at 20 C.
    pub fn water_20c() -> Self {
        Self {
            density: kgpm3(998.2),
            viscosity: pas(1.002e-3),
            class: FluidClass::Water,
        }
    }

    /// Dry air at 20 C and 1 atm.
    pub fn air_20c() -> Self {
        Self {
            density: kgpm3(1.204),
            viscosity: pas(1.825e-5),
            class: FluidClass::Air,
        }
    }

    pub fn density(&self) -> Density {
        self.density
    }

    pub fn viscosity(&self) -> DynVisc {
        self.viscosity
    }

    pub fn class(&self) -> FluidClass {
        self.class
    }

    /// Kinematic viscosity nu = mu / rho (m^2/s).
    pub fn kinematic_viscosity(&self) -> f64 {
        self.viscosity.value / self.density.value
    }
}
