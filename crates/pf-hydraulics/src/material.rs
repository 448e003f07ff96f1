//! Pipe materials and their absolute wall roughness.

use crate::common::check_non_negative;
use crate::error::{HydraulicsError, HydraulicsResult};
use core::fmt;
use core::str::FromStr;
use pf_core::units::{Length, m};

/// Pipe wall material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Material {
    #[default]
    CommercialSteel,
    GalvanizedSteel,
    StainlessSteel,
    CastIron,
    Concrete,
    Pvc,
    Hdpe,
    Copper,
}

impl Material {
    pub const ALL: [Material; 8] = [
        Material::CommercialSteel,
        Material::GalvanizedSteel,
        Material::StainlessSteel,
        Material::CastIron,
        Material::Concrete,
        Material::Pvc,
        Material::Hdpe,
        Material::Copper,
    ];

    pub const COUNT: usize = Self::ALL.len();

    fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Material::CommercialSteel => "commercial_steel",
            Material::GalvanizedSteel => "galvanized_steel",
            Material::StainlessSteel => "stainless_steel",
            Material::CastIron => "cast_iron",
            Material::Concrete => "concrete",
            Material::Pvc => "pvc",
            Material::Hdpe => "hdpe",
            Material::Copper => "copper",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Material {
    type Err = HydraulicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match key.as_str() {
            "steel" => return Ok(Material::CommercialSteel),
            "galvanized_iron" => return Ok(Material::GalvanizedSteel),
            _ => {}
        }
        Material::ALL
            .into_iter()
            .find(|material| material.as_str() == key)
            .ok_or(HydraulicsError::Domain {
                what: "unknown pipe material",
            })
    }
}

/// Absolute roughness per material (m).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoughnessTable {
    values: [f64; Material::COUNT],
}

impl Default for RoughnessTable {
    fn default() -> Self {
        let mut values = [0.0; Material::COUNT];
        for material in Material::ALL {
            values[material.index()] = match material {
                Material::CommercialSteel => 4.5e-5,
                Material::GalvanizedSteel => 1.5e-4,
                Material::StainlessSteel => 1.5e-5,
                Material::CastIron => 2.6e-4,
                Material::Concrete => 1.0e-3,
                Material::Pvc => 1.5e-6,
                Material::Hdpe => 7.0e-6,
                Material::Copper => 1.5e-6,
            };
        }
        Self { values }
    }
}

impl RoughnessTable {
    pub fn roughness(&self, material: Material) -> Length {
        m(self.values[material.index()])
    }

    /// Replace one entry, e.g. for aged or lined pipe.
    pub fn with_roughness(mut self, material: Material, roughness: Length) -> Self {
        self.values[material.index()] = roughness.value;
        self
    }

    pub fn validate(&self) -> HydraulicsResult<()> {
        for v in self.values {
            check_non_negative(v, "roughness")?;
        }
        Ok(())
    }
}
