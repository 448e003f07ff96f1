//! pf-hydraulics: steady, incompressible head loss along a series pipe chain.
//!
//! Building blocks, leaf first:
//! - `friction`: Darcy friction factor and flow regime from Reynolds number
//! - `fittings`: local loss coefficient (K) aggregation
//! - `segment`: velocity, Reynolds and head losses of one segment
//! - `chain`: pressure propagation from inlet to outlet of the chain
//! - `advisory`: velocity checks against recommended bands
//!
//! Every function is a pure function of its inputs. Lookup tables, gravity and
//! the friction iteration budget travel in an explicit [`CalcSettings`].
//!
//! # Example
//!
//! ```
//! use pf_core::SegmentId;
//! use pf_core::units::{m, m3ps, pa};
//! use pf_hydraulics::{CalcSettings, FlowSpec, Fluid, Material, PipeSegment, propagate};
//!
//! let segments = vec![
//!     PipeSegment::new(SegmentId::FIRST, Material::CommercialSteel, m(0.1), m(100.0)),
//! ];
//!
//! let result = propagate(
//!     &segments,
//!     FlowSpec::VolumeRate(m3ps(0.01)),
//!     &Fluid::water_20c(),
//!     pa(300_000.0),
//!     &CalcSettings::default(),
//! )
//! .unwrap();
//!
//! println!("Outlet pressure: {} Pa", result.outlet_pressure.value);
//! ```

pub mod advisory;
pub mod chain;
pub mod common;
pub mod error;
pub mod fittings;
pub mod fluid;
pub mod friction;
pub mod material;
pub mod segment;
pub mod settings;

// Re-exports
pub use advisory::{
    VelocityBand, VelocityFinding, VelocityStatus, VelocityThresholds, check_velocities,
};
pub use chain::{FlowSpec, ProfilePoint, SegmentResult, SystemResult, propagate};
pub use error::{HydraulicsError, HydraulicsResult};
pub use fittings::{CurveGeometry, FittingConfig, FittingTable, ValveKind};
pub use fluid::{Fluid, FluidClass};
pub use friction::{FlowRegime, FrictionConfig, FrictionFactor, TurbulentCorrelation};
pub use material::{Material, RoughnessTable};
pub use segment::{PipeSegment, SegmentLosses};
pub use settings::CalcSettings;
