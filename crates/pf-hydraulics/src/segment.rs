//! Pipe segment and its per-segment head loss calculation.

use crate::common::{check_finite, check_non_negative, check_positive, velocity_head};
use crate::error::HydraulicsResult;
use crate::fittings::{self, FittingConfig};
use crate::fluid::Fluid;
use crate::friction::{self, FlowRegime};
use crate::material::Material;
use crate::settings::CalcSettings;
use pf_core::SegmentId;
use pf_core::numeric::circle_area;
use pf_core::units::{Area, Length, Velocity, VolumeRate, m, m2, mps};

/// One straight run of the series chain with its fittings.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeSegment {
    pub id: SegmentId,
    pub material: Material,
    /// Internal diameter
    pub diameter: Length,
    pub length: Length,
    /// Outlet elevation minus inlet elevation; positive means the pipe rises
    pub elevation_change: Length,
    pub fittings: FittingConfig,
}

impl PipeSegment {
    /// Create a horizontal segment without fittings.
    pub fn new(id: SegmentId, material: Material, diameter: Length, length: Length) -> Self {
        Self {
            id,
            material,
            diameter,
            length,
            elevation_change: m(0.0),
            fittings: FittingConfig::none(),
        }
    }

    pub fn with_elevation_change(mut self, elevation_change: Length) -> Self {
        self.elevation_change = elevation_change;
        self
    }

    pub fn with_fittings(mut self, fittings: FittingConfig) -> Self {
        self.fittings = fittings;
        self
    }

    /// Flow cross-section. Fails if the diameter is not positive.
    pub fn area(&self) -> HydraulicsResult<Area> {
        let d = check_positive(self.diameter.value, "diameter")?;
        Ok(m2(circle_area(d)))
    }
}

/// Losses of one segment at a given flow rate. Head values are metres of fluid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentLosses {
    pub velocity: Velocity,
    pub reynolds: f64,
    pub regime: FlowRegime,
    pub friction_factor: f64,
    /// Sum of local loss coefficients
    pub k_total: f64,
    /// Darcy-Weisbach friction loss
    pub h_distributed: Length,
    /// Fittings, valves, curves and tees
    pub h_local: Length,
    /// Signed: rise is a loss, descent a gain
    pub h_elevation: Length,
    pub h_total: Length,
}

/// Compute the head losses of `segment` carrying `flow_rate`.
///
/// Domain errors: non-positive diameter, negative length or flow rate, zero
/// flow (Re = 0), invalid settings. A failed Colebrook-White iteration is
/// returned as a convergence error.
pub fn compute(
    segment: &PipeSegment,
    flow_rate: VolumeRate,
    fluid: &Fluid,
    settings: &CalcSettings,
) -> HydraulicsResult<SegmentLosses> {
    settings.validate()?;

    let d = check_positive(segment.diameter.value, "diameter")?;
    let length = check_non_negative(segment.length.value, "length")?;
    let elevation = check_finite(segment.elevation_change.value, "elevation change")?;
    let q = check_non_negative(flow_rate.value, "flow rate")?;
    let g = settings.gravity.value;

    let velocity = q / circle_area(d);
    let reynolds = fluid.density().value * velocity * d / fluid.viscosity().value;

    let roughness = settings.roughness.roughness(segment.material).value;
    let ff = friction::solve(reynolds, roughness, d, &settings.friction)?;

    let v_head = velocity_head(velocity, g);
    let h_distributed = ff.f * (length / d) * v_head;

    let k_total = fittings::aggregate(&segment.fittings, &settings.fittings);
    let h_local = k_total * v_head;

    let h_total = check_finite(h_distributed + h_local + elevation, "total head loss")?;

    Ok(SegmentLosses {
        velocity: mps(velocity),
        reynolds,
        regime: ff.regime,
        friction_factor: ff.f,
        k_total,
        h_distributed: m(h_distributed),
        h_local: m(h_local),
        h_elevation: m(elevation),
        h_total: m(h_total),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HydraulicsError;
    use crate::fittings::ValveKind;
    use crate::fluid::FluidClass;
    use pf_core::units::{kgpm3, m3ps, pas};

    fn water() -> Fluid {
        Fluid::new(kgpm3(998.0), pas(0.001), FluidClass::Water).unwrap()
    }

    fn steel_pipe(length: f64) -> PipeSegment {
        PipeSegment::new(SegmentId::FIRST, Material::CommercialSteel, m(0.1), m(length))
    }

    #[test]
    fn steel_water_pipe_100m() {
        let losses = compute(
            &steel_pipe(100.0),
            m3ps(0.01),
            &water(),
            &CalcSettings::default(),
        )
        .unwrap();

        assert!((losses.velocity.value - 1.273_239_544_735_163).abs() < 1e-9);
        assert!((losses.reynolds - 127_069.3).abs() < 1.0, "Re = {}", losses.reynolds);
        assert_eq!(losses.regime, FlowRegime::Turbulent);
        assert!(losses.h_distributed.value > 0.0);
        assert_eq!(losses.k_total, 0.0);
        assert_eq!(losses.h_local.value, 0.0);
        assert_eq!(
            losses.h_total.value,
            losses.h_distributed.value + losses.h_elevation.value
        );
    }

    #[test]
    fn velocity_is_flow_over_area() {
        let segment = PipeSegment::new(SegmentId::FIRST, Material::Pvc, m(0.05), m(10.0));
        let q = 0.002;
        let losses = compute(&segment, m3ps(q), &water(), &CalcSettings::default()).unwrap();
        let expected = q / (std::f64::consts::PI * 0.025 * 0.025);
        assert!(((losses.velocity.value - expected) / expected).abs() < 1e-9);
    }

    #[test]
    fn local_loss_uses_velocity_head() {
        let segment = steel_pipe(10.0).with_fittings(
            FittingConfig::none()
                .with_valve(ValveKind::Gate)
                .with_valve(ValveKind::Globe),
        );
        let settings = CalcSettings::default();
        let losses = compute(&segment, m3ps(0.01), &water(), &settings).unwrap();

        assert!((losses.k_total - 10.2).abs() < 1e-12);
        let v = losses.velocity.value;
        let expected = 10.2 * v * v / (2.0 * settings.gravity.value);
        assert!((losses.h_local.value - expected).abs() < 1e-12);
    }

    #[test]
    fn elevation_is_signed() {
        let settings = CalcSettings::default();
        let up = compute(
            &steel_pipe(0.0).with_elevation_change(m(5.0)),
            m3ps(0.01),
            &water(),
            &settings,
        )
        .unwrap();
        let down = compute(
            &steel_pipe(0.0).with_elevation_change(m(-5.0)),
            m3ps(0.01),
            &water(),
            &settings,
        )
        .unwrap();

        assert_eq!(up.h_distributed.value, 0.0);
        assert_eq!(up.h_total.value, 5.0);
        assert_eq!(down.h_total.value, -5.0);
    }

    #[test]
    fn longer_pipe_loses_more() {
        let settings = CalcSettings::default();
        let short = compute(&steel_pipe(50.0), m3ps(0.01), &water(), &settings).unwrap();
        let long = compute(&steel_pipe(51.0), m3ps(0.01), &water(), &settings).unwrap();
        assert!(long.h_distributed.value > short.h_distributed.value);
    }

    #[test]
    fn domain_errors() {
        let settings = CalcSettings::default();
        let zero_d = PipeSegment::new(SegmentId::FIRST, Material::Pvc, m(0.0), m(1.0));
        assert_eq!(
            compute(&zero_d, m3ps(0.01), &water(), &settings),
            Err(HydraulicsError::Domain { what: "diameter" })
        );
        assert_eq!(
            compute(&steel_pipe(1.0), m3ps(-0.01), &water(), &settings),
            Err(HydraulicsError::Domain { what: "flow rate" })
        );
        assert!(matches!(
            compute(&steel_pipe(1.0), m3ps(0.0), &water(), &settings),
            Err(HydraulicsError::Domain { .. })
        ));
        assert_eq!(
            compute(&steel_pipe(-1.0), m3ps(0.01), &water(), &settings),
            Err(HydraulicsError::Domain { what: "length" })
        );
    }

    #[test]
    fn area_requires_positive_diameter() {
        assert!(steel_pipe(1.0).area().is_ok());
        let bad = PipeSegment::new(SegmentId::FIRST, Material::Pvc, m(-0.1), m(1.0));
        assert!(bad.area().is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use pf_core::units::m3ps;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn distributed_loss_increases_with_length(
            length in 0.0_f64..5_000.0,
            extra in 0.1_f64..1_000.0,
            q in 1e-4_f64..0.1,
        ) {
            let fluid = Fluid::water_20c();
            let settings = CalcSettings::default();
            let base = PipeSegment::new(SegmentId::FIRST, Material::CastIron, m(0.15), m(length));
            let longer = PipeSegment { length: m(length + extra), ..base.clone() };

            let a = compute(&base, m3ps(q), &fluid, &settings).unwrap();
            let b = compute(&longer, m3ps(q), &fluid, &settings).unwrap();
            prop_assert!(b.h_distributed.value > a.h_distributed.value);
        }
    }
}
