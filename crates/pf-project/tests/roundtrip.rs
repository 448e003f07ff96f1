use pf_project::schema::*;
use pf_project::{load_json, load_yaml, save_json, save_yaml, validate_project};

fn simple_system() -> SystemDef {
    SystemDef {
        id: "sys1".to_string(),
        name: "Simple System".to_string(),
        fluid: FluidDef {
            class: FluidClassDef::Water,
            density_kg_m3: 998.0,
            viscosity_pa_s: 0.001,
        },
        flow: FlowDef::VolumeRate { m3_per_s: 0.01 },
        inlet_pressure_pa: 300_000.0,
        gravity_mps2: Some(9.81),
        friction: Some(FrictionDef {
            correlation: Some("colebrook_white".to_string()),
            tolerance: Some(1e-9),
            max_iterations: Some(40),
        }),
        segments: vec![
            SegmentDef::default_pipe(1),
            SegmentDef {
                id: 2,
                material: "pvc".to_string(),
                diameter_m: 0.08,
                length_m: 35.0,
                elevation_change_m: -4.0,
                fittings: FittingsDef {
                    has_valve_gate: true,
                    has_curves: true,
                    n_curves: 2,
                    curve_geometry: Some("long_radius".to_string()),
                    ..FittingsDef::default()
                },
            },
        ],
    }
}

#[test]
fn roundtrip_yaml_empty_project() {
    let project = Project {
        version: 1,
        name: "Empty Project".to_string(),
        systems: vec![],
    };

    validate_project(&project).unwrap();

    let path = std::env::temp_dir().join("pf_project_roundtrip_empty.yaml");

    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn roundtrip_yaml_simple_system() {
    let project = Project {
        version: 1,
        name: "Test Project".to_string(),
        systems: vec![simple_system()],
    };

    let path = std::env::temp_dir().join("pf_project_roundtrip_simple.yaml");

    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn roundtrip_json_simple_system() {
    let mut system = simple_system();
    system.flow = FlowDef::InletVelocity { m_per_s: 1.1 };
    system.fluid.class = FluidClassDef::Other;
    let project = Project {
        version: 1,
        name: "JSON Project".to_string(),
        systems: vec![system],
    };

    let path = std::env::temp_dir().join("pf_project_roundtrip_simple.json");

    save_json(&path, &project).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn edited_project_roundtrips_in_order() {
    let mut project = Project {
        version: 1,
        name: "Edited".to_string(),
        systems: vec![simple_system()],
    };
    let system = &mut project.systems[0];
    system.add_segment(SegmentDef::default_pipe(0));
    system.add_segment(SegmentDef::default_pipe(0));
    system.remove_last_segment().unwrap();

    let path = std::env::temp_dir().join("pf_project_roundtrip_edited.yaml");
    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();

    let ids: Vec<u32> = loaded.systems[0].segments.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn invalid_project_is_not_saved() {
    let mut system = simple_system();
    system.segments.clear();
    let project = Project {
        version: 1,
        name: "Broken".to_string(),
        systems: vec![system],
    };

    let path = std::env::temp_dir().join("pf_project_roundtrip_invalid.yaml");
    let _ = std::fs::remove_file(&path);

    assert!(save_yaml(&path, &project).is_err());
    assert!(!path.exists());
}
