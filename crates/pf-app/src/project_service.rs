//! Project loading, saving, validation, and introspection.

use std::path::Path;

use pf_project::ProjectError;
use pf_project::schema::{Project, SystemDef};

use crate::error::{AppError, AppResult};

/// Summary of a system for listing.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemSummary {
    pub id: String,
    pub name: String,
    pub segment_count: usize,
    pub total_length_m: f64,
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Load a project file. `.json` files are read as JSON, anything else as YAML.
pub fn load_project(path: &Path) -> AppResult<Project> {
    let loaded = if is_json(path) {
        pf_project::load_json(path)
    } else {
        pf_project::load_yaml(path)
    };

    loaded.map_err(|err| match err {
        ProjectError::Io(e) => AppError::ProjectFileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        },
        other => other.into(),
    })
}

/// Save a project file in the format implied by its extension.
pub fn save_project(path: &Path, project: &Project) -> AppResult<()> {
    let saved = if is_json(path) {
        pf_project::save_json(path, project)
    } else {
        pf_project::save_yaml(path, project)
    };

    saved.map_err(|err| match err {
        ProjectError::Io(e) => AppError::ProjectFileWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        },
        other => other.into(),
    })
}

/// Validate project structure.
pub fn validate_project(project: &Project) -> AppResult<()> {
    pf_project::validate_project(project)?;
    Ok(())
}

/// List all systems in the project with summaries.
pub fn list_systems(project: &Project) -> Vec<SystemSummary> {
    project
        .systems
        .iter()
        .map(|system| SystemSummary {
            id: system.id.clone(),
            name: system.name.clone(),
            segment_count: system.segments.len(),
            total_length_m: system.segments.iter().map(|s| s.length_m).sum(),
        })
        .collect()
}

/// Get a system by ID.
pub fn get_system<'a>(project: &'a Project, system_id: &str) -> AppResult<&'a SystemDef> {
    project
        .systems
        .iter()
        .find(|s| s.id == system_id)
        .ok_or_else(|| AppError::SystemNotFound(system_id.to_string()))
}

/// Get a mutable system by ID.
pub fn get_system_mut<'a>(
    project: &'a mut Project,
    system_id: &str,
) -> AppResult<&'a mut SystemDef> {
    project
        .systems
        .iter_mut()
        .find(|s| s.id == system_id)
        .ok_or_else(|| AppError::SystemNotFound(system_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_project::schema::{FlowDef, FluidClassDef, FluidDef, SegmentDef};

    fn project() -> Project {
        let mut long = SegmentDef::default_pipe(2);
        long.length_m = 250.0;
        Project {
            version: 1,
            name: "Listing".to_string(),
            systems: vec![SystemDef {
                id: "main".to_string(),
                name: "Main line".to_string(),
                fluid: FluidDef {
                    class: FluidClassDef::Water,
                    density_kg_m3: 998.0,
                    viscosity_pa_s: 1e-3,
                },
                flow: FlowDef::VolumeRate { m3_per_s: 0.01 },
                inlet_pressure_pa: 300_000.0,
                gravity_mps2: None,
                friction: None,
                segments: vec![SegmentDef::default_pipe(1), long],
            }],
        }
    }

    #[test]
    fn summaries_count_segments_and_length() {
        let summaries = list_systems(&project());
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].segment_count, 2);
        assert!((summaries[0].total_length_m - 350.0).abs() < 1e-12);
    }

    #[test]
    fn unknown_system_is_reported() {
        let project = project();
        assert!(get_system(&project, "main").is_ok());
        assert!(matches!(
            get_system(&project, "nope"),
            Err(AppError::SystemNotFound(id)) if id == "nope"
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let path = std::env::temp_dir().join("pf_app_does_not_exist.yaml");
        let _ = std::fs::remove_file(&path);
        assert!(matches!(
            load_project(&path),
            Err(AppError::ProjectFileRead { .. })
        ));
    }

    #[test]
    fn extension_selects_format() {
        assert!(is_json(Path::new("a/b.JSON")));
        assert!(!is_json(Path::new("a/b.yaml")));
        assert!(!is_json(Path::new("a/b")));
    }
}
