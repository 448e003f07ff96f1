//! Error types for the pf-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and gives the CLI a single error to report.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Failed to load project file: {path}: {message}")]
    ProjectFileRead { path: PathBuf, message: String },

    #[error("Failed to write project file: {path}: {message}")]
    ProjectFileWrite { path: PathBuf, message: String },

    #[error("Project validation failed: {0}")]
    Validation(String),

    #[error("System not found: {0}")]
    SystemNotFound(String),

    #[error("Runtime compilation failed: {0}")]
    Compile(String),

    #[error("Calculation failed: {0}")]
    Calculation(#[from] pf_hydraulics::HydraulicsError),

    #[error("Failed to write output: {0}")]
    Output(String),
}

/// Result type for pf-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<pf_project::ProjectError> for AppError {
    fn from(err: pf_project::ProjectError) -> Self {
        match err {
            pf_project::ProjectError::Validation(e) => AppError::Validation(e.to_string()),
            other => AppError::Project(other.to_string()),
        }
    }
}

impl From<pf_project::ValidationError> for AppError {
    fn from(err: pf_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}
