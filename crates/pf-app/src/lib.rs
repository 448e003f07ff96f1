//! Shared application service layer for pipeflow.
//!
//! Centralizes project management, runtime compilation, calculation runs,
//! and result querying so the CLI stays a thin presentation layer.

pub mod error;
pub mod project_service;
pub mod query;
pub mod run_service;
pub mod runtime_compile;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use project_service::{
    SystemSummary, get_system, get_system_mut, list_systems, load_project, save_project,
    validate_project,
};
pub use query::{
    RunSummary, SegmentRow, get_run_summary, largest_drop, pressure_series, segment_rows,
};
pub use run_service::{
    RunOptions, RunReport, add_segment, remove_last_segment, run_runtime, run_system,
    run_system_with,
};
pub use runtime_compile::{
    SystemRuntime, build_fluid, build_segment, build_settings, compile_system,
};
