use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use pf_app::{AppResult, project_service, run_service};
use pf_project::schema::{FittingsDef, SegmentDef};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod report;

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "PipeFlow CLI - Pressure loss along series pipe chains", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). Overrides RUST_LOG.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file syntax and structure
    Validate {
        /// Path to the project file (YAML, or JSON by extension)
        project_path: PathBuf,
    },
    /// List systems in a project
    Systems {
        /// Path to the project file
        project_path: PathBuf,
    },
    /// Compute pressure losses along a system
    Run {
        /// Path to the project file
        project_path: PathBuf,
        /// System ID to compute
        system_id: String,
        /// Print the report as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Append a segment at the outlet end of a system
    AddSegment {
        /// Path to the project file
        project_path: PathBuf,
        /// System ID to edit
        system_id: String,
        #[command(flatten)]
        segment: SegmentArgs,
    },
    /// Remove the last segment of a system
    RemoveSegment {
        /// Path to the project file
        project_path: PathBuf,
        /// System ID to edit
        system_id: String,
    },
}

/// Geometry and fittings of a new segment. Its id is assigned on insert.
#[derive(Args, Debug)]
struct SegmentArgs {
    #[arg(long, default_value = SegmentDef::DEFAULT_MATERIAL)]
    material: String,
    /// Internal diameter in m
    #[arg(long, default_value_t = SegmentDef::DEFAULT_DIAMETER_M)]
    diameter: f64,
    /// Length in m
    #[arg(long, default_value_t = SegmentDef::DEFAULT_LENGTH_M)]
    length: f64,
    /// Outlet minus inlet elevation in m
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    elevation: f64,
    /// Sudden contraction at the segment inlet
    #[arg(long)]
    contraction: bool,
    /// Sudden expansion at the segment outlet
    #[arg(long)]
    expansion: bool,
    /// Number of curves
    #[arg(long, default_value_t = 0)]
    curves: u32,
    /// Curve geometry (long_radius, medium_radius, standard)
    #[arg(long)]
    curve_geometry: Option<String>,
    /// Valve to include; may be repeated
    #[arg(long = "valve", value_enum)]
    valves: Vec<ValveArg>,
    /// Number of tees passed straight through
    #[arg(long, default_value_t = 0)]
    tees_through: u32,
    /// Number of tees entered or left through the branch
    #[arg(long, default_value_t = 0)]
    tees_branch: u32,
}

impl SegmentArgs {
    fn into_segment_def(self) -> SegmentDef {
        let mut fittings = FittingsDef {
            has_contraction: self.contraction,
            has_expansion: self.expansion,
            has_curves: self.curves > 0,
            n_curves: self.curves,
            curve_geometry: self.curve_geometry,
            has_tee_through: self.tees_through > 0,
            n_tee_through: self.tees_through,
            has_tee_branch: self.tees_branch > 0,
            n_tee_branch: self.tees_branch,
            ..FittingsDef::default()
        };
        for valve in self.valves {
            match valve {
                ValveArg::Gate => fittings.has_valve_gate = true,
                ValveArg::Globe => fittings.has_valve_globe = true,
                ValveArg::Ball => fittings.has_valve_ball = true,
                ValveArg::Check => fittings.has_valve_check = true,
            }
        }
        SegmentDef {
            id: 0,
            material: self.material,
            diameter_m: self.diameter,
            length_m: self.length,
            elevation_change_m: self.elevation,
            fittings,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ValveArg {
    Gate,
    Globe,
    Ball,
    Check,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Systems { project_path } => cmd_systems(&project_path),
        Commands::Run {
            project_path,
            system_id,
            json,
        } => cmd_run(&project_path, &system_id, json),
        Commands::AddSegment {
            project_path,
            system_id,
            segment,
        } => cmd_add_segment(&project_path, &system_id, segment.into_segment_def()),
        Commands::RemoveSegment {
            project_path,
            system_id,
        } => cmd_remove_segment(&project_path, &system_id),
    }
}

fn cmd_validate(project_path: &Path) -> AppResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = project_service::load_project(project_path)?;
    project_service::validate_project(&project)?;
    for system in &project.systems {
        pf_app::compile_system(system)?;
    }
    println!("✓ Project is valid");
    Ok(())
}

fn cmd_systems(project_path: &Path) -> AppResult<()> {
    let project = project_service::load_project(project_path)?;
    let systems = project_service::list_systems(&project);

    if systems.is_empty() {
        println!("No systems found in project");
    } else {
        println!("Systems in project:");
        for sys in systems {
            println!(
                "  {} - {} ({} segments, {:.1} m)",
                sys.id, sys.name, sys.segment_count, sys.total_length_m
            );
        }
    }
    Ok(())
}

fn cmd_run(project_path: &Path, system_id: &str, json: bool) -> AppResult<()> {
    let project = project_service::load_project(project_path)?;
    let report = run_service::run_system(&project, system_id)?;

    if json {
        let text = serde_json::to_string_pretty(&report::JsonReport::from_report(&report))
            .map_err(|e| pf_app::AppError::Output(e.to_string()))?;
        println!("{text}");
    } else {
        report::print_report(&report);
    }
    Ok(())
}

fn cmd_add_segment(project_path: &Path, system_id: &str, segment: SegmentDef) -> AppResult<()> {
    let id = run_service::add_segment(project_path, system_id, segment)?;
    println!("✓ Added segment {id} to system '{system_id}'");
    Ok(())
}

fn cmd_remove_segment(project_path: &Path, system_id: &str) -> AppResult<()> {
    let removed = run_service::remove_last_segment(project_path, system_id)?;
    println!("✓ Removed segment {} from system '{system_id}'", removed.id);
    Ok(())
}
