//! kraftlog command-line interface
//!
//! Imports exercises from the plain text of an exercise table into a catalog snapshot.

mod report;

use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use kraftlog_domain::{ExerciseService, ImportService, MuscleService, Service};
use kraftlog_storage::{json_file, muscle_groups};
use log::{LevelFilter, error, info};

use crate::report::Report;

#[derive(Parser)]
#[command(name = "kraftlog")]
#[command(about = "Maintain the kraftlog exercise catalog", long_about = None)]
struct Cli {
    /// Catalog snapshot file
    #[arg(long, global = true, env = "KRAFTLOG_CATALOG_PATH", default_value = "catalog.json")]
    catalog: PathBuf,

    /// Log debug messages
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import exercises from text extracted from an exercise table
    Import {
        /// Text file containing the extracted table
        file: PathBuf,

        /// YAML file mapping section headers to muscle groups
        #[arg(long, env = muscle_groups::CONFIG_PATH_ENV)]
        muscle_groups: Option<PathBuf>,

        /// Report the import without storing the catalog
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// List the exercises in the catalog
    Exercises,

    /// List the muscles in the catalog
    Muscles,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logger(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logger(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Import {
            file,
            muscle_groups,
            dry_run,
        } => run_import(&cli.catalog, &file, muscle_groups.as_deref(), dry_run),
        Commands::Exercises => run_exercises(&cli.catalog),
        Commands::Muscles => run_muscles(&cli.catalog),
    }
}

fn run_import(
    catalog_path: &Path,
    file: &Path,
    muscle_groups_path: Option<&Path>,
    dry_run: bool,
) -> anyhow::Result<ExitCode> {
    info!("importing exercises from {}", file.display());

    let text = fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    if let Err(report) = report::check_input(&text) {
        print_report(&report)?;
        return Ok(ExitCode::FAILURE);
    }

    let dictionary = Arc::new(muscle_groups::load(muscle_groups_path));
    let catalog = json_file::load(catalog_path)
        .with_context(|| format!("failed to load catalog {}", catalog_path.display()))?;

    let seeded = catalog.seed_default_muscles()?;
    if seeded > 0 {
        info!("initialized catalog with {seeded} muscles");
    }

    let service = Service::new(catalog, dictionary);

    match service.import_exercises(&text) {
        Ok(result) => {
            if dry_run {
                info!("dry run, catalog not stored");
            } else {
                json_file::store(catalog_path, service.repository()).with_context(|| {
                    format!("failed to store catalog {}", catalog_path.display())
                })?;
            }
            print_report(&Report::from(&result))?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            print_report(&Report::error(err.to_string()))?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run_exercises(catalog_path: &Path) -> anyhow::Result<ExitCode> {
    let catalog = json_file::load(catalog_path)
        .with_context(|| format!("failed to load catalog {}", catalog_path.display()))?;
    let service = Service::new(catalog, Arc::default());

    for exercise in service.get_exercises()? {
        println!("{}", report::exercise_line(&exercise));
    }

    Ok(ExitCode::SUCCESS)
}

fn run_muscles(catalog_path: &Path) -> anyhow::Result<ExitCode> {
    let catalog = json_file::load(catalog_path)
        .with_context(|| format!("failed to load catalog {}", catalog_path.display()))?;
    catalog.seed_default_muscles()?;
    let service = Service::new(catalog, Arc::default());

    for muscle in service.get_muscles()? {
        println!("{}", report::muscle_line(&muscle));
    }

    Ok(ExitCode::SUCCESS)
}

fn print_report(report: &Report) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
