mod commands;
mod logging;
mod progress;

use std::process;

use clap::{CommandFactory, Parser};
use colored::*;
use commands::{Cli, Commands};
use dotenv::dotenv;
use progress::CliReporter;
use tape_audit_core::{AuditEngine, FolderType};
use tracing::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let _guard = logging::init_logger();

    let config = match tape_audit_core::config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };

    let args = Cli::parse();

    match args.command {
        Some(Commands::Audit) => {
            if let Err(err) = run_audit(&config) {
                error!("Error: {}", err);
                process::exit(1);
            }
        }
        Some(Commands::Scan) => {
            if let Err(err) = run_scan(&config) {
                error!("Error: {}", err);
                process::exit(1);
            }
        }
        Some(Commands::PrintConfig) => {
            println!("Configuration: {:?}", config);
        }
        None => {
            let _ = Cli::command().print_long_help();
        }
    }

    Ok(())
}

fn run_audit(config: &tape_audit_core::AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let engine = AuditEngine::new(config.clone());
    let reporter = CliReporter::new();
    let result = engine.audit(&reporter)?;

    println!();
    info!(
        "Scan: {}, Reconcile: {}, Write: {}",
        format!("{:.2}s", result.scan_duration.as_secs_f64()).green(),
        format!("{:.2}s", result.reconcile_duration.as_secs_f64()).green(),
        format!("{:.2}s", result.write_duration.as_secs_f64()).green(),
    );

    let stats = &result.statistics;
    info!(
        "{} known shows, {} with folders, {} missing",
        format!("{}", stats.total_shows).cyan(),
        format!("{}", stats.shows_with_folders).green(),
        format!("{}", stats.missing_shows).red(),
    );
    info!(
        "{} unmatched folder dates, {} invalid dates, {} dateless folders",
        format!("{}", stats.unmatched_dates).yellow(),
        format!("{}", stats.invalid_dates).red(),
        format!("{}", stats.no_date_found).red(),
    );
    info!(
        "Coverage: {} — report written to {}",
        format!("{:.1}%", stats.coverage).green().bold(),
        result.output_path.display(),
    );

    Ok(())
}

fn run_scan(config: &tape_audit_core::AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let engine = AuditEngine::new(config.clone());
    let folders = engine.scan_only()?;

    let dated = folders.iter().filter(|f| f.valid).count();
    let year_folders = folders
        .iter()
        .filter(|f| f.folder_type == FolderType::YearFolder)
        .count();
    let invalid = folders
        .iter()
        .filter(|f| !f.valid && f.folder_type != FolderType::NonDate)
        .count();
    let dateless = folders
        .iter()
        .filter(|f| f.folder_type == FolderType::NonDate)
        .count();

    info!(
        "{} folders: {} dated ({} year folders), {} invalid dates, {} without a date",
        format!("{}", folders.len()).cyan(),
        format!("{}", dated).green(),
        year_folders,
        format!("{}", invalid).red(),
        format!("{}", dateless).yellow(),
    );

    for folder in folders.iter().filter(|f| !f.valid) {
        println!("  {}  {}", folder.date.red(), folder.full_path.display());
    }

    Ok(())
}
