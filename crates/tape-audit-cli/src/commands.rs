use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "tape-audit")]
#[command(about = "Audit a concert tape archive against a known-shows table", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan, reconcile against the reference table, and write the report CSV
    Audit,
    /// Scan the configured roots and summarize what the folder names parse to
    Scan,
    /// Print configuration values
    PrintConfig,
}
