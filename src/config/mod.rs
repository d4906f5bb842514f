pub mod toml_config;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use toml_config::PortalConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "exam-portal")]
#[command(about = "Exam portal tool: hall seating lookup, hall tickets and dataset checks")]
pub struct CliConfig {
    /// Optional TOML config file with API and dataset defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the hall seating card for a stored student session.
    Seating {
        /// Stored session file (role marker plus student payload).
        #[arg(long)]
        session: PathBuf,
    },
    /// Fetch and print a student's hall ticket.
    Ticket {
        #[arg(long)]
        session: PathBuf,

        /// Hall ticket API base URL; overrides the config file.
        #[arg(long)]
        api: Option<String>,

        /// Serve the ticket from a local schedule CSV instead of the API.
        #[arg(long, conflicts_with = "api")]
        schedule: Option<PathBuf>,

        /// Write the rendered ticket here instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Validate seating and schedule datasets and report row counts.
    Ingest {
        #[arg(long)]
        seating: Option<PathBuf>,

        #[arg(long)]
        schedule: Option<PathBuf>,
    },
}
