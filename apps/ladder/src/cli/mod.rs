//! # Ladder CLI Module
//!
//! This module implements the CLI interface for Ladder.
//!
//! ## Available Commands
//!
//! - `server` - Start the HTTP wizard API
//! - `roles` - List role tables
//! - `step` - Show a wizard page
//! - `name` - Show or set the cached participant name
//! - `score` - Score a scoresheet file and print the review summary
//! - `validate` - Validate the role catalog
//! - `init` - Initialize the name database

mod commands;

use clap::{Parser, Subcommand};
use ladder_core::LadderError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Ladder - product designer competency assessment
///
/// Scores criteria on a 0-5 half-point scale across six role levels and
/// rolls them up into section averages, role overalls and a review summary.
#[derive(Parser, Debug)]
#[command(name = "ladder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the name cache database
    #[arg(short = 'D', long, global = true, default_value = "ladder.db")]
    pub database: PathBuf,

    /// TOML role catalog replacing the built-in tables
    #[arg(short = 'C', long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Server {
        /// Host to bind to
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// List role tables
    Roles {
        /// Only show this level (slug or title)
        #[arg(short, long)]
        level: Option<String>,
    },

    /// Show a wizard page (1-8)
    Step {
        /// Step number
        step: String,
    },

    /// Show or set the cached participant name
    Name {
        /// New name (empty string clears it)
        #[arg(short, long)]
        set: Option<String>,
    },

    /// Score a scoresheet file (TOML or JSON) and print the summary
    Score {
        /// Path to the scoresheet
        #[arg(short, long)]
        file: PathBuf,

        /// Final score policy: "mean" or "literal"
        #[arg(long, default_value = "mean")]
        final_score: String,
    },

    /// Validate the role catalog
    Validate,

    /// Initialize a new name database
    Init {
        /// Force initialization even if database exists
        #[arg(short, long)]
        force: bool,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), LadderError> {
    let json_mode = cli.json_mode;
    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Some(Commands::Server { host, port }) => {
            cmd_server(&cli.database, catalog, &host, port).await
        }
        Some(Commands::Roles { level }) => cmd_roles(&catalog, json_mode, level.as_deref()),
        Some(Commands::Step { step }) => cmd_step(&catalog, json_mode, &step),
        Some(Commands::Name { set }) => {
            cmd_name(&cli.database, catalog, json_mode, set.as_deref())
        }
        Some(Commands::Score { file, final_score }) => {
            cmd_score(catalog, json_mode, cli.verbose, &file, &final_score)
        }
        Some(Commands::Validate) => cmd_validate(&catalog, json_mode, cli.catalog.as_deref()),
        Some(Commands::Init { force }) => cmd_init(&cli.database, catalog, force),
        None => {
            // No subcommand - show the catalog overview
            cmd_overview(&catalog, json_mode)
        }
    }
}
