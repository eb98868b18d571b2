//! # Ladder - Competency Assessment Wizard
//!
//! The main binary for the Ladder product designer assessment.
//!
//! This application provides:
//! - HTTP REST API server (axum-based) driving the eight-step wizard
//! - CLI interface for catalog inspection and batch scoring
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │            apps/ladder (THE BINARY)          │
//! │                                              │
//! │   ┌─────────────┐        ┌─────────────┐     │
//! │   │    CLI      │        │  HTTP API   │     │
//! │   │   (clap)    │        │   (axum)    │     │
//! │   └──────┬──────┘        └──────┬──────┘     │
//! │          └───────────┬──────────┘            │
//! │                      ▼                       │
//! │              ┌───────────────┐               │
//! │              │  ladder-core  │               │
//! │              │  (THE LOGIC)  │               │
//! │              └───────────────┘               │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! ladder server --host 0.0.0.0 --port 8080
//!
//! # CLI operations
//! ladder roles --level senior-product-designer
//! ladder score --file scores.toml --final-score mean
//! ladder name --set "Ada Lovelace"
//! ```

use clap::Parser;
use ladder::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // LADDER_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("LADDER_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ladder=info,tower_http=debug".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    let cli = cli::Cli::parse();

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Ladder startup banner.
fn print_banner() {
    println!(
        r#"
  ██╗      █████╗ ██████╗ ██████╗ ███████╗██████╗
  ██║     ██╔══██╗██╔══██╗██╔══██╗██╔════╝██╔══██╗
  ██║     ███████║██║  ██║██║  ██║█████╗  ██████╔╝
  ██║     ██╔══██║██║  ██║██║  ██║██╔══╝  ██╔══██╗
  ███████╗██║  ██║██████╔╝██████╔╝███████╗██║  ██║
  ╚══════╝╚═╝  ╚═╝╚═════╝ ╚═════╝ ╚══════╝╚═╝  ╚═╝

  Product Designer Competency Assessment v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
