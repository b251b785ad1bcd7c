mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "swaggerlint")]
#[command(about = "Linter for Swagger 2.0 and OpenAPI 3.x documents", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to swaggerlint config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint a Swagger or OpenAPI document
    Lint {
        /// Path to the document
        path: Option<PathBuf>,

        /// Fetch the document from a URL instead
        #[arg(short, long, conflicts_with = "path")]
        url: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// List the available rules
    Rules,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Human,
    /// One JSON object per finding
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Lint { path, url, format } => {
            commands::lint::run(cli.config, path, url, format).await?;
        }
        Commands::Rules => {
            commands::rules::run();
        }
    }

    Ok(())
}
