use crate::OutputFormat;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;
use std::process;
use swaggerlint::{
    default_config, LintError, Linter, SchemaLoader, SchemaSource, SwaggerlintError,
};
use swaggerlint_config::{find_config, load_config, SwaggerlintConfig};

pub async fn run(
    config_path: Option<PathBuf>,
    path: Option<PathBuf>,
    url: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let config = resolve_config(config_path)?;

    let source = match (path, url) {
        (Some(path), _) => SchemaSource::Path(path),
        (None, Some(url)) => SchemaSource::Url(url),
        (None, None) => {
            report(&[LintError::core(SwaggerlintError::NoInput.to_string())], format);
            process::exit(1);
        }
    };

    let document = match SchemaLoader::new(source).load().await {
        Ok(document) => document,
        Err(e) => {
            if matches!(format, OutputFormat::Human) {
                eprintln!("{} {}", "✗ Document error:".red(), e);
            } else {
                eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
            }
            process::exit(1);
        }
    };

    let errors = Linter::new(config)
        .with_defaults(default_config().rules)
        .lint(&document);

    report(&errors, format);
    if !errors.is_empty() {
        process::exit(1);
    }
    Ok(())
}

/// Config from `--config`, else the nearest config file, else the defaults
fn resolve_config(config_path: Option<PathBuf>) -> Result<SwaggerlintConfig> {
    let config_path = match config_path {
        Some(path) => Some(path),
        None => {
            let current_dir = std::env::current_dir()?;
            find_config(&current_dir).context("Failed to search for config")?
        }
    };

    match config_path {
        Some(path) => load_config(&path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => {
            tracing::info!("No config file found, using the default rules");
            Ok(default_config())
        }
    }
}

fn report(errors: &[LintError], format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            for error in errors {
                println!("\n{}", error.name.red().bold());
                println!("  {}", error.msg);
                if !error.location.is_empty() {
                    println!("  {}: {}", "location".dimmed(), error.location.to_string().dimmed());
                }
            }

            println!();
            if errors.is_empty() {
                println!("{}", "✓ You have 0 lint errors!".green().bold());
            } else {
                println!(
                    "{}",
                    format!("Found {} lint error(s)", errors.len()).yellow()
                );
            }
        }
        OutputFormat::Json => {
            for error in errors {
                match serde_json::to_string(error) {
                    Ok(line) => println!("{line}"),
                    Err(e) => eprintln!("{}", serde_json::json!({ "error": e.to_string() })),
                }
            }
        }
    }
}
