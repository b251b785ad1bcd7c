use crate::{ConfigError, Result, SwaggerlintConfig};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names to search for, in order of preference
const CONFIG_FILES: &[&str] = &[
    ".swaggerlintrc.yml",
    ".swaggerlintrc.yaml",
    ".swaggerlintrc.json",
    ".swaggerlintrc",
    "swaggerlint.config.yml",
    "swaggerlint.config.yaml",
    "swaggerlint.config.json",
];

/// Find a swaggerlint config file by walking up the directory tree from the given start directory.
/// Returns the path to the config file if found.
pub fn find_config(start_dir: &Path) -> Result<Option<PathBuf>> {
    let mut current_dir = start_dir.to_path_buf();

    loop {
        for file_name in CONFIG_FILES {
            let config_path = current_dir.join(file_name);
            if config_path.is_file() {
                tracing::info!("Found swaggerlint config at {:?}", config_path);
                return Ok(Some(config_path));
            }
        }

        if !current_dir.pop() {
            break;
        }
    }

    Ok(None)
}

/// Load a swaggerlint config from the specified path.
///
/// The format is detected from the file extension and every `extends`
/// entry is resolved, so the returned config is fully merged.
pub fn load_config(path: &Path) -> Result<SwaggerlintConfig> {
    let mut chain = Vec::new();
    load_with_extends(path, &mut chain)
}

/// Load a swaggerlint config from a string.
///
/// The path is used for error messages, format detection and resolving
/// `extends` entries relative to its directory.
pub fn load_config_from_str(contents: &str, path: &Path) -> Result<SwaggerlintConfig> {
    let mut chain = vec![canonical(path)];
    let config = parse(contents, path)?;
    let config = resolve_extends(config, path, &mut chain)?;
    validate_config(&config, path)?;
    Ok(config)
}

fn load_with_extends(path: &Path, chain: &mut Vec<PathBuf>) -> Result<SwaggerlintConfig> {
    let key = canonical(path);
    if chain.contains(&key) {
        return Err(ConfigError::ExtendsCycle(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    let config = parse(&contents, path)?;

    chain.push(key);
    let config = resolve_extends(config, path, chain)?;
    chain.pop();

    validate_config(&config, path)?;
    Ok(config)
}

/// Merge every base named in `extends`, in order, then `config` on top
fn resolve_extends(
    mut config: SwaggerlintConfig,
    path: &Path,
    chain: &mut Vec<PathBuf>,
) -> Result<SwaggerlintConfig> {
    if config.extends.is_empty() {
        return Ok(config);
    }

    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let extends = std::mem::take(&mut config.extends);
    let mut merged = SwaggerlintConfig::default();

    for entry in extends {
        if entry.trim().is_empty() {
            return Err(ConfigError::Extends {
                path: path.to_path_buf(),
                entry,
                message: "entry is empty".to_string(),
            });
        }

        let base_path = base_dir.join(&entry);
        tracing::debug!("Resolving extended config {:?}", base_path);
        let base = match load_with_extends(&base_path, chain) {
            Ok(base) => base,
            Err(err @ ConfigError::ExtendsCycle(_)) => return Err(err),
            Err(err) => {
                return Err(ConfigError::Extends {
                    path: path.to_path_buf(),
                    entry,
                    message: err.to_string(),
                })
            }
        };
        merged.merge(base);
    }

    merged.merge(config);
    Ok(merged)
}

fn parse(contents: &str, path: &Path) -> Result<SwaggerlintConfig> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    let file_name = path.file_name().and_then(|name| name.to_str()).unwrap_or("");

    match extension {
        "yml" | "yaml" => parse_yaml(contents, path),
        "json" => parse_json(contents, path),
        // .swaggerlintrc without extension - try YAML first, then JSON
        "" if file_name == ".swaggerlintrc" => {
            parse_yaml(contents, path).or_else(|_| parse_json(contents, path))
        }
        _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Parse YAML configuration
fn parse_yaml(contents: &str, path: &Path) -> Result<SwaggerlintConfig> {
    serde_yaml::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("YAML parse error: {e}"),
    })
}

/// Parse JSON configuration
fn parse_json(contents: &str, path: &Path) -> Result<SwaggerlintConfig> {
    serde_json::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("JSON parse error: {e}"),
    })
}

/// Validate the loaded configuration
fn validate_config(config: &SwaggerlintConfig, path: &Path) -> Result<()> {
    for (name, _) in config.rules.iter() {
        if name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                message: "Rule names cannot be empty".to_string(),
            });
        }
    }

    let ignore = &config.ignore;
    for (kind, names) in [("definitions", &ignore.definitions), ("paths", &ignore.paths)] {
        if names.iter().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "ignored {kind} in {} cannot contain empty names",
                path.display()
            )));
        }
    }

    Ok(())
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
