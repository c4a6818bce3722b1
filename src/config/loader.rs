use log::{debug, warn};
use std::env;
use std::fs;
use std::path::Path;

use crate::config::types::{Config, ConfigOverrides};
use crate::config::validation;
use crate::utils::error::{BoxResult, SlugpagesError};

/// Environment variable selecting the listening port
pub const PORT_ENV_VAR: &str = "PORT";

/// Build the service configuration.
///
/// Layers, lowest precedence first: built-in defaults, the optional config
/// file, the `PORT` environment variable, then command line overrides.
pub fn load_config(config_file: Option<&Path>, cli: ConfigOverrides) -> BoxResult<Config> {
    let env_port = env::var(PORT_ENV_VAR).ok();
    load_config_with_env(config_file, cli, env_port.as_deref())
}

pub(crate) fn load_config_with_env(
    config_file: Option<&Path>,
    cli: ConfigOverrides,
    env_port: Option<&str>,
) -> BoxResult<Config> {
    let mut config = Config::default();

    match config_file {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            merge_config_file(&mut config, path)?;
        }
        None => debug!("No configuration file given, using defaults"),
    }

    if let Some(port) = env_port.and_then(port_from_env) {
        config.port = port;
    }

    cli.merge_into(&mut config);

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Parse the raw `PORT` value; anything unusable falls back to the default
pub fn port_from_env(raw: &str) -> Option<u16> {
    match raw.trim().parse::<u16>() {
        Ok(port) => Some(port),
        Err(e) => {
            warn!("Ignoring invalid {} value '{}': {}", PORT_ENV_VAR, raw, e);
            None
        }
    }
}

/// Merge a configuration file into the current configuration
fn merge_config_file(config: &mut Config, config_path: &Path) -> BoxResult<()> {
    if !config_path.exists() {
        return Err(SlugpagesError::Config(format!(
            "Configuration file not found: {}", config_path.display()
        )).into());
    }

    let content = fs::read_to_string(config_path)
        .map_err(|e| SlugpagesError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    let ext = config_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());

    // Assume YAML if no extension
    let overrides: ConfigOverrides = match ext.as_deref() {
        Some("yml") | Some("yaml") | None => serde_yaml::from_str(&content)
            .map_err(|e| config_parse_error("YAML", config_path, e))?,
        Some("toml") => toml::from_str(&content)
            .map_err(|e| config_parse_error("TOML", config_path, e))?,
        Some("json") => serde_json::from_str(&content)
            .map_err(|e| config_parse_error("JSON", config_path, e))?,
        Some(other) => {
            return Err(SlugpagesError::Config(format!(
                "Unsupported configuration file format: {}", other
            )).into());
        }
    };

    overrides.merge_into(config);
    Ok(())
}

fn config_parse_error(format: &str, path: &Path, err: impl std::fmt::Display) -> SlugpagesError {
    SlugpagesError::Config(format!(
        "Failed to parse {} configuration ({}): {}", format, path.display(), err
    ))
}
