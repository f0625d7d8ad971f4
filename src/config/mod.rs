pub mod merge;
pub mod schema;

pub use schema::*;

use crate::cli::Cli;
use crate::error::ConfigError;
use std::path::Path;

/// Environment variable that overrides the configured API base URL.
pub const API_URL_ENV: &str = "AGENTHUB_API_URL";

/// Load configuration by merging CLI, environment, and file sources.
/// Precedence: CLI > environment > config file > defaults.
///
/// A missing global config file is fine (defaults apply). A `--config` path
/// given explicitly must exist and parse, since the user asked for it.
pub fn load_config(cli: &Cli) -> Result<AppConfig, ConfigError> {
    // Layer 1: config file. Explicit path is strict, global search is lenient.
    let file = match &cli.config {
        Some(path) => load_config_file(path)?,
        None => load_global_config(),
    };

    // Layer 2: environment variable.
    let env = PartialConfig {
        api_base_url: std::env::var(API_URL_ENV).ok(),
    };

    // Layer 3: CLI args.
    let cli_partial = PartialConfig {
        api_base_url: cli.api_url.clone(),
    };

    Ok(cli_partial.with_fallback(env).with_fallback(file).finalize())
}

/// Load global config from the platform-specific config directory.
/// Returns empty PartialConfig if the file is absent or unreadable.
fn load_global_config() -> PartialConfig {
    let Some(path) = global_config_path() else {
        tracing::debug!("Could not determine global config directory");
        return PartialConfig::default();
    };
    match load_config_file(&path) {
        Ok(partial) => partial,
        Err(ConfigError::ReadError { source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            tracing::debug!("No config file at {}, using defaults", path.display());
            PartialConfig::default()
        }
        Err(e) => {
            tracing::warn!("Ignoring global config: {e}");
            PartialConfig::default()
        }
    }
}

/// Read and parse a TOML config file into a PartialConfig.
fn load_config_file(path: &Path) -> Result<PartialConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    let file: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(file.to_partial())
}

/// Resolve the platform-specific global config path.
/// Linux: ~/.config/agenthub/agenthub.toml
/// macOS: ~/Library/Application Support/agenthub/agenthub.toml
fn global_config_path() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("", "", "agenthub")
        .map(|dirs| dirs.config_dir().join("agenthub.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_base_url_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agenthub.toml");
        std::fs::write(&path, "[api]\nbase_url = \"http://box:4000/api\"\n").unwrap();

        let partial = load_config_file(&path).unwrap();
        assert_eq!(partial.api_base_url.as_deref(), Some("http://box:4000/api"));
    }

    #[test]
    fn empty_file_yields_empty_partial() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agenthub.toml");
        std::fs::write(&path, "").unwrap();

        let partial = load_config_file(&path).unwrap();
        assert!(partial.api_base_url.is_none());
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agenthub.toml");
        std::fs::write(&path, "[api\nbase_url = ").unwrap();

        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
