//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `--config <FILE>` (must exist if given)
//! 3. `./cutter.toml` in the working directory
//! 4. The platform config dir (e.g. `~/.config/cutter/config.toml`)
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults for the `check` command.
    pub check: CheckConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Required method names used when no `--method` flag is given.
    pub methods: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `--config` path must exist; the well-known locations are
    /// optional and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        if let Some(path) = config_file {
            return Self::from_file(path)
                .with_context(|| format!("failed to load config from '{}'", path.display()));
        }

        let local = Path::new("cutter.toml");
        if local.exists() {
            return Self::from_file(local)
                .with_context(|| "failed to load config from './cutter.toml'");
        }

        let default = Self::config_path();
        if default.exists() {
            return Self::from_file(&default)
                .with_context(|| format!("failed to load config from '{}'", default.display()));
        }

        Ok(Self::default())
    }

    /// Default config file location for this platform.
    ///
    /// Falls back to `./cutter.toml` on exotic platforms where no home
    /// directory can be determined.
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("com", "cosecruz", "cutter")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("cutter.toml"))
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = toml::from_str(&text)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty() {
        let config = AppConfig::default();
        assert!(config.check.methods.is_empty());
        assert!(!config.output.no_color);
    }

    #[test]
    fn partial_config_parses_with_defaults() {
        let config: AppConfig = toml::from_str("[check]\nmethods = [\"deploy\"]\n").unwrap();
        assert_eq!(config.check.methods, ["deploy"]);
        assert!(!config.output.no_color);
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let toml = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&toml).unwrap();
        assert!(parsed.check.methods.is_empty());
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let result = AppConfig::load(Some(&PathBuf::from("/definitely/not/here.toml")));
        assert!(result.is_err());
    }
}
