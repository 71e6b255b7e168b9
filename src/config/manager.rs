use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use crate::paths;
use crate::quote::Mode;

/// Builtin quote service URL, used when neither the CLI nor the config
/// file provides one.
pub const DEFAULT_ENDPOINT: &str = "https://audico-api-gpt.onrender.com";

/// Settings in the `[quo]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoConfig {
    /// Default customer mode.
    pub mode: Option<String>,
    /// Quote service base URL.
    pub endpoint: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/quo/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub quo: QuoConfig,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The customer mode the session starts in.
    pub mode: Mode,
    /// The quote service base URL.
    pub endpoint: String,
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Customer mode override.
    pub mode: Option<String>,
    /// Endpoint override.
    pub endpoint: Option<String>,
}

/// Resolves configuration by merging CLI options with config file
/// settings. CLI options win, then the config file, then the builtin
/// defaults (Residential mode, the hosted quote service).
///
/// # Errors
///
/// Returns an error if the selected mode name is not recognized.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let mode = options
        .mode
        .as_ref()
        .or(config_file.quo.mode.as_ref())
        .map(|name| Mode::from_str(name))
        .transpose()?
        .unwrap_or_default();

    let endpoint = options
        .endpoint
        .as_ref()
        .or(config_file.quo.endpoint.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    Ok(ResolvedConfig { mode, endpoint })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/quo/config.toml`
    /// or `~/.config/quo/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir().join("config.toml"),
        }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}
