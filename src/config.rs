use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::wizard::Cadence;

/// Environment variable prefix, e.g. `SIGNUP_WIZARD__LOGGING__LEVEL=debug`
pub const ENV_PREFIX: &str = "SIGNUP_WIZARD";

/// Where each configuration layer comes from
#[derive(Debug, Clone, Default)]
pub struct ConfigLayers {
    /// `signup-wizard.toml` in the working directory
    pub local: Option<PathBuf>,
    /// `~/.config/signup-wizard/config.toml`
    pub user: Option<PathBuf>,
    /// `--config <path>`
    pub explicit: Option<PathBuf>,
    /// Variables to read instead of the process environment
    pub env: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub wizard: WizardConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WizardConfig {
    /// Billing cadence selected when a session starts
    #[serde(default)]
    pub default_cadence: Cadence,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll interval in milliseconds (default: 250)
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

fn default_tick_rate() -> u64 {
    250
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to log to file in TUI mode (false = stderr for debugging)
    #[serde(default = "default_log_to_file")]
    pub to_file: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_to_file() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            to_file: default_log_to_file(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for session logs, relative to cwd unless absolute
    #[serde(default = "default_logs_dir")]
    pub logs: String,
}

fn default_logs_dir() -> String {
    ".signup-wizard/logs".to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            logs: default_logs_dir(),
        }
    }
}

impl Config {
    /// Project-local config file, read from the working directory
    pub fn local_config_path() -> PathBuf {
        PathBuf::from("signup-wizard.toml")
    }

    /// User config in ~/.config/signup-wizard/
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("signup-wizard").join("config.toml"))
    }

    pub fn load(config_path: Option<&str>) -> Result<Self> {
        Self::load_layers(&ConfigLayers {
            local: Some(Self::local_config_path()),
            user: Self::user_config_path(),
            explicit: config_path.map(PathBuf::from),
            env: None,
        })
    }

    /// Merge defaults, files and environment, lowest precedence first
    pub fn load_layers(layers: &ConfigLayers) -> Result<Self> {
        // Start with embedded defaults so the wizard works without config files
        let defaults_json = serde_json::to_string(&Config::default())
            .context("Failed to serialize default config")?;

        let mut builder = config::Config::builder().add_source(config::File::from_str(
            &defaults_json,
            config::FileFormat::Json,
        ));

        // Optional files are skipped when missing
        for path in [&layers.local, &layers.user].into_iter().flatten() {
            if path.exists() {
                builder = builder.add_source(config::File::from(path.clone()));
            }
        }

        // An explicit --config file must exist
        if let Some(path) = &layers.explicit {
            builder = builder.add_source(config::File::from(path.clone()).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .source(layers.env.clone()),
        );

        let config = builder.build().context("Failed to load configuration")?;
        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Effective configuration rendered as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config to TOML")
    }

    /// Get absolute path to logs directory
    pub fn logs_path(&self) -> PathBuf {
        let path = PathBuf::from(&self.paths.logs);
        if path.is_absolute() {
            path
        } else {
            std::env::current_dir().unwrap_or_default().join(path)
        }
    }
}
