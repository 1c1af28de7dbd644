use crate::api::constants::DEFAULT_BASE_URL;
use crate::api::{HistoryProjection, MonitoringConfig, OperationFilter, SortDirection, SortField};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding `server.base_url`
pub const ENV_BASE_URL: &str = "CALC_BASE_URL";
/// Environment variable overriding `server.timeout_secs`
pub const ENV_TIMEOUT_SECS: &str = "CALC_TIMEOUT_SECS";

/// Names accepted by `settings get|set|reset`
pub const SETTING_NAMES: &[&str] = &[
    "base-url",
    "timeout",
    "connect-timeout",
    "history.operation",
    "history.order-by",
    "history.sort-order",
    "divide-always-immediate",
    "clear-queue-on-immediate",
];

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub history: HistoryProjection,
    #[serde(default)]
    pub behavior: BehaviorSettings,
    #[serde(default)]
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

/// How operator presses are routed between immediate and queued execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviorSettings {
    /// Divide executes immediately even in queued mode
    #[serde(default = "default_divide_always_immediate")]
    pub divide_always_immediate: bool,
    /// Drop queued operations when switching back to immediate mode
    #[serde(default)]
    pub clear_queue_on_immediate: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_divide_always_immediate() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            divide_always_immediate: default_divide_always_immediate(),
            clear_queue_on_immediate: false,
        }
    }
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("calc-cli")
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".calc-cli")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", path);

        if !path.exists() {
            info!("Config file doesn't exist, using default config");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        debug!("Loaded config for server {}", config.server.base_url);
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        debug!("Saving config to: {:?}", path);

        if let Some(config_dir) = path.parent() {
            if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
                fs::create_dir_all(config_dir)
                    .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
                info!("Created config directory: {:?}", config_dir);
            }
        }

        let config_content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        info!("Config saved successfully");
        Ok(())
    }

    /// Load `.env` and apply `CALC_*` overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        dotenvy::dotenv().ok();
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            debug!("Overriding base URL from {}", ENV_BASE_URL);
            self.server.base_url = base_url;
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
            self.server.timeout_secs = parse_seconds(ENV_TIMEOUT_SECS, &timeout)?;
        }
        Ok(())
    }

    pub fn get_setting(&self, name: &str) -> Result<String> {
        let value = match name {
            "base-url" => self.server.base_url.clone(),
            "timeout" => self.server.timeout_secs.to_string(),
            "connect-timeout" => self.server.connect_timeout_secs.to_string(),
            "history.operation" => self.history.filter.to_string(),
            "history.order-by" => self.history.order_by.to_string(),
            "history.sort-order" => self.history.direction.to_string(),
            "divide-always-immediate" => self.behavior.divide_always_immediate.to_string(),
            "clear-queue-on-immediate" => self.behavior.clear_queue_on_immediate.to_string(),
            _ => anyhow::bail!("Unknown setting: {}", name),
        };
        Ok(value)
    }

    pub fn set_setting(&mut self, name: &str, value: &str) -> Result<()> {
        info!("Setting {} to {}", name, value);

        match name {
            "base-url" => {
                let value = value.trim();
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    anyhow::bail!("base-url must start with http:// or https://, got '{}'", value);
                }
                self.server.base_url = value.trim_end_matches('/').to_string();
            }
            "timeout" => self.server.timeout_secs = parse_seconds(name, value)?,
            "connect-timeout" => self.server.connect_timeout_secs = parse_seconds(name, value)?,
            "history.operation" => self.history.filter = value.parse::<OperationFilter>()?,
            "history.order-by" => self.history.order_by = value.parse::<SortField>()?,
            "history.sort-order" => self.history.direction = value.parse::<SortDirection>()?,
            "divide-always-immediate" => self.behavior.divide_always_immediate = parse_bool(name, value)?,
            "clear-queue-on-immediate" => self.behavior.clear_queue_on_immediate = parse_bool(name, value)?,
            _ => anyhow::bail!("Unknown setting: {}", name),
        }

        Ok(())
    }

    pub fn reset_setting(&mut self, name: &str) -> Result<()> {
        let defaults = Config::default();
        let value = defaults.get_setting(name)?;
        if name == "base-url" {
            warn!("Resetting base-url to {}", value);
        }
        self.set_setting(name, &value)
    }
}

fn parse_seconds(name: &str, value: &str) -> Result<u64> {
    let secs: u64 = value.trim().parse().map_err(|_| {
        anyhow::anyhow!("Invalid value for {}: '{}'. Must be a positive integer.", name, value)
    })?;
    if secs == 0 {
        anyhow::bail!("{} must be greater than 0", name);
    }
    Ok(secs)
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => anyhow::bail!("Invalid value for {}: '{}'. Must be true or false.", name, value),
    }
}
