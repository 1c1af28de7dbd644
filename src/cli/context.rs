//! Shared setup for command handlers

use crate::api::{CalculatorApi, CalculatorClient, HistoryProjection};
use crate::calc::Runtime;
use crate::config::Config;
use anyhow::Result;
use log::debug;
use std::path::PathBuf;
use std::sync::Arc;

pub struct CommandContext {
    pub config: Config,
    pub config_path: PathBuf,
}

impl CommandContext {
    /// Load the config file, then apply environment and command-line overrides
    pub fn load(config_path: Option<PathBuf>, base_url: Option<String>) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => path,
            None => Config::get_config_path()?,
        };

        let mut config = Config::load_from(&config_path)?;
        config.apply_env_overrides()?;
        if let Some(base_url) = base_url {
            debug!("Using base URL from command line: {}", base_url);
            config.server.base_url = base_url;
        }

        Ok(Self { config, config_path })
    }

    pub fn client(&self) -> Result<Arc<dyn CalculatorApi>> {
        let client = CalculatorClient::new(&self.config.server, self.config.monitoring.clone())?;
        Ok(Arc::new(client))
    }

    /// Session runtime that starts without fetching history
    pub fn runtime(&self, projection: HistoryProjection) -> Result<Runtime> {
        Ok(Runtime::without_initial_fetch(
            self.client()?,
            self.config.behavior,
            projection,
        ))
    }
}
