use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data_source::givefood::DEFAULT_BASE_URL;
use crate::server::app::AppOptions;

/// Server settings, read from an optional YAML file and then overridden by
/// command line flags.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub givefood_base_url: String,
    pub request_timeout_secs: u64,
    pub cors_origin: Option<String>,
    pub playground: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            givefood_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 30,
            cors_origin: None,
            playground: true,
        }
    }
}

impl ServerConfig {
    /// Load from `path`, or fall back to defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                serde_yaml::from_str(&content)
                    .with_context(|| format!("Invalid config file {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn app_options(&self) -> AppOptions {
        AppOptions {
            cors_origin: self.cors_origin.clone(),
            playground: self.playground,
        }
    }
}
