//! Configuration manager implementation

use std::{collections::HashMap, path::PathBuf};

use config::{Config, Environment, File};
use tracing::debug;

use crate::{
    error::Result,
    types::{non_empty, AppConfig},
};

/// Variable naming an alternative config file
const CONFIG_PATH_VAR: &str = "QSEARCH_CONFIG";

/// Service-discovery style keys honored when the prefixed ones are absent
const DISCOVERY_URI_VARS: &[&str] = &["services__typesense__typesense__0"];
const DISCOVERY_API_KEY_VARS: &[&str] = &["typesense-api-key", "TYPESENSE_API_KEY"];

/// Configuration manager
pub struct ConfigManager {
    /// Configuration file path (optional on disk)
    config_path: PathBuf,
    /// Environment prefix
    env_prefix: String,
    /// Replaces the process environment when set
    env: Option<HashMap<String, String>>,
}

impl ConfigManager {
    /// Create a new configuration manager
    pub fn new() -> Self {
        let config_path = std::env::var(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("qsearch.toml"));
        Self::with_path(config_path)
    }

    /// Create with custom config path
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            env_prefix: "QSEARCH".to_string(),
            env: None,
        }
    }

    /// Read variables from `vars` instead of the process environment
    pub fn with_env(mut self, vars: HashMap<String, String>) -> Self {
        self.env = Some(vars);
        self
    }

    /// Load, apply fallbacks, and validate.
    ///
    /// Missing Typesense URI or API key is an error; nothing here is retried.
    pub fn load(&self) -> Result<AppConfig> {
        let config = Config::builder()
            .add_source(File::from(self.config_path.clone()).required(false))
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .separator("__")
                    .source(self.env.clone()),
            )
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;
        self.apply_discovery_fallbacks(&mut app_config);

        app_config.validate()?;
        debug!("Loaded configuration: {:?}", app_config);
        Ok(app_config)
    }

    fn apply_discovery_fallbacks(&self, config: &mut AppConfig) {
        // Blank prefixed values count as unset
        if non_empty(config.typesense.uri.as_deref()).is_none() {
            if let Some(uri) = self.first_var(DISCOVERY_URI_VARS) {
                config.typesense.uri = Some(uri);
            }
        }
        if non_empty(config.typesense.api_key.as_deref()).is_none() {
            if let Some(key) = self.first_var(DISCOVERY_API_KEY_VARS) {
                config.typesense.api_key = Some(key);
            }
        }
    }

    fn first_var(&self, names: &[&str]) -> Option<String> {
        names.iter().find_map(|name| {
            let value = match &self.env {
                Some(vars) => vars.get(*name).cloned(),
                None => std::env::var(name).ok(),
            };
            value.filter(|v| !v.trim().is_empty())
        })
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
