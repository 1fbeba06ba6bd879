use super::{display::DisplayConfig, loader::LoaderConfig, traits::ConfigSection};
use crate::error::PnlScopeError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment overrides look like `PNLSCOPE__DISPLAY__WINDOW_TITLE`
pub const ENV_PREFIX: &str = "PNLSCOPE";
pub const DEFAULT_CONFIG_FILE: &str = "pnlscope.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub loader: LoaderConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), PnlScopeError> {
        validate_section(&self.loader)?;
        validate_section(&self.display)?;
        Ok(())
    }
}

fn validate_section<S: ConfigSection>(section: &S) -> Result<(), PnlScopeError> {
    section.validate().map_err(|e| match e {
        PnlScopeError::Configuration(msg) => {
            PnlScopeError::Configuration(format!("[{}] {}", S::section_name(), msg))
        }
        other => other,
    })
}

pub struct ConfigManager {
    config: AppConfig,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Defaults, then the optional TOML file, then environment overrides
    pub fn layered(path: Option<&Path>) -> Result<Self, PnlScopeError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder
            .build()
            .and_then(|settings| settings.try_deserialize())
            .map_err(|e| PnlScopeError::Configuration(format!("Failed to load config: {}", e)))?;

        config.validate()?;
        log::debug!("Configuration loaded (file: {:?})", path);
        Ok(Self { config })
    }

    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), PnlScopeError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| PnlScopeError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| PnlScopeError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        self.config = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PnlScopeError> {
        let toml_str = toml::to_string_pretty(&self.config)
            .map_err(|e| PnlScopeError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| PnlScopeError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    /// Apply a change; an invalid result leaves the previous configuration in place
    pub fn update<F>(&mut self, f: F) -> Result<(), PnlScopeError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }
}
