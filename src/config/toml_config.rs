use crate::utils::error::{CinemaError, Result};
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CinemaConfig {
    pub cinema: Option<CinemaSection>,
    pub storage: StorageConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CinemaSection {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: Option<String>,
    pub ticket_log: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
}

impl CinemaConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CinemaError::ConfigError {
            field: "config".to_string(),
            reason: format!("{}: {}", path, e),
        })?;

        let config: CinemaConfig =
            toml::from_str(&content).map_err(|e| CinemaError::ConfigError {
                field: "config".to_string(),
                reason: format!("{}: {}", path, e),
            })?;

        config.validate()?;
        Ok(config)
    }
}

impl Validate for CinemaConfig {
    fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.storage.data_dir {
            validate_path("storage.data_dir", dir)?;
        }
        Ok(())
    }
}
