//! Config management use case

use crate::error::{JotterError, Result};
use crate::infrastructure::{Config, FileStorage};

/// Service for managing journal configuration
pub struct ConfigService {
    storage: FileStorage,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(storage: FileStorage) -> Self {
        ConfigService { storage }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load_from_dir(&self.storage.root)?;

        match key {
            "editor" => Ok(config.editor),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(JotterError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: editor, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_from_dir(&self.storage.root)?;

        match key {
            "editor" => {
                config.editor = value.to_string();
            }
            "created" => {
                return Err(JotterError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(JotterError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: editor",
                    key
                )));
            }
        }

        config.save_to_dir(&self.storage.root)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load_from_dir(&self.storage.root)
    }
}
