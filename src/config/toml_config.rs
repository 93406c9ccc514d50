use crate::config::DEFAULT_TIMES;
use crate::core::GreetConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub greeting: GreetingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreetingConfig {
    pub message: Option<String>,
    pub times: Option<u32>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        Ok(config)
    }
}

impl GreetConfig for TomlConfig {
    fn message(&self) -> Option<&str> {
        self.greeting.message.as_deref()
    }

    fn times(&self) -> u32 {
        self.greeting.times.unwrap_or(DEFAULT_TIMES)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(message) = &self.greeting.message {
            validate_non_empty("greeting.message", message)?;
        }
        Ok(())
    }
}
