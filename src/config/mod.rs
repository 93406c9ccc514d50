pub mod toml_config;

use crate::core::GreetConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TIMES: u32 = 3;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "prism-sample")]
#[command(about = "Greeter sample program used as syntax highlighting fixture content")]
pub struct CliConfig {
    #[arg(long, help = "Override the greeting message")]
    pub message: Option<String>,

    #[arg(long, default_value_t = DEFAULT_TIMES)]
    pub times: u32,

    #[arg(long, help = "Load greeting settings from a TOML file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl GreetConfig for CliConfig {
    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn times(&self) -> u32 {
        self.times
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(message) = &self.message {
            validate_non_empty("message", message)?;
        }
        if let Some(path) = &self.config {
            validate_non_empty("config", path)?;
        }
        Ok(())
    }
}
