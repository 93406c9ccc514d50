pub mod greeter;
pub mod runner;
pub mod samples;
pub mod sink;

pub use crate::utils::error::Result;

/// Source of greeting settings, implemented by both the CLI and TOML configs.
pub trait GreetConfig: Send + Sync {
    fn message(&self) -> Option<&str>;
    fn times(&self) -> u32;
}
