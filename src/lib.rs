pub mod config;
pub mod core;
pub mod utils;

pub use crate::config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::{
    greeter::Greeter,
    runner::GreetRunner,
    sink::{MemorySink, Sink, StdoutSink},
    GreetConfig,
};
pub use crate::utils::error::{Result, SampleError};
