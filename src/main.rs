use clap::Parser;
use prism_sample::utils::{logger, validation::Validate};
use prism_sample::{CliConfig, GreetRunner, StdoutSink, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting prism-sample");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let count = match &config.config {
        Some(path) => {
            tracing::debug!("Loading greeting settings from: {}", path);
            let file_config = TomlConfig::from_file(path)?;
            file_config.validate()?;
            GreetRunner::new(file_config, StdoutSink::new()).run().await?
        }
        None => {
            GreetRunner::new(config.clone(), StdoutSink::new())
                .run()
                .await?
        }
    };

    tracing::info!("Finished with {} recorded greeting(s)", count);

    Ok(())
}
