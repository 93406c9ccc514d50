use anyhow::Result;
use clap::Parser;
use prism_sample::{CliConfig, GreetRunner, MemorySink, TomlConfig};

#[tokio::test]
async fn test_default_run_produces_contracted_output() -> Result<()> {
    let config = CliConfig::parse_from(["prism-sample"]);
    let mut runner = GreetRunner::new(config, MemorySink::new());

    let count = runner.run().await?;

    assert_eq!(count, 1);
    assert_eq!(
        runner.into_sink().lines(),
        &[
            "Hello, Prism!",
            "1: Hello, Prism!",
            "2: Hello, Prism!",
            "3: Hello, Prism!",
            "Greeted 1 times",
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_run_with_message_override() -> Result<()> {
    let config = CliConfig::parse_from(["prism-sample", "--message", "Hi!", "--times", "1"]);
    let mut runner = GreetRunner::new(config, MemorySink::new());

    let count = runner.run().await?;

    assert_eq!(count, 1);
    assert_eq!(
        runner.into_sink().lines(),
        &["Hi!", "1: Hi!", "Greeted 1 times"]
    );

    Ok(())
}

#[tokio::test]
async fn test_run_with_zero_times_still_reports_one_greeting() -> Result<()> {
    let config = CliConfig::parse_from(["prism-sample", "--times", "0"]);
    let mut runner = GreetRunner::new(config, MemorySink::new());

    let count = runner.run().await?;

    assert_eq!(count, 1);
    assert_eq!(
        runner.into_sink().lines(),
        &["Hello, Prism!", "Greeted 1 times"]
    );

    Ok(())
}

#[tokio::test]
async fn test_run_from_toml_config() -> Result<()> {
    let config = TomlConfig::from_toml_str(
        r#"
[greeting]
message = "Hallo"
times = 2
"#,
    )?;
    let mut runner = GreetRunner::new(config, MemorySink::new());

    runner.run().await?;

    assert_eq!(
        runner.into_sink().lines(),
        &["Hallo", "1: Hallo", "2: Hallo", "Greeted 1 times"]
    );

    Ok(())
}
