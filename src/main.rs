use clap::Parser;
use tellus::cli::Cli;
use tellus::client::ApiClient;
use tellus::config::Settings;
use tracing::{debug, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::new_with_cli(&cli)?;

    // Initialize tracing
    let level = if settings.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    debug!(base_url = %settings.api.base_url, entrypoint = %settings.api.entrypoint, "Using reservation API");

    let client = ApiClient::http(settings.api.clone(), settings.timeout(), settings.debug)?;
    let output = tellus::commands::run(cli.command, &client).await?;
    print!("{}", output);

    Ok(())
}
