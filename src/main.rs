use clap::Parser;

use agenthub::api::ApiClient;
use agenthub::{cli, config, ui};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default to WARN so log lines don't interleave with the prompts;
    // RUST_LOG overrides for debugging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    let config = config::load_config(&cli)?;
    tracing::debug!(api_url = %config.api_base_url, "Config loaded");

    let api = ApiClient::new(&config.api_base_url);
    ui::menu::run(&api).await
}
