use anyhow::Context;
use products_client::config::{Config, LogFormat};
use products_client::ProductClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    init_tracing(&config);

    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Products API: {}", config.transport.base_url);

    // Optional paging: `products-client [limit offset]`
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (limit, offset) = match args.as_slice() {
        [] => (None, None),
        [limit, offset] => (
            Some(limit.parse::<u32>().context("limit must be a non-negative integer")?),
            Some(offset.parse::<u32>().context("offset must be a non-negative integer")?),
        ),
        _ => anyhow::bail!("usage: products-client [limit offset]"),
    };

    let client = ProductClient::from_config(&config.transport)?;
    let products = client.list(limit, offset).await?;

    println!("{}", serde_json::to_string_pretty(&products)?);
    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("products_client={},reqwest=info", config.app.log_level).into()
    });

    // Logs go to stderr so stdout stays pure JSON output
    match config.app.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
