use clap::Parser;
use log::info;
use wallet_cli::args::Cli;
use wallet_cli::config::WalletConfig;
use wallet_cli::{execute, load_price_book, PriceSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = WalletConfig::load(cli.config.as_deref())?;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();
    info!("=== Wallet {} ===", env!("CARGO_PKG_VERSION"));

    // 1. Price snapshot: explicit file wins over the configured feed
    let source = match &cli.prices {
        Some(path) => PriceSource::File(path.clone()),
        None => PriceSource::Feed {
            url: config.prices_url.clone(),
            timeout: config.request_timeout(),
        },
    };
    let prices = load_price_book(&source).await?;

    // 2. Run the command against the snapshot
    let output = execute(&cli.command, &config, &prices, cli.json)?;
    println!("{}", output);

    Ok(())
}
