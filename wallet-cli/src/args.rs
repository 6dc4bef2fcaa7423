use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Wallet balance ranking and spot exchange rates.
#[derive(Parser, Debug)]
#[command(name = "wallet", version)]
#[command(about = "Ranks wallet balances and quotes spot exchange rates", long_about = None)]
pub struct Cli {
    /// Config file (TOML, YAML or JSON). Defaults to ./wallet.* when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Price snapshot file. When omitted, prices are fetched from the configured feed.
    #[arg(long, global = true)]
    pub prices: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Rank and value the balances of a wallet snapshot.
    Rank {
        /// Path to the balance snapshot.
        #[arg(help = "JSON array of {currency, amount, ledger} records")]
        balances: PathBuf,

        /// Fractional digits of the formatted amount (overrides config).
        #[arg(
            short,
            long,
            value_parser = RangedU64ValueParser::<usize>::new()
                .range(0..=wallet::MAX_AMOUNT_DECIMALS as u64)
        )]
        decimals: Option<usize>,
    },
    /// Show the spot rate between two assets.
    Rate {
        /// Asset to convert from.
        from: String,
        /// Asset to convert to.
        to: String,
    },
    /// Convert an amount of one asset into another.
    Swap {
        /// Amount of `from` to convert.
        amount: f64,
        /// Asset to convert from.
        from: String,
        /// Asset to convert to.
        to: String,
    },
    /// List the quoted currencies.
    Currencies,
}
