//! Dispatch of parsed subcommands against a loaded price book.

use crate::args::Commands;
use crate::config::WalletConfig;
use crate::error::Result;
use crate::render;
use crate::snapshot;
use log::{debug, warn};
use serde::Serialize;
use wallet::{
    format_rate, quote_swap, rate, summarize, BalanceRankingPipeline, FormattedBalance,
    PriceBook, RankedSummary, StaticPriorities, RATE_PLACEHOLDER,
};

#[derive(Serialize)]
struct RankReport<'a> {
    rows: &'a [FormattedBalance],
    summary: RankedSummary,
}

#[derive(Serialize)]
struct RateReport<'a> {
    from: &'a str,
    to: &'a str,
    rate: Option<f64>,
}

/// Runs `command` and returns the text to print.
pub fn execute(
    command: &Commands,
    config: &WalletConfig,
    prices: &PriceBook,
    json: bool,
) -> Result<String> {
    match command {
        Commands::Rank { balances, decimals } => {
            let balances = snapshot::load_balances(balances)?;
            let pipeline = BalanceRankingPipeline::new(StaticPriorities)
                .with_decimals(decimals.unwrap_or(config.amount_decimals));
            let rows = pipeline.rank(&balances, prices);
            let summary = summarize(&rows);
            debug!(
                "Ranked {} of {} balances",
                rows.len(),
                balances.len()
            );
            if json {
                render::to_json(&RankReport {
                    rows: &rows,
                    summary,
                })
            } else {
                Ok(render::balance_table(&rows, &summary))
            }
        }
        Commands::Rate { from, to } => {
            let rate = rate(from, to, prices);
            if rate.is_none() {
                warn!("No usable prices for {} -> {}", from, to);
            }
            if json {
                render::to_json(&RateReport { from, to, rate })
            } else {
                Ok(format_rate(rate))
            }
        }
        Commands::Swap { amount, from, to } => {
            let quote = quote_swap(*amount, from, to, prices)?;
            match (quote, json) {
                (Some(quote), true) => render::to_json(&quote),
                (Some(quote), false) => Ok(render::swap_line(&quote)),
                (None, true) => render::to_json(&Option::<()>::None),
                (None, false) => Ok(RATE_PLACEHOLDER.to_string()),
            }
        }
        Commands::Currencies => {
            let symbols = prices.symbols();
            if json {
                render::to_json(&symbols)
            } else {
                Ok(symbols.join("\n"))
            }
        }
    }
}
