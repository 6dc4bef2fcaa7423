//! Text and JSON rendering of command results.

use crate::error::Result;
use serde::Serialize;
use wallet::{FormattedBalance, RankedSummary, SwapQuote};

/// Printed in place of a USD value when the currency has no price.
pub const UNKNOWN_VALUE: &str = "n/a";

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn usd(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| UNKNOWN_VALUE.to_string())
}

/// One row per ranked balance, keyed by `ledger-currency`, then a totals line.
pub fn balance_table(rows: &[FormattedBalance], summary: &RankedSummary) -> String {
    let mut out = format!(
        "{:<24} {:>8} {:>18} {:>18}\n",
        "KEY", "PRIORITY", "AMOUNT", "USD VALUE"
    );
    for row in rows {
        out.push_str(&format!(
            "{:<24} {:>8} {:>18} {:>18}\n",
            row.key(),
            row.priority(),
            row.formatted(),
            usd(row.usd_value())
        ));
    }
    out.push_str(&format!(
        "{} balances, {} USD total",
        summary.rows,
        usd(Some(summary.total_usd))
    ));
    if summary.unpriced > 0 {
        out.push_str(&format!(" ({} without a price)", summary.unpriced));
    }
    out
}

pub fn swap_line(quote: &SwapQuote) -> String {
    format!(
        "{} {} = {:.4} {} ({})",
        quote.amount(),
        quote.from_currency(),
        quote.converted(),
        quote.to_currency(),
        wallet::format_rate(Some(quote.rate()))
    )
}
