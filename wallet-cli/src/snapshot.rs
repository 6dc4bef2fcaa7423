//! Loading of balance and price snapshots from JSON files.

use crate::error::{CliError, Result};
use serde::de::DeserializeOwned;
use std::path::Path;
use wallet::{Balance, PriceQuote};

/// Reads a JSON array of balances. Any invalid record fails the whole load.
pub fn load_balances(path: &Path) -> Result<Vec<Balance>> {
    let balances: Vec<Balance> = read_json(path)?;
    log::info!("Loaded {} balances from {}", balances.len(), path.display());
    Ok(balances)
}

/// Reads a JSON array of price quotes in the feed format.
pub fn load_prices(path: &Path) -> Result<Vec<PriceQuote>> {
    let quotes: Vec<PriceQuote> = read_json(path)?;
    log::info!("Loaded {} quotes from {}", quotes.len(), path.display());
    Ok(quotes)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CliError::Snapshot {
        path: path.to_path_buf(),
        source,
    })
}
