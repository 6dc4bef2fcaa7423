//! Price snapshot acquisition.
//!
//! The feed is an opaque HTTP endpoint returning the same JSON array the file
//! snapshots use. Fetching completes before any ranking or rate work starts.

use crate::error::Result;
use crate::snapshot;
use log::info;
use std::path::PathBuf;
use std::time::Duration;
use wallet::{PriceBook, PriceQuote};

/// Where the price snapshot comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceSource {
    File(PathBuf),
    Feed { url: String, timeout: Duration },
}

/// Downloads the current quotes from `url`.
pub async fn fetch_prices(url: &str, timeout: Duration) -> Result<Vec<PriceQuote>> {
    info!("Fetching prices from {}", url);
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let quotes = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<PriceQuote>>()
        .await?;
    info!("Received {} quotes", quotes.len());
    Ok(quotes)
}

/// Builds a fresh price book from `source`.
pub async fn load_price_book(source: &PriceSource) -> Result<PriceBook> {
    let quotes = match source {
        PriceSource::File(path) => snapshot::load_prices(path)?,
        PriceSource::Feed { url, timeout } => fetch_prices(url, *timeout).await?,
    };
    let book = PriceBook::from_quotes(quotes);
    info!("Price book holds {} symbols", book.len());
    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_price_book_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"[
                {"currency":"USDC","date":"2023-08-29T07:10:30.000Z","price":0.989832},
                {"currency":"ETH","date":"2023-08-29T07:10:52.000Z","price":1645.93},
                {"currency":"USDC","date":"2023-08-29T07:10:40.000Z","price":1.0}
            ]"#,
        )
        .unwrap();

        let source = PriceSource::File(file.path().to_path_buf());
        let book = load_price_book(&source).await.unwrap();

        assert_eq!(book.len(), 2);
        assert_eq!(book.get("USDC"), Some(1.0));
        assert_eq!(book.symbols(), vec!["ETH", "USDC"]);
    }

    #[tokio::test]
    async fn test_unreachable_feed_is_an_error() {
        // Port 9 (discard) on localhost is not expected to serve HTTP.
        let source = PriceSource::Feed {
            url: "http://127.0.0.1:9/prices.json".to_string(),
            timeout: Duration::from_millis(500),
        };
        assert!(load_price_book(&source).await.is_err());
    }
}
