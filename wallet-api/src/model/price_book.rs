//! Price quotes and the per-symbol book the pipelines read from.

use crate::error::{Result, WalletError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Latest known unit price of an asset, in USD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPriceQuote")]
pub struct PriceQuote {
    currency: String,
    price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct RawPriceQuote {
    currency: String,
    price: f64,
    #[serde(default)]
    date: Option<DateTime<Utc>>,
}

impl TryFrom<RawPriceQuote> for PriceQuote {
    type Error = WalletError;

    fn try_from(raw: RawPriceQuote) -> Result<Self> {
        let quote = PriceQuote::new(raw.currency, raw.price)?;
        Ok(match raw.date {
            Some(date) => quote.with_date(date),
            None => quote,
        })
    }
}

impl PriceQuote {
    /// Creates a validated quote.
    ///
    /// # Errors
    ///
    /// * `WalletError::EmptySymbol` if `currency` is blank.
    /// * `WalletError::InvalidPrice` unless `price` is finite and strictly positive.
    pub fn new(currency: impl Into<String>, price: f64) -> Result<Self> {
        let currency = currency.into();
        if currency.trim().is_empty() {
            return Err(WalletError::EmptySymbol);
        }
        if !price.is_finite() || price <= 0.0 {
            return Err(WalletError::InvalidPrice { currency, price });
        }
        Ok(Self {
            currency,
            price,
            date: None,
        })
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }
}

/// One quote per symbol. Inserting a symbol again replaces the previous quote.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceBook {
    quotes: HashMap<String, PriceQuote>,
}

impl PriceBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from a feed snapshot. Later quotes for a symbol win.
    pub fn from_quotes(quotes: impl IntoIterator<Item = PriceQuote>) -> Self {
        let mut book = Self::new();
        for quote in quotes {
            book.insert(quote);
        }
        book
    }

    /// Stores `quote`, returning the one it replaced.
    pub fn insert(&mut self, quote: PriceQuote) -> Option<PriceQuote> {
        let previous = self.quotes.insert(quote.currency.clone(), quote);
        if let Some(old) = &previous {
            log::trace!("Replaced quote for {} ({})", old.currency, old.price);
        }
        previous
    }

    /// Unit price for `symbol`, or `None` when the feed never quoted it.
    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.quotes.get(symbol).map(|q| q.price)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.quotes.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Quoted symbols in ascending order.
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.quotes.keys().map(String::as_str).collect();
        symbols.sort_unstable();
        symbols
    }
}

impl FromIterator<PriceQuote> for PriceBook {
    fn from_iter<I: IntoIterator<Item = PriceQuote>>(iter: I) -> Self {
        Self::from_quotes(iter)
    }
}
