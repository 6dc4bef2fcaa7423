//! Spot exchange rates between two quoted assets, and swap conversion on top of them.

use crate::error::{Result, WalletError};
use crate::model::PriceBook;
use serde::Serialize;

/// Smallest amount accepted by `quote_swap`.
pub const MIN_SWAP_AMOUNT: f64 = 0.01;

/// Shown when no rate can be derived for the selected pair.
pub const RATE_PLACEHOLDER: &str = "Select currencies to view exchange rate";

/// Units of `to` per unit of `from`, defined as `price(to) / price(from)`.
///
/// Returns `None` if either symbol is unquoted or carries a price that is not
/// strictly positive and finite, and when the ratio itself is not. A symbol
/// converted to itself is exactly `1.0`.
pub fn rate(from: &str, to: &str, prices: &PriceBook) -> Option<f64> {
    let from_price = usable_price(from, prices)?;
    if from == to {
        return Some(1.0);
    }
    let to_price = usable_price(to, prices)?;
    let rate = to_price / from_price;
    // Extreme price ratios can overflow to infinity or underflow to zero.
    (rate.is_finite() && rate > 0.0).then_some(rate)
}

fn usable_price(symbol: &str, prices: &PriceBook) -> Option<f64> {
    match prices.get(symbol) {
        Some(price) if price.is_finite() && price > 0.0 => Some(price),
        Some(price) => {
            log::debug!("Ignoring unusable price {} for {}", price, symbol);
            None
        }
        None => {
            log::debug!("No price for {}", symbol);
            None
        }
    }
}

/// Renders a rate to four decimals, or the neutral placeholder when absent.
pub fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("Exchange Rate: {:.4}", rate),
        None => RATE_PLACEHOLDER.to_string(),
    }
}

/// The result of converting an amount of one asset into another.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwapQuote {
    from: String,
    to: String,
    amount: f64,
    rate: f64,
    converted: f64,
}

impl SwapQuote {
    pub fn from_currency(&self) -> &str {
        &self.from
    }

    pub fn to_currency(&self) -> &str {
        &self.to
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// `amount * rate`, in units of `to`.
    pub fn converted(&self) -> f64 {
        self.converted
    }
}

/// Prices a swap of `amount` units of `from` into `to`.
///
/// # Errors
///
/// `WalletError::InvalidSwapAmount` if `amount` is not finite or is below
/// `MIN_SWAP_AMOUNT`. An unknown pair is not an error: it yields `Ok(None)`.
pub fn quote_swap(amount: f64, from: &str, to: &str, prices: &PriceBook) -> Result<Option<SwapQuote>> {
    if !amount.is_finite() || amount < MIN_SWAP_AMOUNT {
        return Err(WalletError::InvalidSwapAmount {
            amount,
            minimum: MIN_SWAP_AMOUNT,
        });
    }

    Ok(rate(from, to, prices).map(|rate| SwapQuote {
        from: from.to_string(),
        to: to.to_string(),
        amount,
        rate,
        converted: amount * rate,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PriceQuote;

    fn book(quotes: &[(&str, f64)]) -> PriceBook {
        quotes
            .iter()
            .map(|(currency, price)| PriceQuote::new(*currency, *price).unwrap())
            .collect()
    }

    #[test]
    fn test_rate_is_ratio_of_to_over_from() {
        let prices = book(&[("BTC", 50000.0), ("ETH", 2500.0)]);
        assert_eq!(rate("ETH", "BTC", &prices), Some(20.0));
        assert_eq!(rate("BTC", "ETH", &prices), Some(0.05));
    }

    #[test]
    fn test_same_symbol_is_exactly_one() {
        let prices = book(&[("SWTH", 0.004_039_85)]);
        assert_eq!(rate("SWTH", "SWTH", &prices), Some(1.0));
    }

    #[test]
    fn test_same_symbol_absent_when_unquoted() {
        assert_eq!(rate("SWTH", "SWTH", &PriceBook::new()), None);
    }

    #[test]
    fn test_missing_side_is_absent() {
        let prices = book(&[("ETH", 2500.0)]);
        assert_eq!(rate("ETH", "BTC", &prices), None);
        assert_eq!(rate("BTC", "ETH", &prices), None);
        assert_eq!(rate("ETH", "BTC", &PriceBook::new()), None);
    }

    #[test]
    fn test_out_of_range_ratio_is_absent() {
        let prices = book(&[("BIG", 1e300), ("TINY", 1e-300)]);
        assert_eq!(rate("BIG", "TINY", &prices), None);
        assert_eq!(rate("TINY", "BIG", &prices), None);
        assert_eq!(quote_swap(1.0, "BIG", "TINY", &prices), Ok(None));
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(Some(20.0)), "Exchange Rate: 20.0000");
        assert_eq!(format_rate(Some(1.0 / 3.0)), "Exchange Rate: 0.3333");
        assert_eq!(format_rate(None), RATE_PLACEHOLDER);
    }

    #[test]
    fn test_quote_swap_converts_amount() {
        let prices = book(&[("BTC", 50000.0), ("ETH", 2500.0)]);
        let quote = quote_swap(1.5, "ETH", "BTC", &prices).unwrap().unwrap();
        assert_eq!(quote.from_currency(), "ETH");
        assert_eq!(quote.to_currency(), "BTC");
        assert_eq!(quote.rate(), 20.0);
        assert!((quote.converted() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_quote_swap_unknown_pair_is_none() {
        let prices = book(&[("ETH", 2500.0)]);
        assert_eq!(quote_swap(1.0, "ETH", "DOGE", &prices), Ok(None));
    }

    #[test]
    fn test_quote_swap_rejects_small_or_invalid_amounts() {
        let prices = book(&[("ETH", 2500.0)]);
        for amount in [0.0, 0.009, -5.0, f64::NAN] {
            let result = quote_swap(amount, "ETH", "ETH", &prices);
            assert!(
                matches!(result, Err(WalletError::InvalidSwapAmount { .. })),
                "amount {} should be rejected",
                amount
            );
        }
        assert!(quote_swap(MIN_SWAP_AMOUNT, "ETH", "ETH", &prices).unwrap().is_some());
    }
}
