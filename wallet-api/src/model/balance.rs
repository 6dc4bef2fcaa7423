//! Raw wallet balances and their display-ready counterpart.

use super::ledger::Ledger;
use crate::error::{Result, WalletError};
use serde::{Deserialize, Serialize};

/// A quantity of one asset held on one ledger.
///
/// The amount is always finite. Zero and negative amounts are accepted here and
/// dropped later by the ranking filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBalance")]
pub struct Balance {
    currency: String,
    amount: f64,
    ledger: Ledger,
}

/// Wire shape of a balance before validation. `blockchain` is accepted as an
/// alias of `ledger`.
#[derive(Deserialize)]
struct RawBalance {
    currency: String,
    amount: f64,
    #[serde(alias = "blockchain")]
    ledger: Ledger,
}

impl TryFrom<RawBalance> for Balance {
    type Error = WalletError;

    fn try_from(raw: RawBalance) -> Result<Self> {
        Balance::new(raw.currency, raw.amount, raw.ledger)
    }
}

impl Balance {
    /// Creates a validated balance.
    ///
    /// # Errors
    ///
    /// * `WalletError::EmptySymbol` if `currency` is blank.
    /// * `WalletError::NonFiniteAmount` if `amount` is NaN or infinite.
    pub fn new(currency: impl Into<String>, amount: f64, ledger: impl Into<Ledger>) -> Result<Self> {
        let currency = currency.into();
        if currency.trim().is_empty() {
            return Err(WalletError::EmptySymbol);
        }
        if !amount.is_finite() {
            return Err(WalletError::NonFiniteAmount { currency, amount });
        }
        Ok(Self {
            currency,
            amount,
            ledger: ledger.into(),
        })
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}

/// A ranked balance ready for display.
///
/// `usd_value` is `None` when the price book has no quote for the currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedBalance {
    currency: String,
    amount: f64,
    ledger: Ledger,
    priority: i32,
    formatted: String,
    usd_value: Option<f64>,
}

impl FormattedBalance {
    pub(crate) fn new(balance: &Balance, priority: i32, formatted: String, usd_value: Option<f64>) -> Self {
        Self {
            currency: balance.currency.clone(),
            amount: balance.amount,
            ledger: balance.ledger.clone(),
            priority,
            formatted,
            usd_value,
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn formatted(&self) -> &str {
        &self.formatted
    }

    pub fn usd_value(&self) -> Option<f64> {
        self.usd_value
    }

    /// Stable row key, `<ledger>-<currency>`. Positions change between runs, this does not.
    pub fn key(&self) -> String {
        format!("{}-{}", self.ledger, self.currency)
    }
}
