//! Error type shared by the wallet models.
//!
//! Only input validation can fail. Unknown ledgers and missing prices are not
//! errors: they resolve to exclusion or to an absent value.

use thiserror::Error;

/// Rejections raised when raw records are turned into wallet models.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WalletError {
    /// A balance amount was NaN or infinite.
    #[error("Balance amount for {currency} is not a finite number: {amount}")]
    NonFiniteAmount { currency: String, amount: f64 },

    /// A quoted price was zero, negative or not finite.
    #[error("Price for {currency} must be a positive finite number, got {price}")]
    InvalidPrice { currency: String, price: f64 },

    /// A swap amount was below the minimum or not finite.
    #[error("Swap amount must be at least {minimum}, got {amount}")]
    InvalidSwapAmount { amount: f64, minimum: f64 },

    /// An asset symbol was empty or whitespace only.
    #[error("Asset symbol must not be empty")]
    EmptySymbol,
}

/// A specialized Result type for wallet operations.
pub type Result<T> = std::result::Result<T, WalletError>;
