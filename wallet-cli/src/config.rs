use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Runtime settings.
///
/// Sources, later ones winning: built-in defaults, the config file, then
/// `WALLET_*` environment variables (e.g. `WALLET_PRICES_URL`).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct WalletConfig {
    pub log_level: String,
    /// Endpoint returning a JSON array of `{currency, date, price}` quotes.
    pub prices_url: String,
    pub amount_decimals: usize,
    pub request_timeout_secs: u64,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            prices_url: "https://interview.switcheo.com/prices.json".to_string(),
            amount_decimals: wallet::AMOUNT_DECIMALS,
            request_timeout_secs: 10,
        }
    }
}

impl WalletConfig {
    /// Loads settings from `path`, or from an optional `wallet.*` file in the
    /// working directory when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name("wallet").required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix("WALLET"))
            .build()?;
        let config: Self = settings.try_deserialize()?;

        if config.prices_url.trim().is_empty() {
            return Err(ConfigError::Message("prices_url must not be empty".to_string()));
        }
        if config.amount_decimals > wallet::MAX_AMOUNT_DECIMALS {
            return Err(ConfigError::Message(format!(
                "amount_decimals must be at most {}",
                wallet::MAX_AMOUNT_DECIMALS
            )));
        }
        if config.request_timeout_secs == 0 {
            return Err(ConfigError::Message(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
