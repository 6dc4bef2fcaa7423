//! The closed set of ledgers a wallet balance can be recorded on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A blockchain on which a balance is held.
///
/// Records coming from outside may name a network that is not supported. Such
/// names are kept verbatim in `Unknown` so they flow through the pipeline and are
/// excluded by priority rather than rejected at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Ledger {
    Osmosis,
    Ethereum,
    Arbitrum,
    Zilliqa,
    Neo,
    Unknown(UnknownLedger),
}

/// Name of a ledger outside the supported set.
///
/// Only produced by `Ledger::from`, so it never holds a supported name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownLedger(String);

impl UnknownLedger {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Ledger {
    /// Every supported ledger, in declaration order.
    pub const KNOWN: [Ledger; 5] = [
        Ledger::Osmosis,
        Ledger::Ethereum,
        Ledger::Arbitrum,
        Ledger::Zilliqa,
        Ledger::Neo,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Ledger::Osmosis => "Osmosis",
            Ledger::Ethereum => "Ethereum",
            Ledger::Arbitrum => "Arbitrum",
            Ledger::Zilliqa => "Zilliqa",
            Ledger::Neo => "Neo",
            Ledger::Unknown(name) => name.as_str(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Ledger::Unknown(_))
    }

    fn parse_known(name: &str) -> Option<Ledger> {
        match name {
            "Osmosis" => Some(Ledger::Osmosis),
            "Ethereum" => Some(Ledger::Ethereum),
            "Arbitrum" => Some(Ledger::Arbitrum),
            "Zilliqa" => Some(Ledger::Zilliqa),
            "Neo" => Some(Ledger::Neo),
            _ => None,
        }
    }
}

impl From<String> for Ledger {
    fn from(name: String) -> Self {
        Ledger::parse_known(&name).unwrap_or_else(|| Ledger::Unknown(UnknownLedger(name)))
    }
}

impl From<&str> for Ledger {
    fn from(name: &str) -> Self {
        Ledger::from(name.to_string())
    }
}

impl From<Ledger> for String {
    fn from(ledger: Ledger) -> Self {
        match ledger {
            Ledger::Unknown(UnknownLedger(name)) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names_parse_to_variants() {
        for ledger in Ledger::KNOWN {
            assert_eq!(Ledger::from(ledger.as_str()), ledger);
            assert!(ledger.is_known());
        }
    }

    #[test]
    fn test_unknown_name_is_kept_verbatim() {
        let ledger = Ledger::from("Solana".to_string());
        assert!(matches!(&ledger, Ledger::Unknown(name) if name.as_str() == "Solana"));
        assert!(!ledger.is_known());
        assert_eq!(ledger.to_string(), "Solana");
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let ledger = Ledger::from("osmosis");
        assert!(!ledger.is_known());
        assert_eq!(ledger.as_str(), "osmosis");
    }

    #[test]
    fn test_supported_name_never_becomes_unknown() {
        for ledger in Ledger::KNOWN {
            let parsed = Ledger::from(ledger.as_str().to_string());
            assert!(parsed.is_known(), "{} parsed as unknown", ledger);

            let json = serde_json::to_string(&ledger).unwrap();
            let back: Ledger = serde_json::from_str(&json).unwrap();
            assert_eq!(back, ledger);
        }
    }

    #[test]
    fn test_ledger_serializes_as_plain_name() {
        let json = serde_json::to_string(&Ledger::Arbitrum).unwrap();
        assert_eq!(json, "\"Arbitrum\"");

        let parsed: Ledger = serde_json::from_str("\"NotAChain\"").unwrap();
        assert_eq!(parsed, Ledger::from("NotAChain"));
        assert!(!parsed.is_known());
    }
}
