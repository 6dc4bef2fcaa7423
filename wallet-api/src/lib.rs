//! Wallet valuation core.
//!
//! Ranks balances held across ledgers by ledger priority, values them against a
//! price book, and derives spot exchange rates between quoted assets. Everything
//! here is synchronous and free of I/O; callers supply snapshots and re-run on
//! every new one.

pub mod error;
pub mod exchange;
pub mod model;
pub mod ranking;
pub mod traits;

pub use error::{Result, WalletError};
pub use exchange::{format_rate, quote_swap, rate, SwapQuote, MIN_SWAP_AMOUNT, RATE_PLACEHOLDER};
pub use model::{Balance, FormattedBalance, Ledger, PriceBook, PriceQuote, UnknownLedger};
pub use ranking::{
    format_amount, rank_balances, summarize, BalanceRankingPipeline, RankedSummary,
    AMOUNT_DECIMALS, MAX_AMOUNT_DECIMALS,
};
pub use traits::priority::{PriorityResolver, StaticPriorities, SENTINEL_PRIORITY};

pub mod prelude {
    pub use crate::exchange::rate;
    pub use crate::model::{Balance, FormattedBalance, Ledger, PriceBook, PriceQuote};
    pub use crate::ranking::{rank_balances, BalanceRankingPipeline};
    pub use crate::traits::priority::PriorityResolver;
}
