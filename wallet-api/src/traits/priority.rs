//! Defines the `PriorityResolver` trait used to order balances across ledgers.
//!
//! A resolver turns a ledger into an integer weight. Higher weights are listed
//! first; `SENTINEL_PRIORITY` marks a ledger as unranked, which both sorts it
//! last and removes it from ranked output.

use crate::model::ledger::Ledger;

/// Floor weight for ledgers without a configured priority.
///
/// Strictly lower than every configured weight.
pub const SENTINEL_PRIORITY: i32 = -99;

/// Maps a ledger to its display priority.
///
/// Implementations must be pure: the same ledger always yields the same weight.
///
/// # Examples
///
/// ```
/// use wallet::model::Ledger;
/// use wallet::traits::priority::{PriorityResolver, StaticPriorities, SENTINEL_PRIORITY};
///
/// let resolver = StaticPriorities;
/// assert_eq!(resolver.priority(&Ledger::Osmosis), 100);
/// assert_eq!(resolver.priority(&Ledger::from("Solana")), SENTINEL_PRIORITY);
/// ```
pub trait PriorityResolver: Send + Sync {
    /// Returns the weight of `ledger`, or `SENTINEL_PRIORITY` if it is unranked.
    fn priority(&self, ledger: &Ledger) -> i32;

    /// True when balances on `ledger` may appear in ranked output.
    fn is_ranked(&self, ledger: &Ledger) -> bool {
        self.priority(ledger) > SENTINEL_PRIORITY
    }
}

/// The built-in priority table.
///
/// The match is exhaustive, so a new `Ledger` variant does not compile until it
/// is given a weight here.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticPriorities;

impl PriorityResolver for StaticPriorities {
    fn priority(&self, ledger: &Ledger) -> i32 {
        match ledger {
            Ledger::Osmosis => 100,
            Ledger::Ethereum => 50,
            Ledger::Arbitrum => 30,
            Ledger::Zilliqa => 20,
            Ledger::Neo => 20,
            Ledger::Unknown(_) => SENTINEL_PRIORITY,
        }
    }
}

impl<R: PriorityResolver + ?Sized> PriorityResolver for &R {
    fn priority(&self, ledger: &Ledger) -> i32 {
        (**self).priority(ledger)
    }
}

impl<R: PriorityResolver + ?Sized> PriorityResolver for Box<R> {
    fn priority(&self, ledger: &Ledger) -> i32 {
        (**self).priority(ledger)
    }
}
