//! Turns raw wallet balances into an ordered, valued list for display.
//!
//! One pass, no shared state:
//!
//! 1. keep balances whose ledger is ranked and whose amount is positive,
//! 2. order them by ledger priority, highest first,
//! 3. value each one against the price book and render its amount.
//!
//! Equal priorities are ordered by currency symbol, then by input position.
//! A currency missing from the price book still produces a row, with
//! `usd_value` set to `None`.

use crate::model::{Balance, FormattedBalance, PriceBook};
use crate::traits::priority::{PriorityResolver, StaticPriorities, SENTINEL_PRIORITY};
use log::{debug, trace};
use serde::Serialize;

/// Fractional digits in `FormattedBalance::formatted`. Rounding is half away from zero.
pub const AMOUNT_DECIMALS: usize = 0;

/// Upper bound on fractional digits. Larger requests are clamped to it.
pub const MAX_AMOUNT_DECIMALS: usize = 18;

#[derive(Debug, Clone)]
pub struct BalanceRankingPipeline<R = StaticPriorities> {
    resolver: R,
    decimals: usize,
}

impl Default for BalanceRankingPipeline<StaticPriorities> {
    fn default() -> Self {
        Self::new(StaticPriorities)
    }
}

impl<R: PriorityResolver> BalanceRankingPipeline<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            decimals: AMOUNT_DECIMALS,
        }
    }

    /// Overrides the number of fractional digits in rendered amounts, up to
    /// `MAX_AMOUNT_DECIMALS`.
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        if decimals > MAX_AMOUNT_DECIMALS {
            debug!(
                "Clamping {} amount decimals to {}",
                decimals, MAX_AMOUNT_DECIMALS
            );
        }
        self.decimals = decimals.min(MAX_AMOUNT_DECIMALS);
        self
    }

    pub fn decimals(&self) -> usize {
        self.decimals
    }

    /// True when `balance` survives the filter step.
    pub fn is_eligible(&self, balance: &Balance) -> bool {
        self.eligible_priority(balance).is_some()
    }

    fn eligible_priority(&self, balance: &Balance) -> Option<i32> {
        let priority = self.resolver.priority(balance.ledger());
        if priority > SENTINEL_PRIORITY && balance.amount() > 0.0 {
            Some(priority)
        } else {
            trace!(
                "Excluding {} {} on {} (priority {})",
                balance.amount(),
                balance.currency(),
                balance.ledger(),
                priority
            );
            None
        }
    }

    /// Filters, orders and values `balances`.
    ///
    /// Inputs are only read. Calling this twice with the same inputs yields equal output.
    pub fn rank(&self, balances: &[Balance], prices: &PriceBook) -> Vec<FormattedBalance> {
        let mut ranked: Vec<(i32, &Balance)> = balances
            .iter()
            .filter_map(|balance| self.eligible_priority(balance).map(|p| (p, balance)))
            .collect();

        // Stable: balances equal on both keys keep their input order.
        ranked.sort_by(|(lhs_priority, lhs), (rhs_priority, rhs)| {
            rhs_priority
                .cmp(lhs_priority)
                .then_with(|| lhs.currency().cmp(rhs.currency()))
        });

        ranked
            .into_iter()
            .map(|(priority, balance)| self.format(balance, priority, prices))
            .collect()
    }

    fn format(&self, balance: &Balance, priority: i32, prices: &PriceBook) -> FormattedBalance {
        let usd_value = prices.get(balance.currency()).map(|price| balance.amount() * price);
        if usd_value.is_none() {
            debug!("No price for {}, USD value unknown", balance.currency());
        }
        FormattedBalance::new(
            balance,
            priority,
            format_amount(balance.amount(), self.decimals),
            usd_value,
        )
    }
}

/// Ranks with the built-in priority table and `AMOUNT_DECIMALS`.
pub fn rank_balances(balances: &[Balance], prices: &PriceBook) -> Vec<FormattedBalance> {
    BalanceRankingPipeline::new(StaticPriorities).rank(balances, prices)
}

/// Renders `amount` with exactly `decimals` fractional digits, rounding half away from zero.
///
/// `decimals` is clamped to `MAX_AMOUNT_DECIMALS`.
pub fn format_amount(amount: f64, decimals: usize) -> String {
    let decimals = decimals.min(MAX_AMOUNT_DECIMALS);
    let scale = 10f64.powi(decimals as i32);
    let scaled = amount * scale;
    let rounded = if scaled.is_finite() {
        scaled.round() / scale
    } else {
        amount
    };
    // + 0.0 turns -0.0 into 0.0
    format!("{:.*}", decimals, rounded + 0.0)
}

/// Totals over a ranked list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RankedSummary {
    pub rows: usize,
    /// Sum of the rows with a known USD value.
    pub total_usd: f64,
    /// Rows whose currency had no price.
    pub unpriced: usize,
}

pub fn summarize(ranked: &[FormattedBalance]) -> RankedSummary {
    ranked.iter().fold(
        RankedSummary {
            rows: ranked.len(),
            ..Default::default()
        },
        |mut summary, row| {
            match row.usd_value() {
                Some(value) => summary.total_usd += value,
                None => summary.unpriced += 1,
            }
            summary
        },
    )
}
