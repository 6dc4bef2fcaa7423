pub mod balance;
pub mod ledger;
pub mod price_book;

pub use balance::{Balance, FormattedBalance};
pub use ledger::{Ledger, UnknownLedger};
pub use price_book::{PriceBook, PriceQuote};
