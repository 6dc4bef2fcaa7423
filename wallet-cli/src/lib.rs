//! Command line front end for the wallet core: snapshot loading, price feed
//! fetching, configuration and output rendering.

pub mod args;
pub mod commands;
pub mod config;
pub mod error;
pub mod feed;
pub mod render;
pub mod snapshot;

pub use commands::execute;
pub use error::{CliError, Result};
pub use feed::{load_price_book, PriceSource};
