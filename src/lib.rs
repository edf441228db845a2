//! Client for the Starling Bank REST API
//!
//! ```no_run
//! use starling::{Client, Config, DateRange};
//! use chrono::NaiveDate;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(&Config::load(None)?)?;
//! let january = DateRange::new(
//!     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
//! );
//! let (transactions, _response) = client.list_transactions(Some(&january)).await?;
//! for summary in transactions.unwrap_or_default() {
//!     println!("{} {} {}", summary.created, summary.amount, summary.narrative);
//! }
//! # Ok(())
//! # }
//! ```

pub mod arguments;
pub mod client;
pub mod config;
pub mod display;
pub mod errors;
pub mod logger;
pub mod transactions;
pub mod transport;

#[cfg(test)]
mod test_utils;

pub use client::Client;
pub use config::Config;
pub use errors::{Error, Result};
pub use transactions::{DateRange, Transaction, TransactionSummary, Transactions};
pub use transport::{HttpTransport, Response, Transport};
