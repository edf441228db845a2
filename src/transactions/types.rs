// =============================================================================
// TRANSACTION FEED TYPES
// =============================================================================

use chrono::{DateTime, NaiveDate, TimeZone};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::ops::Deref;

/// Query date format expected by the API
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// CUSTOM DESERIALIZERS - Handle sparse API payloads
// =============================================================================

/// Deserialize a field that may be `null`, mapping it to the type's default
///
/// Paired with `#[serde(default)]` so missing and `null` fields decode the
/// same way: empty strings, zero amounts, empty lists, empty links.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One ledger entry as reported by the API
///
/// `currency`, `direction` and `created` are passed through as sent by the
/// server (ISO 4217 code, CREDIT/DEBIT, ISO 8601 timestamp) without
/// validation. Missing or `null` fields decode to empty strings and zero.
///
/// Amounts are [`Decimal`], limited to 28 significant digits (magnitude below
/// about 7.9e28); a larger amount fails to decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub direction: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub narrative: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
}

/// A transaction plus the running account balance after it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    #[serde(flatten)]
    pub transaction: Transaction,
    #[serde(default, deserialize_with = "null_as_default")]
    pub balance: Decimal,
}

impl Deref for TransactionSummary {
    type Target = Transaction;

    fn deref(&self) -> &Transaction {
        &self.transaction
    }
}

/// Transaction summaries in the order the server returned them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transactions {
    #[serde(default, deserialize_with = "null_as_default")]
    pub transactions: Vec<TransactionSummary>,
}

impl Transactions {
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransactionSummary> {
        self.transactions.iter()
    }
}

impl IntoIterator for Transactions {
    type Item = TransactionSummary;
    type IntoIter = std::vec::IntoIter<TransactionSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.into_iter()
    }
}

impl<'a> IntoIterator for &'a Transactions {
    type Item = &'a TransactionSummary;
    type IntoIter = std::slice::Iter<'a, TransactionSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}

// =============================================================================
// HAL ENVELOPE
// =============================================================================

/// Placeholder for the `_links` object, its content is ignored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HalLinks {}

/// HAL wrapper around [`Transactions`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HalTransactions {
    #[serde(rename = "_links", default, deserialize_with = "null_as_default")]
    pub links: HalLinks,
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<Transactions>,
}

impl HalTransactions {
    /// Unwrap the embedded collection; `None` when the server sent none
    pub fn into_embedded(self) -> Option<Transactions> {
        self.embedded
    }
}

// =============================================================================
// DATE RANGE
// =============================================================================

/// Calendar date bounds for a transaction query
///
/// Bounds are sent as given; `from > to` is left to the server to judge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Build a range from timestamps, keeping only their local calendar date
    pub fn from_datetimes<Tz: TimeZone>(from: &DateTime<Tz>, to: &DateTime<Tz>) -> Self {
        Self {
            from: from.date_naive(),
            to: to.date_naive(),
        }
    }

    /// `from` and `to` query parameters, in that order
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("from", self.from.format(DATE_FORMAT).to_string()),
            ("to", self.to.format(DATE_FORMAT).to_string()),
        ]
    }
}
