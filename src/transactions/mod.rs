/// Transaction feed endpoint
///
/// Endpoints implemented:
/// 1. GET /api/v1/transactions - Transaction summaries, optionally within a date range
///
/// Without a date range the API returns the last 100 transactions.
pub mod types;

pub use self::types::{
    DateRange, HalLinks, HalTransactions, Transaction, TransactionSummary, Transactions,
};

use reqwest::Method;

use crate::client::Client;
use crate::errors::Result;
use crate::transport::{Response, Transport};

pub const TRANSACTIONS_PATH: &str = "/api/v1/transactions";

impl<T: Transport> Client<T> {
    /// List transaction summaries for the current user
    ///
    /// The collection is `None` when the server embedded no transactions.
    /// Transport failures are returned as-is; any response metadata they
    /// carry is available through [`crate::Error::response`].
    pub async fn list_transactions(
        &self,
        range: Option<&DateRange>,
    ) -> Result<(Option<Transactions>, Response)> {
        let mut request = self.new_request(Method::GET, TRANSACTIONS_PATH, None)?;

        if let Some(range) = range {
            request
                .url_mut()
                .query_pairs_mut()
                .clear()
                .extend_pairs(range.query_pairs());
        }

        let (hal, response) = self.execute::<HalTransactions>(request).await?;
        let transactions = hal.and_then(HalTransactions::into_embedded);

        Ok((transactions, response))
    }
}
