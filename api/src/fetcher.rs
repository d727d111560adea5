//! Retrieves the transaction list from the remote API.

use std::future::Future;

use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;
use futures::future::AbortHandle;
use futures::future::Abortable;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::FetchConfig;
use crate::transaction::Transaction;

/// An error that can occur while fetching the transaction list.
///
/// The `Display` output is what the user sees in place of the list.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    #[error("Failed to fetch")]
    Status(u16),
    /// The request could not be sent or the body could not be read.
    #[error("{0}")]
    Network(#[from] reqwest::Error),
    /// The body was not the expected JSON envelope.
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

/// The JSON envelope around the transaction list: `{ "data": { "transactions": [...] } }`.
#[derive(Deserialize, Debug)]
struct Envelope {
    data: EnvelopeData,
}

#[derive(Deserialize, Debug)]
struct EnvelopeData {
    transactions: Vec<Value>,
}

/// Decodes a response body into the raw, unsorted transaction list.
///
/// Only a body that is not the expected envelope is an error. A row that can
/// not be decoded at all (for example one without an `id`) is logged and
/// skipped, and the remaining rows are kept.
pub fn parse_response_body(body: &str) -> Result<Vec<Transaction>, FetchError> {
    let envelope: Envelope = serde_json::from_str(body)?;

    let transactions: Vec<Transaction> = envelope
        .data
        .transactions
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value::<Transaction>(row) {
            Ok(tx) => Some(tx),
            Err(e) => {
                warn!("skipping undecodable transaction row {}: {}", index, e);
                None
            }
        })
        .collect();
    Ok(transactions)
}

/// Any source that can supply the raw transaction list.
#[allow(async_fn_in_trait)]
pub trait TransactionSource {
    /// Fetches the list in the order the source delivers it.
    async fn fetch_transactions(&self) -> Result<Vec<Transaction>, FetchError>;
}

/// Fetches transactions over HTTP with a single GET.
#[derive(Debug, Clone)]
pub struct HttpTransactionSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransactionSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &FetchConfig) -> Self {
        Self::new(config.endpoint())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl TransactionSource for HttpTransactionSource {
    async fn fetch_transactions(&self) -> Result<Vec<Transaction>, FetchError> {
        debug!("GET {}", self.endpoint);

        let resp = self.client.get(&self.endpoint).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = resp.text().await?;
        parse_response_body(&body)
    }
}

/// Fetches from `source` and logs the outcome.
///
/// The list is returned in source order; `HistoryState::complete` sorts it.
pub async fn load_transactions<S: TransactionSource>(
    source: &S,
) -> Result<Vec<Transaction>, FetchError> {
    match source.fetch_transactions().await {
        Ok(transactions) => {
            info!("fetched {} transactions", transactions.len());
            Ok(transactions)
        }
        Err(e) => {
            warn!("transaction fetch failed: {:?}", e);
            Err(e)
        }
    }
}

/// A handle that cancels a fetch started with [`cancellable`].
#[derive(Debug, Clone)]
pub struct FetchGuard(AbortHandle);

impl FetchGuard {
    /// Cancels the fetch. Its future then resolves to `None`.
    pub fn cancel(&self) {
        if !self.0.is_aborted() {
            debug!("cancelling in-flight transaction fetch");
            self.0.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.is_aborted()
    }
}

/// Wraps [`load_transactions`] so that it can be cancelled from the outside.
///
/// The returned future resolves to `None` when the guard was cancelled before
/// the fetch completed, so the caller can skip applying a stale result.
pub fn cancellable<S>(
    source: S,
) -> (
    FetchGuard,
    impl Future<Output = Option<Result<Vec<Transaction>, FetchError>>>,
)
where
    S: TransactionSource,
{
    let (handle, registration) = AbortHandle::new_pair();
    let fetch = Abortable::new(async move { load_transactions(&source).await }, registration);

    (FetchGuard(handle), async move { fetch.await.ok() })
}
