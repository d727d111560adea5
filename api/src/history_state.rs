//! The state owned by one transaction history view.

use dioxus_logger::tracing::warn;

use crate::fetcher::FetchError;
use crate::normalize::sort_newest_first;
use crate::status_filter::StatusFilter;
use crate::summary::Summary;
use crate::transaction::Transaction;

/// Where the one-shot fetch of a view currently stands.
///
/// `Idle -> Loading -> Loaded | Errored`. Both final states are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumIs)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// Raw transaction list plus fetch lifecycle for a single view instance.
///
/// Derived data (summary, filtered rows) is computed on demand and never
/// stored, so it can not drift from the list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistoryState {
    status: LoadStatus,
    transactions: Vec<Transaction>,
    error: Option<String>,
}

impl HistoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves `Idle -> Loading`. Returns `false` and changes nothing otherwise.
    pub fn begin_loading(&mut self) -> bool {
        if !self.status.is_idle() {
            warn!("ignoring fetch start while {:?}", self.status);
            return false;
        }
        self.status = LoadStatus::Loading;
        true
    }

    /// Applies the outcome of the fetch, moving `Loading -> Loaded | Errored`.
    ///
    /// Returns `false` and changes nothing when no fetch is in progress.
    pub fn complete(&mut self, result: Result<Vec<Transaction>, FetchError>) -> bool {
        if !self.status.is_loading() {
            warn!("ignoring fetch completion while {:?}", self.status);
            return false;
        }

        match result {
            Ok(mut transactions) => {
                sort_newest_first(&mut transactions);
                self.transactions = transactions;
                self.error = None;
                self.status = LoadStatus::Loaded;
            }
            Err(e) => {
                self.error = Some(e.to_string());
                self.status = LoadStatus::Errored;
            }
        }
        true
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// The loading flag: `true` only while the fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    /// The complete list, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The message to show in place of the list, if the fetch failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Summary figures over the complete list.
    pub fn summary(&self) -> Summary<'_> {
        Summary::of(&self.transactions)
    }

    /// The rows to show for `filter`.
    pub fn filtered(&self, filter: StatusFilter) -> Vec<&Transaction> {
        filter.apply(&self.transactions)
    }
}
