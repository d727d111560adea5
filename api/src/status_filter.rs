//! Client-side restriction of the transaction list by status.

use crate::transaction::Transaction;
use crate::transaction::TransactionStatus;

/// The status filter offered to the user, in button order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum StatusFilter {
    #[default]
    All,
    Success,
    Pending,
    Failed,
}

impl StatusFilter {
    /// The button label, e.g. `"Pending"`.
    pub fn label(&self) -> &'static str {
        self.into()
    }

    /// Returns `true` if `tx` passes this filter.
    pub fn matches(&self, tx: &Transaction) -> bool {
        match self {
            Self::All => true,
            Self::Success => tx.status.kind() == &TransactionStatus::Success,
            Self::Pending => tx.status.kind() == &TransactionStatus::Pending,
            Self::Failed => tx.status.kind() == &TransactionStatus::Failed,
        }
    }

    /// Borrows the transactions that pass this filter, preserving order.
    ///
    /// The returned references point into `transactions`; nothing is copied
    /// and the input is left as it was.
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|tx| self.matches(tx)).collect()
    }
}
