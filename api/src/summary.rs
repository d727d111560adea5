//! Summary figures shown above the transaction list.

use rust_decimal::Decimal;

use crate::transaction::Transaction;

/// The currency shown on the balance card when there are no transactions.
pub const FALLBACK_CURRENCY: &str = "USD";

/// Figures derived from the complete, newest-first transaction list.
///
/// These are always computed from the unfiltered list, so they stay the same
/// while the user switches status filters.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary<'a> {
    pub count: usize,
    /// Sum of `cash_in` amounts minus sum of `cash_out` amounts.
    pub total_balance: Decimal,
    pub latest: Option<&'a Transaction>,
}

impl<'a> Summary<'a> {
    /// Derives the summary from a list already sorted newest first.
    pub fn of(transactions: &'a [Transaction]) -> Self {
        Self {
            count: transactions.len(),
            total_balance: transactions.iter().map(Transaction::signed_amount).sum(),
            latest: transactions.first(),
        }
    }

    /// The currency label for the balance card.
    pub fn display_currency(&self) -> &'a str {
        self.latest
            .map(|tx| tx.currency.as_str())
            .unwrap_or(FALLBACK_CURRENCY)
    }
}
