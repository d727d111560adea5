//! Ordering of a freshly fetched transaction list.

use crate::transaction::Transaction;

/// Sorts `transactions` newest first, in place.
///
/// The sort is stable: transactions with equal dates keep their input order.
/// Rows whose date failed to parse go to the end.
pub fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| a.date.cmp_newest_first(&b.date));
}
