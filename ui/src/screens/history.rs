//=============================================================================
// File: src/screens/history.rs
//=============================================================================
use crate::components::filter_bar::FilterBar;
use crate::components::summary_cards::SummaryCards;
use crate::components::transaction_row::LoadingSkeleton;
use crate::components::transaction_row::TransactionList;
use crate::hooks::use_transaction_history::use_transaction_history;
use api::display::SummaryView;
use api::display::TransactionView;
use api::status_filter::StatusFilter;
use dioxus::prelude::*;

/// The transaction history view: summary cards, status filter and the list.
///
/// The summary is always computed from the full list; only the list below the
/// filter bar reacts to the selected status.
#[allow(non_snake_case)]
#[component]
pub fn HistoryScreen() -> Element {
    let history = use_transaction_history();
    let mut filter = use_signal(StatusFilter::default);

    let (summary, rows, is_loading, is_loaded, error) = {
        let state = history.read();
        let summary = SummaryView::from(&state.summary());
        let rows: Vec<TransactionView> = state
            .filtered(filter())
            .into_iter()
            .map(TransactionView::from)
            .collect();
        (
            summary,
            rows,
            state.is_loading(),
            state.status().is_loaded(),
            state.error().map(str::to_string),
        )
    };

    rsx! {
        SummaryCards { summary }

        FilterBar {
            active: filter(),
            on_select: move |selected| filter.set(selected),
        }

        if is_loading {
            LoadingSkeleton {}
        }

        if let Some(e) = error {
            p { class: "history-error", "{e}" }
        }

        if is_loaded {
            TransactionList { rows }
        }
    }
}
