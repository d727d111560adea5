//! Rows of the transaction list, the skeleton shown while loading, and the
//! list itself.

use crate::components::empty_state::EmptyState;
use api::display::TransactionView;
use dioxus::prelude::*;

/// Number of placeholder rows shown while the fetch is in flight.
pub const SKELETON_ROWS: usize = 6;

#[component]
pub fn TransactionRow(view: TransactionView) -> Element {
    rsx! {
        div {
            class: "tx-row",
            div {
                p {
                    class: "tx-recipient",
                    if let Some(icon) = view.icon {
                        span {
                            class: "tx-icon",
                            title: "{icon.name()}",
                            "{icon.glyph()}"
                        }
                    }
                    "{view.recipient}"
                }
                p { class: "tx-date", "{view.date}" }
            }
            div {
                class: "tx-right",
                p { class: "tx-amount", "{view.amount}" }
                p {
                    class: "tx-status",
                    style: "color: {view.status_color.hex()};",
                    "{view.status_label}"
                }
            }
        }
    }
}

#[component]
pub fn TransactionList(rows: Vec<TransactionView>) -> Element {
    if rows.is_empty() {
        return rsx! {
            EmptyState {
                title: "No transactions",
                description: "Nothing matches the selected status.".to_string(),
                icon: "🧾".to_string(),
            }
        };
    }

    rsx! {
        div {
            class: "tx-list",
            for row in rows {
                TransactionRow {
                    key: "{row.key}",
                    view: row.clone(),
                }
            }
        }
    }
}

/// Pulsing placeholder rows.
#[component]
pub fn LoadingSkeleton() -> Element {
    rsx! {
        div {
            class: "tx-list",
            "aria-busy": "true",
            for i in 0..SKELETON_ROWS {
                div {
                    key: "{i}",
                    class: "tx-row skeleton",
                    div {
                        class: "skeleton-left",
                        div { class: "skeleton-dot" }
                        div {
                            div { class: "skeleton-bar wide" }
                            div { class: "skeleton-bar" }
                        }
                    }
                    div {
                        class: "skeleton-right",
                        div { class: "skeleton-bar" }
                        div { class: "skeleton-bar narrow" }
                    }
                }
            }
        }
    }
}
