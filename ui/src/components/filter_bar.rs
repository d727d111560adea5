use crate::components::pico::Card;
use api::status_filter::StatusFilter;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

/// Background of the active filter button.
fn accent(filter: StatusFilter) -> &'static str {
    match filter {
        StatusFilter::All => "#4B5563",
        StatusFilter::Success => "#41BC3F",
        StatusFilter::Pending => "#F97316",
        StatusFilter::Failed => "#DC2626",
    }
}

/// Four mutually exclusive buttons selecting the status filter.
#[component]
pub fn FilterBar(active: StatusFilter, on_select: EventHandler<StatusFilter>) -> Element {
    rsx! {
        Card {
            div {
                class: "filter-bar",
                div {
                    class: "filter-label",
                    span { "⏷" }
                    "Filter by status:"
                }
                div {
                    class: "filter-buttons",
                    for filter in StatusFilter::iter() {
                        button {
                            key: "{filter}",
                            class: if filter == active { "filter-button active" } else { "filter-button" },
                            style: if filter == active { format!("background-color: {};", accent(filter)) } else { String::new() },
                            "aria-pressed": if filter == active { "true" } else { "false" },
                            onclick: move |_| on_select.call(filter),
                            "{filter.label()}"
                        }
                    }
                }
            }
        }
    }
}
