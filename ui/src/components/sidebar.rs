use dioxus::prelude::*;

/// The navigation sidebar. Transactions is the only destination for now, so
/// the entry is always active.
#[component]
pub fn Sidebar() -> Element {
    rsx! {
        aside {
            class: "sidebar",
            div {
                class: "sidebar-brand",
                span { class: "sidebar-logo", "◆" }
                strong { "Ledger" }
            }
            nav {
                p { class: "sidebar-section", "Dashboard" }
                button {
                    class: "sidebar-item active",
                    "aria-current": "page",
                    span { "👛" }
                    "Transactions"
                }
            }
        }
    }
}
