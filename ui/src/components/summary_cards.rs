use crate::components::pico::CardTone;
use crate::components::pico::Grid;
use crate::components::pico::StatCard;
use api::display::SummaryView;
use dioxus::prelude::*;

/// The three cards above the list: count, balance and latest transaction.
#[component]
pub fn SummaryCards(summary: SummaryView) -> Element {
    rsx! {
        Grid {
            StatCard {
                title: "Total Transactions",
                icon: "👛",
                tone: CardTone::Primary,
                p { class: "stat-value", "{summary.total_count}" }
            }
            StatCard {
                title: "Current Balance",
                icon: "💵",
                tone: CardTone::Accent,
                p { class: "stat-value", "{summary.balance}" }
            }
            StatCard {
                title: "Latest Transaction",
                icon: "💳",
                p {
                    class: "stat-value stat-value-small",
                    title: "{summary.latest_recipient}",
                    "{summary.latest_recipient}"
                }
                p { class: "stat-subtitle", "{summary.latest_date}" }
            }
        }
    }
}
