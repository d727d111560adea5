//! A set of reusable, lifetime-free Dioxus layout components in the Pico.css style.
//! The matching rules live in the stylesheet embedded by `App`.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A responsive grid layout.
/// Wraps children in a `<div class="grid">`.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

#[derive(PartialEq, Clone, Default)]
pub enum CardTone {
    #[default]
    Plain,
    Primary,
    Accent,
}

impl CardTone {
    fn to_class(&self) -> &'static str {
        match self {
            CardTone::Plain => "stat-card",
            CardTone::Primary => "stat-card stat-card-primary",
            CardTone::Accent => "stat-card stat-card-accent",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct StatCardProps {
    title: String,
    icon: String,
    #[props(default)]
    tone: CardTone,
    children: Element,
}

/// A summary card: a small title, a highlighted value, and an icon on the right.
pub fn StatCard(props: StatCardProps) -> Element {
    rsx! {
        article {
            class: "{props.tone.to_class()}",
            div {
                p { class: "stat-title", "{props.title}" }
                {props.children}
            }
            span { class: "stat-icon", "{props.icon}" }
        }
    }
}
