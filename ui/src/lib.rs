// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod components;
pub mod hooks;
mod screens;

use components::sidebar::Sidebar;
use screens::history::HistoryScreen;

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    /* --- RESET --- */
    * { box-sizing: border-box; }

    html, body {
        margin: 0;
        padding: 0;
        min-height: 100%;
        font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
        background-color: #F7FAF5;
        color: #1F2937;
    }

    /* --- APP FRAME --- */
    .app-frame { display: flex; min-height: 100vh; }
    .app-main { flex: 1; padding: 1.5rem; min-width: 0; }
    .app-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 2rem; }
    .app-header h1 { margin: 0; font-size: 1.5rem; }

    /* --- SIDEBAR --- */
    .sidebar { width: 16rem; background: #FFFFFF; padding: 1.5rem; box-shadow: 0 10px 25px rgba(0,0,0,0.08); }
    .sidebar-brand { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 2.5rem; color: #374151; }
    .sidebar-logo { color: #41BC3F; font-size: 1.5rem; }
    .sidebar-section { color: #6B7280; font-size: 0.8rem; text-transform: uppercase; }
    .sidebar-item {
        width: 100%; display: flex; align-items: center; gap: 0.75rem;
        padding: 0.75rem 1rem; border: none; border-radius: 0.75rem;
        font-weight: 500; text-align: left; cursor: pointer;
    }
    .sidebar-item.active { color: #FFFFFF; background: linear-gradient(to right, #41BC3F, #36A834); }
    @media (max-width: 768px) { .sidebar { display: none; } }

    /* --- PICO-STYLE LAYOUT --- */
    .grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); gap: 1.5rem; margin-bottom: 2rem; }
    article { background: #FFFFFF; border: 1px solid #F3F4F6; border-radius: 0.75rem; padding: 1.5rem; box-shadow: 0 10px 25px rgba(0,0,0,0.06); margin-bottom: 1.5rem; }

    /* --- SUMMARY CARDS --- */
    .stat-card { display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 0; }
    .stat-card-primary { background: #41BC3F; color: #FFFFFF; border: none; }
    .stat-card-accent { background: #D86411; color: #FFFFFF; border: none; }
    .stat-title { margin: 0; font-size: 0.875rem; font-weight: 500; opacity: 0.9; }
    .stat-value { margin: 0.5rem 0 0 0; font-size: 1.5rem; font-weight: 700; }
    .stat-value-small { font-size: 1.125rem; max-width: 150px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
    .stat-subtitle { margin: 0.25rem 0 0 0; font-size: 0.875rem; color: #6B7280; }
    .stat-icon { font-size: 1.25rem; padding: 0.5rem; }

    /* --- FILTER BAR --- */
    .filter-bar { display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center; gap: 1rem; }
    .filter-label { display: flex; align-items: center; gap: 0.5rem; font-weight: 500; color: #374151; }
    .filter-buttons { display: flex; flex-wrap: wrap; gap: 0.75rem; }
    .filter-button {
        padding: 0.5rem 1rem; border-radius: 9999px; border: 1px solid #D1D5DB;
        background: #FFFFFF; color: #374151; font-size: 0.875rem; font-weight: 500; cursor: pointer;
    }
    .filter-button:hover { background: #F3F4F6; }
    .filter-button.active { color: #FFFFFF; border-color: transparent; }

    /* --- TRANSACTION LIST --- */
    .tx-list { display: flex; flex-direction: column; gap: 1rem; }
    .tx-row {
        display: flex; justify-content: space-between; align-items: center;
        background: #FFFFFF; border: 1px solid #F3F4F6; border-radius: 0.75rem;
        padding: 1.25rem; box-shadow: 0 1px 2px rgba(0,0,0,0.05);
    }
    .tx-row:hover { box-shadow: 0 4px 12px rgba(0,0,0,0.08); }
    .tx-row p { margin: 0; }
    .tx-recipient { display: flex; align-items: center; gap: 0.5rem; font-weight: 600; }
    .tx-icon { color: #4B5563; }
    .tx-date { color: #6B7280; font-size: 0.875rem; }
    .tx-right { text-align: right; }
    .tx-amount { font-weight: 700; }
    .tx-status { font-weight: 600; font-size: 0.875rem; }
    .history-error { color: #EF4444; text-align: center; }

    /* --- SKELETON --- */
    .skeleton { animation: pulse 1.5s ease-in-out infinite; }
    .skeleton-left { display: flex; align-items: center; gap: 0.75rem; }
    .skeleton-right { display: flex; flex-direction: column; align-items: flex-end; }
    .skeleton-dot { width: 1.5rem; height: 1.5rem; border-radius: 9999px; background: #E5E7EB; }
    .skeleton-bar { height: 0.75rem; width: 6rem; margin: 0.25rem 0; border-radius: 0.25rem; background: #E5E7EB; }
    .skeleton-bar.wide { width: 8rem; height: 1rem; }
    .skeleton-bar.narrow { width: 4rem; }
    @keyframes pulse { 50% { opacity: 0.5; } }

    /* --- EMPTY STATE --- */
    .empty-state {
        display: flex; flex-direction: column; align-items: center; justify-content: center;
        padding: 2rem; text-align: center; color: #6B7280;
        border: 2px dashed #E5E7EB; border-radius: 0.75rem; margin: 1rem 0;
    }
    .empty-state-icon { font-size: 3rem; margin-bottom: 1rem; opacity: 0.8; }
    .empty-state h4 { margin: 0 0 0.5rem 0; color: #374151; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        style {
            "{app_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    rsx! {
        div {
            class: "app-frame",
            Sidebar {}
            div {
                class: "app-main",
                header {
                    class: "app-header",
                    h1 { "Transaction History" }
                }
                HistoryScreen {}
            }
        }
    }
}
