//=============================================================================
// File: src/hooks/use_transaction_history.rs
//=============================================================================
use api::config::FetchConfig;
use api::fetcher;
use api::fetcher::HttpTransactionSource;
use api::history_state::HistoryState;
use dioxus::prelude::*;
use dioxus_logger::tracing::info;

/// Owns the transaction list of one history view.
///
/// The fetch is started exactly once, when the calling component mounts. The
/// returned state is already `Loading` on first render. If the component is
/// torn down before the response arrives, the fetch is cancelled and its
/// result is never written.
pub fn use_transaction_history() -> Signal<HistoryState> {
    let state = use_signal(|| {
        let mut state = HistoryState::new();
        state.begin_loading();
        state
    });

    let guard = use_hook(move || {
        let source = HttpTransactionSource::from_config(&FetchConfig::from_env());
        info!("loading transactions from {}", source.endpoint());

        let (guard, fetch) = fetcher::cancellable(source);
        let mut state = state;
        spawn(async move {
            if let Some(result) = fetch.await {
                state.write().complete(result);
            }
        });
        guard
    });

    use_drop(move || guard.cancel());

    state
}
