//! The components module contains the shared building blocks of the
//! transaction history view.
pub mod empty_state;
pub mod filter_bar;
pub mod pico;
pub mod sidebar;
pub mod summary_cards;
pub mod transaction_row;
