//! This crate contains the transaction history data pipeline, shared by every
//! platform build: fetch, sort, summarize, filter and format.

pub mod config;
pub mod display;
pub mod fetcher;
pub mod history_state;
pub mod normalize;
pub mod status_filter;
pub mod summary;
pub mod transaction;
pub mod tx_date;
