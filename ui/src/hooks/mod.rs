pub mod use_transaction_history;
