//! Where the transaction list is fetched from.

use std::env;

/// The endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str =
    "https://f776e1f2-7f74-4d4d-9ce7-5dfbfbf8b2b2.mock.pstmn.io/test-api/transactions/";

/// Name of the variable that overrides the endpoint.
pub const ENDPOINT_VAR: &str = "TRANSACTIONS_API_URL";

/// Settings for the transaction fetch.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FetchConfig {
    endpoint: String,
}

impl FetchConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Creates a FetchConfig from the environment, with an in-code default.
    ///
    /// Lookup order:
    /// - `TRANSACTIONS_API_URL` at runtime (native builds).
    /// - `TRANSACTIONS_API_URL` at compile time, which is how wasm builds are configured.
    /// - [`DEFAULT_ENDPOINT`].
    ///
    /// Empty values are ignored.
    pub fn from_env() -> Self {
        let endpoint = env::var(ENDPOINT_VAR)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| {
                option_env!("TRANSACTIONS_API_URL")
                    .filter(|s| !s.trim().is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Self::new(endpoint)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
