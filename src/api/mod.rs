//! The `Cards` service seam and its HTTP and in-memory implementations.

mod http;
mod test_client;

use crate::model::Transaction;
use crate::Config;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub use http::HttpCards;
pub use test_client::TestCards;

/// The name of the card data service, used as the first element of cache keys.
pub const CARD_SERVICE: &str = "cardService";

/// The name of the next-transaction operation, used in cache keys.
pub const GET_NEXT_TRANSACTION: &str = "getNextTransaction";

/// Errors produced at the backend API boundary. Every variant carries a
/// human-readable message; the query layer surfaces that message to views.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend could not be reached at all.
    #[error("the backend at {url} could not be reached: {source}")]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status.
    #[error("the backend returned status {status}")]
    Status { status: reqwest::StatusCode },

    /// The backend answered 2xx but the body was not a valid transaction.
    #[error("the backend response could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),

    /// A failure with a backend-supplied message. Possibly empty, in which
    /// case views fall back to their own default message.
    #[error("{message}")]
    Backend { message: String },
}

/// Fetches dashboard card data. One network call per invocation; deduplication
/// is the query cache's job, not this layer's.
#[async_trait::async_trait]
pub trait Cards: Send + Sync {
    /// Fetches the user's next upcoming transaction. `is_income` selects
    /// between the income and expense streams.
    async fn get_next_transaction(&self, is_income: bool) -> Result<Transaction, ApiError>;
}

/// Determines whether we talk to the real backend or to in-memory test data.
/// This allows for running the whole app, top-to-bottom, without a backend.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Http,
    Test,
}

serde_plain::derive_display_from_serialize!(Mode);
serde_plain::derive_fromstr_from_deserialize!(Mode);

impl Mode {
    /// When `ZLOTOWKA_DASH_IN_TEST_MODE` is set and non-zero in length the
    /// mode is `Mode::Test`, otherwise it is `Mode::Http`.
    pub fn from_env() -> Self {
        match std::env::var("ZLOTOWKA_DASH_IN_TEST_MODE") {
            Ok(value) if !value.is_empty() => Mode::Test,
            _ => Mode::Http,
        }
    }
}

/// Creates the `Cards` implementation for the given mode.
pub fn cards(config: &Config, mode: Mode) -> crate::Result<Arc<dyn Cards>> {
    match mode {
        Mode::Http => Ok(Arc::new(HttpCards::new(config)?)),
        Mode::Test => Ok(Arc::new(TestCards::default())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_display_and_parse() {
        assert_eq!(Mode::Test.to_string(), "test");
        assert_eq!("http".parse::<Mode>().unwrap(), Mode::Http);
    }
}
