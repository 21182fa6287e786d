//! Implements the `Cards` trait against the Złotówka HTTP backend using `reqwest`.

use crate::api::{ApiError, Cards};
use crate::model::Transaction;
use crate::{Config, Result};
use anyhow::Context;
use std::time::Duration;
use tracing::trace;
use url::Url;

const NEXT_TRANSACTION_PATH: &str = "general-transactions/next-transaction";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Implements the `Cards` trait by calling the backend REST API. The user is
/// identified by the bearer token from the configuration, when one is set.
pub struct HttpCards {
    client: reqwest::Client,
    next_transaction_url: Url,
    bearer_token: Option<String>,
}

impl HttpCards {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Unable to create the HTTP client")?;
        let base = parse_base_url(config.backend_url())?;
        let next_transaction_url = base
            .join(NEXT_TRANSACTION_PATH)
            .context("Unable to construct the next-transaction endpoint URL")?;
        Ok(Self {
            client,
            next_transaction_url,
            bearer_token: config.bearer_token().map(|s| s.to_string()),
        })
    }
}

#[async_trait::async_trait]
impl Cards for HttpCards {
    async fn get_next_transaction(
        &self,
        is_income: bool,
    ) -> std::result::Result<Transaction, ApiError> {
        let url = next_transaction_url(&self.next_transaction_url, is_income);
        trace!("GET {url}");

        let mut request = self.client.get(url.clone());
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|source| ApiError::Unreachable {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { status });
        }

        response.json::<Transaction>().await.map_err(ApiError::Decode)
    }
}

/// Parses the configured backend base URL, ensuring a trailing slash so that
/// joining endpoint paths keeps the full base path.
fn parse_base_url(configured: &str) -> Result<Url> {
    let mut base = configured.to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    Url::parse(&base).with_context(|| format!("Invalid backend base URL '{configured}'"))
}

/// Appends the `isIncome` selector to the endpoint URL.
fn next_transaction_url(endpoint: &Url, is_income: bool) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("isIncome", if is_income { "true" } else { "false" });
    url
}
