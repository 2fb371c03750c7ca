use std::time::Duration;

use tracing::debug;

use crate::explorer::envelope::ContractEnvelope;
use crate::utils::{AuditError, Result};

/// Etherscan API v2 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.etherscan.io/v2/api";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Chain-explorer API client.
///
/// Single-shot GET per call: no retries, no caching. Concurrency safety is
/// the caller's responsibility.
pub struct ExplorerClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl ExplorerClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Point the client at a different endpoint (tests use a local server).
    pub fn with_base_url(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Fetch contract data from the explorer.
    ///
    /// Fails with `InvalidAddress` before any network call when `address`
    /// is empty. Transport failures and timeouts map to `Transport`,
    /// non-200 responses to `HttpStatus`, malformed bodies to `Decode`.
    pub async fn fetch(
        &self,
        address: &str,
        chain: &str,
        module: &str,
        action: &str,
    ) -> Result<ContractEnvelope> {
        if address.is_empty() {
            return Err(AuditError::InvalidAddress);
        }

        let mut query = vec![
            ("chainid", chain),
            ("module", module),
            ("action", action),
            ("address", address),
        ];
        if let Some(key) = self.api_key.as_deref() {
            query.push(("apikey", key));
        }

        debug!(%address, %chain, %module, %action, "fetching contract from explorer");

        let response = self
            .http
            .get(&self.base_url)
            .query(&query)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuditError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let envelope: ContractEnvelope = serde_json::from_str(&body)?;

        debug!(status = %envelope.status, records = envelope.result.len(), "explorer response decoded");

        Ok(envelope)
    }

    /// Fetch contract source code and metadata.
    pub async fn fetch_source(&self, address: &str, chain: &str) -> Result<ContractEnvelope> {
        self.fetch(address, chain, "contract", "getsourcecode").await
    }
}
