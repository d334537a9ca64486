//! Main REST client implementation

use crate::auth::{self, Credentials};
use crate::endpoints::{AccountEndpoints, FundingEndpoints, MarketEndpoints};
use crate::error::{RestError, RestResult};
use crate::types::{Balance, MarketSummary, Order, Transaction, WithdrawalInfo};
use reqwest::header::{HeaderMap, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, Request, StatusCode};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, info};

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Production API origin
const DEFAULT_BASE_URL: &str = "https://www.southxchange.com/api";

/// SouthXchange REST API client
///
/// Provides access to both public and private endpoints. The client is safe
/// to share across tasks; every call runs independently and a failed call
/// does not poison client state.
///
/// # Example
///
/// ```no_run
/// use southxchange_rest::{Credentials, SouthXchangeClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = SouthXchangeClient::new();
///     let markets = client.get_market_summaries().await?;
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = SouthXchangeClient::with_credentials(creds);
///     let balances = auth_client.get_balances().await?;
///
///     Ok(())
/// }
/// ```
pub struct SouthXchangeClient {
    http_client: Client,
    base_url: String,
    credentials: Option<Credentials>,
    timeout: Duration,
    user_agent: Option<String>,
    debug: AtomicBool,
}

impl SouthXchangeClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> Self {
        let mut config = ClientConfig::default();
        config.credentials = Some(credentials);
        Self::with_config(config)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        // The timeout is enforced by the executor's race; the pool carries
        // none of its own.
        let http_client = Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        let timeout = if config.timeout.is_zero() {
            DEFAULT_TIMEOUT
        } else {
            config.timeout
        };

        info!("Created SouthXchange REST client");

        Self {
            http_client,
            base_url: config.base_url,
            credentials: config.credentials,
            timeout,
            user_agent: config.user_agent,
            debug: AtomicBool::new(config.debug),
        }
    }

    /// Check if the client has a complete key/secret pair for private
    /// endpoints
    pub fn has_credentials(&self) -> bool {
        self.credentials
            .as_ref()
            .is_some_and(Credentials::is_complete)
    }

    /// Enable or disable request/response tracing.
    ///
    /// May be toggled while calls are in flight; a concurrent toggle is a
    /// benign race and last-write visibility is not guaranteed.
    pub fn set_debug(&self, enabled: bool) {
        self.debug.store(enabled, Ordering::Relaxed);
    }

    fn debug_enabled(&self) -> bool {
        self.debug.load(Ordering::Relaxed)
    }

    // ========================================================================
    // Request executor
    // ========================================================================

    /// Prepare, sign and dispatch one HTTP request.
    ///
    /// POST payloads get `key` and `nonce` injected before serialization;
    /// other methods send an empty body. The call races against the
    /// configured timeout; on a lost race the in-flight request is abandoned
    /// to the transport's own lifecycle rather than canceled.
    ///
    /// Status 200 and 401 both return the raw body: a 401 carries the
    /// service's own error payload, which the decoding caller surfaces. Any
    /// other status becomes [`RestError::Api`].
    pub(crate) async fn execute(
        &self,
        method: Method,
        resource: &str,
        payload: Option<HashMap<String, String>>,
        auth_needed: bool,
    ) -> RestResult<Vec<u8>> {
        let url = if resource.starts_with("http") {
            resource.to_string()
        } else {
            format!("{}/{}", self.base_url, resource)
        };

        let mut payload = payload.unwrap_or_default();
        let body = if method == Method::POST {
            let api_key = self
                .credentials
                .as_ref()
                .map(|c| c.api_key().to_string())
                .unwrap_or_default();
            payload.insert("key".to_string(), api_key);
            payload.insert("nonce".to_string(), auth::nonce());
            serde_json::to_vec(&payload)?
        } else {
            Vec::new()
        };

        let mut request = self.http_client.request(method.clone(), &url);
        if method == Method::POST || method == Method::PUT {
            request = request.header(CONTENT_TYPE, "application/json;charset=utf-8");
        }
        // A strict `application/json` Accept makes the upstream edge
        // protection answer with a challenge page instead of JSON.
        request = request.header(ACCEPT, "*/*");
        if let Some(agent) = &self.user_agent {
            request = request.header(USER_AGENT, agent);
        }

        if auth_needed {
            let credentials = self
                .credentials
                .as_ref()
                .filter(|c| c.is_complete())
                .ok_or(RestError::MissingCredentials)?;
            request = request.header("Hash", credentials.sign(&body));
        }

        let request = request.body(body).build()?;
        if self.debug_enabled() {
            dump_request(&request);
        }

        let http_client = self.http_client.clone();
        let call = tokio::spawn(async move { http_client.execute(request).await });
        let response = match tokio::time::timeout(self.timeout, call).await {
            Ok(joined) => joined.expect("request task panicked")?,
            // The abandoned call keeps running until the transport itself
            // gives up on it.
            Err(_) => return Err(RestError::Timeout),
        };

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        if self.debug_enabled() {
            dump_response(status, &headers, &body);
        }

        if status != StatusCode::OK && status != StatusCode::UNAUTHORIZED {
            let text = String::from_utf8_lossy(&body);
            return Err(RestError::Api {
                status,
                body: text.trim_matches('"').to_string(),
            });
        }

        Ok(body)
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(self)
    }

    /// Get the last 24-hour summary of all active markets
    pub async fn get_market_summaries(&self) -> RestResult<Vec<MarketSummary>> {
        self.market().get_market_summaries().await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> AccountEndpoints<'_> {
        AccountEndpoints::new(self)
    }

    /// Get all balances of the account
    pub async fn get_balances(&self) -> RestResult<Vec<Balance>> {
        self.account().get_balances().await
    }

    /// Get currently open orders
    pub async fn get_open_orders(&self) -> RestResult<Vec<Order>> {
        self.account().get_open_orders().await
    }

    /// Get a page of the account's transaction history
    pub async fn get_transactions(
        &self,
        page_index: u64,
        page_size: u32,
        sort_field: Option<&str>,
        descending: bool,
    ) -> RestResult<Vec<Transaction>> {
        self.account()
            .get_transactions(page_index, page_size, sort_field, descending)
            .await
    }

    // ========================================================================
    // Private Funding Endpoints
    // ========================================================================

    /// Get funding endpoints (requires credentials)
    pub fn funding(&self) -> FundingEndpoints<'_> {
        FundingEndpoints::new(self)
    }

    /// Generate or retrieve a deposit address for a currency
    pub async fn get_deposit_address(&self, currency: &str) -> RestResult<String> {
        self.funding().get_deposit_address(currency).await
    }

    /// Withdraw funds to an address
    pub async fn withdraw(
        &self,
        address: &str,
        currency: &str,
        amount: Decimal,
    ) -> RestResult<WithdrawalInfo> {
        self.funding().withdraw(address, currency, amount).await
    }
}

impl Default for SouthXchangeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SouthXchangeClient {
    fn clone(&self) -> Self {
        Self {
            http_client: self.http_client.clone(),
            base_url: self.base_url.clone(),
            credentials: self.credentials.clone(),
            timeout: self.timeout,
            user_agent: self.user_agent.clone(),
            debug: AtomicBool::new(self.debug_enabled()),
        }
    }
}

impl std::fmt::Debug for SouthXchangeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SouthXchangeClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.has_credentials())
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn dump_request(request: &Request) {
    let mut dump = format!("{} {}\n", request.method(), request.url());
    for (name, value) in request.headers() {
        dump.push_str(&format!(
            "{}: {}\n",
            name,
            value.to_str().unwrap_or("<opaque>")
        ));
    }
    if let Some(body) = request.body().and_then(|b| b.as_bytes()) {
        dump.push_str(&String::from_utf8_lossy(body));
    }
    debug!("outgoing request:\n{}", dump);
}

fn dump_response(status: StatusCode, headers: &HeaderMap, body: &[u8]) {
    let mut dump = format!("{}\n", status);
    for (name, value) in headers {
        dump.push_str(&format!(
            "{}: {}\n",
            name,
            value.to_str().unwrap_or("<opaque>")
        ));
    }
    dump.push_str(&String::from_utf8_lossy(body));
    debug!("incoming response:\n{}", dump);
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Request timeout; zero means unset and falls back to 30 seconds
    pub timeout: Duration,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// API origin relative resource names are joined under
    pub base_url: String,
    /// Start with request/response tracing enabled
    pub debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            debug: false,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Override the API origin (e.g. for a test double)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Start with request/response tracing enabled
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_without_credentials() {
        let client = SouthXchangeClient::new();
        assert!(!client.has_credentials());
    }

    #[test]
    fn test_empty_credentials_do_not_count() {
        let client = SouthXchangeClient::with_credentials(Credentials::new("", ""));
        assert!(!client.has_credentials());
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_timeout(Duration::from_secs(60))
            .with_user_agent("test-agent")
            .with_base_url("http://localhost:1234");

        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
        assert_eq!(config.base_url, "http://localhost:1234");
    }

    #[test]
    fn test_zero_timeout_falls_back_to_default() {
        let config = ClientConfig::new().with_timeout(Duration::ZERO);
        let client = SouthXchangeClient::with_config(config);
        assert_eq!(client.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_debug_flag_toggles_through_shared_reference() {
        let client = SouthXchangeClient::new();
        assert!(!client.debug_enabled());
        client.set_debug(true);
        assert!(client.debug_enabled());
        client.set_debug(false);
        assert!(!client.debug_enabled());
    }

    #[tokio::test]
    async fn test_absolute_resource_bypasses_base_url() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/status")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        // Base URL points nowhere reachable; the absolute resource wins.
        let config = ClientConfig::new().with_base_url("http://127.0.0.1:1");
        let client = SouthXchangeClient::with_config(config);
        let raw = client
            .execute(Method::GET, &format!("{}/status", server.url()), None, false)
            .await
            .unwrap();

        assert_eq!(raw, b"[]");
        mock.assert_async().await;
    }
}
