//! Tradier REST API client.
//!
//! Provides bearer-authenticated access to the account endpoints used by
//! options-desk. One plain outbound call per operation: no retry, no
//! backoff, no caching.
//!
//! # Example
//!
//! ```ignore
//! use options_desk_tradier::{TradierClient, TradierClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Reads TRADIER_ACCOUNT_ID / TRADIER_ACCESS_TOKEN from the environment
//!     let client = TradierClient::production()?;
//!
//!     let balances = client.get_balances().await?;
//!     println!("{} balance fields", balances.len());
//!
//!     Ok(())
//! }
//! ```

use crate::auth::{TradierAuth, TradierAuthConfig};
use crate::error::{Result, TradierError};
use reqwest::Client;
use serde_json::Value;

// =============================================================================
// Constants
// =============================================================================

/// Tradier production API base URL.
pub const TRADIER_PROD_URL: &str = "https://api.tradier.com/v1";

/// Tradier sandbox API base URL.
pub const TRADIER_SANDBOX_URL: &str = "https://sandbox.tradier.com/v1";

/// Account balances as reported by Tradier.
///
/// The schema is owned entirely by the brokerage; the mapping is passed
/// through to display layers without interpretation.
pub type Balances = serde_json::Map<String, Value>;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for the Tradier client.
#[derive(Debug, Clone)]
pub struct TradierClientConfig {
    /// Base URL for the API.
    pub base_url: String,

    /// Authentication configuration.
    pub auth_config: TradierAuthConfig,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for TradierClientConfig {
    fn default() -> Self {
        Self {
            base_url: TRADIER_PROD_URL.to_string(),
            auth_config: TradierAuthConfig::default(),
            timeout_secs: 30,
        }
    }
}

impl TradierClientConfig {
    /// Creates a configuration for production.
    #[must_use]
    pub fn production() -> Self {
        Self::default()
    }

    /// Creates a configuration for the sandbox environment.
    #[must_use]
    pub fn sandbox() -> Self {
        Self {
            base_url: TRADIER_SANDBOX_URL.to_string(),
            auth_config: TradierAuthConfig::sandbox(),
            ..Default::default()
        }
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the authentication configuration.
    #[must_use]
    pub fn with_auth_config(mut self, config: TradierAuthConfig) -> Self {
        self.auth_config = config;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

// =============================================================================
// TradierClient
// =============================================================================

/// Tradier REST API client.
///
/// All requests carry a bearer token and ask for JSON.
pub struct TradierClient {
    /// Configuration.
    config: TradierClientConfig,

    /// HTTP client.
    http: Client,

    /// Credentials.
    auth: TradierAuth,
}

impl std::fmt::Debug for TradierClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TradierClient")
            .field("base_url", &self.config.base_url)
            .field("account_id", &self.auth.account_id())
            .finish_non_exhaustive()
    }
}

impl TradierClient {
    /// Creates a new client, reading credentials from the environment
    /// variables named by the configuration.
    ///
    /// # Errors
    /// Returns error if credentials are missing or the HTTP client
    /// cannot be built.
    pub fn new(config: TradierClientConfig) -> Result<Self> {
        let auth = TradierAuth::from_env(&config.auth_config)?;
        Self::with_auth(config, auth)
    }

    /// Creates a new client with explicit credentials.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn with_auth(config: TradierClientConfig, auth: TradierAuth) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TradierError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, http, auth })
    }

    /// Creates a client for production.
    ///
    /// # Errors
    /// Returns error if credentials are missing from the environment.
    pub fn production() -> Result<Self> {
        Self::new(TradierClientConfig::production())
    }

    /// Creates a client for the sandbox environment.
    ///
    /// # Errors
    /// Returns error if credentials are missing from the environment.
    pub fn sandbox() -> Result<Self> {
        Self::new(TradierClientConfig::sandbox())
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Sets a custom base URL (useful for testing).
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Makes an authenticated GET request.
    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.config.base_url, path);

        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header("Authorization", self.auth.bearer_header())
            .header("Accept", "application/json")
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handles an API response, collapsing every non-success status into
    /// a single error path carrying the status code and raw body.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(TradierError::api(status.as_u16(), text));
        }

        let body = response.json::<T>().await?;
        Ok(body)
    }

    // =========================================================================
    // Account Endpoints
    // =========================================================================

    /// Gets account balances.
    ///
    /// Returns the `balances` field of the response as an opaque mapping,
    /// defaulting to an empty mapping when the field is absent.
    ///
    /// # Errors
    /// Returns error if the API call fails or returns a non-success status.
    pub async fn get_balances(&self) -> Result<Balances> {
        let path = format!("/accounts/{}/balances", self.auth.account_id());

        let body: Value = self.get(&path).await?;

        Ok(body
            .get("balances")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default())
    }

    /// Gets open positions.
    ///
    /// The `positions` field is passed through untouched. Tradier reports
    /// an empty book as the literal string `"null"`, which callers see
    /// as-is.
    ///
    /// # Errors
    /// Returns error if the API call fails or returns a non-success status.
    pub async fn get_positions(&self) -> Result<Value> {
        let path = format!("/accounts/{}/positions", self.auth.account_id());

        let body: Value = self.get(&path).await?;

        Ok(body.get("positions").cloned().unwrap_or(Value::Null))
    }
}
