//! Bearer-token authentication for the Tradier API.
//!
//! Credentials are loaded from environment variables. The access token
//! is held in a [`SecretString`] and is NEVER logged; it only leaves the
//! process inside the `Authorization` header.

use crate::error::{Result, TradierError};
use secrecy::{ExposeSecret, SecretString};

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for Tradier authentication.
#[derive(Debug, Clone)]
pub struct TradierAuthConfig {
    /// Environment variable name for the account identifier.
    pub account_id_env: String,

    /// Environment variable name for the access token.
    pub access_token_env: String,
}

impl Default for TradierAuthConfig {
    fn default() -> Self {
        Self {
            account_id_env: "TRADIER_ACCOUNT_ID".to_string(),
            access_token_env: "TRADIER_ACCESS_TOKEN".to_string(),
        }
    }
}

impl TradierAuthConfig {
    /// Creates config for the sandbox environment.
    #[must_use]
    pub fn sandbox() -> Self {
        Self {
            account_id_env: "TRADIER_SANDBOX_ACCOUNT_ID".to_string(),
            access_token_env: "TRADIER_SANDBOX_ACCESS_TOKEN".to_string(),
        }
    }

    /// Sets custom environment variable names.
    #[must_use]
    pub fn with_env_vars(
        mut self,
        account_id_env: impl Into<String>,
        access_token_env: impl Into<String>,
    ) -> Self {
        self.account_id_env = account_id_env.into();
        self.access_token_env = access_token_env.into();
        self
    }
}

// =============================================================================
// TradierAuth
// =============================================================================

/// Authenticated identity for Tradier API requests.
pub struct TradierAuth {
    /// Account identifier, used in request paths.
    account_id: String,

    /// Bearer access token.
    access_token: SecretString,
}

impl std::fmt::Debug for TradierAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TradierAuth")
            .field("account_id", &self.account_id)
            .finish_non_exhaustive()
    }
}

impl TradierAuth {
    /// Creates an identity directly from an account id and token.
    ///
    /// # Errors
    /// Returns an error if either credential is empty or the account id
    /// contains characters that are not valid in a URL path segment.
    pub fn new(account_id: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        let account_id = account_id.into();
        Self::validate_account_id(&account_id)?;

        let access_token = access_token.into();
        if access_token.is_empty() {
            return Err(TradierError::configuration("access token cannot be empty"));
        }

        Ok(Self {
            account_id,
            access_token: SecretString::from(access_token),
        })
    }

    /// Loads credentials from the environment variables named in `config`.
    ///
    /// # Errors
    /// Returns an error if either variable is unset or invalid.
    pub fn from_env(config: &TradierAuthConfig) -> Result<Self> {
        let account_id = std::env::var(&config.account_id_env).map_err(|_| {
            TradierError::configuration(format!("{} is not set", config.account_id_env))
        })?;

        let access_token = std::env::var(&config.access_token_env).map_err(|_| {
            TradierError::configuration(format!("{} is not set", config.access_token_env))
        })?;

        Self::new(account_id, access_token)
    }

    /// Returns the account identifier.
    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Builds the `Authorization` header value.
    #[must_use]
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.access_token.expose_secret())
    }

    /// Validates an account id so it cannot smuggle path segments into
    /// request URLs.
    fn validate_account_id(account_id: &str) -> Result<()> {
        if account_id.is_empty() {
            return Err(TradierError::configuration("account id cannot be empty"));
        }

        if !account_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(TradierError::configuration(format!(
                "invalid account id: must contain only alphanumeric, hyphen, or underscore: {}",
                account_id
            )));
        }

        if account_id.len() > 64 {
            return Err(TradierError::configuration(format!(
                "invalid account id: exceeds maximum length of 64: {}",
                account_id.len()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_config_default_env_vars() {
        let config = TradierAuthConfig::default();
        assert_eq!(config.account_id_env, "TRADIER_ACCOUNT_ID");
        assert_eq!(config.access_token_env, "TRADIER_ACCESS_TOKEN");
    }

    #[test]
    fn auth_config_sandbox_env_vars() {
        let config = TradierAuthConfig::sandbox();
        assert_eq!(config.account_id_env, "TRADIER_SANDBOX_ACCOUNT_ID");
        assert_eq!(config.access_token_env, "TRADIER_SANDBOX_ACCESS_TOKEN");
    }

    #[test]
    fn auth_config_custom_env_vars() {
        let config = TradierAuthConfig::default().with_env_vars("MY_ACCOUNT", "MY_TOKEN");
        assert_eq!(config.account_id_env, "MY_ACCOUNT");
        assert_eq!(config.access_token_env, "MY_TOKEN");
    }

    #[test]
    fn bearer_header_wraps_token() {
        let auth = TradierAuth::new("VA000001", "secret-token").unwrap();
        assert_eq!(auth.bearer_header(), "Bearer secret-token");
        assert_eq!(auth.account_id(), "VA000001");
    }

    #[test]
    fn debug_does_not_leak_token() {
        let auth = TradierAuth::new("VA000001", "secret-token").unwrap();
        let debug = format!("{auth:?}");
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("VA000001"));
    }

    #[test]
    fn empty_credentials_rejected() {
        assert!(TradierAuth::new("", "token").is_err());
        assert!(TradierAuth::new("VA000001", "").is_err());
    }

    #[test]
    fn account_id_rejects_path_traversal() {
        assert!(TradierAuth::new("../portfolio", "token").is_err());
        assert!(TradierAuth::new("a/b", "token").is_err());
        assert!(TradierAuth::new("a b", "token").is_err());
    }

    #[test]
    fn account_id_rejects_too_long() {
        let long_id = "A".repeat(65);
        assert!(TradierAuth::new(long_id, "token").is_err());
    }

    #[test]
    fn from_env_reads_variables() {
        // Unique variable names so parallel tests cannot interfere.
        let config =
            TradierAuthConfig::default().with_env_vars("TEST_TRADIER_ACCT_A", "TEST_TRADIER_TOK_A");
        std::env::set_var("TEST_TRADIER_ACCT_A", "VA123456");
        std::env::set_var("TEST_TRADIER_TOK_A", "tok");

        let auth = TradierAuth::from_env(&config).unwrap();
        assert_eq!(auth.account_id(), "VA123456");

        std::env::remove_var("TEST_TRADIER_ACCT_A");
        std::env::remove_var("TEST_TRADIER_TOK_A");
    }

    #[test]
    fn from_env_missing_variable_is_configuration_error() {
        let config = TradierAuthConfig::default()
            .with_env_vars("TEST_TRADIER_ACCT_MISSING", "TEST_TRADIER_TOK_MISSING");
        let err = TradierAuth::from_env(&config).unwrap_err();
        assert!(matches!(err, TradierError::Configuration(_)));
        assert!(err.to_string().contains("TEST_TRADIER_ACCT_MISSING"));
    }
}
