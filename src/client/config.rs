//! Client configuration options.

use std::time::Duration;

use crate::Environment;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the HTTP transport behind a [`Session`](crate::Session).
///
/// # Example
///
/// ```
/// use ig_rest_client::{ClientConfig, Environment};
/// use std::time::Duration;
///
/// let config = ClientConfig::for_environment(Environment::Live)
///     .with_timeout(Duration::from_secs(30))
///     .with_user_agent("my-app/1.0");
/// assert_eq!(config.base_url, "https://api.ig.com/gateway/deal/");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every endpoint path is joined onto
    pub base_url: String,
    /// Request timeout passed to the transport; `None` disables it
    pub timeout: Option<Duration>,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl ClientConfig {
    /// Create a new configuration with default values (demo environment).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration targeting the given environment.
    pub fn for_environment(env: Environment) -> Self {
        Self {
            base_url: env.api_base_url().to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: format!("ig-rest-client/{} (Rust)", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Target the given environment's base URL.
    pub fn with_environment(mut self, env: Environment) -> Self {
        self.base_url = env.api_base_url().to_string();
        self
    }

    /// Target an explicit base URL, e.g. a gateway proxy.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Leave requests without a client-side timeout.
    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
