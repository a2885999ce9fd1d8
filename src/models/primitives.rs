//! Primitive types and newtypes for type-safe API interactions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A strongly-typed IG account identifier.
///
/// # Example
///
/// ```
/// use ig_rest_client::AccountId;
///
/// let account = AccountId::new("ABC123");
/// println!("Account: {}", account);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Create a new account identifier from a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the account identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for AccountId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Endpoint version, sent in the `Version` request header.
///
/// IG versions each endpoint independently; the session endpoints use
/// version 1 except for login, which uses version 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ApiVersion(u8);

impl ApiVersion {
    /// Version 1.
    pub const V1: ApiVersion = ApiVersion(1);
    /// Version 2.
    pub const V2: ApiVersion = ApiVersion(2);

    /// Create a new API version.
    ///
    /// # Errors
    ///
    /// Returns an error for version 0.
    pub fn new(version: u8) -> crate::Result<Self> {
        if version == 0 {
            return Err(crate::Error::InvalidInput(
                "API version must be at least 1".to_string(),
            ));
        }
        Ok(ApiVersion(version))
    }

    /// Get the version number.
    pub fn get(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trading environment of the IG REST API.
///
/// # Example
///
/// ```
/// use ig_rest_client::Environment;
///
/// let env = Environment::Demo;
/// println!("API URL: {}", env.api_base_url());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Demo environment - simulated trading.
    #[default]
    Demo,
    /// Live environment - real trading with real money.
    Live,
}

impl Environment {
    /// Get the base URL for REST API requests.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Environment::Demo => "https://demo-api.ig.com/gateway/deal/",
            Environment::Live => "https://api.ig.com/gateway/deal/",
        }
    }

    /// Returns `true` if this is the live environment.
    pub fn is_live(&self) -> bool {
        matches!(self, Environment::Live)
    }

    /// Returns `true` if this is the demo environment.
    pub fn is_demo(&self) -> bool {
        matches!(self, Environment::Demo)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Demo => write!(f, "demo"),
            Environment::Live => write!(f, "live"),
        }
    }
}

impl FromStr for Environment {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "demo" => Ok(Environment::Demo),
            "live" | "prod" | "production" => Ok(Environment::Live),
            other => Err(crate::Error::Config(format!(
                "Unknown environment: {}. Expected \"demo\" or \"live\"",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id() {
        let account = AccountId::new("ABC123");
        assert_eq!(account.as_str(), "ABC123");
        assert_eq!(account.to_string(), "ABC123");

        let from_str: AccountId = "XYZ".into();
        assert_eq!(from_str.as_ref(), "XYZ");
    }

    #[test]
    fn test_api_version() {
        assert_eq!(ApiVersion::new(3).unwrap().get(), 3);
        assert!(ApiVersion::new(0).is_err());
        assert_eq!(ApiVersion::V2.to_string(), "2");
    }

    #[test]
    fn test_environment_urls() {
        assert_eq!(
            Environment::Live.api_base_url(),
            "https://api.ig.com/gateway/deal/"
        );
        assert_eq!(
            Environment::Demo.api_base_url(),
            "https://demo-api.ig.com/gateway/deal/"
        );
        assert_eq!(Environment::default(), Environment::Demo);
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!("demo".parse::<Environment>().unwrap(), Environment::Demo);
        assert_eq!("LIVE".parse::<Environment>().unwrap(), Environment::Live);
        assert_eq!(" production ".parse::<Environment>().unwrap(), Environment::Live);
        assert!("staging".parse::<Environment>().is_err());
    }
}
