//! Login credentials.

use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "IG_API_KEY";
/// Environment variable holding the REST API username.
pub const USERNAME_VAR: &str = "IG_USERNAME";
/// Environment variable holding the REST API password.
pub const PASSWORD_VAR: &str = "IG_PASSWORD";

/// API key, username and password used to open a session.
///
/// The client never persists these; every field is held as a secret and
/// redacted from `Debug` output.
///
/// # Example
///
/// ```
/// use ig_rest_client::Credentials;
///
/// let credentials = Credentials::new("api-key", "trader", "hunter2");
/// assert!(!format!("{:?}", credentials).contains("hunter2"));
/// ```
pub struct Credentials {
    api_key: SecretString,
    username: SecretString,
    password: SecretString,
}

impl Credentials {
    /// Create credentials from their parts.
    pub fn new(
        api_key: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            username: SecretString::from(username.into()),
            password: SecretString::from(password.into()),
        }
    }

    /// Read credentials from `IG_API_KEY`, `IG_USERNAME` and `IG_PASSWORD`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the first variable that is unset
    /// or empty.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(
            required_var(API_KEY_VAR)?,
            required_var(USERNAME_VAR)?,
            required_var(PASSWORD_VAR)?,
        ))
    }

    pub(crate) fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    pub(crate) fn username(&self) -> &str {
        self.username.expose_secret()
    }

    pub(crate) fn password(&self) -> &str {
        self.password.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .field("username", &"[REDACTED]")
            .field("password", &"[REDACTED]")
            .finish()
    }
}

fn required_var(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::Config(format!("{} must be set", name))),
    }
}
