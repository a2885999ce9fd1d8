//! Error types for the IG REST client.
//!
//! Transport failures are surfaced unchanged as [`Error::Http`]; non-2xx
//! responses carry the provider's status, `errorCode` and raw body.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for IG REST operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for all session operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An authenticated call returned a non-2xx response
    #[error("API error: status={status}, code={code:?}")]
    Api {
        /// HTTP status code
        status: u16,
        /// `errorCode` from the response body, if any
        code: Option<String>,
        /// Raw response body for debugging
        body: Value,
    },

    /// The login call returned a non-2xx response
    #[error("Login failed: status={status}, code={code:?}")]
    LoginFailed {
        /// HTTP status code
        status: u16,
        /// `errorCode` from the response body, if any
        code: Option<String>,
        /// Raw response body for debugging
        body: Value,
    },

    /// No session tokens are held; log in first
    #[error("Session is not authenticated")]
    NotAuthenticated,

    /// Login succeeded but a required token header was absent
    #[error("Missing response header: {0}")]
    MissingHeader(&'static str),

    /// The server reports a different account than the session targets
    #[error("Account mismatch: expected {expected}, server reported {actual}")]
    AccountMismatch {
        /// Account the session was opened for
        expected: String,
        /// Account in the server's response
        actual: String,
    },

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Returns `true` if this is an authentication-related error.
    ///
    /// # Example
    ///
    /// ```
    /// use ig_rest_client::Error;
    ///
    /// assert!(Error::NotAuthenticated.is_auth_error());
    /// ```
    pub fn is_auth_error(&self) -> bool {
        match self {
            Error::LoginFailed { .. } | Error::NotAuthenticated | Error::MissingHeader(_) => true,
            Error::Api { status, .. } => *status == 401 || *status == 403,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a client-side issue.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } | Error::LoginFailed { status, .. } => {
                (400..500).contains(status)
            }
            Error::InvalidInput(_) | Error::Config(_) | Error::UrlParse(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } | Error::LoginFailed { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// HTTP status of the failed response, if the error came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } | Error::LoginFailed { status, .. } => Some(*status),
            Error::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Create an API error from a response
    pub(crate) fn from_api_response(status: u16, body: Value) -> Self {
        Error::Api {
            status,
            code: error_code(&body),
            body,
        }
    }

    /// Create a login error from a response
    pub(crate) fn from_login_response(status: u16, body: Value) -> Self {
        Error::LoginFailed {
            status,
            code: error_code(&body),
            body,
        }
    }
}

fn error_code(body: &Value) -> Option<String> {
    body.get("errorCode")
        .and_then(|c| c.as_str())
        .map(String::from)
}
