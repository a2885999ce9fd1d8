//! Session tokens issued by the version 2 login.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

/// Name of the client session token header.
pub const CST_HEADER: &str = "CST";
/// Name of the account security token header.
pub const SECURITY_TOKEN_HEADER: &str = "X-SECURITY-TOKEN";

fn cst_header() -> HeaderName {
    HeaderName::from_static("cst")
}

fn security_token_header() -> HeaderName {
    HeaderName::from_static("x-security-token")
}

/// The `CST` and `X-SECURITY-TOKEN` pair that authenticates a session.
///
/// Both values are attached to every authenticated request. The server
/// may hand back fresh values on any response; those replace the stored
/// ones.
pub struct AuthTokens {
    cst: SecretString,
    security_token: SecretString,
}

impl AuthTokens {
    /// Create tokens from known values.
    pub fn new(cst: impl Into<String>, security_token: impl Into<String>) -> Self {
        Self {
            cst: SecretString::from(cst.into()),
            security_token: SecretString::from(security_token.into()),
        }
    }

    /// The client session token.
    pub fn cst(&self) -> &SecretString {
        &self.cst
    }

    /// The account security token.
    pub fn security_token(&self) -> &SecretString {
        &self.security_token
    }

    /// Extract both tokens from login response headers.
    ///
    /// An absent or empty header is reported as [`Error::MissingHeader`].
    pub(crate) fn from_headers(headers: &HeaderMap) -> Result<Self> {
        let cst = header_str(headers, &cst_header())
            .ok_or(Error::MissingHeader(CST_HEADER))?;
        let security_token = header_str(headers, &security_token_header())
            .ok_or(Error::MissingHeader(SECURITY_TOKEN_HEADER))?;
        Ok(Self::new(cst, security_token))
    }

    /// Replace any token present in `headers`. Returns `true` if one changed.
    pub(crate) fn update_from_headers(&mut self, headers: &HeaderMap) -> bool {
        let mut changed = false;
        if let Some(cst) = header_str(headers, &cst_header()) {
            if cst != self.cst.expose_secret() {
                self.cst = SecretString::from(cst.to_string());
                changed = true;
            }
        }
        if let Some(token) = header_str(headers, &security_token_header()) {
            if token != self.security_token.expose_secret() {
                self.security_token = SecretString::from(token.to_string());
                changed = true;
            }
        }
        changed
    }

    /// Insert both tokens into a request header map, marked sensitive.
    pub(crate) fn apply(&self, headers: &mut HeaderMap) -> Result<()> {
        headers.insert(cst_header(), sensitive_value(self.cst.expose_secret())?);
        headers.insert(
            security_token_header(),
            sensitive_value(self.security_token.expose_secret())?,
        );
        Ok(())
    }
}

impl std::fmt::Debug for AuthTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthTokens")
            .field("cst", &"[REDACTED]")
            .field("security_token", &"[REDACTED]")
            .finish()
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &HeaderName) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
}

pub(crate) fn sensitive_value(value: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(value)
        .map_err(|_| Error::InvalidInput("Invalid token format".to_string()))?;
    value.set_sensitive(true);
    Ok(value)
}
