//! Blocking HTTP transport for the IG REST API.

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::auth::{sensitive_value, AuthTokens, Credentials};
use crate::{ApiVersion, Error, Result};

use super::config::ClientConfig;

fn api_key_header() -> HeaderName {
    HeaderName::from_static("x-ig-api-key")
}

fn version_header() -> HeaderName {
    HeaderName::from_static("version")
}

/// Thin wrapper around a blocking `reqwest` client.
///
/// Builds requests against the configured base URL with the headers IG
/// expects on every call, and reads responses into [`RawResponse`].
pub(crate) struct HttpClient {
    http: Client,
    base_url: Url,
    api_key: HeaderValue,
}

impl HttpClient {
    pub(crate) fn new(config: &ClientConfig, credentials: &Credentials) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            http,
            base_url: parse_base_url(&config.base_url)?,
            api_key: sensitive_value(credentials.api_key().expose_secret())?,
        })
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path against the base URL.
    pub(crate) fn url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint.trim_start_matches('/'))?)
    }

    /// Build the headers sent with every request.
    fn build_headers(&self, version: ApiVersion, tokens: Option<&AuthTokens>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json; charset=UTF-8"),
        );
        headers.insert(api_key_header(), self.api_key.clone());
        headers.insert(version_header(), HeaderValue::from(u16::from(version.get())));

        if let Some(tokens) = tokens {
            tokens.apply(&mut headers)?;
        }

        Ok(headers)
    }

    /// Start a request to `endpoint`.
    pub(crate) fn request(
        &self,
        method: Method,
        endpoint: &str,
        version: ApiVersion,
        tokens: Option<&AuthTokens>,
    ) -> Result<RequestBuilder> {
        let url = self.url(endpoint)?;
        let headers = self.build_headers(version, tokens)?;
        Ok(self.http.request(method, url).headers(headers))
    }

    /// Send a request and read the whole response.
    ///
    /// Only transport failures are errors here; the status is left for the
    /// caller to interpret.
    pub(crate) fn execute(&self, builder: RequestBuilder) -> Result<RawResponse> {
        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().clone();

        let response = self.http.execute(request)?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes()?.to_vec();

        tracing::debug!("{} {} -> {}", method, url, status);

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

/// Status, headers and body of a completed request.
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub(crate) fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserialize the body; an empty body reads as `{}`.
    pub(crate) fn json<T: DeserializeOwned>(&self) -> Result<T> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::from_str("{}")?);
        }
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// The body as JSON for error reporting, falling back to a string.
    pub(crate) fn body_value(&self) -> Value {
        serde_json::from_slice(&self.body)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&self.body).into_owned()))
    }
}

/// Parse a base URL, making sure joins keep its path.
fn parse_base_url(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url)?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(Error::Config(format!(
            "Base URL must be an http(s) URL: {}",
            base_url
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
