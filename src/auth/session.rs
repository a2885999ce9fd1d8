//! Session management for the IG REST trading API.

use reqwest::blocking::RequestBuilder;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::client::{ClientConfig, HttpClient, RawResponse};
use crate::models::{
    LoginResponse, SessionDetails, SwitchAccountRequest, SwitchAccountResponse,
};
use crate::{AccountId, ApiVersion, Error, Result};

use super::credentials::Credentials;
use super::tokens::AuthTokens;

const SESSION_ENDPOINT: &str = "session";

/// An authenticated IG REST API session bound to one account.
///
/// Created unauthenticated by [`Session::new`], or logged in straight away
/// by [`Session::open`]. Once logged in, the `CST` and `X-SECURITY-TOKEN`
/// tokens are attached to every request until [`Session::log_out`]. Calls
/// made without tokens fail with [`Error::NotAuthenticated`] and never
/// reach the network.
///
/// A session is meant for a single owner: every call blocks, and calls that
/// may change the tokens take `&mut self`.
///
/// # Example
///
/// ```no_run
/// use ig_rest_client::{ClientConfig, Credentials, Environment, Session};
///
/// # fn example() -> ig_rest_client::Result<()> {
/// let mut session = Session::open(
///     Credentials::new("api-key", "username", "password"),
///     "ABC123",
///     ClientConfig::for_environment(Environment::Demo),
/// )?;
///
/// let details = session.session_details()?;
/// println!("Logged in as client {}", details.client_id);
///
/// session.log_out()?;
/// # Ok(())
/// # }
/// ```
pub struct Session {
    http: HttpClient,
    credentials: Credentials,
    account_id: AccountId,
    tokens: Option<AuthTokens>,
}

impl Session {
    /// Create an unauthenticated session. No request is sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be built.
    pub fn new(
        credentials: Credentials,
        account_id: impl Into<AccountId>,
        config: ClientConfig,
    ) -> Result<Self> {
        let http = HttpClient::new(&config, &credentials)?;
        Ok(Self {
            http,
            credentials,
            account_id: account_id.into(),
            tokens: None,
        })
    }

    /// Create a session and log in.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LoginFailed`] carrying the provider's status and
    /// error body if the credentials are rejected, or any transport error.
    /// If the login went through but a later step failed (for example the
    /// switch to the requested account), the server session is logged out
    /// before the error is returned. Use [`Session::new`] and
    /// [`Session::log_in`] to keep the session in that case.
    pub fn open(
        credentials: Credentials,
        account_id: impl Into<AccountId>,
        config: ClientConfig,
    ) -> Result<Self> {
        let mut session = Self::new(credentials, account_id, config)?;
        if let Err(err) = session.log_in() {
            if session.is_authenticated() {
                if let Err(logout_err) = session.log_out() {
                    tracing::warn!("Log out after failed login did not succeed: {}", logout_err);
                }
            }
            return Err(err);
        }
        Ok(session)
    }

    /// Log in with the version 2 `POST /session` endpoint.
    ///
    /// The returned tokens are stored as soon as the server accepts the
    /// credentials, replacing any held before; a body that fails to parse or
    /// a failed account switch is reported after that, with the session
    /// still authenticated so it can be logged out. If the server binds the
    /// session to a different account than the one requested, the session
    /// is switched to the requested account. A rejected login leaves the
    /// session state untouched.
    pub fn log_in(&mut self) -> Result<LoginResponse> {
        let body = serde_json::json!({
            "identifier": self.credentials.username(),
            "password": self.credentials.password(),
            "encryptedPassword": false,
        });

        let request = self
            .http
            .request(Method::POST, SESSION_ENDPOINT, ApiVersion::V2, None)?
            .json(&body);
        let response = self.http.execute(request)?;

        if !response.is_success() {
            let body = response.body_value();
            tracing::error!(
                "Failed to log in: status={}, body={}",
                response.status,
                body
            );
            return Err(Error::from_login_response(response.status, body));
        }

        self.tokens = Some(AuthTokens::from_headers(&response.headers)?);
        let login: LoginResponse = response.json()?;

        tracing::info!(
            "Logged in to {} on account {}",
            self.http.base_url(),
            login.current_account_id
        );

        if login.current_account_id != self.account_id {
            let account_id = self.account_id.clone();
            self.switch_account(account_id, false)?;
        }

        Ok(login)
    }

    /// Fetch the details of the current session (`GET /session`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAuthenticated`] before login or after logout, and
    /// [`Error::AccountMismatch`] if the server reports a different account
    /// than the session targets.
    pub fn session_details(&mut self) -> Result<SessionDetails> {
        let details: SessionDetails = self.get(SESSION_ENDPOINT, ApiVersion::V1)?;

        if details.account_id != self.account_id {
            tracing::error!(
                "Session details report account {} instead of {}",
                details.account_id,
                self.account_id
            );
            return Err(Error::AccountMismatch {
                expected: self.account_id.to_string(),
                actual: details.account_id.to_string(),
            });
        }

        Ok(details)
    }

    /// Bind the session to another account (`PUT /session`).
    pub fn switch_account(
        &mut self,
        account_id: impl Into<AccountId>,
        default_account: bool,
    ) -> Result<SwitchAccountResponse> {
        let account_id = account_id.into();
        let request = SwitchAccountRequest {
            account_id: &account_id,
            default_account,
        };
        let response: SwitchAccountResponse =
            self.put(SESSION_ENDPOINT, ApiVersion::V1, &request)?;

        tracing::info!("Switched session to account {}", account_id);
        self.account_id = account_id;
        Ok(response)
    }

    /// Log out (`DELETE /session`).
    ///
    /// The local tokens are dropped before the request is sent, so the
    /// session is unauthenticated afterwards even if the request fails.
    pub fn log_out(&mut self) -> Result<()> {
        let tokens = self.tokens.take().ok_or(Error::NotAuthenticated)?;
        self.dispatch(&tokens, Method::DELETE, SESSION_ENDPOINT, ApiVersion::V1, |r| r)?;
        tracing::info!("Logged out of account {}", self.account_id);
        Ok(())
    }

    /// Authenticated `GET` to any endpoint.
    pub fn get<T: DeserializeOwned>(&mut self, endpoint: &str, version: ApiVersion) -> Result<T> {
        self.execute(Method::GET, endpoint, version, |r| r)
    }

    /// Authenticated `GET` with query parameters.
    pub fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &mut self,
        endpoint: &str,
        version: ApiVersion,
        query: &Q,
    ) -> Result<T> {
        self.execute(Method::GET, endpoint, version, |r| r.query(query))
    }

    /// Authenticated `POST` with a JSON body.
    pub fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &mut self,
        endpoint: &str,
        version: ApiVersion,
        body: &B,
    ) -> Result<T> {
        self.execute(Method::POST, endpoint, version, |r| r.json(body))
    }

    /// Authenticated `PUT` with a JSON body.
    pub fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &mut self,
        endpoint: &str,
        version: ApiVersion,
        body: &B,
    ) -> Result<T> {
        self.execute(Method::PUT, endpoint, version, |r| r.json(body))
    }

    /// Authenticated `DELETE`.
    pub fn delete<T: DeserializeOwned>(&mut self, endpoint: &str, version: ApiVersion) -> Result<T> {
        self.execute(Method::DELETE, endpoint, version, |r| r)
    }

    /// Returns `true` while session tokens are held.
    pub fn is_authenticated(&self) -> bool {
        self.tokens.is_some()
    }

    /// The account this session targets.
    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &Url {
        self.http.base_url()
    }

    /// The current session tokens, if logged in.
    pub fn auth_tokens(&self) -> Option<&AuthTokens> {
        self.tokens.as_ref()
    }

    fn execute<T: DeserializeOwned>(
        &mut self,
        method: Method,
        endpoint: &str,
        version: ApiVersion,
        prepare: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<T> {
        let tokens = self.tokens.as_ref().ok_or(Error::NotAuthenticated)?;
        let response = self.dispatch(tokens, method, endpoint, version, prepare)?;

        if let Some(tokens) = self.tokens.as_mut() {
            if tokens.update_from_headers(&response.headers) {
                tracing::debug!("Session tokens rotated by server");
            }
        }

        response.json()
    }

    fn dispatch(
        &self,
        tokens: &AuthTokens,
        method: Method,
        endpoint: &str,
        version: ApiVersion,
        prepare: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<RawResponse> {
        let request = prepare(self.http.request(method.clone(), endpoint, version, Some(tokens))?);
        let response = self.http.execute(request)?;

        if !response.is_success() {
            let body = response.body_value();
            tracing::error!(
                "Request failed: {} {}: status={}, body={}",
                method,
                endpoint,
                response.status,
                body
            );
            return Err(Error::from_api_response(response.status, body));
        }

        Ok(response)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.http.base_url().as_str())
            .field("account_id", &self.account_id)
            .field("credentials", &self.credentials)
            .field("tokens", &self.tokens)
            .finish()
    }
}
