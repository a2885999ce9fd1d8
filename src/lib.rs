//! # ig-rest-client
//!
//! A blocking client for session handling on the IG REST trading API:
//! log in, read session details, switch account and log out.
//!
//! Every call is a single synchronous HTTP request. There are no retries
//! and no token refresh; transport and provider errors are returned to the
//! caller as [`Error`] values.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ig_rest_client::{ClientConfig, Credentials, Environment, Session};
//!
//! fn main() -> ig_rest_client::Result<()> {
//!     let mut session = Session::open(
//!         Credentials::new("api-key", "username", "password"),
//!         "ABC123",
//!         ClientConfig::for_environment(Environment::Demo),
//!     )?;
//!
//!     let details = session.session_details()?;
//!     println!("Account {} ({})", details.account_id, details.currency);
//!
//!     session.log_out()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Other endpoints
//!
//! The session exposes authenticated `get`, `post`, `put` and `delete`
//! helpers that take a path relative to the base URL and the endpoint
//! version:
//!
//! ```rust,no_run
//! use ig_rest_client::{ApiVersion, Session};
//!
//! # fn example(session: &mut Session) -> ig_rest_client::Result<()> {
//! let accounts: serde_json::Value = session.get("accounts", ApiVersion::V1)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::{AuthTokens, Credentials, Session};
pub use client::ClientConfig;
pub use error::{Error, Result};
pub use models::{AccountId, ApiVersion, Environment};

/// Prelude module for convenient imports.
///
/// ```rust
/// use ig_rest_client::prelude::*;
/// ```
pub mod prelude {
    pub use crate::auth::{AuthTokens, Credentials, Session};
    pub use crate::client::ClientConfig;
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        AccountId, AccountInfo, AccountSummary, AccountType, ApiVersion, Environment,
        LoginResponse, SessionDetails, SwitchAccountResponse,
    };
}
