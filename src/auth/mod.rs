//! Authentication and session management for the IG REST trading API.
//!
//! A [`Session`] logs in with an API key, username and password using the
//! version 2 login, which returns two tokens as response headers (`CST`
//! and `X-SECURITY-TOKEN`). Both are sent with every later request until
//! the session logs out.
//!
//! ```no_run
//! use ig_rest_client::{ClientConfig, Credentials, Environment, Session};
//!
//! # fn example() -> ig_rest_client::Result<()> {
//! let credentials = Credentials::from_env()?;
//! let mut session = Session::open(
//!     credentials,
//!     "ABC123",
//!     ClientConfig::for_environment(Environment::Demo),
//! )?;
//! assert!(session.is_authenticated());
//! session.log_out()?;
//! # Ok(())
//! # }
//! ```

mod credentials;
mod session;
mod tokens;

pub use credentials::{Credentials, API_KEY_VAR, PASSWORD_VAR, USERNAME_VAR};
pub use session::Session;
pub use tokens::{AuthTokens, CST_HEADER, SECURITY_TOKEN_HEADER};
pub(crate) use tokens::sensitive_value;
