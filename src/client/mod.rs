//! HTTP transport and configuration.
//!
//! [`ClientConfig`] selects the demo or live endpoint (or an explicit base
//! URL) and sets transport options. The blocking transport itself is
//! internal to [`Session`](crate::Session).

mod config;
mod http;

pub use config::{ClientConfig, DEFAULT_TIMEOUT};
pub(crate) use http::{HttpClient, RawResponse};
