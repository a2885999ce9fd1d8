//! Data models for the IG REST API.
//!
//! - [`primitives`] - Core types like `AccountId`, `ApiVersion` and `Environment`
//! - [`session`] - Request and response bodies of the `/session` endpoints

pub mod primitives;
pub mod session;

pub use primitives::*;
pub use session::*;
