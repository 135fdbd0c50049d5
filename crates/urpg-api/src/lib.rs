//! # urpg-api
//!
//! The HTTP boundary of the species catalog, without an HTTP server:
//! `Router::handle(method, path)` maps a request line to a status code and a
//! JSON body, so any server (or the `urpg` CLI) can mount it.

pub mod errors;
pub mod path;
pub mod response;
pub mod router;
pub mod runtime;

pub use errors::{ApiError, ApiResult};
pub use response::ApiResponse;
pub use router::Router;
pub use runtime::{RuntimeOptions, UrpgRuntime};
