//! HTTP plumbing shared by the forecast, chat and speech clients.

pub mod http;

pub use http::{build_client, send, timeout_from_env};
