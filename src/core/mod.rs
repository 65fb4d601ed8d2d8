//! Core utilities shared by the acquisition layer and the gateway
//!
//! - `http`: credentials, browser-like request headers, and the shared client
//! - `filters`: ESPN `x-fantasy-filter` structures

pub mod filters;
pub mod http;

// Re-export commonly used items for convenience
pub use filters::{FreeAgentFilter, IntoHeaderValue, Val, FANTASY_FILTER_HEADER};
pub use http::{
    authenticated_headers, browser_headers, create_http_client_with_timeout, Credentials,
    DEFAULT_HTTP_TIMEOUT_SECONDS,
};
