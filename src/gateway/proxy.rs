//! Pass-through routes to the ESPN companion service.
//!
//! The query string goes out verbatim; status, headers, and body come back
//! unchanged, with the body streamed rather than buffered.

use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use reqwest::Client;
use serde_json::json;
use tracing::{debug, error};

/// Inbound path → path on the proxied service.
pub const PROXY_ROUTES: &[(&str, &str)] = &[
    ("/api/espn/health", "/health"),
    ("/api/espn/league", "/api/league"),
    ("/api/espn/teams", "/api/teams"),
    ("/api/espn/free-agents", "/api/free-agents"),
    ("/api/espn/standings", "/api/standings"),
];

/// `target` with the inbound raw query appended, if there is one.
pub fn proxy_url(target: &str, query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{target}?{q}"),
        _ => target.to_string(),
    }
}

pub async fn proxy_request(client: &Client, target: &str, query: Option<&str>) -> Response {
    let url = proxy_url(target, query);
    debug!("proxying to {url}");

    let upstream = match client.get(&url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Error proxying request to {url}: {e}");
            return (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": format!("Failed to connect to ESPN service: {e}") })),
            )
                .into_response();
        }
    };

    let status = upstream.status();
    let headers = upstream.headers().clone();

    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}
