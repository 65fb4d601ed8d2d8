//! HTTP gateway exposing league data to internal consumers.
//!
//! Two kinds of routes:
//! - acquisition routes (`/api/league...`) run a season-fallback acquisition
//!   and serialize the normalized result
//! - proxy routes (`/api/espn/...`) relay the ESPN companion service as-is
//!
//! The gateway itself never retries. Every request is handled independently;
//! the only shared state is immutable configuration and the HTTP client pool.

pub mod handlers;
pub mod proxy;


use axum::{
    extract::State,
    http::{header, HeaderValue, Method, Uri},
    routing::get,
    Router,
};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::cli::GatewayConfig;
use crate::core::create_http_client_with_timeout;
use crate::espn::{EspnClient, SeasonFallback};
use crate::Result;

/// Front-end origins allowed to call the gateway from a browser.
pub const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:3001"];

/// Shared, read-only state handed to every handler.
#[derive(Debug)]
pub struct GatewayState {
    pub config: GatewayConfig,
    pub http: Client,
    pub espn: EspnClient,
    pub seasons: SeasonFallback,
}

impl GatewayState {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let http = create_http_client_with_timeout(config.http_timeout_seconds)?;
        let espn = EspnClient::new(http.clone(), config.espn_api_url.clone());
        let seasons = config.season_fallback();
        Ok(Self {
            config,
            http,
            espn,
            seasons,
        })
    }

    pub fn service_url(&self) -> &str {
        self.config.espn_service_url.trim_end_matches('/')
    }
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(ALLOWED_ORIGINS.map(HeaderValue::from_static))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::ACCEPT, header::AUTHORIZATION, header::CONTENT_TYPE])
        .expose_headers([header::LINK])
        .allow_credentials(true)
        .max_age(Duration::from_secs(300))
}

/// Build the full route table around `state`.
pub fn router(state: Arc<GatewayState>) -> Router {
    let mut router: Router<Arc<GatewayState>> = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/api/league", get(handlers::league))
        .route("/api/league/teams", get(handlers::league_teams))
        .route("/api/league/free-agents", get(handlers::free_agents))
        .route("/api/league/standings", get(handlers::league_standings));

    for &(path, upstream_path) in proxy::PROXY_ROUTES {
        router = router.route(
            path,
            get(
                move |State(state): State<Arc<GatewayState>>, uri: Uri| async move {
                    let target = format!("{}{}", state.service_url(), upstream_path);
                    proxy::proxy_request(&state.http, &target, uri.query()).await
                },
            ),
        );
    }

    router
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
