//! Gateway configuration: command-line flags with environment fallbacks.

pub mod types;

use crate::core::http::Credentials;
use crate::espn::season::SeasonFallback;
use clap::Parser;
use std::fmt;
use types::{LeagueId, Season};

/// Default ESPN read API host.
pub const DEFAULT_ESPN_API_URL: &str = "https://lm-api-reads.fantasy.espn.com";

/// Default location of the ESPN companion service used by proxy routes.
pub const DEFAULT_ESPN_SERVICE_URL: &str = "http://localhost:5001";

/// Immutable process configuration shared by every request.
#[derive(Clone, Parser)]
#[clap(
    name = "swishradar",
    about = "SwishRadar gateway for ESPN Fantasy Basketball data"
)]
pub struct GatewayConfig {
    /// Port to listen on.
    #[clap(long, env = "PORT", default_value_t = 8081)]
    pub port: u16,

    /// Base URL of the ESPN fantasy read API.
    #[clap(long, env = "ESPN_API_BASE_URL", default_value = DEFAULT_ESPN_API_URL)]
    pub espn_api_url: String,

    /// Base URL of the ESPN service that `/api/espn/*` routes proxy to.
    #[clap(long, env = "ESPN_SERVICE_URL", default_value = DEFAULT_ESPN_SERVICE_URL)]
    pub espn_service_url: String,

    /// League ID (or set `ESPN_FBA_LEAGUE_ID` env var).
    #[clap(long, short, env = crate::LEAGUE_ID_ENV_VAR)]
    pub league_id: LeagueId,

    /// ESPN `SWID` session cookie.
    #[clap(long, env = "ESPN_SWID", hide_env_values = true)]
    pub swid: Option<String>,

    /// ESPN `espn_s2` session cookie.
    #[clap(long = "espn-s2", env = "ESPN_S2", hide_env_values = true)]
    pub espn_s2: Option<String>,

    /// Current season year (e.g. 2026). Derived from today's date when omitted.
    #[clap(long, short, env = "ESPN_SEASON")]
    pub season: Option<Season>,

    /// Explicit season fallback order, comma separated: `--seasons 2026,2025,2027`.
    #[clap(long, env = "ESPN_SEASONS", value_delimiter = ',')]
    pub seasons: Vec<Season>,

    /// Per-request timeout for upstream calls, in seconds.
    #[clap(long, env = "ESPN_HTTP_TIMEOUT_SECONDS", default_value_t = crate::core::http::DEFAULT_HTTP_TIMEOUT_SECONDS)]
    pub http_timeout_seconds: u64,
}

impl GatewayConfig {
    pub fn current_season(&self) -> Season {
        self.season.unwrap_or_default()
    }

    /// Season candidates in the order acquisitions should try them.
    pub fn season_fallback(&self) -> SeasonFallback {
        if self.seasons.is_empty() {
            SeasonFallback::around(self.current_season())
        } else {
            SeasonFallback::new(self.seasons.clone())
        }
    }

    /// Session credentials, present only when both cookies are configured.
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.swid, &self.espn_s2) {
            (Some(swid), Some(s2)) if !swid.is_empty() && !s2.is_empty() => {
                Some(Credentials::new(swid.clone(), s2.clone()))
            }
            _ => None,
        }
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("port", &self.port)
            .field("espn_api_url", &self.espn_api_url)
            .field("espn_service_url", &self.espn_service_url)
            .field("league_id", &self.league_id)
            .field("swid", &self.swid.as_ref().map(|_| "<redacted>"))
            .field("espn_s2", &self.espn_s2.as_ref().map(|_| "<redacted>"))
            .field("season", &self.season)
            .field("seasons", &self.seasons)
            .field("http_timeout_seconds", &self.http_timeout_seconds)
            .finish()
    }
}
