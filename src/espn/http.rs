//! Authenticated requests against the ESPN Fantasy Basketball API.
//!
//! One call to [`EspnClient::fetch`] is one (resource, season) attempt. The
//! body is buffered in full so it can be validated before decoding, and no
//! retry happens here: a failed attempt is reported and the caller moves on
//! to its next season candidate.

use reqwest::header::HeaderName;
use reqwest::Client;
use std::fmt;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::cli::types::{LeagueId, Season};
use crate::core::{
    authenticated_headers, Credentials, FreeAgentFilter, IntoHeaderValue, FANTASY_FILTER_HEADER,
};
use crate::espn::validate::RawResponse;


/// Path prefix of the fantasy basketball (`fba`) game.
pub const FBA_API_PATH: &str = "/apis/v3/games/fba";

/// League-scoped document an acquisition reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    League,
    FreeAgents,
}

impl Resource {
    /// `view` query values selecting the embedded sub-documents.
    pub fn views(&self) -> &'static [&'static str] {
        match self {
            Resource::League => &["mTeam", "mRoster", "mSettings", "mMatchup"],
            Resource::FreeAgents => &["kona_player_info"],
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::League => f.write_str("league"),
            Resource::FreeAgents => f.write_str("free-agents"),
        }
    }
}

/// Network-level failure of a single attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("connection to {url} failed: {message}")]
    Connect { url: String, message: String },

    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },
}

impl TransportError {
    fn from_reqwest(url: &str, e: reqwest::Error) -> Self {
        let url = url.to_string();
        if e.is_timeout() {
            TransportError::Timeout { url }
        } else if e.is_connect() {
            TransportError::Connect {
                url,
                message: e.to_string(),
            }
        } else {
            TransportError::Request {
                url,
                message: e.to_string(),
            }
        }
    }
}

/// Upstream fetcher bound to one ESPN API host.
#[derive(Debug, Clone)]
pub struct EspnClient {
    http: Client,
    base_url: String,
}

impl EspnClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/apis/v3/games/fba/seasons/{season}/segments/0/leagues/{league_id}`
    pub fn league_url(&self, season: Season, league_id: LeagueId) -> String {
        format!(
            "{}{FBA_API_PATH}/seasons/{}/segments/0/leagues/{}",
            self.base_url, season, league_id
        )
    }

    /// Issue one authenticated GET and buffer the whole response.
    #[instrument(skip_all, fields(resource = %resource, season = %season, league_id = %league_id))]
    pub async fn fetch(
        &self,
        resource: Resource,
        season: Season,
        league_id: LeagueId,
        credentials: &Credentials,
        query: &[(&str, String)],
    ) -> Result<RawResponse, TransportError> {
        let url = self.league_url(season, league_id);

        let mut headers = authenticated_headers(credentials).map_err(|e| TransportError::Request {
            url: url.clone(),
            message: e.to_string(),
        })?;
        if resource == Resource::FreeAgents {
            let filter = FreeAgentFilter::available()
                .to_header_value()
                .map_err(|e| TransportError::Request {
                    url: url.clone(),
                    message: e.to_string(),
                })?;
            headers.insert(HeaderName::from_static(FANTASY_FILTER_HEADER), filter);
        }

        let mut params: Vec<(&str, String)> = resource
            .views()
            .iter()
            .map(|v| ("view", v.to_string()))
            .collect();
        params.extend(query.iter().cloned());

        debug!("GET {url}");
        let response = self
            .http
            .get(&url)
            .headers(headers)
            .query(&params)
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(&url, e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::from_reqwest(&url, e))?;
        debug!(status = status.as_u16(), bytes = body.len(), "upstream responded");

        Ok(RawResponse { status, body })
    }
}
