//! Acquisition-mode handlers and the health/banner routes.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;

use super::GatewayState;
use crate::espn::{FreeAgentAcquirer, LeagueAcquirer, DEFAULT_FREE_AGENT_LIMIT};
use crate::models::League;
use crate::{EspnError, Result};

pub const BANNER: &str = "SwishRadar API v1.0";

impl IntoResponse for EspnError {
    fn into_response(self) -> Response {
        let status = match &self {
            EspnError::MissingCredentials => StatusCode::UNAUTHORIZED,
            EspnError::Acquisition(_) | EspnError::Http(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Query string as ordered key/value pairs; duplicate keys are kept.
pub type QueryPairs = Vec<(String, String)>;

/// First `limit` value in the query; later duplicates are ignored.
pub fn limit_param(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .find(|(key, _)| key == "limit")
        .map(|(_, value)| value.as_str())
}

/// Positive integer limits are honored; anything else means the default.
pub fn parse_limit(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_FREE_AGENT_LIMIT)
}

pub async fn root() -> &'static str {
    BANNER
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
    }))
}

async fn load_league(state: &GatewayState) -> Result<League> {
    let credentials = state.config.credentials().ok_or(EspnError::MissingCredentials)?;
    let league = LeagueAcquirer::new(&state.espn, &state.seasons)
        .acquire(&credentials, state.config.league_id)
        .await?;
    Ok(league)
}

pub async fn league(State(state): State<Arc<GatewayState>>) -> Result<Json<League>> {
    Ok(Json(load_league(&state).await?))
}

pub async fn league_teams(State(state): State<Arc<GatewayState>>) -> Result<Json<Value>> {
    let league = load_league(&state).await?;
    Ok(Json(json!({
        "season": league.season,
        "count": league.teams.len(),
        "teams": league.teams,
    })))
}

pub async fn league_standings(State(state): State<Arc<GatewayState>>) -> Result<Json<Value>> {
    let league = load_league(&state).await?;
    Ok(Json(json!({
        "season": league.season,
        "standings": league.standings(),
    })))
}

pub async fn free_agents(
    State(state): State<Arc<GatewayState>>,
    query: Option<Query<QueryPairs>>,
) -> Result<Json<Value>> {
    let credentials = state.config.credentials().ok_or(EspnError::MissingCredentials)?;
    let pairs = query.map(|Query(pairs)| pairs).unwrap_or_default();
    let limit = parse_limit(limit_param(&pairs));

    let acquired = FreeAgentAcquirer::new(&state.espn, &state.seasons)
        .with_limit(limit)
        .acquire(&credentials, state.config.league_id)
        .await?;

    Ok(Json(json!({
        "season": acquired.season,
        "count": acquired.value.len(),
        "players": acquired.value,
    })))
}
