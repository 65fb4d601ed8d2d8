//! Season-fallback acquisitions.
//!
//! An acquisition walks the configured season candidates strictly in order,
//! one fetch at a time. The first attempt whose response validates wins and
//! the remaining seasons are never requested. Failed attempts are kept only
//! so that an exhausted acquisition can say what happened to each season.

use serde::de::DeserializeOwned;
use std::fmt;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::cli::types::{LeagueId, Season};
use crate::core::Credentials;
use crate::espn::http::{EspnClient, Resource, TransportError};
use crate::espn::season::SeasonFallback;
use crate::espn::types::{FreeAgentResponse, LeagueResponse};
use crate::espn::validate::{validate, FailureKind, ValidationError};
use crate::models::{League, Player};


/// Free agents returned when the caller does not ask for a specific count.
pub const DEFAULT_FREE_AGENT_LIMIT: usize = 50;

/// Why one season attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttemptFailure {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl AttemptFailure {
    pub fn kind(&self) -> FailureKind {
        match self {
            AttemptFailure::Transport(_) => FailureKind::Transport,
            AttemptFailure::Validation(v) => v.kind(),
        }
    }
}

/// Result of a single (resource, season) attempt.
#[derive(Debug)]
pub enum FetchOutcome<T> {
    Success(T),
    Failure { reason: AttemptFailure, season: Season },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonAttempt {
    pub season: Season,
    pub failure: AttemptFailure,
}

impl fmt::Display for SeasonAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "season {} ({}): {}", self.season, self.failure.kind(), self.failure)
    }
}

/// Every season candidate failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.summary())]
pub struct AcquisitionError {
    pub resource: Resource,
    pub attempts: Vec<SeasonAttempt>,
}

impl AcquisitionError {
    pub fn last_attempt(&self) -> Option<&SeasonAttempt> {
        self.attempts.last()
    }

    /// Short client-facing description naming only the last failure.
    pub fn summary(&self) -> String {
        match self.last_attempt() {
            Some(last) => format!(
                "could not load {} from ESPN after trying {} season(s); last failure was {} for season {}",
                self.resource,
                self.attempts.len(),
                last.failure.kind(),
                last.season
            ),
            None => format!("could not load {} from ESPN: no seasons to try", self.resource),
        }
    }

    /// Full per-season breakdown for server-side logs.
    pub fn detail(&self) -> String {
        self.attempts
            .iter()
            .map(SeasonAttempt::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Payload together with the season that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Acquired<T> {
    pub season: Season,
    pub value: T,
}

async fn attempt<T: DeserializeOwned>(
    client: &EspnClient,
    resource: Resource,
    season: Season,
    league_id: LeagueId,
    credentials: &Credentials,
) -> FetchOutcome<T> {
    let raw = match client
        .fetch(resource, season, league_id, credentials, &[])
        .await
    {
        Ok(raw) => raw,
        Err(e) => {
            return FetchOutcome::Failure {
                reason: e.into(),
                season,
            }
        }
    };

    match validate::<T>(&raw) {
        Ok(payload) => FetchOutcome::Success(payload),
        Err(e) => FetchOutcome::Failure {
            reason: e.into(),
            season,
        },
    }
}

/// Try each season in order and return the first validated payload.
pub async fn acquire<T: DeserializeOwned>(
    client: &EspnClient,
    seasons: &SeasonFallback,
    resource: Resource,
    league_id: LeagueId,
    credentials: &Credentials,
) -> Result<Acquired<T>, AcquisitionError> {
    let mut attempts = Vec::with_capacity(seasons.len());

    for &season in seasons.candidates() {
        debug!(%resource, %season, "trying season");
        match attempt::<T>(client, resource, season, league_id, credentials).await {
            FetchOutcome::Success(value) => {
                info!(%resource, %season, failed_attempts = attempts.len(), "acquired");
                return Ok(Acquired { season, value });
            }
            FetchOutcome::Failure { reason, season } => {
                warn!(%resource, %season, kind = %reason.kind(), "season attempt failed: {reason}");
                attempts.push(SeasonAttempt {
                    season,
                    failure: reason,
                });
            }
        }
    }

    let err = AcquisitionError { resource, attempts };
    error!(%resource, "all seasons failed: {}", err.detail());
    Err(err)
}

/// "Get current league".
#[derive(Debug, Clone, Copy)]
pub struct LeagueAcquirer<'a> {
    client: &'a EspnClient,
    seasons: &'a SeasonFallback,
}

impl<'a> LeagueAcquirer<'a> {
    pub fn new(client: &'a EspnClient, seasons: &'a SeasonFallback) -> Self {
        Self { client, seasons }
    }

    pub async fn acquire(
        &self,
        credentials: &Credentials,
        league_id: LeagueId,
    ) -> Result<League, AcquisitionError> {
        let acquired = acquire::<LeagueResponse>(
            self.client,
            self.seasons,
            Resource::League,
            league_id,
            credentials,
        )
        .await?;
        Ok(League::from_response(acquired.value, league_id, acquired.season))
    }
}

/// "Get free agents", capped client-side at `limit` in upstream order.
#[derive(Debug, Clone, Copy)]
pub struct FreeAgentAcquirer<'a> {
    client: &'a EspnClient,
    seasons: &'a SeasonFallback,
    limit: usize,
}

impl<'a> FreeAgentAcquirer<'a> {
    pub fn new(client: &'a EspnClient, seasons: &'a SeasonFallback) -> Self {
        Self {
            client,
            seasons,
            limit: DEFAULT_FREE_AGENT_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// An empty pool is a valid result, not a failure.
    pub async fn acquire(
        &self,
        credentials: &Credentials,
        league_id: LeagueId,
    ) -> Result<Acquired<Vec<Player>>, AcquisitionError> {
        let acquired = acquire::<FreeAgentResponse>(
            self.client,
            self.seasons,
            Resource::FreeAgents,
            league_id,
            credentials,
        )
        .await?;

        let players: Vec<Player> = acquired
            .value
            .players
            .into_iter()
            .filter_map(Player::from_free_agent)
            .take(self.limit)
            .collect();

        Ok(Acquired {
            season: acquired.season,
            value: players,
        })
    }
}
