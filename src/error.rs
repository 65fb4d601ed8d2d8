//! Error types for the SwishRadar gateway

use crate::espn::acquire::AcquisitionError;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, EspnError>;

#[derive(Error, Debug)]
pub enum EspnError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse league ID: {0}")]
    InvalidLeagueId(#[from] std::num::ParseIntError),

    #[error("ESPN credentials not configured: set ESPN_SWID and ESPN_S2")]
    MissingCredentials,

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Acquisition(#[from] AcquisitionError),
}

impl EspnError {
    /// Create a configuration error with context
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
