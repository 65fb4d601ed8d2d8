//! Cheap checks on a buffered upstream response before decoding it.
//!
//! ESPN fails in a handful of recognizable ways: non-200 statuses, empty
//! bodies while a season is being provisioned, and HTML login pages served
//! with a 200. Each is reported as its own [`ValidationError`] so a failed
//! season attempt says exactly what went wrong.

use bytes::Bytes;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use thiserror::Error;


/// Longest body excerpt carried in a validation error.
pub const BODY_PREFIX_LIMIT: usize = 300;

/// Fully buffered upstream response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Machine-readable tag for every way a season attempt can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Transport,
    BadStatus,
    EmptyBody,
    NotJson,
    DecodeFailed,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FailureKind::Transport => "transport",
            FailureKind::BadStatus => "bad_status",
            FailureKind::EmptyBody => "empty_body",
            FailureKind::NotJson => "not_json",
            FailureKind::DecodeFailed => "decode_failed",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("upstream returned status {code}: {body_prefix}")]
    BadStatus { code: u16, body_prefix: String },

    #[error("upstream returned an empty body")]
    EmptyBody,

    #[error("upstream returned non-JSON content starting with {first_byte:?}: {body_prefix}")]
    NotJson { first_byte: char, body_prefix: String },

    #[error("failed to decode upstream payload: {cause}")]
    DecodeFailed { cause: String },
}

impl ValidationError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ValidationError::BadStatus { .. } => FailureKind::BadStatus,
            ValidationError::EmptyBody => FailureKind::EmptyBody,
            ValidationError::NotJson { .. } => FailureKind::NotJson,
            ValidationError::DecodeFailed { .. } => FailureKind::DecodeFailed,
        }
    }
}

/// First `BODY_PREFIX_LIMIT` bytes of the body, lossily decoded.
pub fn body_prefix(body: &[u8]) -> String {
    let end = body.len().min(BODY_PREFIX_LIMIT);
    String::from_utf8_lossy(&body[..end]).into_owned()
}

/// Status, emptiness, and JSON-ness checks, in that order.
pub fn check_envelope(raw: &RawResponse) -> Result<(), ValidationError> {
    if raw.status != StatusCode::OK {
        return Err(ValidationError::BadStatus {
            code: raw.status.as_u16(),
            body_prefix: body_prefix(&raw.body),
        });
    }

    let first = raw.body.iter().copied().find(|b| !b.is_ascii_whitespace());
    match first {
        None => Err(ValidationError::EmptyBody),
        Some(b'{') | Some(b'[') => Ok(()),
        Some(b) => Err(ValidationError::NotJson {
            first_byte: char::from(b),
            body_prefix: body_prefix(&raw.body),
        }),
    }
}

/// Run the envelope checks, then decode into `T`.
pub fn validate<T: DeserializeOwned>(raw: &RawResponse) -> Result<T, ValidationError> {
    check_envelope(raw)?;
    serde_json::from_slice(&raw.body).map_err(|e| ValidationError::DecodeFailed {
        cause: e.to_string(),
    })
}
