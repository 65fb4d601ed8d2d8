//! ESPN `x-fantasy-filter` header for the free-agent player pool.
//!
//! The `kona_player_info` view returns every player in the league's pool.
//! ESPN narrows that list server-side when the request carries an
//! `x-fantasy-filter` header naming the roster statuses of interest. Only the
//! status filter is sent; the result count is capped client-side.

use crate::Result;
use reqwest::header::HeaderValue;
use serde::Serialize;

/// Header ESPN reads player-pool filters from.
pub const FANTASY_FILTER_HEADER: &str = "x-fantasy-filter";

/// Roster statuses that count as "available" in a league.
pub const FREE_AGENT_STATUSES: [&str; 2] = ["FREEAGENT", "WAIVERS"];

/// Wrapper for ESPN-style filter values.
///
/// ESPN API expects filter values to be wrapped in objects with a "value" field.
/// For example: `{"filterStatus": {"value": ["FREEAGENT"]}}`
#[derive(Debug, Serialize)]
pub struct Val<T> {
    pub value: T,
}

#[derive(Debug, Default, Serialize)]
pub struct PlayerPoolFilter {
    #[serde(rename = "filterStatus", skip_serializing_if = "Option::is_none")]
    pub filter_status: Option<Val<Vec<String>>>,
}

/// Top-level filter document; ESPN scopes player filters under `"players"`.
#[derive(Debug, Default, Serialize)]
pub struct FreeAgentFilter {
    pub players: PlayerPoolFilter,
}

impl FreeAgentFilter {
    /// Filter selecting free agents and players on waivers.
    pub fn available() -> Self {
        Self {
            players: PlayerPoolFilter {
                filter_status: Some(Val {
                    value: FREE_AGENT_STATUSES.iter().map(|s| s.to_string()).collect(),
                }),
            },
        }
    }
}

/// General-purpose helper: any Serialize → JSON → HeaderValue
pub trait IntoHeaderValue {
    fn to_header_value(&self) -> Result<HeaderValue>;
}

impl<T> IntoHeaderValue for T
where
    T: Serialize,
{
    fn to_header_value(&self) -> Result<HeaderValue> {
        let s = serde_json::to_string(self)?;
        Ok(HeaderValue::from_str(&s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_is_empty() {
        let json = serde_json::to_string(&FreeAgentFilter::default()).unwrap();
        assert_eq!(json, r#"{"players":{}}"#);
    }

    #[test]
    fn test_available_filter_header() {
        let header = FreeAgentFilter::available().to_header_value().unwrap();
        assert_eq!(
            header.to_str().unwrap(),
            r#"{"players":{"filterStatus":{"value":["FREEAGENT","WAIVERS"]}}}"#
        );
    }

    #[test]
    fn test_into_header_value() {
        let val = Val { value: "test" };
        let header_value = val.to_header_value().unwrap();
        assert_eq!(header_value.to_str().unwrap(), r#"{"value":"test"}"#);
    }
}
