//! Wire envelopes for ESPN Fantasy Basketball responses.
//!
//! ESPN's schema drifts between seasons and views, so every field here is
//! optional or defaulted and unknown fields are ignored. Normalization into
//! the outbound schema lives in [`crate::models`].

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[cfg(test)]
mod tests;

/// Treat an explicit `null` the same as an absent field.
fn de_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Root document of `/seasons/{season}/segments/0/leagues/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LeagueResponse {
    pub id: Option<u32>,
    #[serde(rename = "seasonId")]
    pub season_id: Option<u16>,
    #[serde(rename = "scoringPeriodId")]
    pub scoring_period_id: Option<u32>,
    pub size: Option<u32>,
    /// Kept opaque; only `name` and `size` are read from it.
    pub settings: Option<Value>,
    #[serde(deserialize_with = "de_null_as_default")]
    pub teams: Vec<TeamEntry>,
    #[serde(deserialize_with = "de_null_as_default")]
    pub members: Vec<MemberEntry>,
}

impl LeagueResponse {
    pub fn settings_name(&self) -> Option<&str> {
        self.settings.as_ref()?.get("name")?.as_str()
    }

    pub fn settings_size(&self) -> Option<u32> {
        self.settings
            .as_ref()?
            .get("size")?
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TeamEntry {
    pub id: Option<u32>,
    pub abbrev: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub nickname: Option<String>,
    #[serde(rename = "primaryOwner")]
    pub primary_owner: Option<String>,
    #[serde(deserialize_with = "de_null_as_default")]
    pub owners: Vec<String>,
    #[serde(rename = "playoffSeed")]
    pub playoff_seed: Option<u32>,
    pub roster: Option<RosterDocument>,
    pub record: Option<RecordDocument>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RosterDocument {
    #[serde(deserialize_with = "de_null_as_default")]
    pub entries: Vec<RosterEntryDocument>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RosterEntryDocument {
    #[serde(rename = "lineupSlotId")]
    pub lineup_slot_id: Option<i32>,
    #[serde(rename = "playerPoolEntry")]
    pub player_pool_entry: Option<PlayerPoolEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlayerPoolEntry {
    pub player: Option<PlayerEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecordDocument {
    pub overall: Option<RecordLine>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecordLine {
    pub wins: Option<u32>,
    pub losses: Option<u32>,
    pub ties: Option<u32>,
    #[serde(rename = "pointsFor")]
    pub points_for: Option<f64>,
    #[serde(rename = "pointsAgainst")]
    pub points_against: Option<f64>,
}

/// Player data from ESPN API
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlayerEntry {
    pub id: Option<u64>,
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    #[serde(rename = "defaultPositionId")]
    pub default_position_id: Option<i32>,
    #[serde(rename = "proTeamId")]
    pub pro_team_id: Option<i32>,
    pub injured: Option<bool>,
    #[serde(rename = "injuryStatus")]
    pub injury_status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MemberEntry {
    pub id: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(rename = "isLeagueManager")]
    pub is_league_manager: Option<bool>,
}

/// Envelope of the `kona_player_info` view.
///
/// A missing `players` array decodes as an empty pool.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FreeAgentResponse {
    #[serde(deserialize_with = "de_null_as_default")]
    pub players: Vec<FreeAgentEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FreeAgentEntry {
    pub id: Option<u64>,
    #[serde(rename = "onTeamId")]
    pub on_team_id: Option<u32>,
    pub status: Option<String>,
    pub player: Option<PlayerEntry>,
}
