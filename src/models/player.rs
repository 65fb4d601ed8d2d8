use serde::Serialize;

use crate::cli::types::PlayerId;
use crate::espn::types::{FreeAgentEntry, PlayerEntry};

/// Normalized player as exposed to internal consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub full_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub default_position_id: i32,
    pub pro_team_id: i32,
    pub injured: bool,
    pub injury_status: Option<String>,
}

impl Player {
    /// Normalize one upstream player. Players without an id are dropped.
    pub fn from_entry(entry: PlayerEntry) -> Option<Self> {
        let id = PlayerId::new(entry.id?);
        let full_name = entry.full_name.unwrap_or_else(|| {
            [entry.first_name.as_deref(), entry.last_name.as_deref()]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" ")
        });

        Some(Self {
            id,
            full_name,
            first_name: entry.first_name,
            last_name: entry.last_name,
            default_position_id: entry.default_position_id.unwrap_or(-1),
            pro_team_id: entry.pro_team_id.unwrap_or(0),
            injured: entry.injured.unwrap_or(false),
            injury_status: entry.injury_status,
        })
    }

    /// Free-agent entries carry the player id on the wrapper as well.
    pub fn from_free_agent(entry: FreeAgentEntry) -> Option<Self> {
        let mut player = entry.player?;
        if player.id.is_none() {
            player.id = entry.id;
        }
        Self::from_entry(player)
    }
}
