use serde::Serialize;
use serde_json::Value;
use std::cmp::{Ordering, Reverse};

use super::Player;
use crate::cli::types::{LeagueId, Season};
use crate::espn::types::{LeagueResponse, MemberEntry, RosterEntryDocument, TeamEntry};

/// Normalized league document.
///
/// `settings` is passed through untouched; its scoring and roster sections
/// change shape between seasons.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub id: LeagueId,
    pub name: String,
    pub size: u32,
    pub season: Season,
    pub current_scoring_period: Option<u32>,
    pub settings: Value,
    pub teams: Vec<Team>,
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: u32,
    pub abbreviation: String,
    pub name: String,
    pub location: Option<String>,
    pub nickname: Option<String>,
    pub primary_owner_id: Option<String>,
    pub owner_ids: Vec<String>,
    pub playoff_seed: Option<u32>,
    pub roster: Vec<RosterEntry>,
    pub record: Record,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub player: Player,
    pub lineup_slot_id: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: f64,
    pub points_against: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub display_name: String,
    pub is_league_manager: bool,
}

/// One row of the league table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub rank: u32,
    pub team_id: u32,
    pub team_name: String,
    pub owners: Vec<String>,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: f64,
    pub points_against: f64,
}

impl League {
    /// Normalize an upstream league document.
    ///
    /// `league_id` and `season` are the values the request was made with and
    /// only fill in what the document itself does not report.
    pub fn from_response(response: LeagueResponse, league_id: LeagueId, season: Season) -> Self {
        let name = response.settings_name().unwrap_or_default().to_string();
        let size = response
            .size
            .or_else(|| response.settings_size())
            .unwrap_or(response.teams.len() as u32);

        Self {
            id: response.id.map(LeagueId::new).unwrap_or(league_id),
            name,
            size,
            season: response.season_id.map(Season::new).unwrap_or(season),
            current_scoring_period: response.scoring_period_id,
            settings: response.settings.unwrap_or(Value::Null),
            teams: response.teams.into_iter().map(Team::from).collect(),
            members: response.members.into_iter().filter_map(Member::from_entry).collect(),
        }
    }

    fn owner_names(&self, team: &Team) -> Vec<String> {
        let ids: Vec<&String> = if team.owner_ids.is_empty() {
            team.primary_owner_id.iter().collect()
        } else {
            team.owner_ids.iter().collect()
        };

        ids.into_iter()
            .map(|id| {
                self.members
                    .iter()
                    .find(|m| &m.id == id)
                    .map(|m| m.display_name.clone())
                    .unwrap_or_else(|| id.clone())
            })
            .collect()
    }

    /// Teams ordered by playoff seed; unseeded teams follow, best record first.
    pub fn standings(&self) -> Vec<Standing> {
        let mut teams: Vec<&Team> = self.teams.iter().collect();
        teams.sort_by(|a, b| {
            let seed = |t: &Team| t.playoff_seed.filter(|s| *s > 0).unwrap_or(u32::MAX);
            seed(a)
                .cmp(&seed(b))
                .then_with(|| Reverse(a.record.wins).cmp(&Reverse(b.record.wins)))
                .then_with(|| {
                    b.record
                        .points_for
                        .partial_cmp(&a.record.points_for)
                        .unwrap_or(Ordering::Equal)
                })
        });

        teams
            .into_iter()
            .enumerate()
            .map(|(i, team)| Standing {
                rank: i as u32 + 1,
                team_id: team.id,
                team_name: team.name.clone(),
                owners: self.owner_names(team),
                wins: team.record.wins,
                losses: team.record.losses,
                ties: team.record.ties,
                points_for: team.record.points_for,
                points_against: team.record.points_against,
            })
            .collect()
    }
}

impl From<TeamEntry> for Team {
    fn from(entry: TeamEntry) -> Self {
        let name = entry
            .name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| {
                [entry.location.as_deref(), entry.nickname.as_deref()]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join(" ")
            });

        let record = entry
            .record
            .and_then(|r| r.overall)
            .map(|line| Record {
                wins: line.wins.unwrap_or(0),
                losses: line.losses.unwrap_or(0),
                ties: line.ties.unwrap_or(0),
                points_for: line.points_for.unwrap_or(0.0),
                points_against: line.points_against.unwrap_or(0.0),
            })
            .unwrap_or_default();

        let roster = entry
            .roster
            .map(|r| r.entries.into_iter().filter_map(RosterEntry::from_document).collect())
            .unwrap_or_default();

        Self {
            id: entry.id.unwrap_or(0),
            abbreviation: entry.abbrev.unwrap_or_default(),
            name,
            location: entry.location,
            nickname: entry.nickname,
            primary_owner_id: entry.primary_owner,
            owner_ids: entry.owners,
            playoff_seed: entry.playoff_seed,
            roster,
            record,
        }
    }
}

impl RosterEntry {
    fn from_document(doc: RosterEntryDocument) -> Option<Self> {
        let player = Player::from_entry(doc.player_pool_entry?.player?)?;
        Some(Self {
            player,
            lineup_slot_id: doc.lineup_slot_id.unwrap_or(-1),
        })
    }
}

impl Member {
    fn from_entry(entry: MemberEntry) -> Option<Self> {
        Some(Self {
            id: entry.id?,
            display_name: entry.display_name.unwrap_or_default(),
            is_league_manager: entry.is_league_manager.unwrap_or(false),
        })
    }
}
