//! Unit tests for ESPN wire envelopes

use super::*;
use serde_json::json;

#[cfg(test)]
mod types_tests {
    use super::*;

    #[test]
    fn test_league_response_deserialization() {
        let json = json!({
            "id": 1356604871,
            "seasonId": 2026,
            "scoringPeriodId": 12,
            "settings": {
                "name": "Swish League",
                "size": 10,
                "scoringSettings": {"scoringType": "H2H_CATEGORY"}
            },
            "teams": [{"id": 1, "abbrev": "DUNK"}],
            "members": [{"id": "{AAA}", "displayName": "alice", "isLeagueManager": true}]
        });

        let league: LeagueResponse = serde_json::from_value(json).unwrap();
        assert_eq!(league.id, Some(1356604871));
        assert_eq!(league.season_id, Some(2026));
        assert_eq!(league.scoring_period_id, Some(12));
        assert_eq!(league.settings_name(), Some("Swish League"));
        assert_eq!(league.settings_size(), Some(10));
        assert_eq!(league.teams.len(), 1);
        assert_eq!(league.members[0].display_name.as_deref(), Some("alice"));
    }

    #[test]
    fn test_league_response_ignores_unknown_fields() {
        let json = json!({
            "id": 1,
            "draftDetail": {"drafted": true},
            "gameId": 3,
            "status": {"currentMatchupPeriod": 4}
        });

        let league: LeagueResponse = serde_json::from_value(json).unwrap();
        assert_eq!(league.id, Some(1));
        assert!(league.teams.is_empty());
        assert!(league.settings.is_none());
    }

    #[test]
    fn test_null_collections_decode_as_empty() {
        let json = json!({"teams": null, "members": null});
        let league: LeagueResponse = serde_json::from_value(json).unwrap();
        assert!(league.teams.is_empty());
        assert!(league.members.is_empty());
    }

    #[test]
    fn test_wrong_collection_type_is_an_error() {
        let json = json!({"teams": "not-a-list"});
        assert!(serde_json::from_value::<LeagueResponse>(json).is_err());
    }

    #[test]
    fn test_team_entry_with_roster_and_record() {
        let json = json!({
            "id": 4,
            "abbrev": "HOOP",
            "location": "Downtown",
            "nickname": "Splash",
            "primaryOwner": "{BBB}",
            "owners": ["{BBB}"],
            "playoffSeed": 2,
            "roster": {"entries": [{
                "lineupSlotId": 0,
                "playerPoolEntry": {"player": {
                    "id": 3975,
                    "fullName": "Stephen Curry",
                    "defaultPositionId": 1,
                    "proTeamId": 9,
                    "injured": false,
                    "injuryStatus": "ACTIVE"
                }}
            }]},
            "record": {"overall": {"wins": 8, "losses": 3, "ties": 1, "pointsFor": 1012.5}}
        });

        let team: TeamEntry = serde_json::from_value(json).unwrap();
        assert_eq!(team.abbrev.as_deref(), Some("HOOP"));
        assert_eq!(team.playoff_seed, Some(2));
        let entries = &team.roster.as_ref().unwrap().entries;
        assert_eq!(entries.len(), 1);
        let player = entries[0]
            .player_pool_entry
            .as_ref()
            .and_then(|p| p.player.as_ref())
            .unwrap();
        assert_eq!(player.full_name.as_deref(), Some("Stephen Curry"));
        let overall = team.record.unwrap().overall.unwrap();
        assert_eq!(overall.wins, Some(8));
        assert_eq!(overall.points_for, Some(1012.5));
        assert_eq!(overall.points_against, None);
    }

    #[test]
    fn test_free_agent_response_deserialization() {
        let json = json!({
            "players": [
                {"id": 1, "onTeamId": 0, "status": "FREEAGENT", "player": {"id": 1, "fullName": "A"}},
                {"id": 2, "onTeamId": 0, "status": "WAIVERS", "player": {"id": 2, "fullName": "B"}}
            ]
        });

        let response: FreeAgentResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.players.len(), 2);
        assert_eq!(response.players[1].status.as_deref(), Some("WAIVERS"));
    }

    #[test]
    fn test_free_agent_response_without_players_is_empty() {
        let response: FreeAgentResponse = serde_json::from_value(json!({"id": 5})).unwrap();
        assert!(response.players.is_empty());
    }
}
