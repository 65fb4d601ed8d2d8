//! Unit tests for normalization of upstream documents

use super::*;
use crate::espn::types::{FreeAgentEntry, LeagueResponse, PlayerEntry};
use crate::{LeagueId, PlayerId, Season};
use serde_json::json;

fn league_fixture() -> LeagueResponse {
    serde_json::from_value(json!({
        "id": 1356604871,
        "seasonId": 2026,
        "scoringPeriodId": 30,
        "settings": {"name": "Swish League", "rosterSettings": {"lineupSlotCounts": {"0": 1}}},
        "members": [
            {"id": "{AAA}", "displayName": "alice", "isLeagueManager": true},
            {"id": "{BBB}", "displayName": "bob"}
        ],
        "teams": [
            {
                "id": 1,
                "abbrev": "ALC",
                "name": "Alice Assists",
                "primaryOwner": "{AAA}",
                "owners": ["{AAA}"],
                "playoffSeed": 2,
                "record": {"overall": {"wins": 9, "losses": 3, "pointsFor": 900.0, "pointsAgainst": 850.0}},
                "roster": {"entries": [
                    {"lineupSlotId": 0, "playerPoolEntry": {"player": {
                        "id": 3975, "fullName": "Stephen Curry", "firstName": "Stephen",
                        "lastName": "Curry", "defaultPositionId": 1, "proTeamId": 9,
                        "injured": false, "injuryStatus": "ACTIVE"
                    }}},
                    {"lineupSlotId": 12, "playerPoolEntry": {}}
                ]}
            },
            {
                "id": 2,
                "abbrev": "BOB",
                "location": "Bob's",
                "nickname": "Boards",
                "primaryOwner": "{BBB}",
                "playoffSeed": 1,
                "record": {"overall": {"wins": 10, "losses": 2}}
            },
            {
                "id": 3,
                "abbrev": "GST",
                "name": "Ghosts",
                "owners": ["{ZZZ}"],
                "record": {"overall": {"wins": 11, "losses": 1}}
            }
        ]
    }))
    .unwrap()
}

#[test]
fn test_league_from_response() {
    let league = League::from_response(league_fixture(), LeagueId::new(1), Season::new(2025));

    assert_eq!(league.id, LeagueId::new(1356604871));
    assert_eq!(league.name, "Swish League");
    assert_eq!(league.season, Season::new(2026));
    assert_eq!(league.current_scoring_period, Some(30));
    assert_eq!(league.size, 3);
    assert_eq!(league.members.len(), 2);
    assert!(league.members[0].is_league_manager);
    assert!(!league.members[1].is_league_manager);
    assert_eq!(
        league.settings["rosterSettings"]["lineupSlotCounts"]["0"],
        json!(1)
    );
}

#[test]
fn test_league_falls_back_to_request_values() {
    let league = League::from_response(LeagueResponse::default(), LeagueId::new(77), Season::new(2025));

    assert_eq!(league.id, LeagueId::new(77));
    assert_eq!(league.season, Season::new(2025));
    assert_eq!(league.name, "");
    assert_eq!(league.size, 0);
    assert!(league.settings.is_null());
}

#[test]
fn test_team_normalization() {
    let league = League::from_response(league_fixture(), LeagueId::new(1), Season::new(2026));
    let alice = &league.teams[0];

    assert_eq!(alice.abbreviation, "ALC");
    assert_eq!(alice.record.wins, 9);
    assert_eq!(alice.record.points_against, 850.0);
    // Entries without a player are dropped
    assert_eq!(alice.roster.len(), 1);
    assert_eq!(alice.roster[0].lineup_slot_id, 0);
    assert_eq!(alice.roster[0].player.id, PlayerId::new(3975));
    assert_eq!(alice.roster[0].player.injury_status.as_deref(), Some("ACTIVE"));
}

#[test]
fn test_team_name_from_location_and_nickname() {
    let league = League::from_response(league_fixture(), LeagueId::new(1), Season::new(2026));
    assert_eq!(league.teams[1].name, "Bob's Boards");
    assert_eq!(league.teams[1].record.points_for, 0.0);
}

#[test]
fn test_standings_order_and_owner_names() {
    let league = League::from_response(league_fixture(), LeagueId::new(1), Season::new(2026));
    let standings = league.standings();

    let order: Vec<u32> = standings.iter().map(|s| s.team_id).collect();
    assert_eq!(order, vec![2, 1, 3]);
    assert_eq!(standings[0].rank, 1);
    assert_eq!(standings[2].rank, 3);
    // primary owner used when owners list is absent
    assert_eq!(standings[0].owners, vec!["bob".to_string()]);
    assert_eq!(standings[1].owners, vec!["alice".to_string()]);
    // unknown member ids are passed through
    assert_eq!(standings[2].owners, vec!["{ZZZ}".to_string()]);
}

#[test]
fn test_player_full_name_from_parts() {
    let entry = PlayerEntry {
        id: Some(9),
        first_name: Some("Nikola".to_string()),
        last_name: Some("Jokic".to_string()),
        ..Default::default()
    };
    let player = Player::from_entry(entry).unwrap();

    assert_eq!(player.full_name, "Nikola Jokic");
    assert_eq!(player.default_position_id, -1);
    assert!(!player.injured);
}

#[test]
fn test_player_without_id_is_dropped() {
    assert!(Player::from_entry(PlayerEntry::default()).is_none());
}

#[test]
fn test_free_agent_id_taken_from_wrapper() {
    let entry = FreeAgentEntry {
        id: Some(42),
        player: Some(PlayerEntry {
            full_name: Some("Wrapper Id".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let player = Player::from_free_agent(entry).unwrap();
    assert_eq!(player.id, PlayerId::new(42));
}

#[test]
fn test_serialized_league_uses_camel_case() {
    let league = League::from_response(league_fixture(), LeagueId::new(1), Season::new(2026));
    let json = serde_json::to_value(&league).unwrap();

    assert_eq!(json["currentScoringPeriod"], 30);
    assert_eq!(json["teams"][0]["primaryOwnerId"], "{AAA}");
    assert_eq!(json["teams"][0]["roster"][0]["lineupSlotId"], 0);
    assert_eq!(json["teams"][0]["roster"][0]["player"]["fullName"], "Stephen Curry");
    assert_eq!(json["members"][0]["isLeagueManager"], true);
}
