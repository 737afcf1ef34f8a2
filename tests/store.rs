//! Integration tests for the league reducer.

use badminton_league_web::{
    reduce, reduce_all, ClubUpdate, Division, FormResult, LeagueError, LeagueEvent, LeagueState,
    MatchStatus, NewClub, NewMatch, NewPlayer, NewResult, NewTournament, PlayerUpdate,
    TournamentStatus,
};
use chrono::NaiveDate;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, d).unwrap()
}

fn add_player(name: &str, categories: &[&str]) -> LeagueEvent {
    LeagueEvent::AddPlayer(NewPlayer {
        name: name.to_string(),
        country: "Denmark".to_string(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        ranking: 1,
        ranking_points: None,
        club: None,
    })
}

fn record_match(player1: &str, player2: &str, category: &str, score: &str) -> LeagueEvent {
    LeagueEvent::RecordMatch(NewMatch {
        tournament: "Summer Open".to_string(),
        player1: player1.to_string(),
        player2: player2.to_string(),
        category: category.to_string(),
        score: score.to_string(),
        round: Some("Final".to_string()),
        date: day(1),
    })
}

fn add_club(name: &str) -> LeagueEvent {
    LeagueEvent::AddClub(NewClub {
        name: name.to_string(),
        division: Division::One,
    })
}

fn singles_league() -> LeagueState {
    reduce_all(
        &LeagueState::new(),
        [
            add_player("Lars", &["Men's Singles"]),
            add_player("Tom", &["Men's Singles"]),
        ],
    )
    .unwrap()
}

#[test]
fn reduce_leaves_input_state_untouched() {
    let state = singles_league();
    let before = state.clone();
    let next = reduce(&state, record_match("Lars", "Tom", "Men's Singles", "21-15, 21-18")).unwrap();
    assert_eq!(state, before);
    assert_eq!(next.matches.len(), 1);
    assert_eq!(next.player_by_name("Lars").unwrap().matches_won, 1);
}

#[test]
fn recording_an_unplayed_match_keeps_statistics() {
    let state = singles_league();
    let next = reduce(&state, record_match("Lars", "Tom", "Men's Singles", "TBD")).unwrap();
    assert_eq!(next.matches[0].status, MatchStatus::Scheduled);
    assert_eq!(next.players, state.players);
}

#[test]
fn first_score_on_a_scheduled_match_updates_statistics_once() {
    let state = reduce(&singles_league(), record_match("Lars", "Tom", "Men's Singles", "Not started")).unwrap();
    let id = state.matches[0].id;

    let state = reduce(&state, LeagueEvent::UpdateMatchScore { id, score: "21-19, 21-17".to_string() }).unwrap();
    assert_eq!(state.matches[0].status, MatchStatus::Completed);
    assert_eq!(state.player_by_name("Lars").unwrap().matches_won, 1);
    assert_eq!(state.player_by_name("Tom").unwrap().matches_lost, 1);

    // A correction to an already played match changes the score only.
    let state = reduce(&state, LeagueEvent::UpdateMatchScore { id, score: "21-19, 21-18".to_string() }).unwrap();
    assert_eq!(state.matches[0].score, "21-19, 21-18");
    assert_eq!(state.player_by_name("Lars").unwrap().matches_played(), 1);
}

#[test]
fn win_loss_totals_match_played_matches() {
    let state = reduce_all(
        &singles_league(),
        [
            record_match("Lars", "Tom", "Men's Singles", "21-15, 21-18"),
            record_match("Tom", "Lars", "Men's Singles", "21-15, 21-18"),
            record_match("Tom", "Lars", "Men's Singles", "TBD"),
            record_match("Lars", "Tom", "Men's Singles", "15-21, 21-12, 21-9"),
        ],
    )
    .unwrap();
    let played = state.matches.iter().filter(|m| m.is_played()).count() as u32;
    for player in &state.players {
        assert_eq!(player.matches_played(), played);
    }
    let lars = state.player_by_name("Lars").unwrap();
    assert_eq!((lars.matches_won, lars.matches_lost, lars.win_rate), (2, 1, 67));
}

#[test]
fn blank_fields_are_rejected() {
    let state = LeagueState::new();
    assert_eq!(
        reduce(&state, add_player("  ", &["Men's Singles"])),
        Err(LeagueError::MissingField("name"))
    );
    assert_eq!(
        reduce(&state, add_player("Lars", &[])),
        Err(LeagueError::MissingField("categories"))
    );
    assert_eq!(
        reduce(&state, record_match("Lars", "", "Men's Singles", "TBD")),
        Err(LeagueError::MissingField("player2"))
    );
}

#[test]
fn duplicate_names_are_rejected_case_insensitively() {
    let state = singles_league();
    assert_eq!(
        reduce(&state, add_player("lars", &["Men's Doubles"])),
        Err(LeagueError::DuplicateName("lars".to_string()))
    );

    let state = reduce(&state, add_club("Shuttle Stars")).unwrap();
    assert!(matches!(
        reduce(&state, add_club("SHUTTLE STARS")),
        Err(LeagueError::DuplicateName(_))
    ));
}

#[test]
fn update_player_edits_profile_only() {
    let state = reduce(&singles_league(), record_match("Lars", "Tom", "Men's Singles", "21-15, 21-18")).unwrap();
    let id = state.player_by_name("Lars").unwrap().id;
    let update = PlayerUpdate {
        country: Some("Norway".to_string()),
        ranking: Some(7),
        club: Some("Net Masters".to_string()),
        ..PlayerUpdate::default()
    };
    let state = reduce(&state, LeagueEvent::UpdatePlayer { id, update }).unwrap();
    let lars = state.player(id).unwrap();
    assert_eq!(lars.country, "Norway");
    assert_eq!(lars.ranking, 7);
    assert_eq!(lars.club.as_deref(), Some("Net Masters"));
    assert_eq!(lars.matches_won, 1);

    let rename = PlayerUpdate {
        name: Some("Tom".to_string()),
        ..PlayerUpdate::default()
    };
    assert!(matches!(
        reduce(&state, LeagueEvent::UpdatePlayer { id, update: rename }),
        Err(LeagueError::DuplicateName(_))
    ));
}

#[test]
fn unknown_ids_are_no_ops() {
    let state = singles_league();
    let ghost = uuid::Uuid::new_v4();
    for event in [
        LeagueEvent::RemovePlayer(ghost),
        LeagueEvent::RemoveMatch(ghost),
        LeagueEvent::RemoveClub(ghost),
        LeagueEvent::RemoveTournament(ghost),
        LeagueEvent::UpdateMatchScore { id: ghost, score: "21-0".to_string() },
        LeagueEvent::UpdatePlayer { id: ghost, update: PlayerUpdate::default() },
        LeagueEvent::UpdateClub { id: ghost, update: ClubUpdate::default() },
    ] {
        assert_eq!(reduce(&state, event).unwrap(), state);
    }
}

#[test]
fn remove_player_deletes_only_that_player() {
    let state = singles_league();
    let id = state.player_by_name("Tom").unwrap().id;
    let state = reduce(&state, LeagueEvent::RemovePlayer(id)).unwrap();
    assert_eq!(state.players.len(), 1);
    assert!(state.player(id).is_none());
}

#[test]
fn recording_a_result_updates_standings() {
    let state = reduce_all(&LeagueState::new(), [add_club("Shuttle Stars"), add_club("Net Masters")]).unwrap();
    let state = reduce(
        &state,
        LeagueEvent::RecordResult(NewResult {
            home_club: "Shuttle Stars".to_string(),
            away_club: "Net Masters".to_string(),
            home_score: 16,
            away_score: 8,
            date: day(3),
            division: Division::One,
        }),
    )
    .unwrap();
    assert_eq!(state.results.len(), 1);
    let home = state.club_by_name("Shuttle Stars").unwrap();
    assert_eq!((home.points, home.matches_won), (3, 1));
    let away = state.club_by_name("Net Masters").unwrap();
    assert_eq!((away.points, away.matches_lost), (0, 1));
}

#[test]
fn tournament_dates_must_be_ordered() {
    let details = NewTournament {
        name: "Winter Cup".to_string(),
        location: "Aarhus".to_string(),
        start_date: day(10),
        end_date: day(9),
        categories: vec![],
        status: TournamentStatus::Upcoming,
    };
    assert_eq!(
        reduce(&LeagueState::new(), LeagueEvent::AddTournament(details.clone())),
        Err(LeagueError::InvalidDateRange)
    );

    let ok = NewTournament { end_date: day(12), ..details };
    let state = reduce(&LeagueState::new(), LeagueEvent::AddTournament(ok.clone())).unwrap();
    let id = state.tournaments[0].id;
    let edited = NewTournament {
        status: TournamentStatus::Ongoing,
        ..ok
    };
    let state = reduce(&state, LeagueEvent::UpdateTournament { id, details: edited }).unwrap();
    assert_eq!(state.tournaments[0].id, id);
    assert_eq!(state.tournaments[0].status, TournamentStatus::Ongoing);
}

#[test]
fn events_round_trip_through_json() {
    let json = r#"{"type":"record_match","data":{"tournament":"Open","player1":"A / B","player2":"C / D","category":"Mixed Doubles","score":"21-10, 21-12","date":"2026-06-01"}}"#;
    let event: LeagueEvent = serde_json::from_str(json).unwrap();
    assert!(matches!(event, LeagueEvent::RecordMatch(ref m) if m.round.is_none() && m.player1 == "A / B"));
}

#[test]
fn resetting_a_played_score_and_replaying_it_counts_once() {
    let state = reduce(&singles_league(), record_match("Lars", "Tom", "Men's Singles", "21-15, 21-18")).unwrap();
    let id = state.matches[0].id;
    assert!(state.matches[0].stats_applied);

    let state = reduce_all(
        &state,
        [
            LeagueEvent::UpdateMatchScore { id, score: "TBD".to_string() },
            LeagueEvent::UpdateMatchScore { id, score: "21-15, 21-18".to_string() },
            LeagueEvent::UpdateMatchScore { id, score: "".to_string() },
            LeagueEvent::UpdateMatchScore { id, score: "15-21, 18-21".to_string() },
        ],
    )
    .unwrap();
    let played = state.matches.iter().filter(|m| m.is_played()).count() as u32;
    assert_eq!(played, 1);
    for player in &state.players {
        assert_eq!(player.matches_played(), played);
    }
    let lars = state.player_by_name("Lars").unwrap();
    assert_eq!(lars.recent_form, vec![FormResult::W]);
}

#[test]
fn scheduled_then_reset_then_played_counts_once() {
    let state = reduce(&singles_league(), record_match("Lars", "Tom", "Men's Singles", "TBD")).unwrap();
    let id = state.matches[0].id;
    assert!(!state.matches[0].stats_applied);

    let state = reduce_all(
        &state,
        [
            LeagueEvent::UpdateMatchScore { id, score: "Not started".to_string() },
            LeagueEvent::UpdateMatchScore { id, score: "21-19, 21-17".to_string() },
            LeagueEvent::UpdateMatchScore { id, score: "TBD".to_string() },
            LeagueEvent::UpdateMatchScore { id, score: "21-19, 21-17".to_string() },
        ],
    )
    .unwrap();
    assert!(state.matches[0].stats_applied);
    assert_eq!(state.player_by_name("Lars").unwrap().matches_won, 1);
    assert_eq!(state.player_by_name("Tom").unwrap().matches_lost, 1);
}

#[test]
fn club_cannot_play_itself() {
    let state = reduce(&LeagueState::new(), add_club("Shuttle Stars")).unwrap();
    let event = LeagueEvent::RecordResult(NewResult {
        home_club: "Shuttle Stars".to_string(),
        away_club: " shuttle stars".to_string(),
        home_score: 16,
        away_score: 8,
        date: day(3),
        division: Division::One,
    });
    assert_eq!(
        reduce(&state, event),
        Err(LeagueError::SameClub("Shuttle Stars".to_string()))
    );
}

#[test]
fn huge_result_scores_saturate_instead_of_overflowing() {
    let state = reduce_all(&LeagueState::new(), [add_club("Shuttle Stars"), add_club("Net Masters")]).unwrap();
    let huge = || {
        LeagueEvent::RecordResult(NewResult {
            home_club: "Shuttle Stars".to_string(),
            away_club: "Net Masters".to_string(),
            home_score: u32::MAX,
            away_score: 0,
            date: day(3),
            division: Division::One,
        })
    };
    let state = reduce_all(&state, [huge(), huge()]).unwrap();
    let home = state.club_by_name("Shuttle Stars").unwrap();
    assert_eq!(home.games_won, u32::MAX);
    assert_eq!((home.points, home.matches_won), (6, 2));
    assert_eq!(state.club_by_name("Net Masters").unwrap().games_lost, u32::MAX);
}

#[test]
fn ranking_points_can_be_kept_set_or_cleared() {
    let state = reduce(&singles_league(), LeagueEvent::AddPlayer(NewPlayer {
        name: "Mia".to_string(),
        country: "Sweden".to_string(),
        categories: vec!["Women's Singles".to_string()],
        ranking: 1,
        ranking_points: Some(9400),
        club: None,
    }))
    .unwrap();
    let id = state.player_by_name("Mia").unwrap().id;

    let keep: PlayerUpdate = serde_json::from_str(r#"{"ranking": 2}"#).unwrap();
    let state = reduce(&state, LeagueEvent::UpdatePlayer { id, update: keep }).unwrap();
    assert_eq!(state.player(id).unwrap().ranking_points, Some(9400));

    let set: PlayerUpdate = serde_json::from_str(r#"{"ranking_points": 9500}"#).unwrap();
    let state = reduce(&state, LeagueEvent::UpdatePlayer { id, update: set }).unwrap();
    assert_eq!(state.player(id).unwrap().ranking_points, Some(9500));

    let clear: PlayerUpdate = serde_json::from_str(r#"{"ranking_points": null}"#).unwrap();
    let state = reduce(&state, LeagueEvent::UpdatePlayer { id, update: clear }).unwrap();
    assert_eq!(state.player(id).unwrap().ranking_points, None);
}
