//! Badminton league web app: library with models, business logic and the HTTP API.

pub mod api;
pub mod config;
pub mod logic;
pub mod models;
pub mod seed;

pub use config::ServerConfig;
pub use logic::{
    apply_match_to_players, apply_result_to_clubs, is_unplayed, parse_score, player_rankings,
    reduce, reduce_all, side_names, standings, LeagueEvent, ScoreSummary, POINTS_PER_WIN,
};
pub use models::{
    win_rate, Club, ClubId, ClubUpdate, Division, FormResult, LeagueError, LeagueResult,
    LeagueState, Match, MatchId, MatchStatus, NewClub, NewMatch, NewPlayer, NewResult,
    NewTournament, Player, PlayerId, PlayerUpdate, ResultId, Tournament, TournamentId,
    TournamentStatus, DOUBLES_SEPARATOR, RECENT_FORM_LEN,
};
pub use seed::{demo_state, load_clubs_csv, load_players_csv, SeedError};
