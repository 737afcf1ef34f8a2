//! League business logic: score parsing, statistics, standings and the event reducer.

mod club_standings;
mod player_stats;
mod score;
mod store;

pub use club_standings::{apply_result_to_clubs, standings, POINTS_PER_WIN};
pub use player_stats::{apply_match_to_players, player_rankings, side_names};
pub use score::{is_unplayed, parse_score, ScoreSummary};
pub use store::{reduce, reduce_all, LeagueEvent};
