//! Data structures for the league: tournaments, players, matches, clubs, results.

mod club;
mod game;
mod league;
mod player;
mod tournament;

pub use club::{Club, ClubId, ClubUpdate, Division, LeagueResult, NewClub, NewResult, ResultId};
pub use game::{Match, MatchId, MatchStatus, NewMatch, DOUBLES_SEPARATOR};
pub use league::{LeagueError, LeagueState};
pub use player::{win_rate, FormResult, NewPlayer, Player, PlayerId, PlayerUpdate, RECENT_FORM_LEN};
pub use tournament::{NewTournament, Tournament, TournamentId, TournamentStatus};
