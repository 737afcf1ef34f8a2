//! LeagueState (the single owned state holder) and LeagueError.

use crate::models::club::{Club, LeagueResult};
use crate::models::game::{Match, MatchId};
use crate::models::player::{Player, PlayerId};
use crate::models::tournament::{Tournament, TournamentId};
use crate::models::ClubId;
use serde::{Deserialize, Serialize};

/// Errors that can occur when applying a write to the league state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LeagueError {
    /// A required form field was blank.
    MissingField(&'static str),
    /// A player or club with this name already exists (names are unique, case-insensitive).
    DuplicateName(String),
    /// Tournament ends before it starts.
    InvalidDateRange,
    /// A league result names the same club as home and away.
    SameClub(String),
}

impl std::fmt::Display for LeagueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeagueError::MissingField(field) => write!(f, "Missing required field: {}", field),
            LeagueError::DuplicateName(name) => write!(f, "An entry named '{}' already exists", name),
            LeagueError::InvalidDateRange => write!(f, "End date is before start date"),
            LeagueError::SameClub(name) => write!(f, "'{}' cannot play itself", name),
        }
    }
}

impl std::error::Error for LeagueError {}

/// Full in-memory league: every collection the dashboard reads.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct LeagueState {
    pub tournaments: Vec<Tournament>,
    pub players: Vec<Player>,
    pub matches: Vec<Match>,
    pub clubs: Vec<Club>,
    pub results: Vec<LeagueResult>,
}

impl LeagueState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tournament(&self, id: TournamentId) -> Option<&Tournament> {
        self.tournaments.iter().find(|t| t.id == id)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_by_name(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    pub fn match_by_id(&self, id: MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn club(&self, id: ClubId) -> Option<&Club> {
        self.clubs.iter().find(|c| c.id == id)
    }

    pub fn club_by_name(&self, name: &str) -> Option<&Club> {
        self.clubs.iter().find(|c| c.name == name)
    }
}
