//! Match between two sides (a single name, or a doubles pair joined by " / ").

use crate::logic::is_unplayed;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Separator between the two names of a doubles pair in `player1` / `player2`.
pub const DOUBLES_SEPARATOR: &str = " / ";

/// Whether the match has a recorded score.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Completed,
}

impl MatchStatus {
    pub fn for_score(score: &str) -> Self {
        if is_unplayed(score) {
            MatchStatus::Scheduled
        } else {
            MatchStatus::Completed
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    /// Tournament or context label (free text).
    pub tournament: String,
    pub player1: String,
    pub player2: String,
    pub category: String,
    /// Comma-separated sets, e.g. "21-15, 21-18". "TBD" / empty / "Not started" when unplayed.
    pub score: String,
    pub round: Option<String>,
    pub date: NaiveDate,
    pub status: MatchStatus,
    /// Set once the score has been counted in player statistics. Never reset.
    #[serde(default)]
    pub stats_applied: bool,
}

impl Match {
    pub fn new(details: NewMatch) -> Self {
        let score = details.score.trim().to_string();
        Self {
            id: Uuid::new_v4(),
            tournament: details.tournament,
            player1: details.player1,
            player2: details.player2,
            category: details.category,
            status: MatchStatus::for_score(&score),
            score,
            round: details.round,
            date: details.date,
            stats_applied: false,
        }
    }

    pub fn is_played(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    /// Replace the score, keeping `status` in step.
    pub fn set_score(&mut self, score: &str) {
        self.score = score.trim().to_string();
        self.status = MatchStatus::for_score(&self.score);
    }
}

/// Fields entered on the "add match" form.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewMatch {
    pub tournament: String,
    pub player1: String,
    pub player2: String,
    pub category: String,
    #[serde(default)]
    pub score: String,
    #[serde(default)]
    pub round: Option<String>,
    pub date: NaiveDate,
}
