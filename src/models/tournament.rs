//! Tournament listing entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Categories contested (e.g. "Men's Singles", "Mixed Doubles").
    pub categories: Vec<String>,
    pub status: TournamentStatus,
}

impl Tournament {
    pub fn new(details: NewTournament) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: details.name,
            location: details.location,
            start_date: details.start_date,
            end_date: details.end_date,
            categories: details.categories,
            status: details.status,
        }
    }
}

/// Fields entered on the tournament form. Also used for edits (full replace of the fields).
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewTournament {
    pub name: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub status: TournamentStatus,
}
