//! Club, Division and league Result records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub type ClubId = Uuid;
pub type ResultId = Uuid;

/// League tier.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Division {
    #[serde(rename = "Division 1")]
    One,
    #[serde(rename = "Division 2")]
    Two,
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Division::One => write!(f, "Division 1"),
            Division::Two => write!(f, "Division 2"),
        }
    }
}

/// Accepts the display label ("Division 1") or the bare tier number ("1").
impl FromStr for Division {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" | "Division 1" => Ok(Division::One),
            "2" | "Division 2" => Ok(Division::Two),
            other => Err(format!("Unknown division: {other}")),
        }
    }
}

/// A club and its league tallies. Tallies change only through recorded results.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Club {
    pub id: ClubId,
    pub name: String,
    pub division: Division,
    pub points: u32,
    pub games_won: u32,
    pub games_lost: u32,
    pub matches_played: u32,
    pub matches_won: u32,
    pub matches_lost: u32,
}

impl Club {
    pub fn new(name: impl Into<String>, division: Division) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            division,
            points: 0,
            games_won: 0,
            games_lost: 0,
            matches_played: 0,
            matches_won: 0,
            matches_lost: 0,
        }
    }

    pub fn game_difference(&self) -> i64 {
        i64::from(self.games_won) - i64::from(self.games_lost)
    }
}

/// A completed club-vs-club fixture. Append-only.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct LeagueResult {
    pub id: ResultId,
    pub home_club: String,
    pub away_club: String,
    pub home_score: u32,
    pub away_score: u32,
    pub date: NaiveDate,
    pub division: Division,
}

impl LeagueResult {
    pub fn new(details: NewResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            home_club: details.home_club,
            away_club: details.away_club,
            home_score: details.home_score,
            away_score: details.away_score,
            date: details.date,
            division: details.division,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewClub {
    pub name: String,
    pub division: Division,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ClubUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub division: Option<Division>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewResult {
    pub home_club: String,
    pub away_club: String,
    pub home_score: u32,
    pub away_score: u32,
    pub date: NaiveDate,
    pub division: Division,
}
