//! Built-in demo league and CSV roster import.

use crate::logic::{reduce_all, LeagueEvent};
use crate::models::{
    Division, LeagueError, LeagueState, NewClub, NewMatch, NewPlayer, NewResult, NewTournament,
    TournamentStatus,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Errors while building seed data or importing rosters.
#[derive(Debug)]
pub enum SeedError {
    Io(std::io::Error),
    Csv(csv::Error),
    /// A row was read but its contents were rejected.
    Invalid(String),
}

impl std::fmt::Display for SeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedError::Io(e) => write!(f, "Could not read roster file: {}", e),
            SeedError::Csv(e) => write!(f, "Malformed roster CSV: {}", e),
            SeedError::Invalid(msg) => write!(f, "Invalid roster entry: {}", msg),
        }
    }
}

impl std::error::Error for SeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SeedError::Io(e) => Some(e),
            SeedError::Csv(e) => Some(e),
            SeedError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SeedError {
    fn from(e: std::io::Error) -> Self {
        SeedError::Io(e)
    }
}

impl From<csv::Error> for SeedError {
    fn from(e: csv::Error) -> Self {
        SeedError::Csv(e)
    }
}

impl From<LeagueError> for SeedError {
    fn from(e: LeagueError) -> Self {
        SeedError::Invalid(e.to_string())
    }
}

/// Separator between categories in the roster `categories` column.
const CATEGORY_SEPARATOR: char = ';';

#[derive(Debug, Deserialize)]
struct PlayerRow {
    name: String,
    country: String,
    categories: String,
    ranking: u32,
    ranking_points: Option<u32>,
    club: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ClubRow {
    name: String,
    division: String,
}

/// Read a player roster: `name,country,categories,ranking,ranking_points,club`.
/// Categories are `;`-separated; the last two columns may be empty.
pub fn load_players_csv<R: Read>(reader: R) -> Result<Vec<NewPlayer>, SeedError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut players = Vec::new();
    for row in rdr.deserialize() {
        let row: PlayerRow = row?;
        players.push(NewPlayer {
            name: row.name,
            country: row.country,
            categories: row
                .categories
                .split(CATEGORY_SEPARATOR)
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect(),
            ranking: row.ranking,
            ranking_points: row.ranking_points,
            club: row.club.filter(|c| !c.is_empty()),
        });
    }
    Ok(players)
}

/// Read a club list: `name,division` where division is "1", "2", "Division 1" or "Division 2".
pub fn load_clubs_csv<R: Read>(reader: R) -> Result<Vec<NewClub>, SeedError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut clubs = Vec::new();
    for row in rdr.deserialize() {
        let row: ClubRow = row?;
        let division: Division = row.division.parse().map_err(SeedError::Invalid)?;
        clubs.push(NewClub {
            name: row.name,
            division,
        });
    }
    Ok(clubs)
}

/// Import a player roster file into `state`.
pub fn import_players_file(state: &LeagueState, path: &Path) -> Result<LeagueState, SeedError> {
    let players = load_players_csv(File::open(path)?)?;
    log::info!("Importing {} player(s) from {}", players.len(), path.display());
    Ok(reduce_all(state, players.into_iter().map(LeagueEvent::AddPlayer))?)
}

/// Import a club list file into `state`.
pub fn import_clubs_file(state: &LeagueState, path: &Path) -> Result<LeagueState, SeedError> {
    let clubs = load_clubs_csv(File::open(path)?)?;
    log::info!("Importing {} club(s) from {}", clubs.len(), path.display());
    Ok(reduce_all(state, clubs.into_iter().map(LeagueEvent::AddClub))?)
}

fn date(y: i32, m: u32, d: u32) -> Result<NaiveDate, SeedError> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| SeedError::Invalid(format!("bad date {y}-{m}-{d}")))
}

fn categories(names: &[&str]) -> Vec<String> {
    names.iter().map(|c| c.to_string()).collect()
}

fn player(name: &str, country: &str, cats: &[&str], ranking: u32, points: u32, club: &str) -> LeagueEvent {
    LeagueEvent::AddPlayer(NewPlayer {
        name: name.to_string(),
        country: country.to_string(),
        categories: categories(cats),
        ranking,
        ranking_points: Some(points),
        club: Some(club.to_string()),
    })
}

fn club(name: &str, division: Division) -> LeagueEvent {
    LeagueEvent::AddClub(NewClub {
        name: name.to_string(),
        division,
    })
}

fn game(
    tournament: &str,
    player1: &str,
    player2: &str,
    category: &str,
    score: &str,
    round: &str,
    date: NaiveDate,
) -> LeagueEvent {
    LeagueEvent::RecordMatch(NewMatch {
        tournament: tournament.to_string(),
        player1: player1.to_string(),
        player2: player2.to_string(),
        category: category.to_string(),
        score: score.to_string(),
        round: Some(round.to_string()),
        date,
    })
}

fn result(home: &str, away: &str, home_score: u32, away_score: u32, date: NaiveDate, division: Division) -> LeagueEvent {
    LeagueEvent::RecordResult(NewResult {
        home_club: home.to_string(),
        away_club: away.to_string(),
        home_score,
        away_score,
        date,
        division,
    })
}

/// The mock league the dashboard starts with.
///
/// Statistics are not hard-coded: the seed matches and results are replayed through the
/// reducer, so player records and club tallies agree with the stored matches.
pub fn demo_state() -> Result<LeagueState, SeedError> {
    const OPEN: &str = "City Open 2026";
    const MS: &str = "Men's Singles";
    const WS: &str = "Women's Singles";
    const MD: &str = "Men's Doubles";
    const XD: &str = "Mixed Doubles";

    let events = vec![
        LeagueEvent::AddTournament(NewTournament {
            name: OPEN.to_string(),
            location: "Central Sports Hall".to_string(),
            start_date: date(2026, 9, 12)?,
            end_date: date(2026, 9, 14)?,
            categories: categories(&[MS, WS, MD, XD]),
            status: TournamentStatus::Completed,
        }),
        LeagueEvent::AddTournament(NewTournament {
            name: "Autumn Club Championship".to_string(),
            location: "Riverside Arena".to_string(),
            start_date: date(2026, 11, 7)?,
            end_date: date(2026, 11, 8)?,
            categories: categories(&[MS, MD, XD]),
            status: TournamentStatus::Upcoming,
        }),
        club("Shuttle Stars", Division::One),
        club("Net Masters", Division::One),
        club("Feather Flyers", Division::One),
        club("Smash Club", Division::Two),
        club("Drop Shot BC", Division::Two),
        player("Lars Berg", "Denmark", &[MS, MD], 1, 9850, "Shuttle Stars"),
        player("Tom Reyes", "Spain", &[MS, MD], 2, 9120, "Net Masters"),
        player("Kenji Sato", "Japan", &[MD, XD], 3, 8700, "Feather Flyers"),
        player("Owen Hart", "England", &[MD, XD], 4, 8410, "Shuttle Stars"),
        player("Mia Lindqvist", "Sweden", &[WS, XD], 1, 9400, "Net Masters"),
        player("Ana Costa", "Portugal", &[WS, XD], 2, 8950, "Smash Club"),
        game(OPEN, "Lars Berg", "Tom Reyes", MS, "21-15, 21-18", "Final", date(2026, 9, 14)?),
        game(OPEN, "Mia Lindqvist", "Ana Costa", WS, "18-21, 21-17, 21-19", "Final", date(2026, 9, 14)?),
        game(OPEN, "Lars Berg / Tom Reyes", "Kenji Sato / Owen Hart", MD, "19-21, 15-21", "Final", date(2026, 9, 14)?),
        game(OPEN, "Kenji Sato / Ana Costa", "Owen Hart / Mia Lindqvist", XD, "21-12, 21-16", "Final", date(2026, 9, 14)?),
        game("Autumn Club Championship", "Lars Berg", "Tom Reyes", MS, "TBD", "Round 1", date(2026, 11, 7)?),
        result("Shuttle Stars", "Net Masters", 16, 8, date(2026, 10, 3)?, Division::One),
        result("Feather Flyers", "Shuttle Stars", 10, 14, date(2026, 10, 10)?, Division::One),
        result("Smash Club", "Drop Shot BC", 12, 12, date(2026, 10, 10)?, Division::Two),
    ];
    Ok(reduce_all(&LeagueState::new(), events)?)
}
