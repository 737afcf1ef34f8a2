//! Writes to the league as events, applied by a pure reducer.

use crate::logic::club_standings::apply_result_to_clubs;
use crate::logic::player_stats::apply_match_to_players;
use crate::logic::score::is_unplayed;
use crate::models::{
    Club, ClubId, ClubUpdate, LeagueError, LeagueResult, LeagueState, Match, MatchId, NewClub,
    NewMatch, NewPlayer, NewResult, NewTournament, Player, PlayerId, PlayerUpdate, Tournament,
    TournamentId,
};
use serde::{Deserialize, Serialize};

/// Every write the dashboard can make.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum LeagueEvent {
    AddTournament(NewTournament),
    UpdateTournament { id: TournamentId, details: NewTournament },
    RemoveTournament(TournamentId),
    AddPlayer(NewPlayer),
    UpdatePlayer { id: PlayerId, update: PlayerUpdate },
    RemovePlayer(PlayerId),
    RecordMatch(NewMatch),
    UpdateMatchScore { id: MatchId, score: String },
    RemoveMatch(MatchId),
    AddClub(NewClub),
    UpdateClub { id: ClubId, update: ClubUpdate },
    RemoveClub(ClubId),
    RecordResult(NewResult),
}

/// Apply one event and return the next state. `state` is left untouched; on error
/// no new state is produced.
///
/// Removing or updating an id that does not exist returns an unchanged copy.
pub fn reduce(state: &LeagueState, event: LeagueEvent) -> Result<LeagueState, LeagueError> {
    let mut next = state.clone();
    match event {
        LeagueEvent::AddTournament(details) => {
            validate_tournament(&details)?;
            log::info!("Added tournament '{}'", details.name);
            next.tournaments.push(Tournament::new(details));
        }
        LeagueEvent::UpdateTournament { id, details } => {
            validate_tournament(&details)?;
            match next.tournaments.iter_mut().find(|t| t.id == id) {
                Some(t) => *t = Tournament { id, ..Tournament::new(details) },
                None => log::debug!("Update of unknown tournament {}", id),
            }
        }
        LeagueEvent::RemoveTournament(id) => {
            next.tournaments.retain(|t| t.id != id);
        }
        LeagueEvent::AddPlayer(details) => add_player(&mut next, details)?,
        LeagueEvent::UpdatePlayer { id, update } => update_player(&mut next, id, update)?,
        LeagueEvent::RemovePlayer(id) => {
            next.players.retain(|p| p.id != id);
        }
        LeagueEvent::RecordMatch(details) => {
            require("tournament", &details.tournament)?;
            require("player1", &details.player1)?;
            require("player2", &details.player2)?;
            require("category", &details.category)?;
            let mut game = Match::new(details);
            let updated = apply_match_to_players(&mut next.players, &game);
            game.stats_applied = game.is_played();
            log::info!(
                "Recorded match {} vs {} ({}), {} player(s) updated",
                game.player1,
                game.player2,
                game.score,
                updated
            );
            next.matches.push(game);
        }
        LeagueEvent::UpdateMatchScore { id, score } => {
            let Some(idx) = next.matches.iter().position(|m| m.id == id) else {
                log::debug!("Score update for unknown match {}", id);
                return Ok(next);
            };
            next.matches[idx].set_score(&score);
            // Statistics follow the first score only; later corrections, including a
            // reset to an unplayed score and back, keep the counts.
            if !next.matches[idx].stats_applied && !is_unplayed(&score) {
                let game = next.matches[idx].clone();
                apply_match_to_players(&mut next.players, &game);
                next.matches[idx].stats_applied = true;
            }
        }
        LeagueEvent::RemoveMatch(id) => {
            next.matches.retain(|m| m.id != id);
        }
        LeagueEvent::AddClub(details) => {
            require("name", &details.name)?;
            let name = details.name.trim();
            ensure_unique_club(&next, name, None)?;
            log::info!("Added club '{}' ({})", name, details.division);
            next.clubs.push(Club::new(name, details.division));
        }
        LeagueEvent::UpdateClub { id, update } => update_club(&mut next, id, update)?,
        LeagueEvent::RemoveClub(id) => {
            next.clubs.retain(|c| c.id != id);
        }
        LeagueEvent::RecordResult(details) => {
            require("home_club", &details.home_club)?;
            require("away_club", &details.away_club)?;
            if details.home_club.trim().eq_ignore_ascii_case(details.away_club.trim()) {
                return Err(LeagueError::SameClub(details.home_club));
            }
            let result = LeagueResult::new(details);
            apply_result_to_clubs(&mut next.clubs, &result);
            log::info!(
                "Recorded result {} {}-{} {}",
                result.home_club,
                result.home_score,
                result.away_score,
                result.away_club
            );
            next.results.push(result);
        }
    }
    Ok(next)
}

/// Apply events in order, stopping at the first error.
pub fn reduce_all(
    state: &LeagueState,
    events: impl IntoIterator<Item = LeagueEvent>,
) -> Result<LeagueState, LeagueError> {
    events
        .into_iter()
        .try_fold(state.clone(), |acc, event| reduce(&acc, event))
}

fn require(field: &'static str, value: &str) -> Result<(), LeagueError> {
    if value.trim().is_empty() {
        return Err(LeagueError::MissingField(field));
    }
    Ok(())
}

fn require_categories(categories: &[String]) -> Result<(), LeagueError> {
    if categories.iter().all(|c| c.trim().is_empty()) {
        return Err(LeagueError::MissingField("categories"));
    }
    Ok(())
}

fn validate_tournament(details: &NewTournament) -> Result<(), LeagueError> {
    require("name", &details.name)?;
    require("location", &details.location)?;
    if details.end_date < details.start_date {
        return Err(LeagueError::InvalidDateRange);
    }
    Ok(())
}

fn clean_categories(categories: Vec<String>) -> Vec<String> {
    categories
        .into_iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect()
}

fn ensure_unique_player(state: &LeagueState, name: &str, except: Option<PlayerId>) -> Result<(), LeagueError> {
    let taken = state
        .players
        .iter()
        .any(|p| Some(p.id) != except && p.name.eq_ignore_ascii_case(name));
    if taken {
        return Err(LeagueError::DuplicateName(name.to_string()));
    }
    Ok(())
}

fn ensure_unique_club(state: &LeagueState, name: &str, except: Option<ClubId>) -> Result<(), LeagueError> {
    let taken = state
        .clubs
        .iter()
        .any(|c| Some(c.id) != except && c.name.eq_ignore_ascii_case(name));
    if taken {
        return Err(LeagueError::DuplicateName(name.to_string()));
    }
    Ok(())
}

fn add_player(state: &mut LeagueState, details: NewPlayer) -> Result<(), LeagueError> {
    require("name", &details.name)?;
    require("country", &details.country)?;
    require_categories(&details.categories)?;
    let name = details.name.trim();
    ensure_unique_player(state, name, None)?;

    let mut player = Player::new(
        name,
        details.country.trim(),
        clean_categories(details.categories),
        details.ranking,
    );
    player.ranking_points = details.ranking_points;
    player.club = details.club.filter(|c| !c.trim().is_empty());
    log::info!("Added player '{}'", player.name);
    state.players.push(player);
    Ok(())
}

fn update_player(state: &mut LeagueState, id: PlayerId, update: PlayerUpdate) -> Result<(), LeagueError> {
    if let Some(name) = &update.name {
        require("name", name)?;
        ensure_unique_player(state, name.trim(), Some(id))?;
    }
    if let Some(country) = &update.country {
        require("country", country)?;
    }
    if let Some(categories) = &update.categories {
        require_categories(categories)?;
    }
    let Some(player) = state.players.iter_mut().find(|p| p.id == id) else {
        log::debug!("Update of unknown player {}", id);
        return Ok(());
    };
    if let Some(name) = update.name {
        player.name = name.trim().to_string();
    }
    if let Some(country) = update.country {
        player.country = country.trim().to_string();
    }
    if let Some(categories) = update.categories {
        player.categories = clean_categories(categories);
    }
    if let Some(ranking) = update.ranking {
        player.ranking = ranking;
    }
    if let Some(points) = update.ranking_points {
        player.ranking_points = points;
    }
    if let Some(club) = update.club {
        player.club = Some(club).filter(|c| !c.trim().is_empty());
    }
    Ok(())
}

fn update_club(state: &mut LeagueState, id: ClubId, update: ClubUpdate) -> Result<(), LeagueError> {
    if let Some(name) = &update.name {
        require("name", name)?;
        ensure_unique_club(state, name.trim(), Some(id))?;
    }
    let Some(club) = state.clubs.iter_mut().find(|c| c.id == id) else {
        log::debug!("Update of unknown club {}", id);
        return Ok(());
    };
    if let Some(name) = update.name {
        club.name = name.trim().to_string();
    }
    if let Some(division) = update.division {
        club.division = division;
    }
    Ok(())
}
