//! Club standings: apply a league result to both clubs and order a division table.

use crate::models::{Club, Division, LeagueResult};

/// Points for a match win. Losses (and draws) score nothing.
pub const POINTS_PER_WIN: u32 = 3;

/// Update home and away club tallies from one result.
///
/// A club wins only with a strictly higher score; anything else is booked as a loss,
/// so a draw is a loss for both clubs. Club names that match nothing are ignored.
/// Tallies saturate at `u32::MAX`.
pub fn apply_result_to_clubs(clubs: &mut [Club], result: &LeagueResult) {
    let sides = [
        (&result.home_club, result.home_score, result.away_score),
        (&result.away_club, result.away_score, result.home_score),
    ];
    for (name, scored, conceded) in sides {
        match clubs.iter_mut().find(|c| &c.name == name) {
            Some(club) => record_fixture(club, scored, conceded),
            None => log::debug!("Result {}: no club named '{}'", result.id, name),
        }
    }
}

fn record_fixture(club: &mut Club, scored: u32, conceded: u32) {
    club.matches_played = club.matches_played.saturating_add(1);
    club.games_won = club.games_won.saturating_add(scored);
    club.games_lost = club.games_lost.saturating_add(conceded);
    if scored > conceded {
        club.matches_won = club.matches_won.saturating_add(1);
        club.points = club.points.saturating_add(POINTS_PER_WIN);
    } else {
        club.matches_lost = club.matches_lost.saturating_add(1);
    }
}

/// Division table: points, then game difference, then name.
pub fn standings(clubs: &[Club], division: Division) -> Vec<&Club> {
    let mut table: Vec<&Club> = clubs.iter().filter(|c| c.division == division).collect();
    table.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.game_difference().cmp(&a.game_difference()))
            .then_with(|| a.name.cmp(&b.name))
    });
    table
}
