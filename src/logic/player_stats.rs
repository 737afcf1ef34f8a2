//! Player statistics: apply a played match to the win/loss records of everyone on court.

use crate::logic::score::parse_score;
use crate::models::{Match, Player, DOUBLES_SEPARATOR};

/// Individual names on one side: two for a doubles pair ("A / B"), otherwise one.
pub fn side_names(side: &str) -> Vec<&str> {
    if side.contains(DOUBLES_SEPARATOR) {
        side.split(DOUBLES_SEPARATOR).map(str::trim).collect()
    } else {
        vec![side.trim()]
    }
}

/// Apply a match result to every named player who competes in the match category.
///
/// Unplayed scores change nothing. Not idempotent: each call records the outcome again,
/// so callers apply a match once. Returns how many players were updated.
pub fn apply_match_to_players(players: &mut [Player], game: &Match) -> usize {
    let Some(summary) = parse_score(&game.score) else {
        log::debug!("Match {} has no score yet, statistics unchanged", game.id);
        return 0;
    };
    let side1_won = summary.side1_won();
    let side1 = side_names(&game.player1);
    let side2 = side_names(&game.player2);

    let mut updated = 0;
    for player in players.iter_mut().filter(|p| p.plays_in(&game.category)) {
        let name = player.name.as_str();
        let won = if side1.contains(&name) {
            side1_won
        } else if side2.contains(&name) {
            !side1_won
        } else {
            continue;
        };
        player.record_outcome(won);
        updated += 1;
    }
    log::debug!("Match {} ({}) updated {} player(s)", game.id, game.score, updated);
    updated
}

/// Players ordered by ranking (1 first), optionally only those in one category.
pub fn player_rankings<'a>(players: &'a [Player], category: Option<&str>) -> Vec<&'a Player> {
    let mut ranked: Vec<&Player> = players
        .iter()
        .filter(|p| category.map_or(true, |c| p.plays_in(c)))
        .collect();
    ranked.sort_by(|a, b| a.ranking.cmp(&b.ranking).then_with(|| a.name.cmp(&b.name)));
    ranked
}
