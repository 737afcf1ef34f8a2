//! Score parsing: "21-15, 21-18" into per-side point totals and sets won.

use serde::Serialize;

/// Scores that mean the match has not been played.
const UNPLAYED_SCORES: [&str; 3] = ["", "TBD", "Not started"];

/// Aggregate of a parsed match score.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ScoreSummary {
    pub side1_total: u32,
    pub side2_total: u32,
    pub side1_sets: u32,
    pub side2_sets: u32,
}

impl ScoreSummary {
    /// Side 1 wins only with strictly more sets. Equal set counts are not a side 1 win.
    pub fn side1_won(&self) -> bool {
        self.side1_sets > self.side2_sets
    }
}

/// True for "TBD", "Not started" or a blank score.
pub fn is_unplayed(score: &str) -> bool {
    let score = score.trim();
    UNPLAYED_SCORES.iter().any(|s| s.eq_ignore_ascii_case(score))
}

/// Parse a comma-separated list of "<int>-<int>" sets.
///
/// Returns `None` for an unplayed score. Never fails otherwise: a half that is missing
/// or not a number counts as 0, and a tied set counts for neither side. Totals saturate
/// at `u32::MAX`.
pub fn parse_score(score: &str) -> Option<ScoreSummary> {
    if is_unplayed(score) {
        return None;
    }
    let mut summary = ScoreSummary::default();
    for set in score.split(',').map(str::trim) {
        let mut halves = set.split('-');
        let side1 = parse_points(halves.next());
        let side2 = parse_points(halves.next());
        summary.side1_total = summary.side1_total.saturating_add(side1);
        summary.side2_total = summary.side2_total.saturating_add(side2);
        if side1 > side2 {
            summary.side1_sets = summary.side1_sets.saturating_add(1);
        } else if side2 > side1 {
            summary.side2_sets = summary.side2_sets.saturating_add(1);
        }
    }
    Some(summary)
}

fn parse_points(half: Option<&str>) -> u32 {
    half.and_then(|h| h.trim().parse().ok()).unwrap_or(0)
}
