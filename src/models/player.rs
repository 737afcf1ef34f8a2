//! Player, FormResult and the form payloads used to create/edit players.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Unique identifier for a player.
pub type PlayerId = Uuid;

/// Most recent outcomes kept in `recent_form`.
pub const RECENT_FORM_LEN: usize = 5;

/// One entry of a player's recent form.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum FormResult {
    W,
    L,
}

/// A registered player and their accumulated match statistics.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub country: String,
    /// Categories the player competes in (e.g. "Men's Doubles"). Never empty.
    pub categories: Vec<String>,
    pub ranking: u32,
    pub matches_won: u32,
    pub matches_lost: u32,
    /// Integer percentage derived from `matches_won` / `matches_lost`.
    pub win_rate: u32,
    /// Most recent first, at most `RECENT_FORM_LEN` entries.
    pub recent_form: Vec<FormResult>,
    pub ranking_points: Option<u32>,
    /// Club affiliation by name.
    pub club: Option<String>,
}

impl Player {
    /// Create a player with no recorded matches.
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        categories: Vec<String>,
        ranking: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            country: country.into(),
            categories,
            ranking,
            matches_won: 0,
            matches_lost: 0,
            win_rate: 0,
            recent_form: Vec::new(),
            ranking_points: None,
            club: None,
        }
    }

    pub fn plays_in(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    pub fn matches_played(&self) -> u32 {
        self.matches_won.saturating_add(self.matches_lost)
    }

    /// Record one match outcome: bump the counter, recompute win rate, push onto recent form.
    pub fn record_outcome(&mut self, won: bool) {
        let token = if won {
            self.matches_won = self.matches_won.saturating_add(1);
            FormResult::W
        } else {
            self.matches_lost = self.matches_lost.saturating_add(1);
            FormResult::L
        };
        self.win_rate = win_rate(self.matches_won, self.matches_lost);
        self.recent_form.insert(0, token);
        self.recent_form.truncate(RECENT_FORM_LEN);
    }
}

/// `round(won / (won + lost) * 100)`, or 0 when no matches were played.
pub fn win_rate(won: u32, lost: u32) -> u32 {
    if won == 0 && lost == 0 {
        return 0;
    }
    let total = f64::from(won) + f64::from(lost);
    (f64::from(won) / total * 100.0).round() as u32
}

/// Fields entered on the "add player" form.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct NewPlayer {
    pub name: String,
    pub country: String,
    pub categories: Vec<String>,
    pub ranking: u32,
    #[serde(default)]
    pub ranking_points: Option<u32>,
    #[serde(default)]
    pub club: Option<String>,
}

/// Editable profile fields. Statistics are not editable; they follow recorded matches.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct PlayerUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub ranking: Option<u32>,
    /// Absent leaves the value as is; `null` clears it.
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub ranking_points: Option<Option<u32>>,
    #[serde(default)]
    pub club: Option<String>,
}

/// Tell an explicit `null` (`Some(None)`) apart from a missing field (`None`, via `default`).
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
