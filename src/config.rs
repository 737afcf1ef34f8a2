//! Server settings read from the environment at startup.

use std::path::PathBuf;

/// Settings for the web binary. Every field has a default so the app runs with no environment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    /// `HOST`, default 0.0.0.0 so the app is reachable on a VPS.
    pub host: String,
    /// `PORT`, default 8080.
    pub port: u16,
    /// `SEED_DEMO`: start with the demo league ("false" / "0" / "no" to start empty).
    pub seed_demo: bool,
    /// `PLAYERS_CSV`: roster file imported at startup.
    pub players_csv: Option<PathBuf>,
    /// `CLUBS_CSV`: club list imported at startup.
    pub clubs_csv: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            seed_demo: true,
            players_csv: None,
            clubs_csv: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in `from_env`).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST")
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            seed_demo: lookup("SEED_DEMO")
                .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no"))
                .unwrap_or(defaults.seed_demo),
            players_csv: lookup("PLAYERS_CSV")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            clubs_csv: lookup("CLUBS_CSV")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}
