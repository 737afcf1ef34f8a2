//! Single binary web server: dashboard at `/`, JSON API under `/api`.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! SEED_DEMO=false starts with an empty league; PLAYERS_CSV / CLUBS_CSV import rosters at startup.

use actix_web::{web::Data, App, HttpServer};
use badminton_league_web::seed::{import_clubs_file, import_players_file};
use badminton_league_web::{api, demo_state, LeagueState, SeedError, ServerConfig};
use std::sync::RwLock;

/// Build the starting league from the configured seed and roster files.
fn initial_state(config: &ServerConfig) -> Result<LeagueState, SeedError> {
    let mut state = if config.seed_demo {
        demo_state()?
    } else {
        LeagueState::new()
    };
    if let Some(path) = &config.clubs_csv {
        state = import_clubs_file(&state, path)?;
    }
    if let Some(path) = &config.players_csv {
        state = import_players_file(&state, path)?;
    }
    Ok(state)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let league = initial_state(&config).map_err(|e| {
        log::error!("Could not build initial league: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?;
    log::info!(
        "Loaded {} tournament(s), {} player(s), {} club(s)",
        league.tournaments.len(),
        league.players.len(),
        league.clubs.len()
    );

    let bind = (config.host.as_str(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(league));
    HttpServer::new(move || App::new().app_data(state.clone()).configure(api::configure))
        .bind(bind)?
        .run()
        .await
}
