//! HTTP/JSON surface: read snapshots of the league and write through the reducer.
//!
//! Writes take the state lock, run `reduce`, and swap in the new state. Rejected writes
//! answer 400 with `{"error": ...}` and leave the state as it was.

use crate::logic::{parse_score, player_rankings, reduce, standings, LeagueEvent};
use crate::models::{
    ClubId, ClubUpdate, Division, LeagueState, MatchId, NewClub, NewMatch, NewPlayer, NewResult,
    NewTournament, PlayerId, PlayerUpdate, TournamentId,
};
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path, Query},
    HttpResponse, Responder,
};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// Shared in-memory league, owned by the server.
pub type AppState = Data<RwLock<LeagueState>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct IdPath<T> {
    id: T,
}

#[derive(Deserialize)]
struct ScoreBody {
    score: String,
}

#[derive(Deserialize)]
struct ScoreQuery {
    #[serde(default)]
    score: String,
}

#[derive(Deserialize)]
struct RankingsQuery {
    category: Option<String>,
}

fn not_found(what: &str) -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": format!("No {}", what) }))
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

/// Run `view` against the current state under a read lock.
fn read(state: &RwLock<LeagueState>, view: impl FnOnce(&LeagueState) -> HttpResponse) -> HttpResponse {
    match state.read() {
        Ok(g) => view(&g),
        Err(_) => lock_error(),
    }
}

/// Reduce `event` into the state and answer with `view` of the new state.
fn apply(
    state: &RwLock<LeagueState>,
    event: LeagueEvent,
    view: impl FnOnce(&LeagueState) -> HttpResponse,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match reduce(&g, event) {
        Ok(next) => {
            *g = next;
            view(&g)
        }
        Err(e) => {
            log::warn!("Rejected write: {}", e);
            HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "badminton-league-web",
    })
}

/// Whole league snapshot.
#[get("/api/state")]
async fn api_state(state: AppState) -> HttpResponse {
    read(&state, |s| HttpResponse::Ok().json(s))
}

#[get("/api/tournaments")]
async fn api_list_tournaments(state: AppState) -> HttpResponse {
    read(&state, |s| HttpResponse::Ok().json(&s.tournaments))
}

#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<IdPath<TournamentId>>) -> HttpResponse {
    read(&state, |s| match s.tournament(path.id) {
        Some(t) => HttpResponse::Ok().json(t),
        None => not_found("tournament"),
    })
}

#[post("/api/tournaments")]
async fn api_add_tournament(state: AppState, body: Json<NewTournament>) -> HttpResponse {
    apply(&state, LeagueEvent::AddTournament(body.into_inner()), |s| {
        HttpResponse::Ok().json(&s.tournaments)
    })
}

#[put("/api/tournaments/{id}")]
async fn api_update_tournament(
    state: AppState,
    path: Path<IdPath<TournamentId>>,
    body: Json<NewTournament>,
) -> HttpResponse {
    let event = LeagueEvent::UpdateTournament {
        id: path.id,
        details: body.into_inner(),
    };
    apply(&state, event, |s| HttpResponse::Ok().json(&s.tournaments))
}

#[delete("/api/tournaments/{id}")]
async fn api_remove_tournament(state: AppState, path: Path<IdPath<TournamentId>>) -> HttpResponse {
    apply(&state, LeagueEvent::RemoveTournament(path.id), |s| {
        HttpResponse::Ok().json(&s.tournaments)
    })
}

#[get("/api/players")]
async fn api_list_players(state: AppState) -> HttpResponse {
    read(&state, |s| HttpResponse::Ok().json(&s.players))
}

#[get("/api/players/{id}")]
async fn api_get_player(state: AppState, path: Path<IdPath<PlayerId>>) -> HttpResponse {
    read(&state, |s| match s.player(path.id) {
        Some(p) => HttpResponse::Ok().json(p),
        None => not_found("player"),
    })
}

#[post("/api/players")]
async fn api_add_player(state: AppState, body: Json<NewPlayer>) -> HttpResponse {
    apply(&state, LeagueEvent::AddPlayer(body.into_inner()), |s| {
        HttpResponse::Ok().json(&s.players)
    })
}

#[put("/api/players/{id}")]
async fn api_update_player(
    state: AppState,
    path: Path<IdPath<PlayerId>>,
    body: Json<PlayerUpdate>,
) -> HttpResponse {
    let event = LeagueEvent::UpdatePlayer {
        id: path.id,
        update: body.into_inner(),
    };
    apply(&state, event, |s| HttpResponse::Ok().json(&s.players))
}

#[delete("/api/players/{id}")]
async fn api_remove_player(state: AppState, path: Path<IdPath<PlayerId>>) -> HttpResponse {
    apply(&state, LeagueEvent::RemovePlayer(path.id), |s| {
        HttpResponse::Ok().json(&s.players)
    })
}

/// Players by ranking, optionally filtered with `?category=`.
#[get("/api/rankings")]
async fn api_rankings(state: AppState, query: Query<RankingsQuery>) -> HttpResponse {
    read(&state, |s| {
        HttpResponse::Ok().json(player_rankings(&s.players, query.category.as_deref()))
    })
}

#[get("/api/matches")]
async fn api_list_matches(state: AppState) -> HttpResponse {
    read(&state, |s| HttpResponse::Ok().json(&s.matches))
}

#[get("/api/matches/{id}")]
async fn api_get_match(state: AppState, path: Path<IdPath<MatchId>>) -> HttpResponse {
    read(&state, |s| match s.match_by_id(path.id) {
        Some(m) => HttpResponse::Ok().json(m),
        None => not_found("match"),
    })
}

/// Record a match; a played score updates the players involved.
#[post("/api/matches")]
async fn api_record_match(state: AppState, body: Json<NewMatch>) -> HttpResponse {
    apply(&state, LeagueEvent::RecordMatch(body.into_inner()), |s| {
        HttpResponse::Ok().json(&s.matches)
    })
}

#[put("/api/matches/{id}/score")]
async fn api_update_match_score(
    state: AppState,
    path: Path<IdPath<MatchId>>,
    body: Json<ScoreBody>,
) -> HttpResponse {
    let event = LeagueEvent::UpdateMatchScore {
        id: path.id,
        score: body.into_inner().score,
    };
    apply(&state, event, |s| HttpResponse::Ok().json(&s.matches))
}

#[delete("/api/matches/{id}")]
async fn api_remove_match(state: AppState, path: Path<IdPath<MatchId>>) -> HttpResponse {
    apply(&state, LeagueEvent::RemoveMatch(path.id), |s| {
        HttpResponse::Ok().json(&s.matches)
    })
}

/// Preview how a score string is read, without recording anything.
#[get("/api/score")]
async fn api_parse_score(query: Query<ScoreQuery>) -> HttpResponse {
    match parse_score(&query.score) {
        Some(summary) => HttpResponse::Ok().json(serde_json::json!({
            "played": true,
            "side1_won": summary.side1_won(),
            "summary": summary,
        })),
        None => HttpResponse::Ok().json(serde_json::json!({ "played": false })),
    }
}

#[get("/api/clubs")]
async fn api_list_clubs(state: AppState) -> HttpResponse {
    read(&state, |s| HttpResponse::Ok().json(&s.clubs))
}

#[post("/api/clubs")]
async fn api_add_club(state: AppState, body: Json<NewClub>) -> HttpResponse {
    apply(&state, LeagueEvent::AddClub(body.into_inner()), |s| {
        HttpResponse::Ok().json(&s.clubs)
    })
}

#[put("/api/clubs/{id}")]
async fn api_update_club(
    state: AppState,
    path: Path<IdPath<ClubId>>,
    body: Json<ClubUpdate>,
) -> HttpResponse {
    let event = LeagueEvent::UpdateClub {
        id: path.id,
        update: body.into_inner(),
    };
    apply(&state, event, |s| HttpResponse::Ok().json(&s.clubs))
}

#[delete("/api/clubs/{id}")]
async fn api_remove_club(state: AppState, path: Path<IdPath<ClubId>>) -> HttpResponse {
    apply(&state, LeagueEvent::RemoveClub(path.id), |s| {
        HttpResponse::Ok().json(&s.clubs)
    })
}

#[get("/api/results")]
async fn api_list_results(state: AppState) -> HttpResponse {
    read(&state, |s| HttpResponse::Ok().json(&s.results))
}

/// Record a league result and update both clubs' standings.
#[post("/api/results")]
async fn api_record_result(state: AppState, body: Json<NewResult>) -> HttpResponse {
    apply(&state, LeagueEvent::RecordResult(body.into_inner()), |s| {
        HttpResponse::Ok().json(&s.results)
    })
}

/// Division table; `{division}` is "1" or "2".
#[get("/api/standings/{division}")]
async fn api_standings(state: AppState, path: Path<String>) -> HttpResponse {
    let division: Division = match path.parse() {
        Ok(d) => d,
        Err(e) => return HttpResponse::BadRequest().json(serde_json::json!({ "error": e })),
    };
    read(&state, |s| HttpResponse::Ok().json(standings(&s.clubs, division)))
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

async fn serve_index() -> HttpResponse {
    let html = include_str!("../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

/// Register every route. The caller provides the `AppState` via `app_data`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(serve_index))
        .service(api_health)
        .service(favicon)
        .service(api_state)
        .service(api_list_tournaments)
        .service(api_get_tournament)
        .service(api_add_tournament)
        .service(api_update_tournament)
        .service(api_remove_tournament)
        .service(api_list_players)
        .service(api_get_player)
        .service(api_add_player)
        .service(api_update_player)
        .service(api_remove_player)
        .service(api_rankings)
        .service(api_list_matches)
        .service(api_get_match)
        .service(api_record_match)
        .service(api_update_match_score)
        .service(api_remove_match)
        .service(api_parse_score)
        .service(api_list_clubs)
        .service(api_add_club)
        .service(api_update_club)
        .service(api_remove_club)
        .service(api_list_results)
        .service(api_record_result)
        .service(api_standings);
}
