use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::domain::session::PlayerSnapshot;
use crate::error::AppError;
use crate::services::GameService;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct NextTurnResponse {
    player: PlayerSnapshot,
}

async fn start(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(GameService::new().start_game(&app_state).await?))
}

async fn state(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(GameService::new().state(&app_state).await))
}

async fn next_turn(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let player = GameService::new().select_next_player(&app_state).await?;
    Ok(HttpResponse::Ok().json(NextTurnResponse { player }))
}

async fn reset(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(GameService::new().reset_game(&app_state).await?))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/start", web::post().to(start))
        .route("/state", web::get().to(state))
        .route("/next-turn", web::post().to(next_turn))
        .route("/reset", web::post().to(reset));
}
