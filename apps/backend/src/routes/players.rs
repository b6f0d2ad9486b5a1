use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::QuestionId;
use crate::error::AppError;
use crate::extractors::{JsonBody, PlayerIdPath, QuestionIdPath};
use crate::services::{GameService, PlayerService};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct VerdictRequest {
    pub verdict: String,
}

/// Open assignments by id only; the canonical answers stay server-side.
#[derive(Debug, Serialize)]
struct ActiveQuestionsResponse {
    player_id: i32,
    question_ids: Vec<QuestionId>,
}

async fn register(
    app_state: web::Data<AppState>,
    body: JsonBody<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let player = PlayerService::new().register(&app_state, &body.name).await?;
    Ok(HttpResponse::Created().json(player))
}

async fn list(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(PlayerService::new().list(&app_state).await?))
}

async fn get(
    app_state: web::Data<AppState>,
    id: PlayerIdPath,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(PlayerService::new().get(&app_state, id.0).await?))
}

async fn remove(
    app_state: web::Data<AppState>,
    id: PlayerIdPath,
) -> Result<HttpResponse, AppError> {
    PlayerService::new().remove(&app_state, id.0).await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn active_questions(
    app_state: web::Data<AppState>,
    id: PlayerIdPath,
) -> Result<HttpResponse, AppError> {
    let questions = GameService::new().active_questions(&app_state, id.0).await?;
    Ok(HttpResponse::Ok().json(ActiveQuestionsResponse {
        player_id: id.0,
        question_ids: questions.into_iter().map(|q| q.id).collect(),
    }))
}

/// Host verdict on a player's spoken answer.
async fn answer(
    app_state: web::Data<AppState>,
    player: PlayerIdPath,
    question: QuestionIdPath,
    body: JsonBody<VerdictRequest>,
) -> Result<HttpResponse, AppError> {
    let outcome = GameService::new()
        .evaluate_answer(&app_state, player.0, question.0, &body.verdict)
        .await?;
    Ok(HttpResponse::Ok().json(outcome))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(register))
        .route("", web::get().to(list))
        .route("/{player_id}", web::get().to(get))
        .route("/{player_id}", web::delete().to(remove))
        .route(
            "/{player_id}/questions/active",
            web::get().to(active_questions),
        )
        .route(
            "/{player_id}/questions/{question_id}/answer",
            web::post().to(answer),
        );
}
