//! Question bank routes, mounted once per bank.
//!
//! `/api/questions` serves the true/false bank, `/api/self-assessment/questions`
//! the self-assessment bank. Both share loading, listing, counting, reset and
//! delete; answering differs.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::QuestionId;
use crate::error::AppError;
use crate::extractors::{JsonBody, QuestionIdPath};
use crate::services::{QuestionDraft, QuestionService};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateQuestionsRequest {
    pub questions: Vec<QuestionDraft>,
}

#[derive(Debug, Deserialize)]
pub struct TrueFalseAnswerRequest {
    pub question_id: QuestionId,
    pub answer: String,
}

#[derive(Debug, Deserialize)]
pub struct SelfAssessmentRequest {
    pub question_id: QuestionId,
    pub verdict: String,
}

#[derive(Debug, Serialize)]
struct CreatedResponse {
    created: u64,
}

#[derive(Debug, Serialize)]
struct ActiveResponse {
    ids: Vec<QuestionId>,
}

#[derive(Debug, Serialize)]
struct AffectedResponse {
    affected: u64,
}

async fn create(
    app_state: web::Data<AppState>,
    service: web::Data<QuestionService>,
    body: JsonBody<CreateQuestionsRequest>,
) -> Result<HttpResponse, AppError> {
    let created = service
        .create_many(&app_state, body.into_inner().questions)
        .await?;
    Ok(HttpResponse::Created().json(CreatedResponse { created }))
}

async fn active(
    app_state: web::Data<AppState>,
    service: web::Data<QuestionService>,
) -> Result<HttpResponse, AppError> {
    let ids = service.active_ids(&app_state).await?;
    Ok(HttpResponse::Ok().json(ActiveResponse { ids }))
}

async fn answered(
    app_state: web::Data<AppState>,
    service: web::Data<QuestionService>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.answered(&app_state).await?))
}

async fn count(
    app_state: web::Data<AppState>,
    service: web::Data<QuestionService>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.count(&app_state).await?))
}

async fn get_open(
    app_state: web::Data<AppState>,
    service: web::Data<QuestionService>,
    id: QuestionIdPath,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.get_open(&app_state, id.0).await?))
}

async fn answer_true_false(
    app_state: web::Data<AppState>,
    service: web::Data<QuestionService>,
    body: JsonBody<TrueFalseAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let result = service
        .answer_true_false(&app_state, body.question_id, &body.answer)
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn self_assess(
    app_state: web::Data<AppState>,
    service: web::Data<QuestionService>,
    body: JsonBody<SelfAssessmentRequest>,
) -> Result<HttpResponse, AppError> {
    let result = service
        .self_assess(&app_state, body.question_id, &body.verdict)
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn reset(
    app_state: web::Data<AppState>,
    service: web::Data<QuestionService>,
) -> Result<HttpResponse, AppError> {
    let affected = service.reset(&app_state).await?;
    Ok(HttpResponse::Ok().json(AffectedResponse { affected }))
}

async fn delete_all(
    app_state: web::Data<AppState>,
    service: web::Data<QuestionService>,
) -> Result<HttpResponse, AppError> {
    let affected = service.delete_all(&app_state).await?;
    Ok(HttpResponse::Ok().json(AffectedResponse { affected }))
}

fn configure_common(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create))
        .route("", web::delete().to(delete_all))
        .route("/active", web::get().to(active))
        .route("/answered", web::get().to(answered))
        .route("/count", web::get().to(count))
        .route("/reset", web::post().to(reset))
        .route("/{question_id}", web::get().to(get_open));
}

pub fn configure_true_false(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::Data::new(QuestionService::true_false()))
        .route("/answer", web::post().to(answer_true_false));
    configure_common(cfg);
}

pub fn configure_self_assessment(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::Data::new(QuestionService::self_assessment()))
        .route("/answer", web::post().to(self_assess));
    configure_common(cfg);
}
