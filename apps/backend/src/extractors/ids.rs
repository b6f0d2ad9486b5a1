//! Typed route ids.
//!
//! Parse `{player_id}` / `{question_id}` path segments into positive `i32`s
//! and reject anything else with a problem+json 400, instead of actix's
//! plain-text path error. Existence is checked by the services.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::domain::{PlayerId, QuestionId};
use crate::error::AppError;
use crate::errors::ErrorCode;

fn positive_id(req: &HttpRequest, name: &str) -> Result<i32, AppError> {
    let raw = req
        .match_info()
        .get(name)
        .ok_or_else(|| AppError::bad_request(ErrorCode::BadRequest, format!("Missing {name}")))?;

    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::bad_request(
            ErrorCode::BadRequest,
            format!("Invalid {name}: {raw}"),
        )),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerIdPath(pub PlayerId);

impl FromRequest for PlayerIdPath {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(positive_id(req, "player_id").map(PlayerIdPath))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionIdPath(pub QuestionId);

impl FromRequest for QuestionIdPath {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(positive_id(req, "question_id").map(QuestionIdPath))
    }
}
