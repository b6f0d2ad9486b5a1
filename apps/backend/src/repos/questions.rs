//! Question repository functions for domain layer.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::questions_sea as questions_adapter;
pub use crate::adapters::questions_sea::QuestionCreate;
use crate::entities::questions::{self, QuestionKind};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::assignments;

/// Question domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: i32,
    pub kind: QuestionKind,
    pub text: String,
    pub answer: String,
    /// Truth value of a true/false question; `None` for self-assessment
    pub is_true: Option<bool>,
    pub answered: bool,
}

impl From<questions::Model> for Question {
    fn from(model: questions::Model) -> Self {
        Self {
            id: model.id,
            kind: model.kind,
            text: model.text,
            answer: model.answer,
            is_true: model.is_true,
            answered: model.answered,
        }
    }
}

/// Bank totals as reported to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionCounts {
    pub total: u64,
    pub active: u64,
    pub answered: u64,
}

fn question_not_found(id: i32) -> DomainError {
    DomainError::not_found(NotFoundKind::Question, format!("Question {id} not found"))
}

/// Fetch a question by id; `NotFound` when missing.
pub async fn get<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Question, DomainError> {
    questions_adapter::find_by_id(conn, id)
        .await?
        .map(Question::from)
        .ok_or_else(|| question_not_found(id))
}

pub async fn list_unanswered<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    kind: QuestionKind,
) -> Result<Vec<Question>, DomainError> {
    let rows = questions_adapter::list_by_answered(conn, kind, false).await?;
    Ok(rows.into_iter().map(Question::from).collect())
}

pub async fn list_answered<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    kind: QuestionKind,
) -> Result<Vec<Question>, DomainError> {
    let rows = questions_adapter::list_by_answered(conn, kind, true).await?;
    Ok(rows.into_iter().map(Question::from).collect())
}

pub async fn mark_answered<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<(), DomainError> {
    match questions_adapter::set_answered(conn, id, true).await? {
        0 => Err(question_not_found(id)),
        _ => Ok(()),
    }
}

/// Clear the answered flag on every question of `kind`. Returns rows touched.
pub async fn reset_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    kind: QuestionKind,
) -> Result<u64, DomainError> {
    Ok(questions_adapter::reset_answered(conn, kind).await?)
}

/// Delete every question of `kind` together with its assignments.
/// Returns the number of questions removed.
pub async fn delete_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    kind: QuestionKind,
) -> Result<u64, DomainError> {
    let ids = questions_adapter::ids_by_kind(conn, kind).await?;
    assignments::delete_for_questions(conn, &ids).await?;
    Ok(questions_adapter::delete_by_kind(conn, kind).await?)
}

pub async fn count<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    kind: QuestionKind,
) -> Result<QuestionCounts, DomainError> {
    let total = questions_adapter::count(conn, kind, None).await?;
    let answered = questions_adapter::count(conn, kind, Some(true)).await?;
    Ok(QuestionCounts {
        total,
        active: total - answered,
        answered,
    })
}

pub async fn create_many<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    drafts: Vec<QuestionCreate>,
) -> Result<u64, DomainError> {
    Ok(questions_adapter::insert_many(conn, drafts).await?)
}
