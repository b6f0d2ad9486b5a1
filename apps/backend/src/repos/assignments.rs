//! Assignment (player ↔ question) repository functions.

use sea_orm::ConnectionTrait;

use crate::adapters::assignments_sea as assignments_adapter;
pub use crate::adapters::assignments_sea::AssignmentCreate;
use crate::entities::player_questions;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Assignment domain model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub id: i32,
    pub player_id: i32,
    pub question_id: i32,
    pub answered: bool,
}

impl From<player_questions::Model> for Assignment {
    fn from(model: player_questions::Model) -> Self {
        Self {
            id: model.id,
            player_id: model.player_id,
            question_id: model.question_id,
            answered: model.answered,
        }
    }
}

pub async fn clear<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    Ok(assignments_adapter::delete_all(conn).await?)
}

pub async fn bulk_create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    links: &[AssignmentCreate],
) -> Result<u64, DomainError> {
    Ok(assignments_adapter::insert_many(conn, links).await?)
}

pub async fn find<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i32,
    question_id: i32,
) -> Result<Option<Assignment>, DomainError> {
    Ok(
        assignments_adapter::find_by_player_question(conn, player_id, question_id)
            .await?
            .map(Assignment::from),
    )
}

/// Ids of the questions a player has not closed yet.
pub async fn list_active<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i32,
) -> Result<Vec<i32>, DomainError> {
    Ok(assignments_adapter::open_question_ids(conn, player_id).await?)
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Assignment>, DomainError> {
    let rows = assignments_adapter::list_all(conn).await?;
    Ok(rows.into_iter().map(Assignment::from).collect())
}

pub async fn mark_answered<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<(), DomainError> {
    match assignments_adapter::set_answered(conn, id).await? {
        0 => Err(DomainError::not_found(
            NotFoundKind::Assignment,
            format!("Assignment {id} not found"),
        )),
        _ => Ok(()),
    }
}

pub async fn reset_all_answered<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<u64, DomainError> {
    Ok(assignments_adapter::reset_all_answered(conn).await?)
}

pub async fn delete_for_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i32,
) -> Result<u64, DomainError> {
    Ok(assignments_adapter::delete_by_player(conn, player_id).await?)
}

pub async fn delete_for_questions<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    question_ids: &[i32],
) -> Result<u64, DomainError> {
    Ok(assignments_adapter::delete_by_questions(conn, question_ids).await?)
}
