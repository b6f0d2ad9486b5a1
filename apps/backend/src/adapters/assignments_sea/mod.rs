//! SeaORM adapter for player_questions - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::entities::player_questions;

pub mod dto;

pub use dto::AssignmentCreate;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn delete_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<u64, sea_orm::DbErr> {
    let result = player_questions::Entity::delete_many().exec(conn).await?;
    Ok(result.rows_affected)
}

pub async fn insert_many<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dtos: &[AssignmentCreate],
) -> Result<u64, sea_orm::DbErr> {
    if dtos.is_empty() {
        return Ok(0);
    }
    let now = time::OffsetDateTime::now_utc();
    let models = dtos.iter().map(|dto| player_questions::ActiveModel {
        id: sea_orm::NotSet,
        player_id: Set(dto.player_id),
        question_id: Set(dto.question_id),
        answered: Set(false),
        created_at: Set(now),
    });
    player_questions::Entity::insert_many(models)
        .exec(conn)
        .await?;
    Ok(dtos.len() as u64)
}

pub async fn find_by_player_question<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i32,
    question_id: i32,
) -> Result<Option<player_questions::Model>, sea_orm::DbErr> {
    player_questions::Entity::find()
        .filter(player_questions::Column::PlayerId.eq(player_id))
        .filter(player_questions::Column::QuestionId.eq(question_id))
        .one(conn)
        .await
}

/// Question ids still open for a player, in assignment order.
pub async fn open_question_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i32,
) -> Result<Vec<i32>, sea_orm::DbErr> {
    player_questions::Entity::find()
        .select_only()
        .column(player_questions::Column::QuestionId)
        .filter(player_questions::Column::PlayerId.eq(player_id))
        .filter(player_questions::Column::Answered.eq(false))
        .order_by(player_questions::Column::Id, Order::Asc)
        .into_tuple::<i32>()
        .all(conn)
        .await
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<player_questions::Model>, sea_orm::DbErr> {
    player_questions::Entity::find()
        .order_by(player_questions::Column::Id, Order::Asc)
        .all(conn)
        .await
}

pub async fn set_answered<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<u64, sea_orm::DbErr> {
    let result = player_questions::Entity::update_many()
        .col_expr(player_questions::Column::Answered, Expr::value(true))
        .filter(player_questions::Column::Id.eq(id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

pub async fn reset_all_answered<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<u64, sea_orm::DbErr> {
    let result = player_questions::Entity::update_many()
        .col_expr(player_questions::Column::Answered, Expr::value(false))
        .filter(player_questions::Column::Answered.eq(true))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

pub async fn delete_by_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i32,
) -> Result<u64, sea_orm::DbErr> {
    let result = player_questions::Entity::delete_many()
        .filter(player_questions::Column::PlayerId.eq(player_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

pub async fn delete_by_questions<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    question_ids: &[i32],
) -> Result<u64, sea_orm::DbErr> {
    if question_ids.is_empty() {
        return Ok(0);
    }
    let result = player_questions::Entity::delete_many()
        .filter(player_questions::Column::QuestionId.is_in(question_ids.iter().copied()))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
