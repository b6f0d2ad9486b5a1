//! SeaORM adapter for the question bank - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::entities::questions::{self, QuestionKind};

pub mod dto;

pub use dto::QuestionCreate;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<questions::Model>, sea_orm::DbErr> {
    questions::Entity::find_by_id(id).one(conn).await
}

/// Questions of one kind filtered by the answered flag, ordered by id.
pub async fn list_by_answered<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    kind: QuestionKind,
    answered: bool,
) -> Result<Vec<questions::Model>, sea_orm::DbErr> {
    questions::Entity::find()
        .filter(questions::Column::Kind.eq(kind))
        .filter(questions::Column::Answered.eq(answered))
        .order_by(questions::Column::Id, Order::Asc)
        .all(conn)
        .await
}

pub async fn ids_by_kind<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    kind: QuestionKind,
) -> Result<Vec<i32>, sea_orm::DbErr> {
    questions::Entity::find()
        .select_only()
        .column(questions::Column::Id)
        .filter(questions::Column::Kind.eq(kind))
        .into_tuple::<i32>()
        .all(conn)
        .await
}

/// Insert many questions; a no-op for an empty batch. Returns rows inserted.
pub async fn insert_many<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dtos: Vec<QuestionCreate>,
) -> Result<u64, sea_orm::DbErr> {
    if dtos.is_empty() {
        return Ok(0);
    }
    let now = time::OffsetDateTime::now_utc();
    let count = dtos.len() as u64;
    let models = dtos.into_iter().map(|dto| questions::ActiveModel {
        id: sea_orm::NotSet,
        kind: Set(dto.kind),
        text: Set(dto.text),
        answer: Set(dto.answer),
        is_true: Set(dto.is_true),
        answered: Set(false),
        created_at: Set(now),
    });
    questions::Entity::insert_many(models).exec(conn).await?;
    Ok(count)
}

pub async fn set_answered<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
    answered: bool,
) -> Result<u64, sea_orm::DbErr> {
    let result = questions::Entity::update_many()
        .col_expr(questions::Column::Answered, Expr::value(answered))
        .filter(questions::Column::Id.eq(id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

pub async fn reset_answered<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    kind: QuestionKind,
) -> Result<u64, sea_orm::DbErr> {
    let result = questions::Entity::update_many()
        .col_expr(questions::Column::Answered, Expr::value(false))
        .filter(questions::Column::Kind.eq(kind))
        .filter(questions::Column::Answered.eq(true))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

pub async fn delete_by_kind<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    kind: QuestionKind,
) -> Result<u64, sea_orm::DbErr> {
    let result = questions::Entity::delete_many()
        .filter(questions::Column::Kind.eq(kind))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

/// Count questions of one kind, optionally restricted by the answered flag.
pub async fn count<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    kind: QuestionKind,
    answered: Option<bool>,
) -> Result<u64, sea_orm::DbErr> {
    let mut query = questions::Entity::find().filter(questions::Column::Kind.eq(kind));
    if let Some(answered) = answered {
        query = query.filter(questions::Column::Answered.eq(answered));
    }
    query.count(conn).await
}
