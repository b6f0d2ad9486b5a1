//! SeaORM adapter for players - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, Order, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::players;

pub mod dto;

pub use dto::PlayerUpdate;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<players::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    players::ActiveModel {
        id: sea_orm::NotSet,
        name: Set(name.to_string()),
        score: Set(0),
        streak: Set(0),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find_by_id(id).one(conn).await
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::Name.eq(name))
        .one(conn)
        .await
}

/// All players in registration order.
pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .order_by(players::Column::Id, Order::Asc)
        .all(conn)
        .await
}

pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<u64, sea_orm::DbErr> {
    let result = players::Entity::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected)
}

/// Apply a partial update, then refetch.
pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayerUpdate,
) -> Result<players::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let mut query = players::Entity::update_many()
        .col_expr(players::Column::UpdatedAt, Expr::value(now))
        .filter(players::Column::Id.eq(dto.id));
    if let Some(score) = dto.score {
        query = query.col_expr(players::Column::Score, Expr::value(score));
    }
    if let Some(streak) = dto.streak {
        query = query.col_expr(players::Column::Streak, Expr::value(streak));
    }

    let result = query.exec(conn).await?;
    if result.rows_affected == 0 {
        return Err(sea_orm::DbErr::RecordNotFound(format!(
            "player {} not found",
            dto.id
        )));
    }

    find_by_id(conn, dto.id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound(format!("player {} not found", dto.id)))
}

pub async fn reset_all_scores<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<u64, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let result = players::Entity::update_many()
        .col_expr(players::Column::Score, Expr::value(0))
        .col_expr(players::Column::Streak, Expr::value(0))
        .col_expr(players::Column::UpdatedAt, Expr::value(now))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
