//! Player repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::players_sea as players_adapter;
pub use crate::adapters::players_sea::PlayerUpdate;
use crate::entities::players;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::assignments;

/// Player domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub score: i32,
    pub streak: i32,
}

impl From<players::Model> for Player {
    fn from(model: players::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            score: model.score,
            streak: model.streak,
        }
    }
}

fn player_not_found(id: i32) -> DomainError {
    DomainError::not_found(NotFoundKind::Player, format!("Player {id} not found"))
}

/// Insert a player with zero score. A taken name surfaces as
/// `Conflict(DuplicateName)` through the unique index.
pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Player, DomainError> {
    let model = players_adapter::create(conn, name).await?;
    Ok(Player::from(model))
}

pub async fn get<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Player, DomainError> {
    players_adapter::find_by_id(conn, id)
        .await?
        .map(Player::from)
        .ok_or_else(|| player_not_found(id))
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<Player>, DomainError> {
    Ok(players_adapter::find_by_name(conn, name)
        .await?
        .map(Player::from))
}

/// All players in registration order.
pub async fn list<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Vec<Player>, DomainError> {
    let rows = players_adapter::list_all(conn).await?;
    Ok(rows.into_iter().map(Player::from).collect())
}

/// Delete a player and the player's assignments.
pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<(), DomainError> {
    assignments::delete_for_player(conn, id).await?;
    match players_adapter::delete_by_id(conn, id).await? {
        0 => Err(player_not_found(id)),
        _ => Ok(()),
    }
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    patch: PlayerUpdate,
) -> Result<Player, DomainError> {
    let id = patch.id;
    players_adapter::update(conn, patch)
        .await
        .map(Player::from)
        .map_err(|e| match e {
            sea_orm::DbErr::RecordNotFound(_) => player_not_found(id),
            other => DomainError::from(other),
        })
}

pub async fn reset_all_scores<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<u64, DomainError> {
    Ok(players_adapter::reset_all_scores(conn).await?)
}
