//! Player registration and removal.

use tracing::info;

use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::domain::PlayerId;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::repos::players::{self, Player};
use crate::services::game::snapshot_of;
use crate::state::app_state::AppState;

/// Player domain service.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlayerService;

impl PlayerService {
    pub fn new() -> Self {
        Self
    }

    /// Register `name` (trimmed). Empty names and names already taken are
    /// rejected. The player enters the session snapshot right away and the
    /// turn queue at its next refill.
    pub async fn register(&self, state: &AppState, name: &str) -> Result<Player, AppError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::EmptyName,
                "Player name must not be empty",
            )
            .into());
        }

        let db = require_db(state)?;
        let mut game = state.game().lock().await;

        let player = with_txn(db, move |txn| {
            Box::pin(async move {
                if players::find_by_name(txn, &name).await?.is_some() {
                    return Err(AppError::from(DomainError::conflict(
                        ConflictKind::DuplicateName,
                        format!("Player name '{name}' is already registered"),
                    )));
                }
                Ok::<_, AppError>(players::create(txn, &name).await?)
            })
        })
        .await?;

        game.session.register(snapshot_of(player.clone()));
        info!(player_id = player.id, "Player registered");
        Ok(player)
    }

    pub async fn list(&self, state: &AppState) -> Result<Vec<Player>, AppError> {
        let db = require_db(state)?;
        Ok(players::list(db).await?)
    }

    pub async fn get(&self, state: &AppState, id: PlayerId) -> Result<Player, AppError> {
        let db = require_db(state)?;
        Ok(players::get(db, id).await?)
    }

    /// Delete the player and their assignments, then drop them from the
    /// snapshot and the turn queue.
    pub async fn remove(&self, state: &AppState, id: PlayerId) -> Result<(), AppError> {
        let db = require_db(state)?;
        let mut game = state.game().lock().await;

        with_txn(db, move |txn| {
            Box::pin(async move { Ok::<_, AppError>(players::delete(txn, id).await?) })
        })
        .await?;

        game.session.remove_player(id);
        info!(player_id = id, "Player removed");
        Ok(())
    }
}
