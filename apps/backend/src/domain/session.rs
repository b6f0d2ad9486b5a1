//! Process-wide snapshot of the running game.
//!
//! The repository rows stay the source of truth for scores. This aggregate
//! mirrors them for cheap reads and owns the turn queue, which is never
//! persisted. Services update it only after their transaction commits.

use serde::Serialize;

use crate::domain::random::RandomSource;
use crate::domain::scoring::Standing;
use crate::domain::turns::{TurnPhase, TurnScheduler};
use crate::domain::PlayerId;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub name: String,
    pub score: i32,
    pub streak: i32,
}

/// Read-only copy handed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub players: Vec<PlayerSnapshot>,
    pub current_turn: Option<PlayerId>,
    pub pending: Vec<PlayerId>,
    pub phase: TurnPhase,
}

#[derive(Debug, Clone, Default)]
pub struct GameSession {
    players: Vec<PlayerSnapshot>,
    turns: TurnScheduler,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot and queue every player, in the given order.
    pub fn begin(&mut self, players: Vec<PlayerSnapshot>) {
        self.players = players;
        let roster = self.roster();
        self.turns.begin(&roster);
    }

    /// Rebuild after a game reset. Same shape as [`GameSession::begin`].
    pub fn reset(&mut self, players: Vec<PlayerSnapshot>) {
        self.players = players;
        let roster = self.roster();
        self.turns.reset(&roster);
    }

    /// Append a newly registered player. They join the queue at the next
    /// refill, not the current round.
    pub fn register(&mut self, player: PlayerSnapshot) {
        if !self.players.iter().any(|p| p.id == player.id) {
            self.players.push(player);
        }
    }

    /// Mirror committed score/streak. Returns false when the player is not
    /// in the snapshot.
    pub fn record_standing(&mut self, id: PlayerId, standing: Standing) -> bool {
        match self.players.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                p.score = standing.score;
                p.streak = standing.streak;
                true
            }
            None => false,
        }
    }

    /// Forget a player everywhere. Idempotent.
    pub fn remove_player(&mut self, id: PlayerId) {
        self.players.retain(|p| p.id != id);
        let roster = self.roster();
        self.turns.remove(id, &roster);
    }

    pub fn select_next_player(
        &mut self,
        rng: &mut dyn RandomSource,
    ) -> Result<PlayerId, DomainError> {
        let roster = self.roster();
        self.turns.select_next(&roster, rng)
    }

    /// Snapshot ids in order.
    pub fn roster(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id).collect()
    }

    pub fn current_turn(&self) -> Option<PlayerId> {
        self.turns.current()
    }

    pub fn pending(&self) -> &[PlayerId] {
        self.turns.pending()
    }

    pub fn player(&self, id: PlayerId) -> Option<&PlayerSnapshot> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Every queued or current id is present in the snapshot.
    pub fn is_consistent(&self) -> bool {
        let known = |id: &PlayerId| self.players.iter().any(|p| p.id == *id);
        self.turns.pending().iter().all(known) && self.turns.current().iter().all(known)
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            players: self.players.clone(),
            current_turn: self.turns.current(),
            pending: self.turns.pending().to_vec(),
            phase: self.turns.phase(),
        }
    }
}
