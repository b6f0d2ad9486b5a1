//! Turn rotation: a queue of players still to play this round and the
//! player whose turn it is.

use serde::Serialize;

use crate::domain::random::RandomSource;
use crate::domain::PlayerId;
use crate::errors::domain::{ConflictKind, DomainError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPhase {
    /// Queue empty and nobody playing
    Idle,
    /// Players waiting, nobody selected yet
    AwaitingSelection,
    /// Someone holds the turn
    TurnActive,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnScheduler {
    pending: Vec<PlayerId>,
    current: Option<PlayerId>,
}

impl TurnScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh rotation over `roster`.
    pub fn begin(&mut self, roster: &[PlayerId]) {
        self.pending = roster.to_vec();
        self.current = None;
    }

    /// Clear the current turn and refill the queue with the whole roster.
    pub fn reset(&mut self, roster: &[PlayerId]) {
        self.begin(roster);
    }

    /// Pick the next player uniformly from the queue and hand them the turn.
    ///
    /// Once the last queued player is picked the queue refills with every
    /// id in `roster`, the picked player included.
    pub fn select_next(
        &mut self,
        roster: &[PlayerId],
        rng: &mut dyn RandomSource,
    ) -> Result<PlayerId, DomainError> {
        if self.pending.is_empty() {
            return Err(DomainError::conflict(
                ConflictKind::NoPendingPlayers,
                "No players are waiting for a turn",
            ));
        }

        let idx = rng.index_below(self.pending.len());
        let picked = self.pending.remove(idx);
        self.current = Some(picked);

        if self.pending.is_empty() {
            self.pending = roster.to_vec();
        }
        Ok(picked)
    }

    /// Drop `id` from the queue and the current turn. Absent ids are ignored.
    ///
    /// `roster` is the remaining players. If the removal empties a running
    /// queue, it refills from them so the rotation does not stall.
    pub fn remove(&mut self, id: PlayerId, roster: &[PlayerId]) {
        let was_queued = !self.pending.is_empty();
        self.pending.retain(|p| *p != id);
        if self.current == Some(id) {
            self.current = None;
        }
        if was_queued && self.pending.is_empty() {
            self.pending = roster.iter().copied().filter(|p| *p != id).collect();
        }
    }

    pub fn phase(&self) -> TurnPhase {
        match (self.current, self.pending.is_empty()) {
            (Some(_), _) => TurnPhase::TurnActive,
            (None, false) => TurnPhase::AwaitingSelection,
            (None, true) => TurnPhase::Idle,
        }
    }

    pub fn current(&self) -> Option<PlayerId> {
        self.current
    }

    pub fn pending(&self) -> &[PlayerId] {
        &self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::random::ScriptedRandom;

    #[test]
    fn phases_follow_queue_and_current() {
        let mut turns = TurnScheduler::new();
        assert_eq!(turns.phase(), TurnPhase::Idle);

        turns.begin(&[1, 2]);
        assert_eq!(turns.phase(), TurnPhase::AwaitingSelection);

        turns
            .select_next(&[1, 2], &mut ScriptedRandom::first())
            .unwrap();
        assert_eq!(turns.phase(), TurnPhase::TurnActive);
    }

    #[test]
    fn empty_queue_is_a_conflict() {
        let mut turns = TurnScheduler::new();
        let err = turns
            .select_next(&[], &mut ScriptedRandom::first())
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Conflict(ConflictKind::NoPendingPlayers, _)
        ));
    }

    #[test]
    fn last_pick_refills_with_whole_roster() {
        let roster = [1, 2];
        let mut turns = TurnScheduler::new();
        turns.begin(&roster);
        let mut rng = ScriptedRandom::new([1, 0]);

        assert_eq!(turns.select_next(&roster, &mut rng).unwrap(), 2);
        assert_eq!(turns.pending(), &[1]);
        assert_eq!(turns.select_next(&roster, &mut rng).unwrap(), 1);
        assert_eq!(turns.pending(), &[1, 2]);
        assert_eq!(turns.current(), Some(1));
    }

    #[test]
    fn removing_current_player_clears_turn() {
        let roster = [1, 2, 3];
        let mut turns = TurnScheduler::new();
        turns.begin(&roster);
        let picked = turns
            .select_next(&roster, &mut ScriptedRandom::first())
            .unwrap();
        assert_eq!(picked, 1);

        turns.remove(1, &[2, 3]);
        assert_eq!(turns.current(), None);
        assert_eq!(turns.pending(), &[2, 3]);

        turns.remove(2, &[3]);
        assert_eq!(turns.pending(), &[3]);

        // Idempotent for ids that are gone or never existed.
        turns.remove(2, &[3]);
        turns.remove(42, &[3]);
        assert_eq!(turns.pending(), &[3]);
    }

    #[test]
    fn removing_last_queued_player_refills_from_roster() {
        let roster = [1, 2];
        let mut turns = TurnScheduler::new();
        turns.begin(&roster);
        let picked = turns
            .select_next(&roster, &mut ScriptedRandom::first())
            .unwrap();
        assert_eq!(picked, 1);

        turns.remove(2, &[1]);
        assert_eq!(turns.current(), Some(1));
        assert_eq!(turns.pending(), &[1]);
        assert_eq!(
            turns.select_next(&[1], &mut ScriptedRandom::first()).unwrap(),
            1
        );
    }

    #[test]
    fn removal_before_start_stays_idle() {
        let mut turns = TurnScheduler::new();
        turns.remove(1, &[2, 3]);
        assert_eq!(turns.phase(), TurnPhase::Idle);
    }

    #[test]
    fn reset_clears_turn_and_refills() {
        let roster = [4, 5];
        let mut turns = TurnScheduler::new();
        turns.begin(&roster);
        turns
            .select_next(&roster, &mut ScriptedRandom::first())
            .unwrap();

        turns.reset(&roster);
        assert_eq!(turns.current(), None);
        assert_eq!(turns.pending(), &[4, 5]);
    }
}
