//! Distribution of the question pool across players at game start.

use crate::domain::random::{shuffle, RandomSource};
use crate::domain::{PlayerId, QuestionId};
use crate::errors::domain::{ConflictKind, DomainError};

/// Minimum number of registered players to start a game.
pub const MIN_PLAYERS: usize = 2;

/// Questions handed to each player, in roster order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentPlan {
    pub per_player: Vec<(PlayerId, Vec<QuestionId>)>,
}

impl AssignmentPlan {
    /// Flattened `(player, question)` pairs.
    pub fn links(&self) -> impl Iterator<Item = (PlayerId, QuestionId)> + '_ {
        self.per_player
            .iter()
            .flat_map(|(player, questions)| questions.iter().map(move |q| (*player, *q)))
    }

    pub fn total(&self) -> usize {
        self.per_player.iter().map(|(_, qs)| qs.len()).sum()
    }

    pub fn questions_for(&self, player: PlayerId) -> Option<&[QuestionId]> {
        self.per_player
            .iter()
            .find(|(p, _)| *p == player)
            .map(|(_, qs)| qs.as_slice())
    }
}

/// Shuffle `pool` and deal it out: every player gets `N / K` questions and
/// the first `N % K` players in `players` order get one more.
///
/// Fails with `InsufficientPlayers` below [`MIN_PLAYERS`] and `EmptyPool`
/// when there is nothing to hand out.
pub fn plan_assignments(
    players: &[PlayerId],
    mut pool: Vec<QuestionId>,
    rng: &mut dyn RandomSource,
) -> Result<AssignmentPlan, DomainError> {
    if players.len() < MIN_PLAYERS {
        return Err(DomainError::conflict(
            ConflictKind::InsufficientPlayers,
            format!(
                "At least {MIN_PLAYERS} players are required to start a game (have {})",
                players.len()
            ),
        ));
    }
    if pool.is_empty() {
        return Err(DomainError::conflict(
            ConflictKind::EmptyPool,
            "No unanswered questions available to assign",
        ));
    }

    shuffle(&mut pool, rng);

    let base = pool.len() / players.len();
    let extra = pool.len() % players.len();

    let mut remaining = pool.into_iter();
    let per_player = players
        .iter()
        .enumerate()
        .map(|(i, player)| {
            let take = base + usize::from(i < extra);
            (*player, remaining.by_ref().take(take).collect())
        })
        .collect();

    Ok(AssignmentPlan { per_player })
}
