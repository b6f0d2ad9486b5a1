//! Game lifecycle: start, turn selection, answer evaluation, reset.

use serde::Serialize;
use tracing::{debug, info};

use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::domain::assignment::plan_assignments;
use crate::domain::scoring::{score_answer, Standing, Verdict};
use crate::domain::session::{PlayerSnapshot, SessionView};
use crate::domain::{PlayerId, QuestionId};
use crate::entities::questions::QuestionKind;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::assignments::{self, AssignmentCreate};
use crate::repos::players::{self, Player, PlayerUpdate};
use crate::repos::questions::{self, Question};
use crate::state::app_state::AppState;

/// The bank questions are dealt from at game start.
pub const GAME_POOL: QuestionKind = QuestionKind::SelfAssessment;

/// Result of one answer evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOutcome {
    pub player_id: PlayerId,
    pub question_id: QuestionId,
    pub verdict: Verdict,
    /// Signed change actually applied to the score
    pub delta: i32,
    pub score: i32,
    pub streak: i32,
    /// Whether the assignment is closed after this evaluation
    pub answered: bool,
    pub correct_answer: String,
}

pub(crate) fn snapshot_of(player: Player) -> PlayerSnapshot {
    PlayerSnapshot {
        id: player.id,
        name: player.name,
        score: player.score,
        streak: player.streak,
    }
}

/// Game domain service.
#[derive(Debug, Default, Clone, Copy)]
pub struct GameService;

impl GameService {
    pub fn new() -> Self {
        Self
    }

    /// Deal the unanswered pool across all registered players, zero every
    /// score and queue everyone for a turn.
    pub async fn start_game(&self, state: &AppState) -> Result<SessionView, AppError> {
        let db = require_db(state)?;
        let mut game = state.game().lock().await;

        let roster = players::list(db).await?;
        let pool: Vec<QuestionId> = questions::list_unanswered(db, GAME_POOL)
            .await?
            .into_iter()
            .map(|q| q.id)
            .collect();
        let ids: Vec<PlayerId> = roster.iter().map(|p| p.id).collect();

        let plan = plan_assignments(&ids, pool, game.rng.as_mut())?;
        let links: Vec<AssignmentCreate> = plan
            .links()
            .map(|(player_id, question_id)| AssignmentCreate {
                player_id,
                question_id,
            })
            .collect();

        let fresh = with_txn(db, move |txn| {
            Box::pin(async move {
                assignments::clear(txn).await?;
                assignments::bulk_create(txn, &links).await?;
                players::reset_all_scores(txn).await?;
                Ok::<_, AppError>(players::list(txn).await?)
            })
        })
        .await?;

        game.session
            .begin(fresh.into_iter().map(snapshot_of).collect());

        info!(
            players = ids.len(),
            questions = plan.total(),
            "Game started"
        );
        Ok(game.session.view())
    }

    /// Hand the turn to a random player still waiting this round.
    pub async fn select_next_player(&self, state: &AppState) -> Result<PlayerSnapshot, AppError> {
        let mut game = state.game().lock().await;
        let runtime = &mut *game;

        let id = runtime.session.select_next_player(runtime.rng.as_mut())?;
        let player = runtime.session.player(id).cloned().ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Player, format!("Player {id} not found"))
        })?;

        debug!(player_id = id, pending = runtime.session.pending().len(), "Turn selected");
        Ok(player)
    }

    /// Apply the host's verdict on `player_id`'s answer to `question_id`.
    pub async fn evaluate_answer(
        &self,
        state: &AppState,
        player_id: PlayerId,
        question_id: QuestionId,
        verdict: &str,
    ) -> Result<AnswerOutcome, AppError> {
        let verdict: Verdict = verdict.parse()?;
        let db = require_db(state)?;
        let mut game = state.game().lock().await;

        let outcome = with_txn(db, move |txn| {
            Box::pin(async move {
                let assignment = assignments::find(txn, player_id, question_id)
                    .await?
                    .ok_or_else(|| {
                        DomainError::not_found(
                            NotFoundKind::Assignment,
                            format!("Question {question_id} is not assigned to player {player_id}"),
                        )
                    })?;
                if assignment.answered {
                    return Err(AppError::from(DomainError::conflict(
                        ConflictKind::AlreadyAnswered,
                        format!("Question {question_id} was already answered by player {player_id}"),
                    )));
                }
                let question = questions::get(txn, question_id).await?;
                let player = players::get(txn, player_id).await?;

                let scored = score_answer(
                    Standing {
                        score: player.score,
                        streak: player.streak,
                    },
                    verdict,
                );

                players::update(
                    txn,
                    PlayerUpdate::new(player_id)
                        .with_score(scored.standing.score)
                        .with_streak(scored.standing.streak),
                )
                .await?;

                // Only this assignment closes; the bank flag belongs to solo play.
                if scored.closes_assignment {
                    assignments::mark_answered(txn, assignment.id).await?;
                }

                Ok::<_, AppError>(AnswerOutcome {
                    player_id,
                    question_id,
                    verdict,
                    delta: scored.delta,
                    score: scored.standing.score,
                    streak: scored.standing.streak,
                    answered: scored.closes_assignment,
                    correct_answer: question.answer,
                })
            })
        })
        .await?;

        game.session.record_standing(
            player_id,
            Standing {
                score: outcome.score,
                streak: outcome.streak,
            },
        );

        info!(
            player_id,
            question_id,
            verdict = ?outcome.verdict,
            delta = outcome.delta,
            score = outcome.score,
            "Answer evaluated"
        );
        Ok(outcome)
    }

    /// Reopen every assignment, zero scores and start a fresh rotation.
    /// Assignments themselves are kept.
    pub async fn reset_game(&self, state: &AppState) -> Result<SessionView, AppError> {
        let db = require_db(state)?;
        let mut game = state.game().lock().await;

        let fresh = with_txn(db, |txn| {
            Box::pin(async move {
                assignments::reset_all_answered(txn).await?;
                players::reset_all_scores(txn).await?;
                Ok::<_, AppError>(players::list(txn).await?)
            })
        })
        .await?;

        game.session
            .reset(fresh.into_iter().map(snapshot_of).collect());

        info!("Game reset");
        Ok(game.session.view())
    }

    pub async fn state(&self, state: &AppState) -> SessionView {
        state.game().lock().await.session.view()
    }

    /// Questions assigned to `player_id` that are still open.
    pub async fn active_questions(
        &self,
        state: &AppState,
        player_id: PlayerId,
    ) -> Result<Vec<Question>, AppError> {
        let db = require_db(state)?;
        players::get(db, player_id).await?;

        let ids = assignments::list_active(db, player_id).await?;
        let mut open = Vec::with_capacity(ids.len());
        for id in ids {
            open.push(questions::get(db, id).await?);
        }
        Ok(open)
    }
}
