//! Question banks: bulk load, solo play, reset and counting.
//!
//! One service value per bank. True/false questions carry a truth value read
//! from their canonical answer; self-assessment questions are judged by the
//! player with a verdict.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::domain::answers::{parse_truth, truth_label};
use crate::domain::scoring::Verdict;
use crate::domain::QuestionId;
use crate::entities::questions::QuestionKind;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::repos::questions::{self, Question, QuestionCounts, QuestionCreate};
use crate::state::app_state::AppState;

/// One question as submitted for loading.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionDraft {
    pub text: String,
    pub answer: String,
}

/// Question served for solo play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenQuestion {
    pub id: QuestionId,
    pub text: String,
    /// Choices offered for true/false questions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Canonical answer, shown up front for self-assessment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnsweredQuestion {
    pub id: QuestionId,
    pub text: String,
    pub answer: String,
}

/// Outcome of a solo true/false answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrueFalseResult {
    pub question_id: QuestionId,
    pub correct: bool,
    pub answered: bool,
    pub correct_answer: String,
}

/// Outcome of a solo self-assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfAssessmentResult {
    pub question_id: QuestionId,
    pub verdict: Verdict,
    pub answered: bool,
    pub correct_answer: String,
}

fn already_answered(id: QuestionId) -> DomainError {
    DomainError::conflict(
        ConflictKind::AlreadyAnswered,
        format!("Question {id} was already answered"),
    )
}

/// Question bank service.
#[derive(Debug, Clone, Copy)]
pub struct QuestionService {
    kind: QuestionKind,
}

impl QuestionService {
    pub fn new(kind: QuestionKind) -> Self {
        Self { kind }
    }

    pub fn true_false() -> Self {
        Self::new(QuestionKind::TrueFalse)
    }

    pub fn self_assessment() -> Self {
        Self::new(QuestionKind::SelfAssessment)
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    fn to_create(&self, draft: QuestionDraft) -> Result<QuestionCreate, DomainError> {
        let text = draft.text.trim();
        let answer = draft.answer.trim();
        if text.is_empty() || answer.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::InvalidQuestion,
                "Question text and answer must not be empty",
            ));
        }

        let create = QuestionCreate::new(self.kind, text, answer);
        Ok(match self.kind {
            QuestionKind::TrueFalse => create.with_truth(parse_truth(answer)?),
            QuestionKind::SelfAssessment => create,
        })
    }

    /// Validate every draft, then insert them all in one transaction.
    /// A single bad draft rejects the whole batch.
    pub async fn create_many(
        &self,
        state: &AppState,
        drafts: Vec<QuestionDraft>,
    ) -> Result<u64, AppError> {
        let creates = drafts
            .into_iter()
            .map(|d| self.to_create(d))
            .collect::<Result<Vec<_>, _>>()?;
        if creates.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::InvalidQuestion,
                "At least one question is required",
            )
            .into());
        }

        let db = require_db(state)?;
        let inserted = with_txn(db, move |txn| {
            Box::pin(async move { Ok::<_, AppError>(questions::create_many(txn, creates).await?) })
        })
        .await?;

        info!(kind = ?self.kind, inserted, "Questions loaded");
        Ok(inserted)
    }

    /// Ids of questions not yet answered.
    pub async fn active_ids(&self, state: &AppState) -> Result<Vec<QuestionId>, AppError> {
        let db = require_db(state)?;
        let open = questions::list_unanswered(db, self.kind).await?;
        Ok(open.into_iter().map(|q| q.id).collect())
    }

    pub async fn answered(&self, state: &AppState) -> Result<Vec<AnsweredQuestion>, AppError> {
        let db = require_db(state)?;
        let done = questions::list_answered(db, self.kind).await?;
        Ok(done
            .into_iter()
            .map(|q| AnsweredQuestion {
                id: q.id,
                text: q.text,
                answer: q.answer,
            })
            .collect())
    }

    /// Load a question of this bank, 404 when it is missing or belongs to
    /// the other bank.
    async fn load(&self, state: &AppState, id: QuestionId) -> Result<Question, AppError> {
        let db = require_db(state)?;
        let question = questions::get(db, id).await?;
        if question.kind != self.kind {
            return Err(AppError::not_found(
                crate::errors::ErrorCode::QuestionNotFound,
                format!("Question {id} not found"),
            ));
        }
        Ok(question)
    }

    /// Serve an unanswered question.
    pub async fn get_open(&self, state: &AppState, id: QuestionId) -> Result<OpenQuestion, AppError> {
        let question = self.load(state, id).await?;
        if question.answered {
            return Err(already_answered(id).into());
        }

        Ok(match self.kind {
            QuestionKind::TrueFalse => OpenQuestion {
                id: question.id,
                text: question.text,
                options: Some(vec![truth_label(true).into(), truth_label(false).into()]),
                answer: None,
            },
            QuestionKind::SelfAssessment => OpenQuestion {
                id: question.id,
                text: question.text,
                options: None,
                answer: Some(question.answer),
            },
        })
    }

    /// Check a true/false answer. A correct answer closes the question; a
    /// wrong one leaves it open.
    pub async fn answer_true_false(
        &self,
        state: &AppState,
        id: QuestionId,
        answer: &str,
    ) -> Result<TrueFalseResult, AppError> {
        let given = parse_truth(answer)?;
        let question = self.load(state, id).await?;
        if question.answered {
            return Err(already_answered(id).into());
        }
        let Some(expected) = question.is_true else {
            return Err(DomainError::validation(
                ValidationKind::InvalidQuestion,
                format!("Question {id} is not a true/false question"),
            )
            .into());
        };

        let correct = given == expected;
        if correct {
            let db = require_db(state)?;
            questions::mark_answered(db, id).await?;
        }

        debug!(question_id = id, correct, "True/false answer checked");
        Ok(TrueFalseResult {
            question_id: id,
            correct,
            answered: correct,
            correct_answer: question.answer,
        })
    }

    /// Record a self-assessment. Only a `correct` verdict closes the question.
    pub async fn self_assess(
        &self,
        state: &AppState,
        id: QuestionId,
        verdict: &str,
    ) -> Result<SelfAssessmentResult, AppError> {
        let verdict: Verdict = verdict.parse()?;
        let question = self.load(state, id).await?;
        if question.answered {
            return Err(already_answered(id).into());
        }

        let answered = verdict == Verdict::Correct;
        if answered {
            let db = require_db(state)?;
            questions::mark_answered(db, id).await?;
        }

        debug!(question_id = id, ?verdict, "Self-assessment recorded");
        Ok(SelfAssessmentResult {
            question_id: id,
            verdict,
            answered,
            correct_answer: question.answer,
        })
    }

    /// Reopen every question of this bank.
    pub async fn reset(&self, state: &AppState) -> Result<u64, AppError> {
        let db = require_db(state)?;
        let reopened = questions::reset_all(db, self.kind).await?;
        info!(kind = ?self.kind, reopened, "Questions reset");
        Ok(reopened)
    }

    /// Delete the whole bank, assignments pointing at it included.
    pub async fn delete_all(&self, state: &AppState) -> Result<u64, AppError> {
        let db = require_db(state)?;
        let kind = self.kind;
        let deleted = with_txn(db, move |txn| {
            Box::pin(async move { Ok::<_, AppError>(questions::delete_all(txn, kind).await?) })
        })
        .await?;
        info!(kind = ?self.kind, deleted, "Questions deleted");
        Ok(deleted)
    }

    pub async fn count(&self, state: &AppState) -> Result<QuestionCounts, AppError> {
        let db = require_db(state)?;
        Ok(questions::count(db, self.kind).await?)
    }
}
