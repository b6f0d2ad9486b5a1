//! Points and streaks for a single answer evaluation.

use std::str::FromStr;

use serde::Serialize;

use crate::errors::domain::{DomainError, ValidationKind};

/// Host's judgement of a spoken answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl FromStr for Verdict {
    type Err = DomainError;

    /// Case-insensitive; accepts `correct`/`incorrect` and the short forms
    /// `bien`/`mal`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "correct" | "bien" => Ok(Verdict::Correct),
            "incorrect" | "mal" => Ok(Verdict::Incorrect),
            other => Err(DomainError::validation(
                ValidationKind::UnknownVerdict,
                format!("Verdict must be 'correct' or 'incorrect', got '{other}'"),
            )),
        }
    }
}

/// A player's running totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub score: i32,
    pub streak: i32,
}

/// Result of applying one verdict to a standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreOutcome {
    /// Change actually applied to the score (0 for a miss at score 0)
    pub delta: i32,
    pub standing: Standing,
    /// Whether the assignment is now answered
    pub closes_assignment: bool,
}

/// Correct: `1 + streak` points and the streak grows. Incorrect: one point
/// off (never below zero), streak back to zero, assignment stays open.
pub fn score_answer(current: Standing, verdict: Verdict) -> ScoreOutcome {
    match verdict {
        Verdict::Correct => {
            let points = 1 + current.streak;
            ScoreOutcome {
                delta: points,
                standing: Standing {
                    score: current.score + points,
                    streak: current.streak + 1,
                },
                closes_assignment: true,
            }
        }
        Verdict::Incorrect => {
            let delta = if current.score > 0 { -1 } else { 0 };
            ScoreOutcome {
                delta,
                standing: Standing {
                    score: current.score + delta,
                    streak: 0,
                },
                closes_assignment: false,
            }
        }
    }
}
