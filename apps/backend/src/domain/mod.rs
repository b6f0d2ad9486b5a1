//! Domain layer: pure game logic types and helpers.

pub mod answers;
pub mod assignment;
pub mod random;
pub mod scoring;
pub mod session;
pub mod turns;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_assignment;
#[cfg(test)]
mod tests_props_turns;
#[cfg(test)]
mod tests_scoring;

pub type PlayerId = i32;
pub type QuestionId = i32;

// Re-exports for ergonomics
pub use assignment::{plan_assignments, AssignmentPlan, MIN_PLAYERS};
pub use random::{RandomSource, SeededRandom};
pub use scoring::{score_answer, ScoreOutcome, Standing, Verdict};
pub use session::{GameSession, PlayerSnapshot, SessionView};
pub use turns::{TurnPhase, TurnScheduler};
