//! Orchestration: one transaction per operation, domain logic in between,
//! session snapshot updated after commit.

pub mod game;
pub mod players;
pub mod questions;

pub use game::{AnswerOutcome, GameService};
pub use players::PlayerService;
pub use questions::{QuestionDraft, QuestionService};
