pub mod player_questions;
pub mod players;
pub mod questions;

pub use player_questions::Entity as PlayerQuestions;
pub use player_questions::Model as PlayerQuestion;
pub use players::Entity as Players;
pub use players::Model as Player;
pub use questions::Entity as Questions;
pub use questions::Model as Question;
pub use questions::QuestionKind;
