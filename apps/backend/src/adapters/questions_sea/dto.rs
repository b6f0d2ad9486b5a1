//! DTOs for questions_sea adapter.

use crate::entities::questions::QuestionKind;

/// DTO for inserting a question.
#[derive(Debug, Clone)]
pub struct QuestionCreate {
    pub kind: QuestionKind,
    pub text: String,
    pub answer: String,
    pub is_true: Option<bool>,
}

impl QuestionCreate {
    pub fn new(kind: QuestionKind, text: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            answer: answer.into(),
            is_true: None,
        }
    }

    pub fn with_truth(mut self, is_true: bool) -> Self {
        self.is_true = Some(is_true);
        self
    }
}
