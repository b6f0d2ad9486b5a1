//! Error codes for the quiz backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Player name empty after trimming
    EmptyName,
    /// Verdict is neither correct nor incorrect
    UnknownVerdict,
    /// True/false answer not recognised
    InvalidAnswer,
    /// Question draft missing text or answer
    InvalidQuestion,
    /// General validation error
    ValidationError,
    /// Malformed request body or path
    BadRequest,

    // Resource Not Found
    PlayerNotFound,
    QuestionNotFound,
    AssignmentNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    DuplicateName,
    AlreadyAnswered,
    InsufficientPlayers,
    EmptyPool,
    NoPendingPlayers,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    DbError,
    DbUnavailable,
    DbTimeout,
    Internal,
    InternalError,
    ConfigError,
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyName => "EMPTY_NAME",
            Self::UnknownVerdict => "UNKNOWN_VERDICT",
            Self::InvalidAnswer => "INVALID_ANSWER",
            Self::InvalidQuestion => "INVALID_QUESTION",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::QuestionNotFound => "QUESTION_NOT_FOUND",
            Self::AssignmentNotFound => "ASSIGNMENT_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::DuplicateName => "DUPLICATE_NAME",
            Self::AlreadyAnswered => "ALREADY_ANSWERED",
            Self::InsufficientPlayers => "INSUFFICIENT_PLAYERS",
            Self::EmptyPool => "EMPTY_POOL",
            Self::NoPendingPlayers => "NO_PENDING_PLAYERS",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
