//! DTOs for assignments_sea adapter.

/// DTO for linking a question to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentCreate {
    pub player_id: i32,
    pub question_id: i32,
}
