//! DTOs for players_sea adapter.

/// Partial score update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct PlayerUpdate {
    pub id: i32,
    pub score: Option<i32>,
    pub streak: Option<i32>,
}

impl PlayerUpdate {
    pub fn new(id: i32) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn with_score(mut self, score: i32) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_streak(mut self, streak: i32) -> Self {
        self.streak = Some(streak);
        self
    }
}
