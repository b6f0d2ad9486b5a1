use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;

use crate::domain::random::{RandomSource, SeededRandom};
use crate::domain::session::GameSession;

/// Turn queue, player snapshot and the RNG that drives both.
///
/// Guarded by a single async mutex so that a mutating operation can hold it
/// across its database transaction.
pub struct GameRuntime {
    pub session: GameSession,
    pub rng: Box<dyn RandomSource>,
}

impl GameRuntime {
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        Self {
            session: GameSession::new(),
            rng,
        }
    }

    pub fn seeded(seed: Option<u64>) -> Self {
        Self::new(Box::new(SeededRandom::from_optional_seed(seed)))
    }
}

impl std::fmt::Debug for GameRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameRuntime")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    pub db: Option<DatabaseConnection>,
    game: Arc<Mutex<GameRuntime>>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, runtime: GameRuntime) -> Self {
        Self {
            db: Some(db),
            game: Arc::new(Mutex::new(runtime)),
        }
    }

    /// State without a database; every data operation fails with `DB_UNAVAILABLE`.
    pub fn new_without_db(runtime: GameRuntime) -> Self {
        Self {
            db: None,
            game: Arc::new(Mutex::new(runtime)),
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn game(&self) -> &Arc<Mutex<GameRuntime>> {
        &self.game
    }
}
