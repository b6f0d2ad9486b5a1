use quizwheel::config::db::{DbKind, RuntimeEnv};
use quizwheel::infra::state::build_state;
use quizwheel::state::app_state::AppState;
use quizwheel::AppError;

/// Seed shared by tests that do not care about the exact shuffle.
pub const TEST_SEED: u64 = 42;

/// Fresh in-memory SQLite database, migrated, with a seeded RNG.
///
/// Every call yields an isolated database: the in-memory pool holds a
/// single connection and the schema dies with it.
pub async fn build_test_state() -> Result<AppState, AppError> {
    build_test_state_with_seed(TEST_SEED).await
}

pub async fn build_test_state_with_seed(seed: u64) -> Result<AppState, AppError> {
    build_state()
        .with_env(RuntimeEnv::Test)
        .with_db(DbKind::SqliteMemory)
        .with_rng_seed(seed)
        .build()
        .await
}

/// State with no database attached; data operations fail with 503.
pub async fn build_state_without_db() -> Result<AppState, AppError> {
    build_state().with_rng_seed(TEST_SEED).build().await
}
