//! Questions survive a reconnect when stored in a SQLite file.

mod common;
mod support;

use quizwheel::config::db::{DbKind, RuntimeEnv};
use quizwheel::services::QuestionService;
use quizwheel::state::app_state::AppState;
use quizwheel::build_state;
use serial_test::serial;
use support::factory::seed_true_false;

async fn file_state() -> AppState {
    build_state()
        .with_env(RuntimeEnv::Test)
        .with_db(DbKind::SqliteFile)
        .with_rng_seed(7)
        .build()
        .await
        .expect("sqlite file state")
}

#[tokio::test]
#[serial]
async fn bank_persists_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quizwheel.db");
    std::env::set_var("SQLITE_DB_PATH", &path);

    let first = file_state().await;
    assert_eq!(seed_true_false(&first).await, 3);
    let service = QuestionService::true_false();
    let id = service.active_ids(&first).await.unwrap()[0];
    service.answer_true_false(&first, id, "TRUE").await.unwrap();
    drop(first);

    let second = file_state().await;
    let counts = service.count(&second).await.unwrap();
    assert_eq!((counts.total, counts.active, counts.answered), (3, 2, 1));

    std::env::remove_var("SQLITE_DB_PATH");
}
