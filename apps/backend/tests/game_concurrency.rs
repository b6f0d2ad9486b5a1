//! Game operations racing on one shared state.

mod common;
mod support;

use std::collections::HashSet;

use futures_util::future::join_all;
use quizwheel::errors::ErrorCode;
use quizwheel::services::GameService;
use support::factory::{seed_game_pool, seed_players};
use support::test_state::build_test_state;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_turn_picks_cover_the_round() {
    let state = build_test_state().await.unwrap();
    let ps = seed_players(&state, &["Ana", "Beto", "Cata", "Dani"]).await;
    seed_game_pool(&state, 8).await;
    GameService::new().start_game(&state).await.unwrap();

    let picks = join_all((0..ps.len()).map(|_| {
        let state = state.clone();
        tokio::spawn(async move { GameService::new().select_next_player(&state).await })
    }))
    .await;

    let ids: HashSet<i32> = picks
        .into_iter()
        .map(|joined| joined.expect("task").expect("pick").id)
        .collect();
    assert_eq!(ids, ps.iter().map(|p| p.id).collect());

    let view = GameService::new().state(&state).await;
    assert_eq!(view.pending.len(), ps.len(), "queue refilled after the round");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_correct_verdicts_score_once() {
    let state = build_test_state().await.unwrap();
    let ps = seed_players(&state, &["Ana", "Beto"]).await;
    seed_game_pool(&state, 4).await;
    GameService::new().start_game(&state).await.unwrap();

    let ana = ps[0].id;
    let qid = GameService::new().active_questions(&state, ana).await.unwrap()[0].id;

    let results = join_all((0..5).map(|_| {
        let state = state.clone();
        tokio::spawn(async move {
            GameService::new()
                .evaluate_answer(&state, ana, qid, "correct")
                .await
        })
    }))
    .await;

    let mut ok = 0;
    for joined in results {
        match joined.expect("task") {
            Ok(outcome) => {
                ok += 1;
                assert_eq!(outcome.delta, 1);
            }
            Err(e) => assert_eq!(e.code(), ErrorCode::AlreadyAnswered),
        }
    }
    assert_eq!(ok, 1);

    let view = GameService::new().state(&state).await;
    let snap = view.players.iter().find(|p| p.id == ana).unwrap();
    assert_eq!((snap.score, snap.streak), (1, 1));
}
