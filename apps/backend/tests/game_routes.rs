mod common;
mod support;

use actix_web::http::StatusCode;
use actix_web::{test, web};
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use serde_json::json;
use support::create_test_app;
use support::factory::{seed_game_pool, seed_players};
use support::test_state::build_test_state;

#[actix_web::test]
async fn start_requires_two_players() {
    let state = build_test_state().await.unwrap();
    seed_players(&state, &["Solo"]).await;
    seed_game_pool(&state, 3).await;
    let app = create_test_app(web::Data::new(state)).build().await;

    let req = test::TestRequest::post().uri("/api/game/start").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "INSUFFICIENT_PLAYERS",
        StatusCode::CONFLICT,
    )
    .await;
}

#[actix_web::test]
async fn next_turn_before_start_conflicts() {
    let state = web::Data::new(build_test_state().await.unwrap());
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::post().uri("/api/game/next-turn").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "NO_PENDING_PLAYERS",
        StatusCode::CONFLICT,
    )
    .await;
}

#[actix_web::test]
async fn full_round_over_http() {
    let state = build_test_state().await.unwrap();
    let players = seed_players(&state, &["Ana", "Beto"]).await;
    seed_game_pool(&state, 4).await;
    let app = create_test_app(web::Data::new(state)).build().await;

    let req = test::TestRequest::post().uri("/api/game/start").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let view = common::read_json(resp).await;
    assert_eq!(view["phase"], "awaiting_selection");
    assert_eq!(view["pending"], json!([players[0].id, players[1].id]));
    assert!(view["current_turn"].is_null());

    let req = test::TestRequest::post().uri("/api/game/next-turn").to_request();
    let picked = common::read_json(test::call_service(&app, req).await).await["player"].clone();
    let pid = picked["id"].as_i64().unwrap();
    assert!(players.iter().any(|p| i64::from(p.id) == pid));

    let req = test::TestRequest::get()
        .uri(&format!("/api/players/{pid}/questions/active"))
        .to_request();
    let active = common::read_json(test::call_service(&app, req).await).await;
    assert_eq!(active["player_id"], pid);
    let question_ids = active["question_ids"].as_array().unwrap().clone();
    assert_eq!(question_ids.len(), 2);
    assert!(active.get("questions").is_none());
    let qid = question_ids[0].as_i64().unwrap();

    // The host fetches the text from the bank; the listing itself never
    // carries answers.
    let req = test::TestRequest::get()
        .uri(&format!("/api/self-assessment/questions/{qid}"))
        .to_request();
    let served = common::read_json(test::call_service(&app, req).await).await;
    assert_eq!(served["id"], qid);

    let answer_uri = format!("/api/players/{pid}/questions/{qid}/answer");

    let req = test::TestRequest::post()
        .uri(&answer_uri)
        .set_json(json!({ "verdict": "correct" }))
        .to_request();
    let out = common::read_json(test::call_service(&app, req).await).await;
    assert_eq!(out["delta"], 1);
    assert_eq!(out["score"], 1);
    assert_eq!(out["streak"], 1);
    assert_eq!(out["answered"], true);
    assert_eq!(out["verdict"], "correct");

    let req = test::TestRequest::post()
        .uri(&answer_uri)
        .set_json(json!({ "verdict": "correct" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(resp, "ALREADY_ANSWERED", StatusCode::CONFLICT)
        .await;

    let req = test::TestRequest::get().uri("/api/game/state").to_request();
    let view = common::read_json(test::call_service(&app, req).await).await;
    assert_eq!(view["phase"], "turn_active");
    assert_eq!(view["current_turn"], pid);
    let scored = view["players"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["id"] == pid)
        .cloned()
        .unwrap();
    assert_eq!(scored["score"], 1);

    let req = test::TestRequest::post().uri("/api/game/reset").to_request();
    let view = common::read_json(test::call_service(&app, req).await).await;
    assert!(view["current_turn"].is_null());
    assert!(view["players"]
        .as_array()
        .unwrap()
        .iter()
        .all(|p| p["score"] == 0 && p["streak"] == 0));

    // Reset reopens the assignment.
    let req = test::TestRequest::get()
        .uri(&format!("/api/players/{pid}/questions/active"))
        .to_request();
    let active = common::read_json(test::call_service(&app, req).await).await;
    assert_eq!(active["question_ids"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn answering_unassigned_question_is_not_found() {
    let state = build_test_state().await.unwrap();
    let players = seed_players(&state, &["Ana", "Beto"]).await;
    seed_game_pool(&state, 2).await;
    let app = create_test_app(web::Data::new(state)).build().await;

    let req = test::TestRequest::post().uri("/api/game/start").to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/players/{}/questions/active", players[1].id))
        .to_request();
    let theirs = common::read_json(test::call_service(&app, req).await).await["question_ids"][0]
        .as_i64()
        .unwrap();

    let req = test::TestRequest::post()
        .uri(&format!(
            "/api/players/{}/questions/{theirs}/answer",
            players[0].id
        ))
        .set_json(json!({ "verdict": "correct" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "ASSIGNMENT_NOT_FOUND",
        StatusCode::NOT_FOUND,
    )
    .await;
}

#[actix_web::test]
async fn active_questions_for_unknown_player() {
    let state = web::Data::new(build_test_state().await.unwrap());
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get()
        .uri("/api/players/999/questions/active")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(resp, "PLAYER_NOT_FOUND", StatusCode::NOT_FOUND)
        .await;
}
