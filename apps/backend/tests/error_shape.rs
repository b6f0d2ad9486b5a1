mod common;
mod support;

use actix_web::http::header::{CONTENT_TYPE, RETRY_AFTER};
use actix_web::http::StatusCode;
use actix_web::{test, web};
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use quizwheel::extractors::json_body::MAX_BODY_BYTES;
use support::create_test_app;
use support::test_state::{build_state_without_db, build_test_state};

#[actix_web::test]
async fn malformed_json_is_bad_request() {
    let state = web::Data::new(build_test_state().await.unwrap());
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::post()
        .uri("/api/players")
        .insert_header((CONTENT_TYPE, "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST)
        .await;
}

#[actix_web::test]
async fn oversized_body_is_bad_request() {
    let state = web::Data::new(build_test_state().await.unwrap());
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::post()
        .uri("/api/questions")
        .insert_header((CONTENT_TYPE, "application/json"))
        .set_payload(vec![b' '; MAX_BODY_BYTES + 1])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST)
        .await;
}

#[actix_web::test]
async fn problem_trace_id_matches_header() {
    let state = web::Data::new(build_test_state().await.unwrap());
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get().uri("/api/players/4242").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(
        resp.headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("application/problem+json")
    );
    // The helper checks that the body trace_id equals the x-trace-id header.
    let problem =
        assert_problem_details_from_service_response(resp, "PLAYER_NOT_FOUND", StatusCode::NOT_FOUND)
            .await;
    assert!(!problem.trace_id.is_empty());
}

#[actix_web::test]
async fn missing_database_is_service_unavailable() {
    let state = web::Data::new(build_state_without_db().await.unwrap());
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get().uri("/api/players").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(
        resp.headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok()),
        Some("1")
    );
    assert_problem_details_from_service_response(
        resp,
        "DB_UNAVAILABLE",
        StatusCode::SERVICE_UNAVAILABLE,
    )
    .await;
}

#[actix_web::test]
async fn game_state_is_served_without_database() {
    let state = web::Data::new(build_state_without_db().await.unwrap());
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get().uri("/api/game/state").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let view = common::read_json(resp).await;
    assert_eq!(view["phase"], "idle");
}
