use actix_web::web;

use crate::extractors::json_body::payload_config;

pub mod game;
pub mod health;
pub mod players;
pub mod questions;

/// Register every route. Shared by `main.rs` and the HTTP tests so both
/// exercise the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(payload_config());

    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // True/false bank: /api/questions/**
    cfg.service(web::scope("/api/questions").configure(questions::configure_true_false));

    // Self-assessment bank: /api/self-assessment/questions/**
    cfg.service(
        web::scope("/api/self-assessment/questions")
            .configure(questions::configure_self_assessment),
    );

    // Players and game answers: /api/players/**
    cfg.service(web::scope("/api/players").configure(players::configure_routes));

    // Game lifecycle: /api/game/**
    cfg.service(web::scope("/api/game").configure(game::configure_routes));
}
