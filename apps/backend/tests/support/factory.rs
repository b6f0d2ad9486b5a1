//! Seed data through the public services.

use quizwheel::repos::players::Player;
use quizwheel::services::{PlayerService, QuestionDraft, QuestionService};
use quizwheel::state::app_state::AppState;

pub async fn seed_players(state: &AppState, names: &[&str]) -> Vec<Player> {
    let service = PlayerService::new();
    let mut out = Vec::with_capacity(names.len());
    for name in names {
        out.push(
            service
                .register(state, name)
                .await
                .expect("register player"),
        );
    }
    out
}

pub fn self_assessment_drafts(n: usize) -> Vec<QuestionDraft> {
    (1..=n)
        .map(|i| QuestionDraft {
            text: format!("Explain concept #{i}"),
            answer: format!("Reference answer #{i}"),
        })
        .collect()
}

pub fn true_false_drafts() -> Vec<QuestionDraft> {
    vec![
        QuestionDraft {
            text: "HTTP is a stateless protocol.".into(),
            answer: "Verdadero. Each request is independent.".into(),
        },
        QuestionDraft {
            text: "SSL is the protocol used by modern HTTPS.".into(),
            answer: "FALSO. Modern HTTPS uses TLS.".into(),
        },
        QuestionDraft {
            text: "TCP guarantees in-order delivery.".into(),
            answer: "true".into(),
        },
    ]
}

/// Load `n` self-assessment questions (the game pool).
pub async fn seed_game_pool(state: &AppState, n: usize) -> u64 {
    QuestionService::self_assessment()
        .create_many(state, self_assessment_drafts(n))
        .await
        .expect("load self-assessment questions")
}

pub async fn seed_true_false(state: &AppState) -> u64 {
    QuestionService::true_false()
        .create_many(state, true_false_drafts())
        .await
        .expect("load true/false questions")
}
