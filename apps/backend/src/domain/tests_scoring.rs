use crate::domain::scoring::{score_answer, Standing, Verdict};
use crate::errors::domain::{DomainError, ValidationKind};

#[test]
fn streak_of_three_then_a_miss() {
    let mut standing = Standing::default();
    let mut deltas = Vec::new();
    for _ in 0..3 {
        let out = score_answer(standing, Verdict::Correct);
        assert!(out.closes_assignment);
        deltas.push(out.delta);
        standing = out.standing;
    }
    assert_eq!(deltas, vec![1, 2, 3]);
    assert_eq!(standing, Standing { score: 6, streak: 3 });

    let miss = score_answer(standing, Verdict::Incorrect);
    assert_eq!(miss.delta, -1);
    assert_eq!(miss.standing, Standing { score: 5, streak: 0 });
    assert!(!miss.closes_assignment);
}

#[test]
fn miss_at_zero_applies_nothing() {
    let out = score_answer(Standing { score: 0, streak: 4 }, Verdict::Incorrect);
    assert_eq!(out.delta, 0);
    assert_eq!(out.standing, Standing { score: 0, streak: 0 });
}

#[test]
fn correct_after_reset_streak_starts_over() {
    let out = score_answer(Standing { score: 5, streak: 0 }, Verdict::Correct);
    assert_eq!(out.delta, 1);
    assert_eq!(out.standing, Standing { score: 6, streak: 1 });
}

#[test]
fn verdict_parsing_is_case_insensitive() {
    assert_eq!("Correct".parse::<Verdict>().unwrap(), Verdict::Correct);
    assert_eq!(" INCORRECT ".parse::<Verdict>().unwrap(), Verdict::Incorrect);
    assert_eq!("Bien".parse::<Verdict>().unwrap(), Verdict::Correct);
    assert_eq!("MAL".parse::<Verdict>().unwrap(), Verdict::Incorrect);
}

#[test]
fn unknown_verdict_is_validation_error() {
    let err = "maybe".parse::<Verdict>().unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::UnknownVerdict, _)
    ));
}
