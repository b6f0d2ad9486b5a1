// Unit tests for error mapping - pure domain logic without HTTP or database dependencies
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_422() {
    let de = DomainError::validation(ValidationKind::EmptyName, "name must not be empty");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::EmptyName);
    assert_eq!(app.status().as_u16(), 422);

    let other = DomainError::validation_other("bad field");
    let app: AppError = other.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 422);
}

#[test]
fn maps_conflicts() {
    let cases = [
        (ConflictKind::DuplicateName, "DUPLICATE_NAME"),
        (ConflictKind::AlreadyAnswered, "ALREADY_ANSWERED"),
        (ConflictKind::InsufficientPlayers, "INSUFFICIENT_PLAYERS"),
        (ConflictKind::EmptyPool, "EMPTY_POOL"),
        (ConflictKind::NoPendingPlayers, "NO_PENDING_PLAYERS"),
        (ConflictKind::Other("unique".into()), "CONFLICT"),
    ];
    for (kind, code) in cases {
        let app: AppError = DomainError::conflict(kind, "conflict").into();
        assert_eq!(app.code().as_str(), code);
        assert_eq!(app.status().as_u16(), 409);
    }
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::Assignment, "no assignment");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "ASSIGNMENT_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let nf = DomainError::not_found(NotFoundKind::Player, "no player");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "PLAYER_NOT_FOUND");
}

#[test]
fn maps_infra() {
    let t = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    let app: AppError = t.into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status().as_u16(), 504);
    assert!(matches!(app, AppError::Timeout { .. }));

    let down = DomainError::infra(InfraErrorKind::DbUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let corr = DomainError::infra(InfraErrorKind::DataCorruption, "bad");
    let app: AppError = corr.into();
    assert_eq!(app.code().as_str(), "DATA_CORRUPTION");
    assert_eq!(app.status().as_u16(), 500);

    let other = DomainError::infra(InfraErrorKind::Other("unknown".to_string()), "other");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "INTERNAL_ERROR");
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn constructor_helpers() {
    let validation = DomainError::validation(ValidationKind::UnknownVerdict, "maybe");
    assert!(matches!(
        validation,
        DomainError::Validation(ValidationKind::UnknownVerdict, _)
    ));

    let conflict = DomainError::conflict(ConflictKind::EmptyPool, "nothing to assign");
    assert!(matches!(
        conflict,
        DomainError::Conflict(ConflictKind::EmptyPool, _)
    ));

    let infra = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    assert_eq!(infra.to_string(), "infra Timeout: timeout");
}
