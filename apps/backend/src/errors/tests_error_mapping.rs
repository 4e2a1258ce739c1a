// Domain → HTTP mapping, no database or server involved.
use crate::error::{MSG_ALREADY_EXISTS, MSG_INTERNAL, MSG_KIND_NOT_ALLOWED, MSG_NOT_FOUND};
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn duplicate_kind_is_400_already_exists() {
    let app: AppError = DomainError::conflict(ConflictKind::KindName, "kinds.name").into();
    assert_eq!(app.code(), ErrorCode::KindExists);
    assert_eq!(app.status().as_u16(), 400);
    assert_eq!(app.public_message(), MSG_ALREADY_EXISTS);

    let other: AppError =
        DomainError::conflict(ConflictKind::Other("Unique".into()), "unique").into();
    assert_eq!(other.code(), ErrorCode::Conflict);
    assert_eq!(other.public_message(), MSG_ALREADY_EXISTS);
}

#[test]
fn unknown_kind_is_400_kind_not_allowed() {
    let app: AppError = DomainError::kind_not_allowed("graffiti").into();
    assert_eq!(app.code(), ErrorCode::KindNotAllowed);
    assert_eq!(app.status().as_u16(), 400);
    assert_eq!(app.public_message(), MSG_KIND_NOT_ALLOWED);
    assert!(app.detail().contains("graffiti"));
}

#[test]
fn generic_validation_keeps_its_detail() {
    let app: AppError =
        DomainError::validation(ValidationKind::Other("check".into()), "latitude out of range")
            .into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.public_message(), "latitude out of range");
}

#[test]
fn missing_post_is_404_not_found() {
    let app: AppError = DomainError::post_not_found(999).into();
    assert_eq!(app.code(), ErrorCode::PostNotFound);
    assert_eq!(app.status().as_u16(), 404);
    assert_eq!(app.public_message(), MSG_NOT_FOUND);

    let other: AppError =
        DomainError::not_found(NotFoundKind::Other("Record".into()), "gone").into();
    assert_eq!(other.code(), ErrorCode::NotFound);
    assert_eq!(other.public_message(), MSG_NOT_FOUND);
}

#[test]
fn infra_failures_are_opaque_500s() {
    for (kind, code) in [
        (InfraErrorKind::DbUnavailable, ErrorCode::DbUnavailable),
        (InfraErrorKind::Timeout, ErrorCode::DbTimeout),
        (InfraErrorKind::Other("DbErr".into()), ErrorCode::DbError),
    ] {
        let app: AppError = DomainError::infra(kind, "connection refused (10.0.0.5)").into();
        assert_eq!(app.code(), code);
        assert_eq!(app.status().as_u16(), 500);
        assert_eq!(app.public_message(), MSG_INTERNAL);
    }
}
