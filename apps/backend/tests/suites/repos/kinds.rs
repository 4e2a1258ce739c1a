use backend_test_support::unique_helpers::unique_kind_name;
use geoposts::errors::domain::{ConflictKind, DomainError};
use geoposts::repos::kinds::{self, Kind};

use crate::support::build_test_state;

#[tokio::test]
async fn novel_kind_is_listed() {
    let state = build_test_state().await.expect("state");
    let db = state.db().expect("db");

    let kind = Kind {
        name: unique_kind_name("bench"),
    };
    let id = kinds::create_kind(db, &kind).await.expect("create");
    assert!(id > 0);

    assert!(kinds::list_kinds(db).await.unwrap().contains(&kind));
    assert!(kinds::kind_exists(db, &kind.name).await.unwrap());
    assert!(!kinds::kind_exists(db, "never-registered").await.unwrap());
}

#[tokio::test]
async fn duplicate_name_is_kind_conflict() {
    let state = build_test_state().await.expect("state");
    let db = state.db().expect("db");

    let kind = Kind {
        name: "pothole".into(),
    };
    kinds::create_kind(db, &kind).await.expect("first insert");

    let err = kinds::create_kind(db, &kind).await.unwrap_err();
    assert!(
        matches!(err, DomainError::Conflict(ConflictKind::KindName, _)),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn names_are_case_sensitive() {
    let state = build_test_state().await.expect("state");
    let db = state.db().expect("db");

    kinds::create_kind(db, &Kind { name: "Pothole".into() }).await.unwrap();
    kinds::create_kind(db, &Kind { name: "pothole".into() }).await.unwrap();

    assert_eq!(kinds::list_kinds(db).await.unwrap().len(), 2);
}
