use futures_util::future::join_all;
use geoposts::adapters::posts_sea::{self, PostInsert};
use geoposts::db::txn::with_txn;
use geoposts::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use geoposts::repos::posts::{self, NewPost};
use geoposts::AppError;

use crate::support::build_test_state;
use crate::support::factory::{jpeg_bytes, seed_kind, seed_post};

fn new_post(kind: &str, image: Vec<u8>) -> NewPost {
    NewPost {
        latitude: -33.8688,
        longitude: 151.2093,
        text: "Cracked pavement".into(),
        image,
        kind: kind.into(),
        title: "Footpath".into(),
        address: "George St, Sydney".into(),
    }
}

#[tokio::test]
async fn unknown_kind_is_validation_error_and_not_persisted() {
    let state = build_test_state().await.expect("state");
    let db = state.db().expect("db");
    seed_kind(db, "pothole").await;

    let err = posts::create_post(db, new_post("graffiti", vec![1, 2, 3]))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::KindNotAllowed, _)
    ));
    assert!(posts::list_posts(db).await.unwrap().is_empty());
}

#[tokio::test]
async fn storage_rejects_unregistered_kind_when_check_is_bypassed() {
    let state = build_test_state().await.expect("state");
    let db = state.db().expect("db");
    seed_kind(db, "pothole").await;

    let raw = posts_sea::insert(
        db,
        PostInsert {
            latitude: 51.5072,
            longitude: -0.1276,
            text: "Faded line markings".into(),
            image: vec![0xFF, 0xD8, 0xFF, 0xD9],
            kind: "graffiti".into(),
            title: "Crossing".into(),
            address: "Strand, London".into(),
        },
    )
    .await
    .expect_err("fk_posts_kind must reject the insert");

    assert!(matches!(
        DomainError::from(raw),
        DomainError::Validation(ValidationKind::KindNotAllowed, _)
    ));
    assert!(posts::list_posts(db).await.unwrap().is_empty());
}

#[tokio::test]
async fn created_post_returns_exact_bytes_and_zero_upvotes() {
    let state = build_test_state().await.expect("state");
    let db = state.db().expect("db");
    seed_kind(db, "pothole").await;

    let image = jpeg_bytes(12, 9);
    let id = posts::create_post(db, new_post("pothole", image.clone()))
        .await
        .expect("create");

    assert_eq!(posts::find_post_image(db, id).await.unwrap(), image);

    let listed = posts::list_posts(db).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, id);
    assert_eq!(listed[0].upvotes, 0);
    assert_eq!(listed[0].latitude, -33.8688);
    assert_eq!(listed[0].kind, "pothole");
}

#[tokio::test]
async fn missing_post_is_not_found_for_image_and_upvote() {
    let state = build_test_state().await.expect("state");
    let db = state.db().expect("db");

    for id in [0, 999, -5] {
        assert!(matches!(
            posts::find_post_image(db, id).await,
            Err(DomainError::NotFound(NotFoundKind::Post, _))
        ));
        assert!(matches!(
            posts::upvote_post(db, id).await,
            Err(DomainError::NotFound(NotFoundKind::Post, _))
        ));
    }
}

#[tokio::test]
async fn concurrent_upvotes_are_not_lost() {
    let state = build_test_state().await.expect("state");
    let db = state.db().expect("db");
    seed_kind(db, "pothole").await;
    let id = seed_post(db, "pothole", vec![0xFF, 0xD8, 0xFF, 0xD9]).await;

    const N: usize = 25;
    let results = join_all((0..N).map(|_| {
        with_txn(&state, move |txn| {
            Box::pin(async move { posts::upvote_post(txn, id).await.map_err(AppError::from) })
        })
    }))
    .await;
    assert!(results.iter().all(Result::is_ok));

    let listed = posts::list_posts(db).await.unwrap();
    assert_eq!(listed[0].upvotes, N as i32);
}
