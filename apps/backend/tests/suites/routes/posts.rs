use actix_web::http::{header, StatusCode};
use actix_web::test;
use backend_test_support::error_envelope::{assert_error_envelope, assert_error_envelope_contains};
use serde_json::Value;

use crate::common::read_ok_json;
use crate::support::factory::{jpeg_bytes, post_request, raw_post_request, seed_kind, PostMeta};
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn image_bytes_round_trip_unchanged() {
    let state = build_test_state().await.expect("state");
    seed_kind(state.db().expect("db"), "pothole").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let image = jpeg_bytes(32, 24);
    let req = post_request(&PostMeta::with_kind("pothole"), &image).to_request();
    let id: i64 = read_ok_json(test::call_service(&app, req).await).await;

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{id}/img"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/jpeg"
    );
    let body = test::read_body(resp).await;
    assert_eq!(body.as_ref(), image.as_slice());
}

#[actix_web::test]
async fn raw_body_upload_is_accepted() {
    let state = build_test_state().await.expect("state");
    seed_kind(state.db().expect("db"), "graffiti").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let image = jpeg_bytes(8, 8);
    let req = raw_post_request(&PostMeta::with_kind("graffiti"), &image).to_request();
    let id: i64 = read_ok_json(test::call_service(&app, req).await).await;

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{id}/img"))
        .to_request();
    let body = test::read_body(test::call_service(&app, req).await).await;
    assert_eq!(body.as_ref(), image.as_slice());
}

#[actix_web::test]
async fn listed_posts_carry_metadata_but_no_image() {
    let state = build_test_state().await.expect("state");
    seed_kind(state.db().expect("db"), "pothole").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let mut meta = PostMeta::with_kind("pothole");
    meta.address = "Piazza San Carlo, Torino".into();
    let req = post_request(&meta, &jpeg_bytes(4, 4)).to_request();
    let id: i64 = read_ok_json(test::call_service(&app, req).await).await;

    let req = test::TestRequest::get().uri("/posts").to_request();
    let posts: Vec<Value> = read_ok_json(test::call_service(&app, req).await).await;
    assert_eq!(posts.len(), 1);

    let post = &posts[0];
    assert_eq!(post["id"], id);
    assert_eq!(post["latitude"], 45.0703);
    assert_eq!(post["longitude"], 7.6869);
    assert_eq!(post["kind"], "pothole");
    assert_eq!(post["title"], "Pothole");
    assert_eq!(post["address"], "Piazza San Carlo, Torino");
    assert_eq!(post["upvotes"], 0);
    assert!(post["created_at"].is_string());
    assert!(post.get("image").is_none());
}

#[actix_web::test]
async fn posts_are_listed_newest_first() {
    let state = build_test_state().await.expect("state");
    seed_kind(state.db().expect("db"), "pothole").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let mut ids = Vec::new();
    for _ in 0..3 {
        let req = post_request(&PostMeta::with_kind("pothole"), &jpeg_bytes(2, 2)).to_request();
        let id: i64 = read_ok_json(test::call_service(&app, req).await).await;
        ids.push(id);
    }

    let req = test::TestRequest::get().uri("/posts").to_request();
    let posts: Vec<Value> = read_ok_json(test::call_service(&app, req).await).await;
    let listed: Vec<i64> = posts.iter().filter_map(|p| p["id"].as_i64()).collect();
    ids.reverse();
    assert_eq!(listed, ids);
}

#[actix_web::test]
async fn unknown_kind_is_rejected_and_nothing_is_stored() {
    let state = build_test_state().await.expect("state");
    seed_kind(state.db().expect("db"), "pothole").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = post_request(&PostMeta::with_kind("graffiti"), &jpeg_bytes(4, 4)).to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_envelope(resp, StatusCode::BAD_REQUEST, "Kind not allowed!").await;

    let req = test::TestRequest::get().uri("/posts").to_request();
    let posts: Vec<Value> = read_ok_json(test::call_service(&app, req).await).await;
    assert!(posts.is_empty());
}

#[actix_web::test]
async fn missing_and_malformed_headers_are_400() {
    let state = build_test_state().await.expect("state");
    seed_kind(state.db().expect("db"), "pothole").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/post")
        .insert_header(("content-type", "image/jpeg"))
        .insert_header(("x-latitude", "45.0"))
        .set_payload(jpeg_bytes(2, 2))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_envelope(resp, StatusCode::BAD_REQUEST, "Missing header: x-longitude").await;

    let mut meta = PostMeta::with_kind("pothole");
    meta.latitude = "forty-five".into();
    let req = post_request(&meta, &jpeg_bytes(2, 2)).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    assert_error_envelope_contains(status, &body, StatusCode::BAD_REQUEST, "x-latitude");
}

#[actix_web::test]
async fn empty_upload_is_400() {
    let state = build_test_state().await.expect("state");
    seed_kind(state.db().expect("db"), "pothole").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = raw_post_request(&PostMeta::with_kind("pothole"), &[]).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn oversized_upload_is_413() {
    let state = build_test_state().await.expect("state");
    seed_kind(state.db().expect("db"), "pothole").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let too_big = vec![0u8; geoposts::extractors::image_upload::MAX_IMAGE_BYTES + 1];
    let req = raw_post_request(&PostMeta::with_kind("pothole"), &too_big).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[actix_web::test]
async fn upvote_increments_by_one() {
    let state = build_test_state().await.expect("state");
    seed_kind(state.db().expect("db"), "pothole").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = post_request(&PostMeta::with_kind("pothole"), &jpeg_bytes(2, 2)).to_request();
    let id: i64 = read_ok_json(test::call_service(&app, req).await).await;

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri(&format!("/posts/{id}/upvote"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get().uri("/posts").to_request();
    let posts: Vec<Value> = read_ok_json(test::call_service(&app, req).await).await;
    assert_eq!(posts[0]["upvotes"], 2);
}

#[actix_web::test]
async fn missing_posts_are_404() {
    let state = build_test_state().await.expect("state");
    let app = create_test_app(state).with_prod_routes().build().await;

    for (method, uri) in [
        ("GET", "/posts/999/img"),
        ("POST", "/posts/999/upvote"),
        ("GET", "/posts/not-a-number/img"),
        ("POST", "/posts/not-a-number/upvote"),
    ] {
        let req = match method {
            "GET" => test::TestRequest::get(),
            _ => test::TestRequest::post(),
        }
        .uri(uri)
        .to_request();
        let resp = test::call_service(&app, req).await;
        assert_error_envelope(resp, StatusCode::NOT_FOUND, "Not found!").await;
    }
}
