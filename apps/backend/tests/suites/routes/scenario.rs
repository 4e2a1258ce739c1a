//! The full client flow against one database: register a kind, reject a
//! duplicate and an unknown kind, post, upvote, list, miss.

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::error_envelope::assert_error_envelope;
use serde_json::{json, Value};

use crate::common::read_ok_json;
use crate::support::factory::{jpeg_bytes, post_request, PostMeta};
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn kind_post_upvote_flow() {
    let state = build_test_state().await.expect("state");
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/kind")
        .set_json(json!({ "name": "pothole" }))
        .to_request();
    let kind_id: i64 = read_ok_json(test::call_service(&app, req).await).await;
    assert_eq!(kind_id, 1);

    let req = test::TestRequest::post()
        .uri("/kind")
        .set_json(json!({ "name": "pothole" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_envelope(resp, StatusCode::BAD_REQUEST, "Already exists!").await;

    let image = jpeg_bytes(20, 10);

    let req = post_request(&PostMeta::with_kind("graffiti"), &image).to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_envelope(resp, StatusCode::BAD_REQUEST, "Kind not allowed!").await;

    let req = post_request(&PostMeta::with_kind("pothole"), &image).to_request();
    let post_id: i64 = read_ok_json(test::call_service(&app, req).await).await;
    assert_eq!(post_id, 1);

    let req = test::TestRequest::post().uri("/posts/1/upvote").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/posts").to_request();
    let posts: Vec<Value> = read_ok_json(test::call_service(&app, req).await).await;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["id"], 1);
    assert_eq!(posts[0]["upvotes"], 1);

    let req = test::TestRequest::get().uri("/posts/999/img").to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_envelope(resp, StatusCode::NOT_FOUND, "Not found!").await;
}
