#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use serde::de::DeserializeOwned;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Read a successful response body as JSON, panicking with the body on
/// unexpected statuses.
pub async fn read_ok_json<T: DeserializeOwned>(resp: ServiceResponse<BoxBody>) -> T {
    let status = resp.status();
    let body = test::read_body(resp).await;
    assert!(
        status.is_success(),
        "expected 2xx, got {status}: {}",
        String::from_utf8_lossy(&body)
    );
    serde_json::from_slice(&body).unwrap_or_else(|e| {
        panic!("body is not the expected JSON ({e}): {}", String::from_utf8_lossy(&body))
    })
}
