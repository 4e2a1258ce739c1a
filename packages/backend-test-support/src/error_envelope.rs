//! Error envelope assertions.
//!
//! Every backend error body is `{"message": "..."}` and every response
//! carries an `x-trace-id` header. These helpers check that contract
//! without depending on backend types.

use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Local mirror of the backend's error body.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorEnvelopeLike {
    pub message: String,
}

/// Assert status, `x-trace-id` presence and the exact envelope message.
pub fn assert_error_envelope_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
    expected_status: StatusCode,
    expected_message: &str,
) {
    assert_eq!(status, expected_status, "unexpected status");

    let trace_id = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8");
    assert!(!trace_id.is_empty(), "x-trace-id header should not be empty");

    let envelope = parse_envelope(body);
    assert_eq!(envelope.message, expected_message);
}

/// Like [`assert_error_envelope_parts`] but only requires the message to
/// contain `needle`.
pub fn assert_error_envelope_contains(
    status: StatusCode,
    body: &[u8],
    expected_status: StatusCode,
    needle: &str,
) {
    assert_eq!(status, expected_status, "unexpected status");
    let envelope = parse_envelope(body);
    assert!(
        envelope.message.contains(needle),
        "expected message to contain '{needle}', got '{}'",
        envelope.message
    );
}

/// Read a `ServiceResponse` and assert the envelope.
pub async fn assert_error_envelope(
    resp: actix_web::dev::ServiceResponse<actix_web::body::BoxBody>,
    expected_status: StatusCode,
    expected_message: &str,
) {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_error_envelope_parts(status, &headers, &body, expected_status, expected_message);
}

fn parse_envelope(body: &[u8]) -> ErrorEnvelopeLike {
    let body_str = std::str::from_utf8(body).expect("error body should be valid UTF-8");
    serde_json::from_str(body_str)
        .unwrap_or_else(|e| panic!("error body should be an envelope ({e}): {body_str}"))
}
