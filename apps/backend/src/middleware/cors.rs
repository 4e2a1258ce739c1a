use std::env;

use actix_cors::Cors;
use actix_web::http::header::{self, HeaderName};

use crate::extractors::post_headers::POST_HEADER_NAMES;

const DEFAULT_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Parses `CORS_ALLOWED_ORIGINS` (comma separated). Blank, `null` and
/// non-http(s) entries are dropped; an empty result falls back to the
/// localhost dev origins.
pub fn allowed_origins(raw: &str) -> Vec<String> {
    let parsed: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect();

    if parsed.is_empty() {
        DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect()
    } else {
        parsed
    }
}

/// CORS limited to the methods and headers the API uses; the post upload
/// headers are allowed so browsers can create posts cross-origin.
pub fn cors_middleware() -> Cors {
    let raw = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default();

    let mut allowed_headers = vec![header::CONTENT_TYPE, header::ACCEPT];
    allowed_headers.extend(POST_HEADER_NAMES.iter().map(|h| HeaderName::from_static(*h)));

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(allowed_headers)
        .expose_headers(vec![HeaderName::from_static("x-trace-id")])
        .max_age(3600);

    for origin in allowed_origins(&raw) {
        cors = cors.allowed_origin(&origin);
    }

    cors
}
