//! Post metadata carried in `x-*` request headers.
//!
//! The body of `POST /post` is the image itself, so the remaining fields
//! travel as headers. Text headers may carry any UTF-8 (addresses and
//! descriptions are rarely ASCII), so values are decoded from raw bytes
//! instead of `HeaderValue::to_str`.

use actix_web::dev::Payload;
use actix_web::http::header::HeaderMap;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::errors::ErrorCode;

pub const X_LATITUDE: &str = "x-latitude";
pub const X_LONGITUDE: &str = "x-longitude";
pub const X_TEXT: &str = "x-text";
pub const X_KIND: &str = "x-kind";
pub const X_TITLE: &str = "x-title";
pub const X_ADDRESS: &str = "x-address";

pub const POST_HEADER_NAMES: [&str; 6] =
    [X_LATITUDE, X_LONGITUDE, X_TEXT, X_KIND, X_TITLE, X_ADDRESS];

#[derive(Debug, Clone, PartialEq)]
pub struct PostHeaders {
    pub latitude: f64,
    pub longitude: f64,
    pub text: String,
    pub kind: String,
    pub title: String,
    pub address: String,
}

impl PostHeaders {
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, AppError> {
        Ok(Self {
            latitude: coordinate(headers, X_LATITUDE)?,
            longitude: coordinate(headers, X_LONGITUDE)?,
            text: utf8_header(headers, X_TEXT)?,
            kind: utf8_header(headers, X_KIND)?,
            title: utf8_header(headers, X_TITLE)?,
            address: utf8_header(headers, X_ADDRESS)?,
        })
    }
}

impl FromRequest for PostHeaders {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::from_headers(req.headers()))
    }
}

fn utf8_header(headers: &HeaderMap, name: &str) -> Result<String, AppError> {
    let value = headers.get(name).ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidHeader, format!("Missing header: {name}"))
    })?;
    std::str::from_utf8(value.as_bytes())
        .map(str::to_owned)
        .map_err(|_| {
            AppError::bad_request(
                ErrorCode::InvalidHeader,
                format!("Header {name} is not valid UTF-8"),
            )
        })
}

fn coordinate(headers: &HeaderMap, name: &str) -> Result<f64, AppError> {
    let raw = utf8_header(headers, name)?;
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(AppError::bad_request(
            ErrorCode::InvalidHeader,
            format!("Header {name} must be a number, got '{raw}'"),
        )),
    }
}
