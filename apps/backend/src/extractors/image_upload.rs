//! Uploaded image bytes, from either a multipart form or a raw body.
//!
//! Multipart uploads use the `file` field; when no field has that name the
//! first field carrying a filename is taken. Any other content type is read
//! as the image itself. Bytes are returned untouched.

use std::future::Future;
use std::pin::Pin;

use actix_multipart::Multipart;
use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::{Stream, StreamExt};
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::trace_ctx;

pub const MAX_IMAGE_BYTES: usize = 16 * 1024 * 1024;
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload(pub Vec<u8>);

impl ImageUpload {
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl FromRequest for ImageUpload {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let payload = payload.take();

        if let Some(len) = declared_length(req) {
            if len > MAX_IMAGE_BYTES {
                return Box::pin(async move { Err(too_large()) });
            }
        }

        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.trim_start().to_ascii_lowercase().starts_with("multipart/form-data"))
            .unwrap_or(false);

        if is_multipart {
            let multipart = Multipart::new(req.headers(), payload);
            Box::pin(async move { non_empty(read_multipart(multipart).await?) })
        } else {
            Box::pin(async move { non_empty(read_stream(payload).await?) })
        }
    }
}

fn declared_length(req: &HttpRequest) -> Option<usize> {
    req.headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}

fn too_large() -> AppError {
    AppError::payload_too_large(format!(
        "Image exceeds the {} MiB upload limit",
        MAX_IMAGE_BYTES / (1024 * 1024)
    ))
}

fn unreadable(e: impl std::fmt::Display) -> AppError {
    warn!(trace_id = %trace_ctx::trace_id(), error = %e, "failed to read upload");
    AppError::bad_request(ErrorCode::BadRequest, "Failed to read request body")
}

fn non_empty(bytes: BytesMut) -> Result<ImageUpload, AppError> {
    if bytes.is_empty() {
        return Err(AppError::bad_request(
            ErrorCode::BadRequest,
            "Missing image upload",
        ));
    }
    debug!(image_bytes = bytes.len(), "upload.read");
    Ok(ImageUpload(bytes.to_vec()))
}

fn append(buf: &mut BytesMut, chunk: &[u8]) -> Result<(), AppError> {
    if buf.len() + chunk.len() > MAX_IMAGE_BYTES {
        return Err(too_large());
    }
    buf.extend_from_slice(chunk);
    Ok(())
}

async fn read_stream<S, B, E>(mut stream: S) -> Result<BytesMut, AppError>
where
    S: Stream<Item = Result<B, E>> + Unpin,
    B: AsRef<[u8]>,
    E: std::fmt::Display,
{
    let mut buf = BytesMut::new();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(unreadable)?;
        append(&mut buf, chunk.as_ref())?;
    }
    Ok(buf)
}

async fn read_multipart(mut multipart: Multipart) -> Result<BytesMut, AppError> {
    let mut named: Option<BytesMut> = None;
    let mut with_filename: Option<BytesMut> = None;

    while let Some(field) = multipart.next().await {
        let mut field = field.map_err(unreadable)?;

        let is_file_field = field.name() == Some(FILE_FIELD);
        let has_filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .is_some();
        let keep = named.is_none() && (is_file_field || (has_filename && with_filename.is_none()));

        if !keep {
            // Unread fields must still be drained before the next one
            while let Some(chunk) = field.next().await {
                chunk.map_err(unreadable)?;
            }
            continue;
        }

        let bytes = read_stream(&mut field).await?;
        if is_file_field {
            named = Some(bytes);
        } else {
            with_filename = Some(bytes);
        }
    }

    Ok(named.or(with_filename).unwrap_or_default())
}
