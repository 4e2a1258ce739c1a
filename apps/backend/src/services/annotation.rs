//! Image annotation.
//!
//! Only the input check exists: the upload must decode as an image. The
//! analysis itself is not implemented and every decodable image gets the
//! same placeholder text.

use actix_web::web;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::trace_ctx;

pub const ANNOTATION_PLACEHOLDER: &str = "Image annotation is not yet implemented";

/// Dimensions of a decoded upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
}

/// Decodes `bytes` on the blocking pool; undecodable input is a 400.
pub async fn decode_image(bytes: Vec<u8>) -> Result<DecodedImage, AppError> {
    let decoded = web::block(move || image::load_from_memory(&bytes))
        .await
        .map_err(|e| AppError::internal(ErrorCode::InternalError, format!("decode task failed: {e}")))?;

    match decoded {
        Ok(img) => Ok(DecodedImage {
            width: img.width(),
            height: img.height(),
        }),
        Err(e) => {
            debug!(trace_id = %trace_ctx::trace_id(), error = %e, "image decode failed");
            Err(AppError::bad_request(ErrorCode::InvalidImage, e.to_string()))
        }
    }
}

/// Checks that `bytes` is an image and returns the placeholder annotation.
pub async fn annotate(bytes: Vec<u8>) -> Result<String, AppError> {
    let image = decode_image(bytes).await?;
    warn!(
        width = image.width,
        height = image.height,
        "annotation requested but not implemented; returning placeholder"
    );
    Ok(ANNOTATION_PLACEHOLDER.to_string())
}
