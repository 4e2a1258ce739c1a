use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Post id from the `{id}` path segment.
///
/// Anything that is not an integer cannot name a stored post, so it is
/// reported as a missing post rather than a malformed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostId(pub i64);

impl FromRequest for PostId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_post_id(req.match_info().get("id")))
    }
}

fn parse_post_id(raw: Option<&str>) -> Result<PostId, AppError> {
    let raw = raw.ok_or_else(|| {
        AppError::internal(ErrorCode::InternalError, "route has no {id} segment")
    })?;
    raw.parse::<i64>()
        .map(PostId)
        .map_err(|_| AppError::not_found(ErrorCode::PostNotFound, format!("Invalid post id: {raw}")))
}
