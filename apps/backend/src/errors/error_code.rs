//! Error codes for the geoposts API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! Codes are SCREAMING_SNAKE_CASE and are what shows up in logs.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request validation
    /// Generic validation failure
    ValidationError,
    /// Post references a kind that is not registered
    KindNotAllowed,
    /// Malformed request (body, path)
    BadRequest,
    /// Missing or malformed HTTP header
    InvalidHeader,
    /// Upload could not be decoded as an image
    InvalidImage,
    /// Upload exceeds the size limit
    PayloadTooLarge,

    // Resource not found
    /// Post id does not exist
    PostNotFound,
    /// Generic not found
    NotFound,

    // Conflicts
    /// Kind name already registered
    KindExists,
    /// Generic unique violation
    Conflict,

    // System errors
    DbError,
    DbUnavailable,
    DbTimeout,
    InternalError,
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::KindNotAllowed => "KIND_NOT_ALLOWED",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidHeader => "INVALID_HEADER",
            Self::InvalidImage => "INVALID_IMAGE",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",

            Self::PostNotFound => "POST_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::KindExists => "KIND_EXISTS",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
