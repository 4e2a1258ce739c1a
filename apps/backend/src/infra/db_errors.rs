//! SeaORM -> DomainError translation.
//!
//! Adapters return raw `sea_orm::DbErr`; repos convert with `?` through
//! `From<DbErr> for DomainError`, which lands here. Raw driver messages are
//! logged with the trace id and never copied into client-facing text.

use sea_orm::{DbErr, SqlErr};
use tracing::{error, warn};

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Map a unique violation to its domain conflict. `kinds.name` is the only
/// unique column besides primary keys.
fn unique_conflict(error_msg: &str) -> DomainError {
    if error_msg.contains("kinds.name") || error_msg.contains("kinds_name_key") {
        return DomainError::conflict(ConflictKind::KindName, "kind name already registered");
    }
    DomainError::conflict(
        ConflictKind::Other("Unique".into()),
        "Unique constraint violation",
    )
}

/// `posts.kind -> kinds.name` is the only foreign key, and SQLite does not
/// name the violated constraint, so every FK violation means an unknown kind.
fn foreign_key_violation() -> DomainError {
    DomainError::validation(
        ValidationKind::KindNotAllowed,
        "post references an unregistered kind",
    )
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            warn!(trace_id = %trace_id, raw_error = %error_msg, "Unique constraint violation");
            return unique_conflict(&error_msg);
        }
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            warn!(trace_id = %trace_id, raw_error = %error_msg, "Foreign key constraint violation");
            return foreign_key_violation();
        }
        _ => {}
    }

    // Fallback on message text for drivers that don't surface a typed error
    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Unique constraint violation");
        return unique_conflict(&error_msg);
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Foreign key constraint violation");
        return foreign_key_violation();
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

impl From<DbErr> for DomainError {
    fn from(e: DbErr) -> Self {
        map_db_err(e)
    }
}
