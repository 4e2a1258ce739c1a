use std::env;
use std::str::FromStr;

use crate::error::AppError;

/// Default SQLite file when `SQLITE_DB_FILE` is not set.
pub const DEFAULT_SQLITE_FILE: &str = "geoposts.db";

/// Which database backend to connect to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbProfile {
    /// PostgreSQL, credentials from `POSTGRES_*`
    Postgres,
    /// SQLite file; `None` means `SQLITE_DB_FILE` or [`DEFAULT_SQLITE_FILE`]
    SqliteFile { file: Option<String> },
    /// SQLite in memory; lives as long as the pool's single connection
    InMemory,
}

impl DbProfile {
    pub fn is_sqlite(&self) -> bool {
        !matches!(self, DbProfile::Postgres)
    }

    /// Profile selected by `GEOPOSTS_DB`, defaulting to a SQLite file.
    pub fn from_env() -> Result<Self, AppError> {
        match env::var("GEOPOSTS_DB") {
            Ok(raw) => raw.parse(),
            Err(env::VarError::NotPresent) => Ok(DbProfile::SqliteFile { file: None }),
            Err(e) => Err(AppError::config(format!("GEOPOSTS_DB: {e}"))),
        }
    }
}

impl FromStr for DbProfile {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(DbProfile::Postgres),
            "sqlite" | "sqlite-file" | "sqlite_file" => Ok(DbProfile::SqliteFile { file: None }),
            "memory" | "sqlite-memory" | "sqlite_memory" => Ok(DbProfile::InMemory),
            other => Err(AppError::config(format!(
                "unknown database profile '{other}' (expected postgres | sqlite-file | sqlite-memory)"
            ))),
        }
    }
}

/// Builds the connection URL for `profile` from the process environment.
pub fn db_url(profile: &DbProfile) -> Result<String, AppError> {
    db_url_with(profile, |name| env::var(name).ok())
}

/// Builds the connection URL for `profile`, resolving variables through `lookup`.
pub fn db_url_with<F>(profile: &DbProfile, lookup: F) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match profile {
        DbProfile::Postgres => {
            let host = lookup("POSTGRES_HOST").unwrap_or_else(|| "localhost".to_string());
            let port = lookup("POSTGRES_PORT").unwrap_or_else(|| "5432".to_string());
            let db_name = must_var(&lookup, "POSTGRES_DB")?;
            let username = must_var(&lookup, "POSTGRES_USER")?;
            let password = must_var(&lookup, "POSTGRES_PASSWORD")?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
        DbProfile::SqliteFile { file } => {
            let file = file
                .clone()
                .or_else(|| lookup("SQLITE_DB_FILE"))
                .unwrap_or_else(|| DEFAULT_SQLITE_FILE.to_string());
            if file.trim().is_empty() {
                return Err(AppError::config("SQLite file path must not be empty"));
            }
            // mode=rwc creates the file on first start
            Ok(format!("sqlite://{file}?mode=rwc"))
        }
        DbProfile::InMemory => Ok("sqlite::memory:".to_string()),
    }
}

fn must_var<F>(lookup: &F, name: &str) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .ok_or_else(|| AppError::config(format!("Required environment variable '{name}' is not set")))
}
