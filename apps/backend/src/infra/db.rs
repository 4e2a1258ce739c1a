use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbProfile};
use crate::error::AppError;

const POSTGRES_MAX_CONNECTIONS: u32 = 10;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Connect without running migrations.
///
/// SQLite gets a single-connection pool: it has one writer anyway, and an
/// in-memory database exists only inside the connection that created it.
pub async fn connect_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile)?;

    let mut opt = ConnectOptions::new(url);
    opt.acquire_timeout(ACQUIRE_TIMEOUT).sqlx_logging(false);
    if profile.is_sqlite() {
        opt.min_connections(1).max_connections(1);
    } else {
        opt.max_connections(POSTGRES_MAX_CONNECTIONS);
    }

    let conn = Database::connect(opt).await?;
    info!(profile = ?profile, backend = ?conn.get_database_backend(), "db.connected");
    Ok(conn)
}

/// Connect and apply pending migrations; the single entrypoint used by
/// the server and the tests.
pub async fn bootstrap_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    Ok(conn)
}
