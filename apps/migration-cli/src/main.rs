use clap::{Parser, ValueEnum};
use geoposts::config::db::DbProfile;
use geoposts::infra::db::connect_db;
use migration::{migrate, MigrationCommand};
use tracing::info;

#[derive(Clone, Copy, ValueEnum)]
enum Command {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

impl From<Command> for MigrationCommand {
    fn from(cmd: Command) -> Self {
        match cmd {
            Command::Up => MigrationCommand::Up,
            Command::Down => MigrationCommand::Down,
            Command::Fresh => MigrationCommand::Fresh,
            Command::Reset => MigrationCommand::Reset,
            Command::Refresh => MigrationCommand::Refresh,
            Command::Status => MigrationCommand::Status,
        }
    }
}

/// In-memory SQLite is deliberately absent: it would be gone when the
/// command exits.
#[derive(Clone, Copy, ValueEnum)]
enum Db {
    Postgres,
    SqliteFile,
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "geoposts database migration tool")]
struct Args {
    /// Migration command to run
    #[arg(value_enum)]
    command: Command,

    /// Database backend
    #[arg(short, long, value_enum, default_value = "sqlite-file")]
    db: Db,

    /// SQLite file; defaults to SQLITE_DB_FILE, then geoposts.db
    #[arg(short, long)]
    file: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_env_filter("migration=info,geoposts=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let profile = match args.db {
        Db::Postgres => DbProfile::Postgres,
        Db::SqliteFile => DbProfile::SqliteFile { file: args.file },
    };

    let conn = match connect_db(&profile).await {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("❌ Could not connect to {profile:?}: {e}");
            std::process::exit(1);
        }
    };

    let command = MigrationCommand::from(args.command);
    info!(?command, ?profile, "migration.start");

    if let Err(e) = migrate(&conn, command).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
}
