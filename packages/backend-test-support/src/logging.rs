//! Test logging bootstrap shared by every backend test binary.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Filter used when neither `TEST_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_TEST_FILTER: &str = "warn,sqlx=error,sea_orm_migration=error";

/// Resolve the filter directive: `TEST_LOG`, then `RUST_LOG`, then the quiet default.
pub fn filter_directive() -> String {
    std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_TEST_FILTER.to_string())
}

/// Install a test-writer subscriber once per process.
///
/// Safe to call from every test and from `ctor` hooks; a subscriber that
/// somebody else installed first wins.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter =
            EnvFilter::try_new(filter_directive()).unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .with_target(false)
            .try_init()
            .ok();
    });
}
