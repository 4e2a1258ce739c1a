//! Runtime configuration, read from environment variables at startup.

pub mod db;
pub mod server;
