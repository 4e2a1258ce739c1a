//! Backend test support utilities
//!
//! Shared helpers for the backend's integration tests: logging bootstrap,
//! error-envelope assertions and unique test data.

pub mod error_envelope;
pub mod logging;
pub mod unique_helpers;
