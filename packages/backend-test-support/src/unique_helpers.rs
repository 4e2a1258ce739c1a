//! Unique test data, so tests sharing a database never collide on
//! unique columns such as `kinds.name`.

use ulid::Ulid;

/// `{prefix}-{ulid}`
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("kind");
/// let b = unique_str("kind");
/// assert_ne!(a, b);
/// assert!(a.starts_with("kind-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// A kind name that is unique for this process, lowercase like real kinds.
pub fn unique_kind_name(prefix: &str) -> String {
    unique_str(prefix).to_lowercase()
}
