//! Unique test data, so tests sharing a database never collide.

use ulid::Ulid;

/// `{prefix}-{ulid}`
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("bread");
/// assert_ne!(a, unique_str("bread"));
/// assert!(a.starts_with("bread-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// `{prefix}-{ulid}@example.test`
///
/// ```
/// use backend_test_support::unique_helpers::unique_email;
///
/// let email = unique_email("donor");
/// assert!(email.starts_with("donor-"));
/// assert!(email.ends_with("@example.test"));
/// ```
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.test", prefix.to_lowercase(), Ulid::new())
}

/// A well-formed record id that no stored record has.
pub fn unknown_food_id() -> String {
    Ulid::new().to_string()
}
