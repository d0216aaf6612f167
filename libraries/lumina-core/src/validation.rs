//! Input shape checks shared by registration and login

use regex::Regex;
use std::sync::LazyLock;

/// `local@domain.tld`: no `@` or whitespace in any part, at least one `.`
/// after the `@`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
});

/// Check that `email` has the accepted `local@domain.tld` shape
///
/// This is a loose shape check, not RFC 5322 validation. Quoted local parts
/// are rejected and multi-dot domains are accepted.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
