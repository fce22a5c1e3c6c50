//! Format rules
//!
//! Pure predicates for email and password strings, plus the length limits
//! applied by the pipeline.

use regex::Regex;
use std::sync::LazyLock;

/// local@domain.tld with a 2-4 letter suffix. Both cases are spelled out;
/// `(?i)` would fold non-ASCII letters such as U+017F into `[a-z]`.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,4}$").expect("email pattern is valid")
});

/// Length limits, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub id_min_length: usize,
    pub id_max_length: usize,
    pub password_min_length: usize,
    pub password_max_length: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            id_min_length: 5,
            id_max_length: 15,
            password_min_length: 8,
            password_max_length: 20,
        }
    }
}

/// Returns true if the string looks like `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Returns true if the string is non-empty and only ASCII letters and digits.
pub fn is_valid_password(password: &str) -> bool {
    !password.is_empty() && password.chars().all(|c| c.is_ascii_alphanumeric())
}
