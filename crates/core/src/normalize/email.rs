use std::sync::LazyLock;

use regex::Regex;

use super::NormalizeError;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Trims and lowercases an email address, rejecting anything that does not
/// look like `local@domain.tld`.
pub fn normalize_email(input: &str) -> Result<String, NormalizeError> {
    let email = input.trim().to_lowercase();
    if EMAIL_PATTERN.is_match(&email) {
        Ok(email)
    } else {
        Err(NormalizeError::InvalidEmail(input.to_string()))
    }
}
