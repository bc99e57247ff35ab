use std::sync::LazyLock;

use regex::Regex;

use super::errors::EmailError;

const MIN_LENGTH: usize = 4;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Validate the syntax of an email address.
///
/// # Errors
/// * `TooShort` - Fewer than 4 bytes
/// * `MissingAt` - No `@` anywhere
/// * `MisplacedAt` - `@` is the first or last character
/// * `InvalidFormat` - Does not look like `local@domain.tld`
pub fn validate(email: &str) -> Result<(), EmailError> {
    if email.len() < MIN_LENGTH {
        return Err(EmailError::TooShort { min: MIN_LENGTH });
    }

    if !email.contains('@') {
        return Err(EmailError::MissingAt);
    }

    if email.starts_with('@') || email.ends_with('@') {
        return Err(EmailError::MisplacedAt);
    }

    if !EMAIL_PATTERN.is_match(email) {
        return Err(EmailError::InvalidFormat);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_minimal_address() {
        assert_eq!(validate("a@b.co"), Ok(()));
        assert_eq!(validate("first.last+tag@mail.example.org"), Ok(()));
    }

    #[test]
    fn test_rejects_empty_and_short() {
        assert_eq!(validate(""), Err(EmailError::TooShort { min: 4 }));
        assert_eq!(validate("abc"), Err(EmailError::TooShort { min: 4 }));
        assert_eq!(validate("a@"), Err(EmailError::TooShort { min: 4 }));
    }

    #[test]
    fn test_rejects_missing_at() {
        assert_eq!(validate("abcdef.com"), Err(EmailError::MissingAt));
    }

    #[test]
    fn test_rejects_leading_or_trailing_at() {
        assert_eq!(validate("@b.co"), Err(EmailError::MisplacedAt));
        assert_eq!(validate("abcd@"), Err(EmailError::MisplacedAt));
    }

    #[test]
    fn test_rejects_bad_format() {
        assert_eq!(validate("a@b.c"), Err(EmailError::InvalidFormat));
        assert_eq!(validate("a b@c.com"), Err(EmailError::InvalidFormat));
        assert_eq!(validate("a@b@c.com"), Err(EmailError::InvalidFormat));
        assert_eq!(validate("a@bcom"), Err(EmailError::InvalidFormat));
    }
}
