use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

// Deliberately loose: something@something.something anywhere in the input.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && EMAIL_PATTERN.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingName,
    InvalidEmail,
    MissingMessage,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ValidationError::MissingName => "Please enter your name",
            ValidationError::InvalidEmail => "Please enter a valid email address",
            ValidationError::MissingMessage => "Please enter a message",
        };
        f.write_str(text)
    }
}

pub fn require_email(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

pub fn require_text(value: &str, missing: ValidationError) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(missing)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_loose_addresses() {
        assert!(is_valid_email("new@user.com"));
        assert!(is_valid_email("a@b.c"));
        // Substring match, surrounding text is tolerated.
        assert!(is_valid_email("  contact me at a@b.co please"));
    }

    #[test]
    fn rejects_non_addresses() {
        for input in ["", "not-an-email", "user@", "@user.com", "user@host", "a @b.c", "a@b."] {
            assert!(!is_valid_email(input), "{input:?} should be rejected");
        }
    }

    #[test]
    fn whitespace_only_text_is_missing() {
        assert_eq!(
            require_text(" \n\t", ValidationError::MissingName),
            Err(ValidationError::MissingName)
        );
        assert_eq!(require_text(" Ada ", ValidationError::MissingName), Ok(()));
    }

    #[test]
    fn messages() {
        assert_eq!(ValidationError::MissingName.to_string(), "Please enter your name");
        assert_eq!(ValidationError::InvalidEmail.to_string(), "Please enter a valid email address");
        assert_eq!(ValidationError::MissingMessage.to_string(), "Please enter a message");
    }
}
