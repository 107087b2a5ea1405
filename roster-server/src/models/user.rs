//! User field validation
//!
//! Structural checks only. Length caps match the column widths in the
//! users table (VARCHAR(100)); anything longer would be rejected by
//! the database anyway, so catch it before a round-trip.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;

/// Maximum length for the name and email columns
const MAX_FIELD_LEN: usize = 100;

/// Structural email shape: local@domain with a dotted domain, no whitespace.
/// Deliverability is not our problem; this only filters obvious junk.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email regex"));

/// Validated user display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    /// Create a new user name.
    ///
    /// # Rules
    /// - Non-empty
    /// - Max 100 characters
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        if s.len() > MAX_FIELD_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_FIELD_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated email address (syntactic shape only)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new email address, validating its shape.
    ///
    /// # Rules
    /// - Non-empty
    /// - Max 100 characters
    /// - Matches `local@domain.tld` with no whitespace
    ///
    /// # Example
    /// ```
    /// use roster_server::models::Email;
    ///
    /// assert!(Email::new("ada@example.com").is_ok());
    /// assert!(Email::new("not-an-email").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }

        if s.len() > MAX_FIELD_LEN {
            return Err(ValidationError::TooLong {
                field: "email",
                max: MAX_FIELD_LEN,
            });
        }

        if !EMAIL_RE.is_match(s) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "must look like local@domain.tld",
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the email as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
