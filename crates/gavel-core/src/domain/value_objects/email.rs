//! Email value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use validator::ValidateEmail;

/// Error type for email validation.
#[derive(Debug, Error)]
#[error("Invalid email address: {0}")]
pub struct EmailError(String);

/// Email address, trimmed and lowercased at the boundary.
///
/// Equality and persistence therefore operate on the normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Creates a new `Email` after validating the format.
    pub fn new(email: impl Into<String>) -> Result<Self, EmailError> {
        let email = email.into().trim().to_lowercase();

        if !email.validate_email() {
            return Err(EmailError(email));
        }

        Ok(Self(email))
    }

    /// Creates an `Email` without validation.
    ///
    /// For data coming back from the database, where the address was
    /// already validated on the way in.
    #[must_use]
    pub fn new_unchecked(email: impl Into<String>) -> Self {
        Self(email.into().trim().to_lowercase())
    }

    /// Returns the email as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        let email = Email::new("owner@auctions.example").unwrap();
        assert_eq!(email.as_str(), "owner@auctions.example");
    }

    #[test]
    fn test_email_normalization() {
        let email = Email::new("  Owner@Auctions.EXAMPLE  ").unwrap();
        assert_eq!(email.as_str(), "owner@auctions.example");
    }

    #[test]
    fn test_invalid_email() {
        assert!(Email::new("not-an-address").is_err());
        assert!(Email::new("@auctions.example").is_err());
        assert!(Email::new("owner@").is_err());
    }

    #[test]
    fn test_email_equality_ignores_case() {
        let a = Email::new("owner@auctions.example").unwrap();
        let b = Email::new("OWNER@AUCTIONS.EXAMPLE").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_email_new_unchecked_still_normalizes() {
        let email = Email::new_unchecked("  SELLER@MARKET.EXAMPLE ");
        assert_eq!(email.as_str(), "seller@market.example");
    }

    #[test]
    fn test_email_serde_roundtrip() {
        let email = Email::new("owner@auctions.example").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"owner@auctions.example\"");
        let parsed: Email = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, email);
    }

    #[test]
    fn test_email_deserialization_rejects_invalid() {
        assert!(serde_json::from_str::<Email>("\"nope\"").is_err());
    }

    #[test]
    fn test_email_error_display() {
        let err = Email::new("nope").unwrap_err();
        assert!(err.to_string().contains("Invalid email address"));
    }
}
