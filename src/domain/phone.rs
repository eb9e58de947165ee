//! Phone value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Optional leading `+`, then 9 to 15 digits and nothing else.
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?\d{9,15}$").expect("Failed to compile phone regex"));

/// A validated phone number.
///
/// Phones are compared by exact string value, which is how a record finds
/// the entry to remove or edit.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::new("+380501234567").unwrap();
/// assert_eq!(phone.as_str(), "+380501234567");
/// assert!(Phone::new("12-34").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - May start with a single `+`
    /// - Followed by 9 to 15 ASCII digits
    /// - No spaces, dashes or other formatting characters
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    fn is_valid(phone: &str) -> bool {
        PHONE_REGEX.is_match(phone)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Phone {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phone: {}", self.0)
    }
}
