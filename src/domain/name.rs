//! Name value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The name a contact is stored under.
///
/// Names are validated at construction time and cannot be empty. The value
/// is kept verbatim, so `"John"` and `"john"` are different contacts.
///
/// # Example
///
/// ```
/// use contact_book::domain::Name;
///
/// let name = Name::new("john").unwrap();
/// assert_eq!(name.as_str(), "john");
/// assert_eq!(name.to_string(), "Name: john");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name, validating that it's not blank.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the value is empty or only
    /// whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}", self.0)
    }
}
