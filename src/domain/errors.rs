//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty.
    EmptyName,

    /// The provided phone number does not match the accepted format.
    InvalidPhone(String),

    /// The provided birthday is not a `dd.mm.yyyy` calendar date.
    InvalidDateFormat(String),

    /// The provided birthday lies after the current date.
    FutureBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name can not be empty"),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::InvalidDateFormat(date) => write!(
                f,
                "Invalid date format: {}. Please use dd.mm.yyyy format.",
                date
            ),
            Self::FutureBirthday(date) => write!(
                f,
                "Invalid date: {}. Birthday date can not be in the future.",
                date
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
