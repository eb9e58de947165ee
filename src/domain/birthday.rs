//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Text format accepted for birthdays and used when rendering them.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

static DATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("Failed to compile date regex"));

/// An optional birthday.
///
/// An unset birthday is a valid state. A set birthday is always a real
/// calendar date that was not in the future when it was assigned.
///
/// Operations that depend on the current date have an `_on` variant taking
/// the reference date explicitly.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new(Some("15.06.1990")).unwrap();
/// assert_eq!(birthday.to_string(), "Birthday: 15.06.1990");
/// assert!(!Birthday::unset().is_set());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Birthday(Option<NaiveDate>);

impl Birthday {
    /// A birthday with no date.
    pub fn unset() -> Self {
        Self(None)
    }

    /// Create a Birthday, validating against today's local date.
    ///
    /// `None` produces an unset birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDateFormat` if the value is not a
    /// `dd.mm.yyyy` calendar date, and `ValidationError::FutureBirthday` if
    /// it is later than today.
    pub fn new(value: Option<&str>) -> Result<Self, ValidationError> {
        Self::new_on(value, today())
    }

    /// Create a Birthday, validating against the given reference date.
    pub fn new_on(value: Option<&str>, today: NaiveDate) -> Result<Self, ValidationError> {
        let Some(value) = value else {
            return Ok(Self::unset());
        };

        if !DATE_REGEX.is_match(value) {
            return Err(ValidationError::InvalidDateFormat(value.to_string()));
        }

        let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDateFormat(value.to_string()))?;

        if date > today {
            return Err(ValidationError::FutureBirthday(value.to_string()));
        }

        Ok(Self(Some(date)))
    }

    /// The stored date, if any.
    pub fn date(&self) -> Option<NaiveDate> {
        self.0
    }

    /// Whether a date is set.
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Days until the next birthday, counted from today's local date.
    ///
    /// Returns `None` when no date is set and `Some(0)` when the birthday is
    /// today.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_on(today())
    }

    /// Days until the next birthday on or after `today`.
    ///
    /// A 29 February birthday is celebrated on 28 February in non-leap years.
    pub fn days_to_birthday_on(&self, today: NaiveDate) -> Option<i64> {
        let date = self.0?;

        let mut next = occurrence_in(date, today.year());
        if next < today {
            next = occurrence_in(date, today.year() + 1);
        }

        Some((next - today).num_days())
    }

    /// Render the date as `dd.mm.yyyy`, if set.
    pub fn formatted(&self) -> Option<String> {
        self.0.map(|date| date.format(DATE_FORMAT).to_string())
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The birthday's month/day in `year`.
fn occurrence_in(date: NaiveDate, year: i32) -> NaiveDate {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or(date)
}

// Serde support - serialize as an optional dd.mm.yyyy string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.formatted().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Birthday::new(s.as_deref()).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatted() {
            Some(date) => write!(f, "Birthday: {}", date),
            None => write!(f, "Birthday: not set"),
        }
    }
}
