//! Record model: everything stored about one contact.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact: a name, its phone numbers in insertion order, and an
/// optional birthday.
///
/// The name is fixed at construction. Phones are looked up by exact value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Birthday,
}

impl Record {
    /// Create a record, validating every provided field.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` raised by the name, the phone or
    /// the birthday.
    pub fn new(
        name: impl Into<String>,
        phone: Option<&str>,
        birthday: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let mut record = Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: Birthday::unset(),
        };
        if let Some(phone) = phone {
            record.add_phone(phone)?;
        }
        record.birthday = Birthday::new(birthday)?;
        Ok(record)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> &Birthday {
        &self.birthday
    }

    /// Validate and append a phone. Duplicates are kept.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// Returns `false` and leaves the list untouched when no phone matches.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        match self.position_of(phone) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the first phone equal to `old_phone` with `new_phone`.
    ///
    /// Returns `Ok(false)` when `old_phone` is not present. The replacement
    /// is only validated once a match is found; on error the list is
    /// unchanged.
    pub fn edit_phone(
        &mut self,
        old_phone: &str,
        new_phone: &str,
    ) -> Result<bool, ValidationError> {
        let Some(index) = self.position_of(old_phone) else {
            return Ok(false);
        };
        self.phones[index] = Phone::new(new_phone)?;
        Ok(true)
    }

    /// Replace the birthday with a newly validated one.
    pub fn set_birthday(&mut self, birthday: Option<&str>) -> Result<(), ValidationError> {
        self.birthday = Birthday::new(birthday)?;
        Ok(())
    }

    /// Days until this contact's next birthday, if one is set.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.birthday.days_to_birthday()
    }

    fn position_of(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}, {}", self.name, phones)?;
        if self.birthday.is_set() {
            write!(f, ", {}", self.birthday)?;
        }
        Ok(())
    }
}
