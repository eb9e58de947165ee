//! One handler per command.
//!
//! Handlers receive the whole input line, command word included, and
//! return the reply text. Input problems are returned as `CommandError`
//! and translated by the session.

use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};

/// Split `line` on whitespace, requiring exactly `expected` tokens.
fn tokens(line: &str, expected: usize) -> CommandResult<Vec<&str>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != expected {
        return Err(CommandError::ArgumentCount {
            expected,
            actual: tokens.len(),
        });
    }
    Ok(tokens)
}

pub(super) fn hello() -> CommandResult<String> {
    Ok("How can I help you?".to_string())
}

/// `add <name> <phone>`: store a new record, replacing any existing one.
pub(super) fn add(book: &mut AddressBook, line: &str) -> CommandResult<String> {
    let args = tokens(line, 3)?;
    let (name, phone) = (args[1], args[2]);

    let mut record = Record::new(name, None, None)?;
    record.add_phone(phone)?;
    book.add_record(record);

    Ok(format!("Contact {} with phone {} has been added.", name, phone))
}

/// `change <name> <phone>`: replace the contact's first phone.
pub(super) fn change(book: &mut AddressBook, line: &str) -> CommandResult<String> {
    let args = tokens(line, 3)?;
    let (name, phone) = (args[1], args[2]);

    let Some(record) = book.get_mut(name) else {
        return Ok(format!("Contact with name {} not found.", name));
    };

    let first = record
        .phones()
        .first()
        .map(|p| p.as_str().to_string())
        .ok_or_else(|| CommandError::MissingPhone(name.to_string()))?;
    record.edit_phone(&first, phone)?;

    Ok(format!("Phone number for contact {} changed.", name))
}

/// `phone <name>`: show the contact's full record.
pub(super) fn phone(book: &AddressBook, line: &str) -> CommandResult<String> {
    let args = tokens(line, 2)?;
    let name = args[1];

    Ok(match book.get(name) {
        Some(record) => format!("Phone number for contact {} is {}.", name, record),
        None => format!("Contact with name {} is not defined.", name),
    })
}

/// `birthday <name> <dd.mm.yyyy>`: set the contact's birthday.
pub(super) fn birthday(book: &mut AddressBook, line: &str) -> CommandResult<String> {
    let args = tokens(line, 3)?;
    let (name, date) = (args[1], args[2]);

    let record = book
        .get_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;
    record.set_birthday(Some(date))?;

    Ok(format!("Birthday for contact {} set to {}.", name, date))
}

/// `days <name>`: days until the contact's next birthday.
pub(super) fn days(book: &AddressBook, line: &str) -> CommandResult<String> {
    let args = tokens(line, 2)?;
    let name = args[1];

    let record = book
        .get(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;

    Ok(match record.days_to_birthday() {
        Some(0) => format!("Today is {}'s birthday!", name),
        Some(days) => format!("{} days until {}'s birthday.", days, name),
        None => format!("Contact {} has no birthday set.", name),
    })
}

/// `show all`: every record, one per line.
pub(super) fn show_all(book: &AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("You have no contacts.".to_string());
    }
    Ok(book.records().map(|record| format!("{}\n", record)).collect())
}

pub(super) fn exit() -> CommandResult<String> {
    Ok("Goodbye!".to_string())
}
