//! Command layer.
//!
//! A raw input line is matched against an ordered keyword table, the
//! selected handler runs against the session's address book, and any input
//! error is translated into a fixed reply.

mod handlers;
mod session;

pub use session::{Response, Session};

use std::fmt;

/// Reply for input that matches no command keyword.
pub const UNKNOWN_COMMAND: &str = "Unknown command, try again.";

/// A command the session understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    Birthday,
    Days,
    ShowAll,
    Exit,
}

/// Keywords in match order. The first keyword that prefixes the lowered
/// input wins, so a keyword must not be a prefix of a later one.
pub const COMMANDS: [(&str, Command); 8] = [
    ("hello", Command::Hello),
    ("add", Command::Add),
    ("change", Command::Change),
    ("phone", Command::Phone),
    ("birthday", Command::Birthday),
    ("days", Command::Days),
    ("show all", Command::ShowAll),
    ("exit", Command::Exit),
];

impl Command {
    /// Select the command for an input line.
    ///
    /// Matching is case-insensitive and by prefix: `"ADD john 1234567890"`
    /// selects [`Command::Add`], and so does `"address"`.
    pub fn match_input(input: &str) -> Option<Command> {
        let lowered = input.to_lowercase();
        COMMANDS
            .iter()
            .find(|(keyword, _)| lowered.starts_with(*keyword))
            .map(|(_, command)| *command)
    }

    pub fn keyword(&self) -> &'static str {
        COMMANDS
            .iter()
            .find(|(_, command)| command == self)
            .map(|(keyword, _)| *keyword)
            .unwrap_or_default()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
