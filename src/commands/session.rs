use super::{handlers, Command, UNKNOWN_COMMAND};
use crate::error::{CommandResult, Outcome};
use crate::models::AddressBook;
use crate::repositories::AddressBookRepository;

/// The reply to one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Text to print.
    pub text: String,
    /// Whether the session is over after printing.
    pub exit: bool,
}

impl Response {
    fn reply(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit: false,
        }
    }
}

/// One interactive session over an address book.
///
/// The session owns the book for its lifetime. When a repository is
/// attached, the book is written to it as the session ends.
pub struct Session {
    book: AddressBook,
    repository: Option<Box<dyn AddressBookRepository>>,
}

impl Session {
    pub fn new(book: AddressBook) -> Self {
        Self {
            book,
            repository: None,
        }
    }

    /// Save the book to `repository` when the session exits.
    pub fn with_autosave(mut self, repository: Box<dyn AddressBookRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn into_book(self) -> AddressBook {
        self.book
    }

    /// Handle one input line.
    ///
    /// Input errors become replies. Only failures unrelated to the input,
    /// such as the data file not being writable on exit, are returned as
    /// `Err`.
    pub fn execute(&mut self, line: &str) -> CommandResult<Response> {
        let Some(command) = Command::match_input(line) else {
            tracing::debug!(input = %line, "No command matched");
            return Ok(Response::reply(UNKNOWN_COMMAND));
        };

        tracing::debug!(%command, "Dispatching command");
        let text = translate(self.dispatch(command, line))?;

        Ok(Response {
            text,
            exit: command == Command::Exit,
        })
    }

    /// Write the book to the attached repository, if any.
    pub fn save(&self) -> CommandResult<()> {
        if let Some(repository) = &self.repository {
            self.book.save_to(repository.as_ref())?;
        }
        Ok(())
    }

    fn dispatch(&mut self, command: Command, line: &str) -> CommandResult<String> {
        match command {
            Command::Hello => handlers::hello(),
            Command::Add => handlers::add(&mut self.book, line),
            Command::Change => handlers::change(&mut self.book, line),
            Command::Phone => handlers::phone(&self.book, line),
            Command::Birthday => handlers::birthday(&mut self.book, line),
            Command::Days => handlers::days(&self.book, line),
            Command::ShowAll => handlers::show_all(&self.book),
            Command::Exit => {
                self.save()?;
                handlers::exit()
            }
        }
    }
}

/// Turn input errors into their fixed replies; pass anything else on.
fn translate(result: CommandResult<String>) -> CommandResult<String> {
    match result {
        Ok(text) => Ok(text),
        Err(err) => {
            tracing::debug!(error = %err, "Command failed");
            match err.user_message() {
                Outcome::Reply(text) => Ok(text.to_string()),
                Outcome::Fatal(err) => {
                    tracing::error!(error = %err, "Command failed fatally");
                    Err(err)
                }
            }
        }
    }
}
