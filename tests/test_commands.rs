//! Command routing and handler behaviour through a full session.

use contact_book::{AddressBook, Command, Record, Session};

fn run(session: &mut Session, line: &str) -> String {
    session.execute(line).unwrap().text
}

fn phones_of(session: &Session, name: &str) -> Vec<String> {
    session
        .book()
        .get(name)
        .unwrap()
        .phones()
        .iter()
        .map(|p| p.as_str().to_string())
        .collect()
}

#[test]
fn test_hello_ignores_arguments() {
    let mut session = Session::new(AddressBook::new());
    assert_eq!(run(&mut session, "hello"), "How can I help you?");
    assert_eq!(run(&mut session, "HELLO anyone there"), "How can I help you?");
}

#[test]
fn test_add_is_case_insensitive() {
    let mut session = Session::new(AddressBook::new());
    assert_eq!(Command::match_input("ADD john 1234567890"), Some(Command::Add));

    let reply = run(&mut session, "ADD john 1234567890");
    assert_eq!(reply, "Contact john with phone 1234567890 has been added.");
    assert_eq!(phones_of(&session, "john"), vec!["1234567890"]);
}

#[test]
fn test_add_overwrites_without_merge() {
    let mut session = Session::new(AddressBook::new());
    run(&mut session, "add john 1234567890");
    run(&mut session, "add john 9999999999");

    assert_eq!(session.book().len(), 1);
    assert_eq!(
        run(&mut session, "phone john"),
        "Phone number for contact john is Name: john, Phone: 9999999999."
    );
}

#[test]
fn test_add_wrong_token_count() {
    let mut session = Session::new(AddressBook::new());
    let expected = "Please enter both name and phone number, separated by a space.";
    assert_eq!(run(&mut session, "add"), expected);
    assert_eq!(run(&mut session, "add john"), expected);
    assert_eq!(run(&mut session, "add john 1234567890 extra"), expected);
    assert!(session.book().is_empty());
}

#[test]
fn test_add_invalid_phone() {
    let mut session = Session::new(AddressBook::new());
    assert_eq!(
        run(&mut session, "add john 12-34"),
        "Please enter a valid command."
    );
    assert!(session.book().is_empty());
}

#[test]
fn test_change_existing_contact() {
    let mut session = Session::new(AddressBook::new());
    run(&mut session, "add john 1234567890");

    assert_eq!(
        run(&mut session, "change john +380501234567"),
        "Phone number for contact john changed."
    );
    assert_eq!(phones_of(&session, "john"), vec!["+380501234567"]);
}

#[test]
fn test_change_missing_contact_leaves_book_unchanged() {
    let mut session = Session::new(AddressBook::new());
    assert_eq!(
        run(&mut session, "change nosuchname 123"),
        "Contact with name nosuchname not found."
    );
    assert!(session.book().is_empty());
    assert!(!session.book().contains("nosuchname"));
}

#[test]
fn test_change_invalid_phone_keeps_old_one() {
    let mut session = Session::new(AddressBook::new());
    run(&mut session, "add john 1234567890");

    assert_eq!(
        run(&mut session, "change john 123"),
        "Please enter a valid command."
    );
    assert_eq!(phones_of(&session, "john"), vec!["1234567890"]);
}

#[test]
fn test_change_contact_without_phones() {
    let book: AddressBook = std::iter::once(Record::new("john", None, None).unwrap()).collect();
    let mut session = Session::new(book);

    assert_eq!(
        run(&mut session, "change john 1234567890"),
        "Please enter both name and phone number, separated by a space."
    );
    assert!(phones_of(&session, "john").is_empty());
}

#[test]
fn test_phone_lookup() {
    let mut session = Session::new(AddressBook::new());
    run(&mut session, "add john 1234567890");

    assert_eq!(
        run(&mut session, "phone john"),
        "Phone number for contact john is Name: john, Phone: 1234567890."
    );
    assert_eq!(
        run(&mut session, "phone ann"),
        "Contact with name ann is not defined."
    );
    assert_eq!(
        run(&mut session, "phone"),
        "Please enter both name and phone number, separated by a space."
    );
}

#[test]
fn test_names_are_case_sensitive() {
    let mut session = Session::new(AddressBook::new());
    run(&mut session, "add John 1234567890");

    assert_eq!(
        run(&mut session, "phone john"),
        "Contact with name john is not defined."
    );
}

#[test]
fn test_birthday_commands() {
    let mut session = Session::new(AddressBook::new());
    run(&mut session, "add john 1234567890");

    assert_eq!(
        run(&mut session, "days john"),
        "Contact john has no birthday set."
    );
    assert_eq!(
        run(&mut session, "birthday john 15.06.1990"),
        "Birthday for contact john set to 15.06.1990."
    );
    assert!(run(&mut session, "phone john").ends_with("Birthday: 15.06.1990."));

    assert_eq!(
        run(&mut session, "birthday john 01.01.9999"),
        "Please enter a valid command."
    );
    assert_eq!(
        run(&mut session, "birthday ann 15.06.1990"),
        "Contact with that name not found."
    );
}

#[test]
fn test_show_all() {
    let mut session = Session::new(AddressBook::new());
    assert_eq!(run(&mut session, "show all"), "You have no contacts.");

    run(&mut session, "add john 1111111111");
    run(&mut session, "add ann 2222222222");
    run(&mut session, "add john 3333333333");

    assert_eq!(
        run(&mut session, "Show All"),
        "Name: john, Phone: 3333333333\nName: ann, Phone: 2222222222\n"
    );
}

#[test]
fn test_unknown_command_does_not_exit() {
    let mut session = Session::new(AddressBook::new());
    for line in ["", "show", "remove john", "   add john 1234567890"] {
        let response = session.execute(line).unwrap();
        assert_eq!(response.text, "Unknown command, try again.");
        assert!(!response.exit);
    }
    assert!(session.book().is_empty());
}

#[test]
fn test_exit() {
    let mut session = Session::new(AddressBook::new());
    let response = session.execute("Exit").unwrap();
    assert_eq!(response.text, "Goodbye!");
    assert!(response.exit);
}
