//! Domain value objects.
//!
//! Every field a contact carries is wrapped in a type that validates on
//! construction. There are no setters: changing a value means building a
//! new, validated instance, so an invalid field can never be held.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
