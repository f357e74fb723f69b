//! Contact book data model
//!
//! Records, derived identifiers and partial updates.
//!
//! # Core Concepts
//!
//! - [`Contact`]: a stored record (eight text fields plus a derived id)
//! - [`ContactId`]: first 8 hex chars of `SHA-256("<lastname> <name> <phone>")`
//! - [`ContactFields`]: user-entered fields for a new contact
//! - [`ContactPatch`]: per-field replacements for an edit, blank = keep
//! - [`Field`]: field names, with the editable and searchable subsets
//!
//! # Example
//!
//! ```rust
//! use contactbook_model::{Contact, ContactFields, ContactPatch, Field};
//!
//! let fields = ContactFields::new()
//!     .with(Field::Name, "John")
//!     .with(Field::Lastname, "Doe")
//!     .with(Field::Phone, "555-1234");
//! let mut contact = Contact::create(fields);
//! assert_eq!(contact.id().as_str(), "86317603");
//!
//! ContactPatch::new().with(Field::Phone, "555-0000").apply_to(&mut contact);
//! assert_eq!(contact.id().as_str(), "86317603");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod contact;
mod field;
mod id;
mod patch;

pub use contact::{Contact, ContactFields};
pub use field::{Field, FieldError};
pub use id::{ContactId, IdError, ID_LEN};
pub use patch::ContactPatch;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
