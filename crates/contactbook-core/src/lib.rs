//! Contact book core
//!
//! Search and mutation over a contact collection:
//! - Case-insensitive substring search on one field at a time
//! - Exact, case-insensitive id lookup
//! - Add (derive id, append), edit (partial overwrite, id kept), delete
//!   (first match)
//! - Every mutation loads and saves the whole collection through a
//!   [`ContactStore`](contactbook_store::ContactStore)
//!
//! # Example
//!
//! ```rust
//! use contactbook_core::ContactBook;
//! use contactbook_model::{ContactFields, ContactPatch, Field};
//! use contactbook_store::MemoryStore;
//!
//! # fn main() -> Result<(), contactbook_core::BookError> {
//! let mut book = ContactBook::new(MemoryStore::new());
//! let john = book.add(
//!     ContactFields::new()
//!         .with(Field::Name, "John")
//!         .with(Field::Lastname, "Doe")
//!         .with(Field::Phone, "555-1234"),
//! )?;
//!
//! book.edit(john.id(), &ContactPatch::new().with(Field::City, "Oslo"))?;
//! assert_eq!(book.search(Field::Lastname, "doe")?.len(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod book;
mod error;
pub mod mutation;
pub mod query;

pub use book::ContactBook;
pub use error::BookError;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
