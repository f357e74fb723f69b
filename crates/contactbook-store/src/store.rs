//! Storage gateway trait

use crate::error::StorageError;
use contactbook_model::Contact;

/// Whole-collection storage for contacts
///
/// There is no partial access: every operation reads or replaces the entire
/// ordered collection.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait ContactStore {
    /// Read the full collection
    ///
    /// # Errors
    /// Returns error if the store is missing or cannot be parsed
    fn load(&self) -> Result<Vec<Contact>, StorageError>;

    /// Replace the stored collection with `contacts`
    ///
    /// # Errors
    /// Returns error if the collection cannot be encoded or written
    fn save(&mut self, contacts: &[Contact]) -> Result<(), StorageError>;
}

impl<S: ContactStore + ?Sized> ContactStore for &mut S {
    fn load(&self) -> Result<Vec<Contact>, StorageError> {
        (**self).load()
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<(), StorageError> {
        (**self).save(contacts)
    }
}

impl<S: ContactStore + ?Sized> ContactStore for Box<S> {
    fn load(&self) -> Result<Vec<Contact>, StorageError> {
        (**self).load()
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<(), StorageError> {
        (**self).save(contacts)
    }
}
