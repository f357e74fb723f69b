//! In-memory store for tests and dry runs

use crate::error::StorageError;
use crate::store::ContactStore;
use contactbook_model::Contact;

/// Contact store held in memory
///
/// Counts saves so callers can check that an operation persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    contacts: Vec<Contact>,
    saves: usize,
}

impl MemoryStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create store seeded with a collection
    #[inline]
    #[must_use]
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts, saves: 0 }
    }

    /// Currently stored collection
    #[inline]
    #[must_use]
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Number of completed saves
    #[inline]
    #[must_use]
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl ContactStore for MemoryStore {
    fn load(&self) -> Result<Vec<Contact>, StorageError> {
        Ok(self.contacts.clone())
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<(), StorageError> {
        self.contacts = contacts.to_vec();
        self.saves += 1;
        Ok(())
    }
}
