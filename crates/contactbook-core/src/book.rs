//! Contact book over a storage handle
//!
//! Every operation loads the whole collection, works on it in memory and,
//! for mutations, saves the whole collection back before returning.

use crate::error::BookError;
use crate::{mutation, query};
use contactbook_model::{Contact, ContactFields, ContactId, ContactPatch, Field};
use contactbook_store::ContactStore;

/// Contact book bound to one store
#[derive(Debug)]
pub struct ContactBook<S> {
    store: S,
}

impl<S: ContactStore> ContactBook<S> {
    /// Create book over a store
    #[inline]
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Release the underlying store
    #[inline]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Every contact, in stored order
    ///
    /// # Errors
    /// Returns error if the store cannot be loaded
    pub fn all(&self) -> Result<Vec<Contact>, BookError> {
        Ok(self.store.load()?)
    }

    /// Contacts whose `field` contains `needle`, ignoring case
    ///
    /// # Errors
    /// Returns error if the store cannot be loaded
    pub fn search(&self, field: Field, needle: &str) -> Result<Vec<Contact>, BookError> {
        let contacts = self.store.load()?;
        let hits: Vec<Contact> = query::filter(&contacts, field, needle)
            .into_iter()
            .cloned()
            .collect();
        tracing::debug!(%field, needle, hits = hits.len(), "search");
        Ok(hits)
    }

    /// Contacts whose id equals `id`, ignoring case
    ///
    /// # Errors
    /// Returns error if the store cannot be loaded
    pub fn find_by_id(&self, id: &ContactId) -> Result<Vec<Contact>, BookError> {
        let contacts = self.store.load()?;
        Ok(query::find_by_id(&contacts, id).into_iter().cloned().collect())
    }

    /// The single contact with this id
    ///
    /// # Errors
    /// - `BookError::NotFound` / `BookError::Ambiguous` unless exactly one matches
    /// - `BookError::Storage` if the store cannot be loaded
    pub fn get(&self, id: &ContactId) -> Result<Contact, BookError> {
        let mut hits = self.find_by_id(id)?;
        match hits.len() {
            1 => Ok(hits.remove(0)),
            0 => Err(BookError::NotFound { id: id.clone() }),
            count => Err(BookError::Ambiguous {
                id: id.clone(),
                count,
            }),
        }
    }

    /// Create a contact from `fields`, append it and persist
    ///
    /// # Errors
    /// Returns error if the store cannot be loaded or saved
    pub fn add(&mut self, fields: ContactFields) -> Result<Contact, BookError> {
        let mut contacts = self.store.load()?;
        let added = mutation::add(&mut contacts, fields).clone();
        self.store.save(&contacts)?;
        tracing::info!(id = %added.id(), total = contacts.len(), "contact added");
        Ok(added)
    }

    /// Apply `patch` to the single contact with this id and persist
    ///
    /// An empty patch still persists.
    ///
    /// # Errors
    /// - `BookError::NotFound` / `BookError::Ambiguous` unless exactly one
    ///   contact matches; nothing is saved
    /// - `BookError::Storage` if the store cannot be loaded or saved
    pub fn edit(&mut self, id: &ContactId, patch: &ContactPatch) -> Result<Contact, BookError> {
        let mut contacts = self.store.load()?;
        let edited = mutation::edit(&mut contacts, id, patch)?.clone();
        self.store.save(&contacts)?;
        tracing::info!(id = %edited.id(), unchanged = patch.is_empty(), "contact updated");
        Ok(edited)
    }

    /// Remove the first contact with this id and persist
    ///
    /// # Errors
    /// - `BookError::NotFound` if no contact matches; nothing is saved
    /// - `BookError::Storage` if the store cannot be loaded or saved
    pub fn delete(&mut self, id: &ContactId) -> Result<Contact, BookError> {
        let mut contacts = self.store.load()?;
        let removed = mutation::delete(&mut contacts, id)?;
        self.store.save(&contacts)?;
        tracing::info!(id = %removed.id(), total = contacts.len(), "contact deleted");
        Ok(removed)
    }
}
