//! In-memory mutations
//!
//! Each function changes the collection in place and never touches storage;
//! [`ContactBook`](crate::ContactBook) wraps them with load and save.

use crate::error::BookError;
use crate::query::position_of_unique;
use contactbook_model::{Contact, ContactFields, ContactId, ContactPatch};

/// Derive an id for `fields` and append the new contact
///
/// Duplicate ids are not rejected.
pub fn add(contacts: &mut Vec<Contact>, fields: ContactFields) -> &Contact {
    let contact = Contact::create(fields);
    if contacts.iter().any(|c| c.id().matches(contact.id())) {
        tracing::warn!(id = %contact.id(), "derived id already in use");
    }
    contacts.push(contact);
    &contacts[contacts.len() - 1]
}

/// Apply `patch` to the single contact whose id matches
///
/// # Errors
/// - `BookError::NotFound` if no contact has the id
/// - `BookError::Ambiguous` if more than one does
///
/// The collection is untouched on error.
pub fn edit<'a>(
    contacts: &'a mut [Contact],
    id: &ContactId,
    patch: &ContactPatch,
) -> Result<&'a Contact, BookError> {
    let index = position_of_unique(contacts, id).map_err(|count| lookup_error(id, count))?;
    let contact = &mut contacts[index];
    patch.apply_to(contact);
    Ok(contact)
}

/// Remove the first contact whose id matches
///
/// # Errors
/// Returns `BookError::NotFound` if no contact has the id; the collection is
/// untouched.
pub fn delete(contacts: &mut Vec<Contact>, id: &ContactId) -> Result<Contact, BookError> {
    let index = contacts
        .iter()
        .position(|c| c.id().matches(id))
        .ok_or_else(|| BookError::NotFound { id: id.clone() })?;
    Ok(contacts.remove(index))
}

fn lookup_error(id: &ContactId, count: usize) -> BookError {
    if count == 0 {
        BookError::NotFound { id: id.clone() }
    } else {
        BookError::Ambiguous {
            id: id.clone(),
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contactbook_model::Field;

    fn fields(name: &str, lastname: &str, phone: &str) -> ContactFields {
        ContactFields::new()
            .with(Field::Name, name)
            .with(Field::Lastname, lastname)
            .with(Field::Phone, phone)
    }

    #[test]
    fn add_appends_with_derived_id() {
        let mut contacts = vec![Contact::create(fields("Ana", "Silva", "1"))];
        let added = add(&mut contacts, fields("John", "Doe", "555-1234")).clone();
        assert_eq!(added.id().as_str(), "86317603");
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[1], added);
    }

    #[test]
    fn add_allows_duplicate_ids() {
        let mut contacts = Vec::new();
        add(&mut contacts, fields("Sam", "Lee", "1"));
        add(&mut contacts, fields("Sam", "Lee", "1"));
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].id(), contacts[1].id());
    }

    #[test]
    fn edit_overwrites_fields_but_keeps_id() {
        let mut contacts = vec![Contact::create(fields("John", "Doe", "555-1234"))];
        let id = contacts[0].id().clone();
        let patch = ContactPatch::new()
            .with(Field::Name, "Johnny")
            .with(Field::Phone, "555-0000");

        let edited = edit(&mut contacts, &id, &patch).unwrap();
        assert_eq!(edited.get(Field::Name), "Johnny");
        assert_eq!(edited.get(Field::Phone), "555-0000");
        assert_eq!(edited.id(), &id);
    }

    #[test]
    fn edit_rejects_ambiguous_id() {
        let mut contacts = vec![
            Contact::create(fields("Sam", "Lee", "1")),
            Contact::create(fields("Sam", "Lee", "1")),
        ];
        let before = contacts.clone();
        let id = contacts[0].id().clone();

        let err = edit(&mut contacts, &id, &ContactPatch::new().with(Field::City, "X")).unwrap_err();
        assert!(matches!(err, BookError::Ambiguous { count: 2, .. }));
        assert_eq!(contacts, before);
    }

    #[test]
    fn delete_removes_first_match_only() {
        let mut contacts = vec![
            Contact::create(fields("Sam", "Lee", "1")),
            Contact::create(fields("Ana", "Silva", "2")),
            Contact::create(fields("Sam", "Lee", "1")),
        ];
        let id = contacts[0].id().clone();

        let removed = delete(&mut contacts, &id).unwrap();
        assert_eq!(removed.get(Field::Name), "Sam");
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].get(Field::Name), "Ana");
        assert_eq!(contacts[1].get(Field::Name), "Sam");
    }

    #[test]
    fn delete_missing_id_reports_not_found() {
        let mut contacts = vec![Contact::create(fields("Ana", "Silva", "2"))];
        let before = contacts.clone();
        let err = delete(&mut contacts, &ContactId::from_stored("00000000")).unwrap_err();
        assert!(matches!(err, BookError::NotFound { .. }));
        assert_eq!(contacts, before);
    }
}
