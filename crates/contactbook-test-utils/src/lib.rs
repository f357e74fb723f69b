//! Testing utilities for the contactbook workspace
//!
//! Shared fixtures for contacts, collections and temporary stores.

#![allow(missing_docs)]

use contactbook_model::{Contact, ContactFields, Field};
use contactbook_store::{ContactStore, JsonFileStore, MemoryStore};
use tempfile::TempDir;

pub fn fields(name: &str, lastname: &str, phone: &str) -> ContactFields {
    ContactFields::new()
        .with(Field::Name, name)
        .with(Field::Lastname, lastname)
        .with(Field::Phone, phone)
        .with(
            Field::Email,
            format!("{}.{}@example.com", name.to_lowercase(), lastname.to_lowercase()),
        )
}

pub fn contact(name: &str, lastname: &str, phone: &str) -> Contact {
    Contact::create(fields(name, lastname, phone))
}

/// A filled-in contact: John Doe, id `86317603`
pub fn john_doe() -> Contact {
    Contact::create(
        fields("John", "Doe", "555-1234")
            .with(Field::Birth, "1980-01-01")
            .with(Field::Occupation, "Engineer")
            .with(Field::City, "Springfield")
            .with(Field::Country, "USA"),
    )
}

/// Four contacts with distinct ids, in insertion order
pub fn sample_collection() -> Vec<Contact> {
    vec![
        john_doe(),
        contact("Ana", "Silva", "+351 21 000 0000"),
        contact("Ada", "Lovelace", "+44 20 7946 0000"),
        contact("Jane", "Doe", "555-9876"),
    ]
}

/// Two records sharing one derived id
pub fn colliding_pair() -> Vec<Contact> {
    vec![contact("Sam", "Lee", "123"), contact("Sam", "Lee", "123")]
}

pub fn memory_store() -> MemoryStore {
    MemoryStore::with_contacts(sample_collection())
}

/// File-backed store seeded with `contacts`; keep the `TempDir` alive
pub fn temp_json_store(contacts: &[Contact]) -> (TempDir, JsonFileStore) {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("contacts.json"));
    store.save(contacts).unwrap();
    (dir, store)
}
