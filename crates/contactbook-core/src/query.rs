//! Linear search over an in-memory collection
//!
//! Pure and read-only; callers pass the already-loaded contacts.

use contactbook_model::{Contact, ContactId, Field};

/// Contacts whose `field` contains `needle`, ignoring case
///
/// Collection order is preserved. An empty needle matches every contact.
#[must_use]
pub fn filter<'a>(contacts: &'a [Contact], field: Field, needle: &str) -> Vec<&'a Contact> {
    let needle = needle.to_lowercase();
    contacts
        .iter()
        .filter(|c| c.get(field).to_lowercase().contains(&needle))
        .collect()
}

/// Contacts whose id equals `id`, ignoring case
///
/// Exact match only; a prefix of an id finds nothing.
#[must_use]
pub fn find_by_id<'a>(contacts: &'a [Contact], id: &ContactId) -> Vec<&'a Contact> {
    contacts.iter().filter(|c| c.id().matches(id)).collect()
}

/// Position of the only contact with this id
///
/// `Err(count)` when zero or several contacts match.
pub(crate) fn position_of_unique(contacts: &[Contact], id: &ContactId) -> Result<usize, usize> {
    let mut hits = contacts
        .iter()
        .enumerate()
        .filter(|(_, c)| c.id().matches(id))
        .map(|(i, _)| i);
    match (hits.next(), hits.next()) {
        (Some(index), None) => Ok(index),
        (None, _) => Err(0),
        (Some(_), Some(_)) => Err(2 + hits.count()),
    }
}
