//! Partial updates
//!
//! A [`ContactPatch`] carries an optional replacement for each editable
//! field. Blank input means "keep the current value", so a patch can never
//! clear a field.

use crate::contact::{Contact, ContactFields};
use crate::field::Field;

/// Field-by-field replacement values for an edit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    values: [Option<String>; 8],
}

impl ContactPatch {
    /// Create a patch that changes nothing
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw user input given in [`Field::EDITABLE`] order
    ///
    /// Empty strings become "keep".
    #[must_use]
    pub fn from_inputs<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut patch = Self::new();
        for (field, value) in Field::EDITABLE.into_iter().zip(values) {
            patch.set(field, value);
        }
        patch
    }

    /// With a replacement value (blank is ignored)
    #[inline]
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Set a replacement value; blank values and [`Field::Id`] are ignored
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        if let Some(index) = slot(field) {
            self.values[index] = Some(value);
        }
    }

    /// Replacement for a field, if any
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        slot(field).and_then(|index| self.values[index].as_deref())
    }

    /// True when applying the patch changes nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Overwrite every field the patch carries; the id is left untouched
    pub fn apply_to(&self, contact: &mut Contact) {
        self.apply_to_fields(contact.fields_mut());
    }

    fn apply_to_fields(&self, fields: &mut ContactFields) {
        for (field, value) in Field::EDITABLE.into_iter().zip(&self.values) {
            if let (Some(value), Some(slot)) = (value, fields.slot_mut(field)) {
                slot.clone_from(value);
            }
        }
    }
}

fn slot(field: Field) -> Option<usize> {
    Field::EDITABLE.iter().position(|f| *f == field)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> Contact {
        Contact::create(
            ContactFields::new()
                .with(Field::Name, "John")
                .with(Field::Lastname, "Doe")
                .with(Field::Phone, "555-1234")
                .with(Field::City, "Oslo"),
        )
    }

    #[test]
    fn blank_inputs_keep_everything() {
        let patch = ContactPatch::from_inputs(["", "", "", "", "", "", "", ""]);
        assert!(patch.is_empty());

        let mut contact = john();
        let before = contact.clone();
        patch.apply_to(&mut contact);
        assert_eq!(contact, before);
    }

    #[test]
    fn only_filled_fields_are_overwritten() {
        let patch = ContactPatch::from_inputs(["Johnny", "", "", "", "555-0000", "", "", ""]);
        let mut contact = john();
        patch.apply_to(&mut contact);

        assert_eq!(contact.get(Field::Name), "Johnny");
        assert_eq!(contact.get(Field::Lastname), "Doe");
        assert_eq!(contact.get(Field::Phone), "555-0000");
        assert_eq!(contact.get(Field::City), "Oslo");
    }

    #[test]
    fn id_is_never_patched() {
        let patch = ContactPatch::new()
            .with(Field::Id, "deadbeef")
            .with(Field::Phone, "1");
        assert_eq!(patch.get(Field::Id), None);

        let mut contact = john();
        patch.apply_to(&mut contact);
        assert_eq!(contact.id().as_str(), "86317603");
    }

    #[test]
    fn whitespace_is_not_blank() {
        let patch = ContactPatch::new().with(Field::City, " ");
        assert_eq!(patch.get(Field::City), Some(" "));
    }
}
