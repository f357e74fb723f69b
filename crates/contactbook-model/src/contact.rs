//! Contact records
//!
//! [`ContactFields`] is what a user types when creating a contact;
//! [`Contact`] is the stored record, the same fields plus the derived id.

use crate::field::Field;
use crate::id::ContactId;
use serde::{Deserialize, Serialize};

/// The eight user-entered fields of a contact, without an id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub lastname: String,
    pub birth: String,
    pub email: String,
    pub phone: String,
    pub occupation: String,
    pub city: String,
    pub country: String,
}

impl ContactFields {
    /// Create empty field set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from values given in [`Field::EDITABLE`] order
    ///
    /// Missing trailing values stay empty; extra values are ignored.
    #[must_use]
    pub fn from_inputs<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut fields = Self::new();
        for (field, value) in Field::EDITABLE.into_iter().zip(values) {
            fields.set(field, value);
        }
        fields
    }

    /// With a field value
    #[inline]
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Set a field; [`Field::Id`] is not part of a field set and is ignored
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        if let Some(slot) = self.slot_mut(field) {
            *slot = value.into();
        }
    }

    /// Read a field; [`Field::Id`] reads as empty
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Lastname => &self.lastname,
            Field::Birth => &self.birth,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Occupation => &self.occupation,
            Field::City => &self.city,
            Field::Country => &self.country,
            Field::Id => "",
        }
    }

    pub(crate) fn slot_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Lastname => Some(&mut self.lastname),
            Field::Birth => Some(&mut self.birth),
            Field::Email => Some(&mut self.email),
            Field::Phone => Some(&mut self.phone),
            Field::Occupation => Some(&mut self.occupation),
            Field::City => Some(&mut self.city),
            Field::Country => Some(&mut self.country),
            Field::Id => None,
        }
    }
}

/// A stored contact
///
/// The id is derived once in [`Contact::create`] and carried unchanged
/// through every later edit, even when name or phone change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(flatten)]
    fields: ContactFields,
    id: ContactId,
}

impl Contact {
    /// Create a new contact, deriving its id from lastname, name and phone
    #[must_use]
    pub fn create(fields: ContactFields) -> Self {
        let id = ContactId::derive(&fields.lastname, &fields.name, &fields.phone);
        Self { fields, id }
    }

    /// Rebuild a contact from stored parts, keeping the given id
    #[inline]
    #[must_use]
    pub fn from_parts(fields: ContactFields, id: ContactId) -> Self {
        Self { fields, id }
    }

    /// Contact id
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ContactId {
        &self.id
    }

    /// All non-id fields
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    /// Mutable access to the non-id fields; the id cannot be reached from here
    #[inline]
    pub fn fields_mut(&mut self) -> &mut ContactFields {
        &mut self.fields
    }

    /// Read any field, including [`Field::Id`]
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Id => self.id.as_str(),
            other => self.fields.get(other),
        }
    }

    /// `"<name> <lastname>"`
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.fields.name, self.fields.lastname)
    }
}
