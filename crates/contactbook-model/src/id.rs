//! Derived contact identifiers
//!
//! Provides [`ContactId`], the short hash-based key every contact carries.
//! The id is the first eight lowercase hex characters of
//! `SHA-256("<lastname> <name> <phone>")`, computed once when the contact
//! is created.
//!
//! Eight hex characters is a 32-bit space. Collisions are possible and are
//! not prevented: two contacts with the same last name, first name and phone
//! share an id. This is acceptable only for small personal collections.

use sha2::{Digest, Sha256};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Number of characters in a contact id
pub const ID_LEN: usize = 8;

/// Short identifier derived from a contact's name and phone
///
/// Serialized as a plain string. Ids read from storage are kept verbatim;
/// only user input goes through [`ContactId::parse`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    /// Derive the id for a contact from its last name, first name and phone
    ///
    /// The three values are joined with single spaces, untrimmed, and hashed
    /// as UTF-8.
    #[must_use]
    pub fn derive(lastname: &str, name: &str, phone: &str) -> Self {
        let source = format!("{lastname} {name} {phone}");
        let digest = Sha256::digest(source.as_bytes());
        // 4 bytes = 8 hex chars
        Self(hex::encode(&digest[..ID_LEN / 2]))
    }

    /// Parse a user-supplied id
    ///
    /// Only the length is checked; case is kept as typed and comparisons
    /// go through [`ContactId::matches`].
    ///
    /// # Errors
    /// Returns error if the input is not exactly [`ID_LEN`] characters
    pub fn parse(input: &str) -> Result<Self, IdError> {
        let actual = input.chars().count();
        if actual != ID_LEN {
            return Err(IdError::InvalidLength {
                expected: ID_LEN,
                actual,
            });
        }
        Ok(Self(input.to_string()))
    }

    /// Wrap a stored id without validation
    #[inline]
    #[must_use]
    pub fn from_stored(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Case-insensitive equality, the rule every id lookup uses
    #[inline]
    #[must_use]
    pub fn matches(&self, other: &ContactId) -> bool {
        self.0.to_lowercase() == other.0.to_lowercase()
    }

    /// Borrow the id text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ContactId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ContactId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ContactId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Errors that can occur when reading an id from user input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// Wrong number of characters
    #[error("invalid id length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
