//! Contact field names

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// One named field of a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Lastname,
    Birth,
    Email,
    Phone,
    Occupation,
    City,
    Country,
    Id,
}

impl Field {
    /// Every field a user can type a value for, in prompt order
    pub const EDITABLE: [Field; 8] = [
        Field::Name,
        Field::Lastname,
        Field::Birth,
        Field::Email,
        Field::Phone,
        Field::Occupation,
        Field::City,
        Field::Country,
    ];

    /// Fields offered by the interactive search menu
    pub const SEARCHABLE: [Field; 4] = [Field::Name, Field::Lastname, Field::Email, Field::Phone];

    /// Key used for this field in the stored document
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Lastname => "lastname",
            Field::Birth => "birth",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Occupation => "occupation",
            Field::City => "city",
            Field::Country => "country",
            Field::Id => "id",
        }
    }

    /// Prompt shown when asking the user for this field
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Field::Name => "Enter name: ",
            Field::Lastname => "Enter lastname: ",
            Field::Birth => "Enter the birth date: ",
            Field::Email => "Enter the email: ",
            Field::Phone => "Enter the phone number: ",
            Field::Occupation => "Enter the occupation: ",
            Field::City => "Enter current city location: ",
            Field::Country => "Enter current country location: ",
            Field::Id => "Enter contact id: ",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "lastname" => Ok(Field::Lastname),
            "birth" => Ok(Field::Birth),
            "email" => Ok(Field::Email),
            "phone" => Ok(Field::Phone),
            "occupation" => Ok(Field::Occupation),
            "city" => Ok(Field::City),
            "country" => Ok(Field::Country),
            "id" => Ok(Field::Id),
            other => Err(FieldError::Unknown(other.to_string())),
        }
    }
}

/// Errors raised when naming a field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// No contact field has this name
    #[error("unknown contact field: {0}")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for field in Field::EDITABLE.iter().chain([Field::Id].iter()) {
            assert_eq!(field.as_str().parse::<Field>().unwrap(), *field);
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        assert_eq!(
            "nickname".parse::<Field>(),
            Err(FieldError::Unknown("nickname".to_string()))
        );
    }

    #[test]
    fn searchable_is_subset_of_editable() {
        assert!(Field::SEARCHABLE.iter().all(|f| Field::EDITABLE.contains(f)));
        assert!(!Field::EDITABLE.contains(&Field::Id));
    }
}
