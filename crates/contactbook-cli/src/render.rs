//! Text rendering for contact lists and details

use contactbook_model::{Contact, Field};

/// Width of the name column in list rows
const NAME_WIDTH: usize = 50;

/// Lines describing a result set
///
/// One contact is shown in full; several are listed one per row.
#[must_use]
pub fn results(contacts: &[Contact]) -> Vec<String> {
    match contacts {
        [] => vec!["No results found.".to_string()],
        [only] => {
            let mut lines = vec!["1 result found.".to_string(), "---".to_string()];
            lines.extend(detail(only));
            lines
        }
        many => {
            let mut lines = vec![format!("{} results found.", many.len()), "---".to_string()];
            lines.push(format!("# --  Name  --{}--  Phone  --", " ".repeat(41)));
            lines.extend(
                many.iter()
                    .enumerate()
                    .map(|(i, c)| format!("{}. {}", i + 1, row(c))),
            );
            lines
        }
    }
}

/// Name padded to the column width, then the phone
#[must_use]
pub fn row(contact: &Contact) -> String {
    let name = contact.full_name();
    let pad = NAME_WIDTH.saturating_sub(name.chars().count());
    format!("{name}{}| {} |", " ".repeat(pad), contact.get(Field::Phone))
}

/// Every field of one contact
#[must_use]
pub fn detail(contact: &Contact) -> Vec<String> {
    vec![
        contact.full_name(),
        contact.get(Field::Phone).to_string(),
        contact.get(Field::Email).to_string(),
        contact.get(Field::Occupation).to_string(),
        contact.get(Field::Birth).to_string(),
        format!("{}, {}", contact.get(Field::City), contact.get(Field::Country)),
        format!("ID: {}", contact.id()),
    ]
}
