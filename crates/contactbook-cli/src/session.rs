//! Interactive session
//!
//! A [`Session`] owns the current [`Screen`] and a [`ContactBook`]. Each call
//! to [`Session::step`] consumes one line of user input and returns the lines
//! to print, so the whole dialog runs without a console.
//!
//! Errors the user can fix (bad menu choice, malformed id, unknown id) become
//! messages and the dialog continues. Storage failures end the session.

use crate::dialog::{
    parse_search_choice, validate_transition, DialogError, EditChoice, MainChoice, Origin, Screen,
};
use crate::render;
use contactbook_core::{BookError, ContactBook};
use contactbook_model::{ContactFields, ContactId, ContactPatch, Field};
use contactbook_store::ContactStore;

const INVALID_CHOICE: &str = "Invalid choice.";
const INVALID_ID: &str = "Invalid format id.";
const NOT_FOUND: &str = "Contact not found.";

/// Errors that end a session
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Book(#[from] BookError),

    #[error(transparent)]
    Dialog(#[from] DialogError),

    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// One interactive contact book session
#[derive(Debug)]
pub struct Session<S> {
    book: ContactBook<S>,
    screen: Screen,
}

impl<S: ContactStore> Session<S> {
    /// Create session on the main menu
    #[must_use]
    pub fn new(book: ContactBook<S>) -> Self {
        Self {
            book,
            screen: Screen::MainMenu,
        }
    }

    /// Greeting and main menu
    #[must_use]
    pub fn start(&self) -> Vec<String> {
        let mut out = vec!["Welcome to the contact app.".to_string()];
        out.extend(self.screen.banner());
        out
    }

    /// Current screen
    #[inline]
    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Prompt for the next line of input
    #[inline]
    #[must_use]
    pub fn prompt(&self) -> String {
        self.screen.prompt()
    }

    /// True once the user chose to exit
    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.screen == Screen::Exit
    }

    /// Underlying contact book
    #[inline]
    #[must_use]
    pub fn book(&self) -> &ContactBook<S> {
        &self.book
    }

    /// Feed one line of input
    ///
    /// # Errors
    /// Returns error on storage failure or an illegal screen transition
    pub fn step(&mut self, input: &str) -> Result<Vec<String>, SessionError> {
        let mut out = Vec::new();
        match self.screen.clone() {
            Screen::MainMenu => self.on_main_menu(input, &mut out)?,
            Screen::SearchMenu { origin } => self.on_search_menu(input, origin, &mut out)?,
            Screen::SearchNeedle { field, origin } => {
                let hits = self.book.search(field, input)?;
                out.extend(render::results(&hits));
                self.goto(Screen::Paused { resume: origin }, &mut out)?;
            }
            Screen::AddForm { mut values } => {
                values.push(input.to_string());
                if values.len() < Field::EDITABLE.len() {
                    self.goto(Screen::AddForm { values }, &mut out)?;
                } else {
                    self.book.add(ContactFields::from_inputs(values))?;
                    out.push("Contact added.".to_string());
                    self.goto(Screen::Paused { resume: Origin::Main }, &mut out)?;
                }
            }
            Screen::EditMenu => self.on_edit_menu(input, &mut out)?,
            Screen::EditAwaitId => self.on_edit_id(input, &mut out)?,
            Screen::EditFields { id, mut values } => {
                values.push(input.to_string());
                if values.len() < Field::EDITABLE.len() {
                    self.goto(Screen::EditFields { id, values }, &mut out)?;
                } else {
                    let patch = ContactPatch::from_inputs(values);
                    let resume = match self.book.edit(&id, &patch) {
                        Ok(_) => {
                            out.push("Contact updated.".to_string());
                            Origin::Main
                        }
                        Err(e) => {
                            recover(e, &mut out)?;
                            Origin::Edit
                        }
                    };
                    self.goto(Screen::Paused { resume }, &mut out)?;
                }
            }
            Screen::DeleteAwaitId => self.on_delete_id(input, &mut out)?,
            Screen::Paused { resume } => self.goto(resume.screen(), &mut out)?,
            Screen::Exit => {}
        }
        Ok(out)
    }

    fn on_main_menu(&mut self, input: &str, out: &mut Vec<String>) -> Result<(), SessionError> {
        let Some(choice) = MainChoice::parse(input) else {
            out.push(INVALID_CHOICE.to_string());
            return Ok(());
        };
        match choice {
            MainChoice::ViewAll => {
                out.push("Contact List...".to_string());
                let contacts = self.book.all()?;
                out.extend(render::results(&contacts));
                self.goto(Screen::Paused { resume: Origin::Main }, out)
            }
            MainChoice::Search => {
                out.push("Searching contacts...".to_string());
                self.goto(Screen::SearchMenu { origin: Origin::Main }, out)
            }
            MainChoice::Add => {
                out.push("Creating new contact...".to_string());
                let existing = self.book.all()?;
                tracing::debug!(count = existing.len(), "store readable, collecting new contact");
                self.goto(Screen::AddForm { values: Vec::new() }, out)
            }
            MainChoice::Edit => {
                out.push("Editing contact...".to_string());
                self.goto(Screen::EditMenu, out)
            }
            MainChoice::Delete => {
                out.push("Deleting contact...".to_string());
                self.goto(Screen::DeleteAwaitId, out)
            }
            MainChoice::Exit => self.goto(Screen::Exit, out),
        }
    }

    fn on_search_menu(
        &mut self,
        input: &str,
        origin: Origin,
        out: &mut Vec<String>,
    ) -> Result<(), SessionError> {
        match parse_search_choice(input) {
            None => {
                out.push(INVALID_CHOICE.to_string());
                Ok(())
            }
            Some(None) => self.goto(origin.screen(), out),
            Some(Some(field)) => {
                out.push(format!("Filtering by {field}..."));
                self.goto(Screen::SearchNeedle { field, origin }, out)
            }
        }
    }

    fn on_edit_menu(&mut self, input: &str, out: &mut Vec<String>) -> Result<(), SessionError> {
        match EditChoice::parse(input) {
            None => {
                out.push(INVALID_CHOICE.to_string());
                Ok(())
            }
            Some(EditChoice::EnterId) => self.goto(Screen::EditAwaitId, out),
            Some(EditChoice::Search) => {
                out.push("Search contact...".to_string());
                self.goto(Screen::SearchMenu { origin: Origin::Edit }, out)
            }
            Some(EditChoice::Back) => self.goto(Screen::MainMenu, out),
        }
    }

    fn on_edit_id(&mut self, input: &str, out: &mut Vec<String>) -> Result<(), SessionError> {
        if input.is_empty() {
            return self.goto(Screen::EditMenu, out);
        }
        let id = match ContactId::parse(input) {
            Ok(id) => id,
            Err(e) => return recover(e.into(), out),
        };
        match self.book.get(&id) {
            Ok(contact) => {
                tracing::debug!(id = %contact.id(), "editing contact");
                self.goto(
                    Screen::EditFields {
                        id,
                        values: Vec::new(),
                    },
                    out,
                )
            }
            Err(e) => {
                recover(e, out)?;
                self.goto(Screen::Paused { resume: Origin::Edit }, out)
            }
        }
    }

    fn on_delete_id(&mut self, input: &str, out: &mut Vec<String>) -> Result<(), SessionError> {
        if input.is_empty() {
            return self.goto(Screen::MainMenu, out);
        }
        let id = match ContactId::parse(input) {
            Ok(id) => id,
            Err(e) => return recover(e.into(), out),
        };
        match self.book.delete(&id) {
            Ok(_) => out.push("Contact deleted.".to_string()),
            Err(e) => recover(e, out)?,
        }
        self.goto(Screen::Paused { resume: Origin::Main }, out)
    }

    /// Move to `next`, printing its banner when the screen kind changes
    fn goto(&mut self, next: Screen, out: &mut Vec<String>) -> Result<(), SessionError> {
        let from = self.screen.kind();
        let to = next.kind();
        validate_transition(from, to)?;
        if from != to {
            out.extend(next.banner());
        }
        self.screen = next;
        Ok(())
    }
}

/// Turn a lookup or id error into a message; storage errors propagate
fn recover(err: BookError, out: &mut Vec<String>) -> Result<(), SessionError> {
    let message = match err {
        BookError::NotFound { .. } | BookError::Ambiguous { .. } => NOT_FOUND,
        BookError::InvalidId(_) => INVALID_ID,
        BookError::Storage(_) => return Err(err.into()),
    };
    tracing::debug!(error = %err, "recovered");
    out.push(message.to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::ScreenKind;
    use contactbook_model::{Contact, ContactFields};
    use contactbook_store::MemoryStore;

    fn session() -> Session<MemoryStore> {
        let john = Contact::create(
            ContactFields::new()
                .with(Field::Name, "John")
                .with(Field::Lastname, "Doe")
                .with(Field::Phone, "555-1234"),
        );
        Session::new(ContactBook::new(MemoryStore::with_contacts(vec![john])))
    }

    #[test]
    fn invalid_main_choice_stays_put() {
        let mut s = session();
        let out = s.step("9").unwrap();
        assert_eq!(out, vec![INVALID_CHOICE]);
        assert_eq!(s.screen(), &Screen::MainMenu);
    }

    #[test]
    fn exit_finishes() {
        let mut s = session();
        s.step("0").unwrap();
        assert!(s.is_finished());
        assert!(s.step("1").unwrap().is_empty());
    }

    #[test]
    fn short_id_is_rejected_and_reprompted() {
        let mut s = session();
        s.step("4").unwrap();
        s.step("1").unwrap();
        let out = s.step("123").unwrap();
        assert_eq!(out, vec![INVALID_ID]);
        assert_eq!(s.screen().kind(), ScreenKind::EditAwaitId);
    }

    #[test]
    fn blank_id_goes_back() {
        let mut s = session();
        s.step("5").unwrap();
        s.step("").unwrap();
        assert_eq!(s.screen(), &Screen::MainMenu);
    }

    #[test]
    fn recover_reports_lookup_misses_as_not_found() {
        let id = ContactId::from_stored("12345678");
        for err in [
            BookError::NotFound { id: id.clone() },
            BookError::Ambiguous { id, count: 2 },
        ] {
            let mut out = Vec::new();
            recover(err, &mut out).unwrap();
            assert_eq!(out, vec![NOT_FOUND]);
        }
    }

    #[test]
    fn recover_reports_bad_ids_as_invalid_format() {
        let err = BookError::from(ContactId::parse("abc").unwrap_err());
        let mut out = Vec::new();
        recover(err, &mut out).unwrap();
        assert_eq!(out, vec![INVALID_ID]);
    }

    #[test]
    fn recover_passes_storage_errors_through() {
        let err = BookError::Storage(contactbook_store::StorageError::Missing {
            path: "contacts.json".into(),
        });
        let mut out = Vec::new();
        assert!(recover(err, &mut out).is_err());
        assert!(out.is_empty());
    }
}
