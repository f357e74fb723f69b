//! Menu screens and the transitions between them

use contactbook_model::{ContactId, Field};

/// Menu a finished sub-dialog returns to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Main,
    Edit,
}

impl Origin {
    /// Screen for this menu
    #[must_use]
    pub fn screen(self) -> Screen {
        match self {
            Origin::Main => Screen::MainMenu,
            Origin::Edit => Screen::EditMenu,
        }
    }
}

/// One state of the interactive dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    SearchMenu { origin: Origin },
    SearchNeedle { field: Field, origin: Origin },
    /// Collecting new contact fields, in [`Field::EDITABLE`] order
    AddForm { values: Vec<String> },
    EditMenu,
    EditAwaitId,
    /// Collecting replacement values for the contact with `id`
    EditFields { id: ContactId, values: Vec<String> },
    DeleteAwaitId,
    /// "Press enter to continue", then back to `resume`
    Paused { resume: Origin },
    Exit,
}

impl Screen {
    /// Fieldless kind, used by the transition table
    #[must_use]
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::MainMenu => ScreenKind::MainMenu,
            Screen::SearchMenu { .. } => ScreenKind::SearchMenu,
            Screen::SearchNeedle { .. } => ScreenKind::SearchNeedle,
            Screen::AddForm { .. } => ScreenKind::AddForm,
            Screen::EditMenu => ScreenKind::EditMenu,
            Screen::EditAwaitId => ScreenKind::EditAwaitId,
            Screen::EditFields { .. } => ScreenKind::EditFields,
            Screen::DeleteAwaitId => ScreenKind::DeleteAwaitId,
            Screen::Paused { .. } => ScreenKind::Paused,
            Screen::Exit => ScreenKind::Exit,
        }
    }

    /// Input prompt for this screen
    #[must_use]
    pub fn prompt(&self) -> String {
        match self {
            Screen::MainMenu | Screen::SearchMenu { .. } | Screen::EditMenu => {
                "Enter your choice: ".to_string()
            }
            Screen::SearchNeedle { field, .. } => format!("Input {field} value: "),
            Screen::AddForm { values } | Screen::EditFields { values, .. } => Field::EDITABLE
                .get(values.len())
                .map_or_else(String::new, |f| f.prompt().to_string()),
            Screen::EditAwaitId | Screen::DeleteAwaitId => Field::Id.prompt().to_string(),
            Screen::Paused { .. } => "Press enter to continue...".to_string(),
            Screen::Exit => String::new(),
        }
    }

    /// Lines printed when the dialog arrives on this screen
    #[must_use]
    pub fn banner(&self) -> Vec<String> {
        let lines: &[&str] = match self {
            Screen::MainMenu => &[
                "---",
                "What would you like to do?",
                "1. View all contacts",
                "2. Search a contact",
                "3. Add a contact",
                "4. Edit a contact",
                "5. Delete a contact",
                "0. Exit",
                "---",
            ],
            Screen::SearchMenu { .. } => &[
                "---",
                "Which field would you like to filter?",
                "1. Name",
                "2. Lastname",
                "3. Email address",
                "4. Phone number",
                "0. Back",
                "---",
            ],
            Screen::EditMenu => &[
                "---",
                "To edit a contact, you need the id.",
                "1. Enter the contact id.",
                "2. Search contact.",
                "0. Back to main menu.",
                "---",
            ],
            Screen::EditFields { .. } => &["Fill in only the fields to update."],
            Screen::EditAwaitId | Screen::DeleteAwaitId => &["Leave blank to go back."],
            _ => &[],
        };
        lines.iter().map(|l| (*l).to_string()).collect()
    }
}

/// Screen kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    MainMenu,
    SearchMenu,
    SearchNeedle,
    AddForm,
    EditMenu,
    EditAwaitId,
    EditFields,
    DeleteAwaitId,
    Paused,
    Exit,
}

impl ScreenKind {
    /// Every kind
    pub const ALL: [ScreenKind; 10] = [
        ScreenKind::MainMenu,
        ScreenKind::SearchMenu,
        ScreenKind::SearchNeedle,
        ScreenKind::AddForm,
        ScreenKind::EditMenu,
        ScreenKind::EditAwaitId,
        ScreenKind::EditFields,
        ScreenKind::DeleteAwaitId,
        ScreenKind::Paused,
        ScreenKind::Exit,
    ];
}

/// Validates a screen transition.
pub fn validate_transition(from: ScreenKind, to: ScreenKind) -> Result<(), DialogError> {
    if allowed_transitions(from).contains(&to) {
        Ok(())
    } else {
        Err(DialogError::IllegalTransition { from, to })
    }
}

/// Screens reachable in one step from `from`
#[must_use]
pub fn allowed_transitions(from: ScreenKind) -> &'static [ScreenKind] {
    use ScreenKind::*;
    match from {
        MainMenu => &[Paused, SearchMenu, AddForm, EditMenu, DeleteAwaitId, Exit],
        SearchMenu => &[SearchNeedle, MainMenu, EditMenu],
        SearchNeedle => &[Paused],
        AddForm => &[AddForm, Paused],
        EditMenu => &[EditAwaitId, SearchMenu, MainMenu],
        EditAwaitId => &[EditFields, Paused, EditMenu],
        EditFields => &[EditFields, Paused],
        DeleteAwaitId => &[Paused, MainMenu],
        Paused => &[MainMenu, EditMenu],
        Exit => &[],
    }
}

/// Choice on the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    ViewAll,
    Search,
    Add,
    Edit,
    Delete,
    Exit,
}

impl MainChoice {
    /// Parse a typed choice; `None` means "Invalid choice."
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::ViewAll),
            "2" => Some(Self::Search),
            "3" => Some(Self::Add),
            "4" => Some(Self::Edit),
            "5" => Some(Self::Delete),
            "0" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Choice on the search menu: a field, or `None` for back
#[must_use]
pub fn parse_search_choice(input: &str) -> Option<Option<Field>> {
    match input.trim() {
        "1" => Some(Some(Field::Name)),
        "2" => Some(Some(Field::Lastname)),
        "3" => Some(Some(Field::Email)),
        "4" => Some(Some(Field::Phone)),
        "0" => Some(None),
        _ => None,
    }
}

/// Choice on the edit menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditChoice {
    EnterId,
    Search,
    Back,
}

impl EditChoice {
    /// Parse a typed choice; `None` means "Invalid choice."
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::EnterId),
            "2" => Some(Self::Search),
            "0" => Some(Self::Back),
            _ => None,
        }
    }
}

/// Dialog state machine errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialogError {
    #[error("illegal screen transition: {from:?} -> {to:?}")]
    IllegalTransition { from: ScreenKind, to: ScreenKind },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_is_terminal() {
        assert!(allowed_transitions(ScreenKind::Exit).is_empty());
        for to in ScreenKind::ALL {
            assert!(validate_transition(ScreenKind::Exit, to).is_err());
        }
    }

    #[test]
    fn only_main_menu_exits() {
        for from in ScreenKind::ALL {
            let exits = validate_transition(from, ScreenKind::Exit).is_ok();
            assert_eq!(exits, from == ScreenKind::MainMenu, "{from:?}");
        }
    }

    #[test]
    fn edit_flow_path_is_allowed() {
        let path = [
            ScreenKind::MainMenu,
            ScreenKind::EditMenu,
            ScreenKind::EditAwaitId,
            ScreenKind::EditFields,
            ScreenKind::EditFields,
            ScreenKind::Paused,
            ScreenKind::MainMenu,
        ];
        for pair in path.windows(2) {
            assert!(validate_transition(pair[0], pair[1]).is_ok(), "{pair:?}");
        }
    }

    #[test]
    fn not_found_returns_to_edit_menu_via_pause() {
        assert!(validate_transition(ScreenKind::EditAwaitId, ScreenKind::Paused).is_ok());
        assert!(validate_transition(ScreenKind::Paused, ScreenKind::EditMenu).is_ok());
        assert!(validate_transition(ScreenKind::EditAwaitId, ScreenKind::MainMenu).is_err());
    }

    #[test]
    fn menu_choices_parse() {
        assert_eq!(MainChoice::parse("4"), Some(MainChoice::Edit));
        assert_eq!(MainChoice::parse(" 0 "), Some(MainChoice::Exit));
        assert_eq!(MainChoice::parse("6"), None);
        assert_eq!(MainChoice::parse(""), None);
        assert_eq!(parse_search_choice("3"), Some(Some(Field::Email)));
        assert_eq!(parse_search_choice("0"), Some(None));
        assert_eq!(parse_search_choice("5"), None);
        assert_eq!(EditChoice::parse("2"), Some(EditChoice::Search));
        assert_eq!(EditChoice::parse("3"), None);
    }

    #[test]
    fn form_prompts_follow_field_order() {
        let screen = Screen::AddForm { values: vec![] };
        assert_eq!(screen.prompt(), "Enter name: ");
        let screen = Screen::AddForm {
            values: vec![String::new(); 7],
        };
        assert_eq!(screen.prompt(), "Enter current country location: ");
    }
}
