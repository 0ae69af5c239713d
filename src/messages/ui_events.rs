//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Panel navigation
    NextPanel,
    PrevPanel,
    MoveUp,
    MoveDown,

    // User list
    SelectUser,
    DeleteUser,
    ReloadUsers,

    // Creation form
    StartEditing,
    StopEditing,
    NextField,
    CharInput(char),
    Backspace,
    SubmitForm,

    // Detail pane
    LoadComments,
    ToggleRawView,

    // Simulations
    SimulateError,
    SimulateTimeout,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Focused panel (needed for context-aware event mapping)
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Panel {
    #[default]
    Users,
    Form,
    Detail,
}

impl Panel {
    pub fn next(&self) -> Panel {
        match self {
            Panel::Users => Panel::Form,
            Panel::Form => Panel::Detail,
            Panel::Detail => Panel::Users,
        }
    }

    pub fn prev(&self) -> Panel {
        match self {
            Panel::Users => Panel::Detail,
            Panel::Form => Panel::Users,
            Panel::Detail => Panel::Form,
        }
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Field of the creation form
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Age,
}

impl FormField {
    pub fn next(&self) -> FormField {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Age,
            FormField::Age => FormField::Name,
        }
    }

    pub fn prev(&self) -> FormField {
        match self {
            FormField::Name => FormField::Age,
            FormField::Email => FormField::Name,
            FormField::Age => FormField::Email,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "名前",
            FormField::Email => "メール",
            FormField::Age => "年齢",
        }
    }
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    active_panel: Panel,
    input_mode: InputMode,
    show_help: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Editing => match key.code {
            KeyCode::Esc => Some(UiEvent::StopEditing),
            KeyCode::Tab => Some(UiEvent::NextField),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Enter => Some(UiEvent::SubmitForm),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        },
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Tab => Some(UiEvent::NextPanel),
            KeyCode::BackTab => Some(UiEvent::PrevPanel),
            KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::MoveDown),
            KeyCode::Char('x') => Some(UiEvent::SimulateError),
            KeyCode::Char('t') => Some(UiEvent::SimulateTimeout),
            KeyCode::Char('r') => Some(UiEvent::ReloadUsers),
            KeyCode::Char('v') => Some(UiEvent::ToggleRawView),
            KeyCode::Enter => match active_panel {
                Panel::Users => Some(UiEvent::SelectUser),
                Panel::Form => Some(UiEvent::StartEditing),
                Panel::Detail => Some(UiEvent::LoadComments),
            },
            KeyCode::Char('d') if active_panel == Panel::Users => Some(UiEvent::DeleteUser),
            KeyCode::Char('e') if active_panel == Panel::Form => Some(UiEvent::StartEditing),
            KeyCode::Char('s') if active_panel == Panel::Form => Some(UiEvent::SubmitForm),
            _ => None,
        },
    }
}
