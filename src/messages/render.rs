//! Render state - data structure sent from App layer to UI for rendering

use crate::messages::ui_events::{FormField, InputMode, Panel};
use crate::models::{Comment, Post, User};

/// Creation form contents, kept as typed text until submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub age: String,
}

impl FormData {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Age => &self.age,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Age => &mut self.age,
        }
    }
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // Data
    pub users: Vec<User>,
    pub selected_user: Option<User>,
    pub user_posts: Vec<Post>,
    pub comments_post_id: Option<u64>,
    pub post_comments: Vec<Comment>,

    // Status
    pub is_loading: bool,
    pub in_flight: usize,
    pub error: Option<String>,
    pub notice: Option<String>,

    // Form
    pub form: FormData,
    pub form_field: FormField,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub user_cursor: usize,
    pub post_cursor: usize,
    pub raw_view: bool,
    pub show_help: bool,
}
