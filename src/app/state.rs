//! App state - pure data structure with no I/O logic

use std::collections::HashMap;

use crate::messages::backend::Operation;
use crate::messages::render::FormData;
use crate::messages::ui_events::{FormField, InputMode, Panel};
use crate::messages::RenderState;
use crate::models::{Comment, Post, User};

/// Main application state - pure data, no I/O
#[derive(Debug, Default)]
pub struct AppState {
    // Data returned by the API
    pub users: Vec<User>,
    pub selected_user: Option<User>,
    pub user_posts: Vec<Post>,
    pub comments_post_id: Option<u64>,
    pub post_comments: Vec<Comment>,

    // Status. Not scoped per operation: any finishing call clears `is_loading`,
    // and `error` only goes away on a later success.
    pub is_loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,

    // Creation form
    pub form: FormData,
    pub form_field: FormField,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub user_cursor: usize,
    pub post_cursor: usize,
    pub raw_view: bool,
    pub show_help: bool,

    // Command bookkeeping
    pub next_command_id: u64,
    pub in_flight: HashMap<u64, Operation>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            next_command_id: 1,
            ..Default::default()
        }
    }

    /// Generate a unique command ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_command_id;
        self.next_command_id += 1;
        id
    }

    /// User under the list cursor
    pub fn highlighted_user(&self) -> Option<&User> {
        self.users.get(self.user_cursor)
    }

    /// Post under the detail cursor
    pub fn highlighted_post(&self) -> Option<&Post> {
        self.user_posts.get(self.post_cursor)
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            users: self.users.clone(),
            selected_user: self.selected_user.clone(),
            user_posts: self.user_posts.clone(),
            comments_post_id: self.comments_post_id,
            post_comments: self.post_comments.clone(),
            is_loading: self.is_loading,
            in_flight: self.in_flight.len(),
            error: self.error.clone(),
            notice: self.notice.clone(),
            form: self.form.clone(),
            form_field: self.form_field,
            active_panel: self.active_panel,
            input_mode: self.input_mode,
            user_cursor: self.user_cursor,
            post_cursor: self.post_cursor,
            raw_view: self.raw_view,
            show_help: self.show_help,
        }
    }
}
