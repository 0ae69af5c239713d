//! Command handlers - view logic for UI events and API responses

use crate::app::AppState;
use crate::constants::{AGE_INVALID, FORM_INCOMPLETE, TIMEOUT_PENDING};
use crate::messages::render::FormData;
use crate::messages::ui_events::{FormField, InputMode, Panel};
use crate::messages::{ApiCommand, ApiResponse};
use crate::models::NewUser;

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_panel(&mut self) {
        self.active_panel = self.active_panel.next();
    }

    pub fn prev_panel(&mut self) {
        self.active_panel = self.active_panel.prev();
    }

    pub fn move_up(&mut self) {
        match self.active_panel {
            Panel::Users => self.user_cursor = self.user_cursor.saturating_sub(1),
            Panel::Form => self.form_field = self.form_field.prev(),
            Panel::Detail => self.post_cursor = self.post_cursor.saturating_sub(1),
        }
    }

    pub fn move_down(&mut self) {
        match self.active_panel {
            Panel::Users => {
                if self.user_cursor + 1 < self.users.len() {
                    self.user_cursor += 1;
                }
            }
            Panel::Form => self.form_field = self.form_field.next(),
            Panel::Detail => {
                if self.post_cursor + 1 < self.user_posts.len() {
                    self.post_cursor += 1;
                }
            }
        }
    }

    pub fn toggle_raw_view(&mut self) {
        self.raw_view = !self.raw_view;
    }

    // ========================
    // Form editing
    // ========================

    pub fn start_editing(&mut self) {
        self.active_panel = Panel::Form;
        self.input_mode = InputMode::Editing;
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn next_field(&mut self) {
        self.form_field = self.form_field.next();
    }

    pub fn enter_char(&mut self, c: char) {
        // Age is a number input
        if self.form_field == FormField::Age && !c.is_ascii_digit() {
            return;
        }
        self.form.field_mut(self.form_field).push(c);
    }

    pub fn delete_char(&mut self) {
        self.form.field_mut(self.form_field).pop();
    }

    // ========================
    // API calls
    // ========================

    /// Register a command as in flight and raise the loading flag if it shows one
    fn dispatch(&mut self, build: impl FnOnce(u64) -> ApiCommand) -> ApiCommand {
        let id = self.next_id();
        let command = build(id);
        if let Some(operation) = command.operation() {
            if operation.shows_loading() {
                self.is_loading = true;
            }
            self.in_flight.insert(id, operation);
        }
        command
    }

    pub fn load_users(&mut self) -> ApiCommand {
        self.dispatch(|id| ApiCommand::LoadUsers { id })
    }

    pub fn select_user(&mut self) -> Option<ApiCommand> {
        let user_id = self.highlighted_user()?.id;
        Some(self.dispatch(|id| ApiCommand::SelectUser { id, user_id }))
    }

    pub fn delete_user(&mut self) -> Option<ApiCommand> {
        let user_id = self.highlighted_user()?.id;
        Some(self.dispatch(|id| ApiCommand::DeleteUser { id, user_id }))
    }

    pub fn load_comments(&mut self) -> Option<ApiCommand> {
        let post_id = self.highlighted_post()?.id;
        Some(self.dispatch(|id| ApiCommand::LoadComments { id, post_id }))
    }

    pub fn simulate_error(&mut self) -> ApiCommand {
        self.dispatch(|id| ApiCommand::SimulateError { id })
    }

    pub fn simulate_timeout(&mut self) -> ApiCommand {
        self.notice = Some(stamp(TIMEOUT_PENDING));
        self.dispatch(|id| ApiCommand::SimulateTimeout { id })
    }

    /// Validate the form and build the create command.
    ///
    /// Nothing is sent while another call is loading, or when a field is empty.
    pub fn submit_form(&mut self) -> Option<ApiCommand> {
        if self.is_loading {
            tracing::debug!("Form submission ignored while loading");
            return None;
        }
        let FormData { name, email, age } = &self.form;
        if name.is_empty() || email.is_empty() || age.is_empty() {
            self.notice = Some(stamp(FORM_INCOMPLETE));
            return None;
        }
        let Ok(age) = age.parse::<u32>() else {
            self.notice = Some(stamp(AGE_INVALID));
            return None;
        };
        let user = NewUser::new(name.clone(), email.clone(), age);
        self.input_mode = InputMode::Normal;
        self.notice = None;
        Some(self.dispatch(|id| ApiCommand::CreateUser { id, user }))
    }

    // ========================
    // Response handling
    // ========================

    pub fn handle_response(&mut self, response: ApiResponse) {
        let id = response.id();
        let operation = response.operation();
        let terminal = response.is_terminal();

        match response {
            ApiResponse::UsersLoaded { users, .. } => {
                self.users = users;
                self.clamp_user_cursor();
                self.error = None;
            }
            ApiResponse::UserSelected { user, .. } => {
                self.selected_user = Some(user);
            }
            ApiResponse::PostsLoaded { posts, .. } => {
                self.user_posts = posts;
                self.post_cursor = 0;
                self.comments_post_id = None;
                self.post_comments.clear();
                self.error = None;
            }
            ApiResponse::UserCreated { user, .. } => {
                self.users.push(user);
                self.form = FormData::default();
                self.form_field = FormField::Name;
                self.error = None;
            }
            ApiResponse::UserDeleted { user, .. } => {
                self.users.retain(|u| u.id != user.id);
                self.clamp_user_cursor();
                if self.selected_user.as_ref().is_some_and(|s| s.id == user.id) {
                    self.selected_user = None;
                    self.user_posts.clear();
                    self.post_cursor = 0;
                    self.comments_post_id = None;
                    self.post_comments.clear();
                }
                self.error = None;
            }
            ApiResponse::CommentsLoaded { post_id, comments, .. } => {
                self.comments_post_id = Some(post_id);
                self.post_comments = comments;
                self.error = None;
            }
            ApiResponse::TimeoutResolved { message, .. } => {
                self.notice = Some(stamp(&message));
            }
            ApiResponse::Failed { operation, message, .. } => {
                tracing::warn!(id, ?operation, %message, "API call failed");
                self.error = Some(format!("{}{}", operation.error_prefix(), message));
            }
        }

        if terminal {
            self.in_flight.remove(&id);
            if operation.shows_loading() {
                self.is_loading = false;
            }
        }
    }

    fn clamp_user_cursor(&mut self) {
        self.user_cursor = self.user_cursor.min(self.users.len().saturating_sub(1));
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

fn stamp(message: &str) -> String {
    format!("[{}] {}", chrono::Local::now().format("%H:%M:%S"), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::backend::Operation;
    use crate::models::{Post, User};

    fn user(id: u64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name),
            age: 20,
        }
    }

    fn post(id: u64, user_id: u64) -> Post {
        Post {
            id,
            user_id,
            title: format!("post {}", id),
            body: String::new(),
        }
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new();
        let cmd = state.load_users();
        state.handle_response(ApiResponse::UsersLoaded {
            id: command_id(&cmd),
            users: vec![user(1, "a"), user(2, "b"), user(3, "c")],
        });
        state
    }

    fn command_id(cmd: &ApiCommand) -> u64 {
        match cmd {
            ApiCommand::LoadUsers { id }
            | ApiCommand::SelectUser { id, .. }
            | ApiCommand::CreateUser { id, .. }
            | ApiCommand::DeleteUser { id, .. }
            | ApiCommand::LoadComments { id, .. }
            | ApiCommand::SimulateError { id }
            | ApiCommand::SimulateTimeout { id } => *id,
            ApiCommand::Shutdown => 0,
        }
    }

    #[test]
    fn test_initial_load_sets_and_clears_loading() {
        let mut state = AppState::new();
        let cmd = state.load_users();
        assert!(state.is_loading);
        assert_eq!(state.in_flight.len(), 1);

        state.handle_response(ApiResponse::UsersLoaded {
            id: command_id(&cmd),
            users: vec![user(1, "a")],
        });
        assert!(!state.is_loading);
        assert!(state.in_flight.is_empty());
        assert_eq!(state.users.len(), 1);
    }

    #[test]
    fn test_load_failure_is_prefixed_and_clears_loading() {
        let mut state = AppState::new();
        let cmd = state.load_users();
        state.handle_response(ApiResponse::Failed {
            id: command_id(&cmd),
            operation: Operation::LoadUsers,
            message: "boom".into(),
        });
        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("ユーザーデータの取得に失敗しました: boom"));
    }

    #[test]
    fn test_select_failure_keeps_partial_selection() {
        let mut state = loaded_state();
        state.user_cursor = 1;
        let cmd = state.select_user().unwrap();
        assert_eq!(cmd, ApiCommand::SelectUser { id: command_id(&cmd), user_id: 2 });

        state.user_posts = vec![post(9, 1)];
        state.handle_response(ApiResponse::UserSelected {
            id: command_id(&cmd),
            user: user(2, "b"),
        });
        assert!(state.is_loading);
        state.handle_response(ApiResponse::Failed {
            id: command_id(&cmd),
            operation: Operation::SelectUser,
            message: "Post not found".into(),
        });

        assert_eq!(state.selected_user.as_ref().map(|u| u.id), Some(2));
        assert_eq!(state.user_posts, vec![post(9, 1)]);
        assert!(!state.is_loading);
        assert_eq!(
            state.error.as_deref(),
            Some("ユーザー詳細の取得に失敗しました: Post not found")
        );
    }

    #[test]
    fn test_select_success_clears_stale_error() {
        let mut state = loaded_state();
        state.error = Some("old".into());
        let cmd = state.select_user().unwrap();
        let id = command_id(&cmd);
        state.handle_response(ApiResponse::UserSelected { id, user: user(1, "a") });
        assert_eq!(state.error.as_deref(), Some("old"));
        state.handle_response(ApiResponse::PostsLoaded {
            id,
            posts: vec![post(1, 1), post(2, 1)],
        });
        assert!(state.error.is_none());
        assert_eq!(state.user_posts.len(), 2);
    }

    #[test]
    fn test_submit_requires_all_fields() {
        let mut state = loaded_state();
        state.form.name = "X".into();
        state.form.email = "x@x.com".into();
        assert!(state.submit_form().is_none());
        assert!(state.notice.is_some());
        assert!(!state.is_loading);
    }

    #[test]
    fn test_submit_appends_user_and_resets_form() {
        let mut state = loaded_state();
        state.start_editing();
        for c in "X".chars() {
            state.enter_char(c);
        }
        state.next_field();
        for c in "x@x.com".chars() {
            state.enter_char(c);
        }
        state.next_field();
        for c in "2a0".chars() {
            state.enter_char(c);
        }
        assert_eq!(state.form.age, "20");

        let cmd = state.submit_form().unwrap();
        assert_eq!(
            cmd,
            ApiCommand::CreateUser {
                id: command_id(&cmd),
                user: NewUser::new("X", "x@x.com", 20),
            }
        );
        assert_eq!(state.input_mode, InputMode::Normal);

        state.handle_response(ApiResponse::UserCreated {
            id: command_id(&cmd),
            user: User {
                id: 6,
                name: "X".into(),
                email: "x@x.com".into(),
                age: 20,
            },
        });
        assert_eq!(state.users.len(), 4);
        assert_eq!(state.users[3].id, 6);
        assert_eq!(state.form, FormData::default());
    }

    #[test]
    fn test_submit_ignored_while_loading() {
        let mut state = AppState::new();
        state.load_users();
        state.form = FormData {
            name: "X".into(),
            email: "x@x.com".into(),
            age: "20".into(),
        };
        assert!(state.submit_form().is_none());
    }

    #[test]
    fn test_create_failure_keeps_form() {
        let mut state = loaded_state();
        state.form = FormData {
            name: "X".into(),
            email: "x@x.com".into(),
            age: "20".into(),
        };
        let cmd = state.submit_form().unwrap();
        state.handle_response(ApiResponse::Failed {
            id: command_id(&cmd),
            operation: Operation::CreateUser,
            message: "nope".into(),
        });
        assert_eq!(state.form.name, "X");
        assert_eq!(state.error.as_deref(), Some("ユーザーの作成に失敗しました: nope"));
    }

    #[test]
    fn test_delete_selected_user_clears_detail() {
        let mut state = loaded_state();
        state.selected_user = Some(user(3, "c"));
        state.user_posts = vec![post(4, 3)];
        state.user_cursor = 2;

        let cmd = state.delete_user().unwrap();
        state.handle_response(ApiResponse::UserDeleted {
            id: command_id(&cmd),
            user: user(3, "c"),
        });

        assert_eq!(state.users.len(), 2);
        assert_eq!(state.user_cursor, 1);
        assert!(state.selected_user.is_none());
        assert!(state.user_posts.is_empty());
    }

    #[test]
    fn test_delete_other_user_keeps_detail() {
        let mut state = loaded_state();
        state.selected_user = Some(user(1, "a"));
        state.user_cursor = 1;
        let cmd = state.delete_user().unwrap();
        state.handle_response(ApiResponse::UserDeleted {
            id: command_id(&cmd),
            user: user(2, "b"),
        });
        assert_eq!(state.selected_user.as_ref().map(|u| u.id), Some(1));
    }

    #[test]
    fn test_delete_failure_sets_error() {
        let mut state = loaded_state();
        let cmd = state.delete_user().unwrap();
        state.handle_response(ApiResponse::Failed {
            id: command_id(&cmd),
            operation: Operation::DeleteUser,
            message: "User not found".into(),
        });
        assert_eq!(state.users.len(), 3);
        assert_eq!(
            state.error.as_deref(),
            Some("ユーザーの削除に失敗しました: User not found")
        );
    }

    #[test]
    fn test_simulated_error_leaves_loading_alone() {
        let mut state = loaded_state();
        let cmd = state.simulate_error();
        assert!(!state.is_loading);
        state.handle_response(ApiResponse::Failed {
            id: command_id(&cmd),
            operation: Operation::SimulateError,
            message: "API Error: Something went wrong".into(),
        });
        assert_eq!(
            state.error.as_deref(),
            Some("API エラー: API Error: Something went wrong")
        );
        assert!(state.in_flight.is_empty());
    }

    #[test]
    fn test_timeout_sets_notice_only() {
        let mut state = loaded_state();
        let cmd = state.simulate_timeout();
        assert!(state.notice.as_deref().is_some_and(|n| n.ends_with(TIMEOUT_PENDING)));
        state.handle_response(ApiResponse::TimeoutResolved {
            id: command_id(&cmd),
            message: "This response was delayed".into(),
        });
        assert!(state
            .notice
            .as_deref()
            .is_some_and(|n| n.ends_with("This response was delayed")));
        assert!(state.error.is_none());
    }

    #[test]
    fn test_comments_for_highlighted_post() {
        let mut state = loaded_state();
        assert!(state.load_comments().is_none());

        state.user_posts = vec![post(1, 1), post(2, 1)];
        state.active_panel = Panel::Detail;
        state.move_down();
        let cmd = state.load_comments().unwrap();
        assert_eq!(cmd, ApiCommand::LoadComments { id: command_id(&cmd), post_id: 2 });

        state.handle_response(ApiResponse::CommentsLoaded {
            id: command_id(&cmd),
            post_id: 2,
            comments: Vec::new(),
        });
        assert_eq!(state.comments_post_id, Some(2));
        assert!(!state.is_loading);
    }
}
