//! App actor - message loop processing UI events and API responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{ApiCommand, ApiResponse, RenderState, UiEvent};

/// App actor that processes UI events and API responses
pub struct AppActor {
    state: AppState,
    backend_tx: mpsc::UnboundedSender<ApiCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        backend_tx: mpsc::UnboundedSender<ApiCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(),
            backend_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut api_rx: mpsc::UnboundedReceiver<ApiResponse>,
    ) {
        // Mount: fetch the user list before the first key press
        let load = self.state.load_users();
        self.send(load);
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.backend_tx.send(ApiCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = api_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    fn send(&self, command: ApiCommand) {
        if self.backend_tx.send(command).is_err() {
            tracing::error!("Backend actor is gone, command dropped");
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Panel navigation
            UiEvent::NextPanel => self.state.next_panel(),
            UiEvent::PrevPanel => self.state.prev_panel(),
            UiEvent::MoveUp => self.state.move_up(),
            UiEvent::MoveDown => self.state.move_down(),

            // User list
            UiEvent::SelectUser => {
                if let Some(cmd) = self.state.select_user() {
                    self.send(cmd);
                }
            }
            UiEvent::DeleteUser => {
                if let Some(cmd) = self.state.delete_user() {
                    self.send(cmd);
                }
            }
            UiEvent::ReloadUsers => {
                let cmd = self.state.load_users();
                self.send(cmd);
            }

            // Form
            UiEvent::StartEditing => self.state.start_editing(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::NextField => self.state.next_field(),
            UiEvent::CharInput(c) => self.state.enter_char(c),
            UiEvent::Backspace => self.state.delete_char(),
            UiEvent::SubmitForm => {
                if let Some(cmd) = self.state.submit_form() {
                    self.send(cmd);
                }
            }

            // Detail pane
            UiEvent::LoadComments => {
                if let Some(cmd) = self.state.load_comments() {
                    self.send(cmd);
                }
            }
            UiEvent::ToggleRawView => self.state.toggle_raw_view(),

            // Simulations
            UiEvent::SimulateError => {
                let cmd = self.state.simulate_error();
                self.send(cmd);
            }
            UiEvent::SimulateTimeout => {
                let cmd = self.state.simulate_timeout();
                self.send(cmd);
            }

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
