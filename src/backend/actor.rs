//! Backend actor - runs mock API calls in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::api::MockApi;
use crate::messages::{ApiCommand, ApiResponse, Operation};

/// Backend actor that turns API commands into responses.
///
/// Each command runs as its own task, so a slow call never holds up a fast
/// one and overlapping calls race exactly like concurrent requests would.
/// In-flight calls are never cancelled.
pub struct BackendActor {
    api: MockApi,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    active_calls: JoinSet<()>,
}

impl BackendActor {
    pub fn new(api: MockApi, response_tx: mpsc::UnboundedSender<ApiResponse>) -> Self {
        BackendActor {
            api,
            response_tx,
            active_calls: JoinSet::new(),
        }
    }

    /// Run the backend actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<ApiCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(ApiCommand::Shutdown) | None => break,
                        Some(command) => {
                            let api = self.api.clone();
                            let response_tx = self.response_tx.clone();
                            self.active_calls.spawn(async move {
                                execute(&api, command, &response_tx).await;
                            });
                        }
                    }
                }

                // Clean up completed tasks
                Some(result) = self.active_calls.join_next() => {
                    if let Err(err) = result {
                        tracing::error!(error = %err, "API task failed");
                    }
                }
            }
        }
        tracing::info!(pending = self.active_calls.len(), "Backend actor stopped");
    }
}

/// Run one command against the API, sending every response it produces.
/// Exactly one terminal response is sent per command.
pub async fn execute(
    api: &MockApi,
    command: ApiCommand,
    response_tx: &mpsc::UnboundedSender<ApiResponse>,
) {
    let send = |response: ApiResponse| {
        let _ = response_tx.send(response);
    };
    tracing::info!(?command, "Executing API call");

    match command {
        ApiCommand::LoadUsers { id } => {
            let users = api.users().get_all().await;
            send(ApiResponse::UsersLoaded { id, users });
        }
        ApiCommand::SelectUser { id, user_id } => {
            let user = match api.users().get_by_id(user_id).await {
                Ok(user) => user,
                Err(err) => return send(failed(id, Operation::SelectUser, &err)),
            };
            send(ApiResponse::UserSelected { id, user });
            let posts = api.posts().get_by_user_id(user_id).await;
            send(ApiResponse::PostsLoaded { id, posts });
        }
        ApiCommand::CreateUser { id, user } => {
            let user = api.users().create(user).await;
            send(ApiResponse::UserCreated { id, user });
        }
        ApiCommand::DeleteUser { id, user_id } => match api.users().delete(user_id).await {
            Ok(user) => send(ApiResponse::UserDeleted { id, user }),
            Err(err) => send(failed(id, Operation::DeleteUser, &err)),
        },
        ApiCommand::LoadComments { id, post_id } => {
            let comments = api.comments().get_by_post_id(post_id).await;
            send(ApiResponse::CommentsLoaded { id, post_id, comments });
        }
        ApiCommand::SimulateError { id } => match api.simulate_error().await {
            Ok(()) => tracing::warn!(id, "Simulated error unexpectedly succeeded"),
            Err(err) => send(failed(id, Operation::SimulateError, &err)),
        },
        ApiCommand::SimulateTimeout { id } => {
            let reply = api.simulate_timeout().await;
            send(ApiResponse::TimeoutResolved {
                id,
                message: reply.message,
            });
        }
        ApiCommand::Shutdown => {}
    }
}

fn failed(id: u64, operation: Operation, err: &impl std::fmt::Display) -> ApiResponse {
    ApiResponse::Failed {
        id,
        operation,
        message: err.to_string(),
    }
}
