//! # mockapi-tui
//!
//! A terminal user-management demo backed by a mock asynchronous API.
//!
//! ## Features
//! - Users, posts and comments held in swappable in-memory repositories
//! - Per-call simulated latency, an always-failing call and a slow call
//! - User list with delete, creation form, detail pane with posts and comments
//! - JSON view of the selected user
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (View state machine)
//! - Backend Layer (Tokio runtime, mock API calls)

pub mod api;
pub mod app;
pub mod backend;
pub mod config;
pub mod constants;
pub mod messages;
pub mod models;
pub mod store;
pub mod ui;

// Re-export commonly used types
pub use api::{ApiError, ApiResult, Latency, MockApi};
pub use app::{AppActor, AppState};
pub use backend::BackendActor;
pub use config::Config;
pub use messages::{ApiCommand, ApiResponse, RenderState, UiEvent};
pub use models::{Comment, NewComment, NewPost, NewUser, Post, User, UserPatch};
pub use store::{MemoryRepository, Record, Repository};
