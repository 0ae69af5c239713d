//! App layer - central view state and command processing
//!
//! The App actor receives UI events and API responses,
//! updates state, and emits API commands and render state.

pub mod state;
pub mod actor;
pub mod commands;

pub use state::AppState;
pub use actor::AppActor;
