//! Backend layer - runs mock API calls off the UI path
//!
//! The Backend actor receives API commands and sends back responses.

pub mod actor;

pub use actor::BackendActor;
