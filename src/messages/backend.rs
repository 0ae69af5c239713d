//! Backend messages - communication between App and Backend layers

use crate::constants::{
    CREATE_USER_FAILED, DELETE_USER_FAILED, LOAD_COMMENTS_FAILED, LOAD_USERS_FAILED,
    SELECT_USER_FAILED, SIMULATED_ERROR_PREFIX,
};
use crate::models::{Comment, NewUser, Post, User};

/// Commands sent from App layer to Backend layer
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCommand {
    /// Fetch the full user list
    LoadUsers { id: u64 },
    /// Fetch one user, then that user's posts
    SelectUser { id: u64, user_id: u64 },
    /// Create a user from the form
    CreateUser { id: u64, user: NewUser },
    /// Delete a user
    DeleteUser { id: u64, user_id: u64 },
    /// Fetch comments for a post
    LoadComments { id: u64, post_id: u64 },
    /// Call the always-failing endpoint
    SimulateError { id: u64 },
    /// Call the slow endpoint
    SimulateTimeout { id: u64 },

    /// Shutdown the backend actor
    Shutdown,
}

impl ApiCommand {
    pub fn operation(&self) -> Option<Operation> {
        match self {
            ApiCommand::LoadUsers { .. } => Some(Operation::LoadUsers),
            ApiCommand::SelectUser { .. } => Some(Operation::SelectUser),
            ApiCommand::CreateUser { .. } => Some(Operation::CreateUser),
            ApiCommand::DeleteUser { .. } => Some(Operation::DeleteUser),
            ApiCommand::LoadComments { .. } => Some(Operation::LoadComments),
            ApiCommand::SimulateError { .. } => Some(Operation::SimulateError),
            ApiCommand::SimulateTimeout { .. } => Some(Operation::SimulateTimeout),
            ApiCommand::Shutdown => None,
        }
    }
}

/// Which view action a response belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    LoadUsers,
    SelectUser,
    CreateUser,
    DeleteUser,
    LoadComments,
    SimulateError,
    SimulateTimeout,
}

impl Operation {
    /// Prefix put in front of a failure message before it is shown
    pub fn error_prefix(&self) -> &'static str {
        match self {
            Operation::LoadUsers => LOAD_USERS_FAILED,
            Operation::SelectUser => SELECT_USER_FAILED,
            Operation::CreateUser => CREATE_USER_FAILED,
            Operation::DeleteUser => DELETE_USER_FAILED,
            Operation::LoadComments => LOAD_COMMENTS_FAILED,
            Operation::SimulateError | Operation::SimulateTimeout => SIMULATED_ERROR_PREFIX,
        }
    }

    /// Whether the view shows the loading indicator while this runs
    pub fn shows_loading(&self) -> bool {
        !matches!(self, Operation::SimulateError | Operation::SimulateTimeout)
    }
}

/// Responses sent from Backend layer to App layer
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    UsersLoaded { id: u64, users: Vec<User> },
    /// First step of `SelectUser`; the posts follow
    UserSelected { id: u64, user: User },
    PostsLoaded { id: u64, posts: Vec<Post> },
    UserCreated { id: u64, user: User },
    UserDeleted { id: u64, user: User },
    CommentsLoaded { id: u64, post_id: u64, comments: Vec<Comment> },
    TimeoutResolved { id: u64, message: String },
    Failed { id: u64, operation: Operation, message: String },
}

impl ApiResponse {
    /// Get the command ID from the response
    pub fn id(&self) -> u64 {
        match self {
            ApiResponse::UsersLoaded { id, .. } => *id,
            ApiResponse::UserSelected { id, .. } => *id,
            ApiResponse::PostsLoaded { id, .. } => *id,
            ApiResponse::UserCreated { id, .. } => *id,
            ApiResponse::UserDeleted { id, .. } => *id,
            ApiResponse::CommentsLoaded { id, .. } => *id,
            ApiResponse::TimeoutResolved { id, .. } => *id,
            ApiResponse::Failed { id, .. } => *id,
        }
    }

    /// The view action this response answers
    pub fn operation(&self) -> Operation {
        match self {
            ApiResponse::UsersLoaded { .. } => Operation::LoadUsers,
            ApiResponse::UserSelected { .. } | ApiResponse::PostsLoaded { .. } => {
                Operation::SelectUser
            }
            ApiResponse::UserCreated { .. } => Operation::CreateUser,
            ApiResponse::UserDeleted { .. } => Operation::DeleteUser,
            ApiResponse::CommentsLoaded { .. } => Operation::LoadComments,
            ApiResponse::TimeoutResolved { .. } => Operation::SimulateTimeout,
            ApiResponse::Failed { operation, .. } => *operation,
        }
    }

    /// Check if this is a terminal response (no more messages expected for this id)
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ApiResponse::UserSelected { .. })
    }
}
