//! Mock API - an in-process stand-in for a remote CRUD service
//!
//! Every call sleeps for its fixed latency first, then runs one repository
//! operation and returns owned data. Calls are never coordinated with each
//! other; the repositories only serialize the mutation itself.

pub mod error;
pub mod latency;

use std::sync::Arc;

use crate::constants::*;
use crate::models::{Comment, DelayedMessage, NewComment, NewPost, NewUser, Post, User, UserPatch};
use crate::store::seed::{seed_comments, seed_posts, seed_users};
use crate::store::{MemoryRepository, Repository};

pub use error::{ApiError, ApiResult};
pub use latency::Latency;

/// Handle to the mock API. Cheap to clone; clones share the same data.
#[derive(Clone)]
pub struct MockApi {
    users: Arc<dyn Repository<User>>,
    posts: Arc<dyn Repository<Post>>,
    comments: Arc<dyn Repository<Comment>>,
    latency: Latency,
}

impl MockApi {
    /// In-memory API loaded with the demo records
    pub fn seeded(latency: Latency) -> Self {
        Self::with_repositories(
            Arc::new(MemoryRepository::with_records(seed_users())),
            Arc::new(MemoryRepository::with_records(seed_posts())),
            Arc::new(MemoryRepository::with_records(seed_comments())),
            latency,
        )
    }

    pub fn with_repositories(
        users: Arc<dyn Repository<User>>,
        posts: Arc<dyn Repository<Post>>,
        comments: Arc<dyn Repository<Comment>>,
        latency: Latency,
    ) -> Self {
        MockApi {
            users,
            posts,
            comments,
            latency,
        }
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi { api: self }
    }

    pub fn posts(&self) -> PostsApi<'_> {
        PostsApi { api: self }
    }

    pub fn comments(&self) -> CommentsApi<'_> {
        CommentsApi { api: self }
    }

    /// Always fails
    pub async fn simulate_error(&self) -> ApiResult<()> {
        self.latency.wait(SIMULATE_ERROR_DELAY).await;
        Err(ApiError::Simulated)
    }

    /// Resolves after a long delay
    pub async fn simulate_timeout(&self) -> DelayedMessage {
        self.latency.wait(SIMULATE_TIMEOUT_DELAY).await;
        DelayedMessage {
            message: DELAYED_MESSAGE.to_string(),
        }
    }
}

pub struct UsersApi<'a> {
    api: &'a MockApi,
}

impl UsersApi<'_> {
    pub async fn get_all(&self) -> Vec<User> {
        self.api.latency.wait(USERS_GET_ALL_DELAY).await;
        self.api.users.all().await
    }

    pub async fn get_by_id(&self, id: u64) -> ApiResult<User> {
        self.api.latency.wait(USERS_GET_BY_ID_DELAY).await;
        self.api.users.find(id).await.ok_or(ApiError::UserNotFound)
    }

    pub async fn create(&self, user: NewUser) -> User {
        self.api.latency.wait(USERS_CREATE_DELAY).await;
        self.api.users.insert(user.into_user()).await
    }

    pub async fn update(&self, id: u64, patch: UserPatch) -> ApiResult<User> {
        self.api.latency.wait(USERS_UPDATE_DELAY).await;
        self.api
            .users
            .update(id, Box::new(move |user: &mut User| patch.apply(user)))
            .await
            .ok_or(ApiError::UserNotFound)
    }

    pub async fn delete(&self, id: u64) -> ApiResult<User> {
        self.api.latency.wait(USERS_DELETE_DELAY).await;
        self.api.users.remove(id).await.ok_or(ApiError::UserNotFound)
    }
}

pub struct PostsApi<'a> {
    api: &'a MockApi,
}

impl PostsApi<'_> {
    pub async fn get_all(&self) -> Vec<Post> {
        self.api.latency.wait(POSTS_GET_ALL_DELAY).await;
        self.api.posts.all().await
    }

    pub async fn get_by_id(&self, id: u64) -> ApiResult<Post> {
        self.api.latency.wait(POSTS_GET_BY_ID_DELAY).await;
        self.api.posts.find(id).await.ok_or(ApiError::PostNotFound)
    }

    /// Posts written by `user_id`; empty when there are none
    pub async fn get_by_user_id(&self, user_id: u64) -> Vec<Post> {
        self.api.latency.wait(POSTS_GET_BY_USER_ID_DELAY).await;
        self.api.posts.filter(&move |post: &Post| post.user_id == user_id).await
    }

    /// Fails with `UserNotFound` when the author does not exist
    pub async fn create(&self, post: NewPost) -> ApiResult<Post> {
        self.api.latency.wait(POSTS_CREATE_DELAY).await;
        if self.api.users.find(post.user_id).await.is_none() {
            tracing::warn!(user_id = post.user_id, "Rejected post with unknown author");
            return Err(ApiError::UserNotFound);
        }
        Ok(self.api.posts.insert(post.into_post()).await)
    }
}

pub struct CommentsApi<'a> {
    api: &'a MockApi,
}

impl CommentsApi<'_> {
    /// Comments on `post_id`; empty when there are none
    pub async fn get_by_post_id(&self, post_id: u64) -> Vec<Comment> {
        self.api.latency.wait(COMMENTS_GET_BY_POST_ID_DELAY).await;
        self.api
            .comments
            .filter(&move |comment: &Comment| comment.post_id == post_id)
            .await
    }

    /// Fails with `PostNotFound` when the post does not exist
    pub async fn create(&self, comment: NewComment) -> ApiResult<Comment> {
        self.api.latency.wait(COMMENTS_CREATE_DELAY).await;
        if self.api.posts.find(comment.post_id).await.is_none() {
            tracing::warn!(post_id = comment.post_id, "Rejected comment on unknown post");
            return Err(ApiError::PostNotFound);
        }
        Ok(self.api.comments.insert(comment.into_comment()).await)
    }
}
