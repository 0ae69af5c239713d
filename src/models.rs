use serde::{Deserialize, Serialize};

/// A registered user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub age: u32,
}

/// A post written by a user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

/// A comment left on a post
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub post_id: u64,
    pub name: String,
    pub body: String,
}

/// Payload for `users.create`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: u32,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: u32) -> Self {
        NewUser {
            name: name.into(),
            email: email.into(),
            age,
        }
    }

    pub(crate) fn into_user(self) -> User {
        User {
            id: 0,
            name: self.name,
            email: self.email,
            age: self.age,
        }
    }
}

/// Partial update for `users.update` - only `Some` fields are applied
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

impl UserPatch {
    /// Merge the supplied fields into `user`, leaving the rest untouched
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(age) = self.age {
            user.age = age;
        }
    }
}

/// Payload for `posts.create`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

impl NewPost {
    pub(crate) fn into_post(self) -> Post {
        Post {
            id: 0,
            user_id: self.user_id,
            title: self.title,
            body: self.body,
        }
    }
}

/// Payload for `comments.create`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub post_id: u64,
    pub name: String,
    pub body: String,
}

impl NewComment {
    pub(crate) fn into_comment(self) -> Comment {
        Comment {
            id: 0,
            post_id: self.post_id,
            name: self.name,
            body: self.body,
        }
    }
}

/// Result of the timeout simulation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayedMessage {
    pub message: String,
}
