//! Resource records exposed by the service under test.
//!
//! Each resource kind has a full record (identity included) and a
//! create-request shape (identity omitted; the service assigns it).
//! Update requests reuse the full record since the service expects the
//! identity echoed back. Wire names are camelCase.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

// ─── Resource Kinds ───────────────────────────────────────────────────────────

/// One of the six collections exposed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Posts,
    Comments,
    Albums,
    Photos,
    Todos,
    Users,
}

impl Resource {
    pub const ALL: [Resource; 6] = [
        Resource::Posts,
        Resource::Comments,
        Resource::Albums,
        Resource::Photos,
        Resource::Todos,
        Resource::Users,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Resource::Posts => "/posts",
            Resource::Comments => "/comments",
            Resource::Albums => "/albums",
            Resource::Photos => "/photos",
            Resource::Todos => "/todos",
            Resource::Users => "/users",
        }
    }

    /// Number of records the reference service seeds the collection with.
    /// The highest valid identity doubles as the boundary value.
    pub fn collection_size(&self) -> i64 {
        match self {
            Resource::Posts => 100,
            Resource::Comments => 500,
            Resource::Albums => 100,
            Resource::Photos => 5000,
            Resource::Todos => 200,
            Resource::Users => 10,
        }
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path().trim_start_matches('/'))
    }
}

// ─── Full Records ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: i64,
    pub album_id: i64,
    pub title: String,
    // URL fields are carried as plain strings, never validated.
    pub url: String,
    pub thumbnail_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

// ─── Create-Request Shapes ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePost {
    pub title: String,
    pub body: String,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComment {
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlbum {
    pub user_id: i64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePhoto {
    pub album_id: i64,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    pub user_id: i64,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}
