//! Typed request helpers, one small set per resource kind.
//!
//! Thin call sites over [`ApiClient`] that deserialize straight into the
//! domain records. Scenarios that need the raw response (status, headers)
//! use the client directly instead.

use crate::domain::{
    Album, Comment, CreateAlbum, CreateComment, CreatePhoto, CreatePost, CreateTodo, CreateUser,
    Photo, Post, Todo, User,
};
use crate::error::Error;
use crate::http::{ApiClient, ApiResponse};

pub struct ResourceApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ResourceApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    // ─── Posts ────────────────────────────────────────────────────────────────

    pub async fn all_posts(&self) -> Result<Vec<Post>, Error> {
        self.client.get("/posts").await?.json_as()
    }

    pub async fn post_by_id(&self, id: i64) -> Result<Post, Error> {
        self.client.get(&format!("/posts/{id}")).await?.json_as()
    }

    pub async fn create_post(&self, data: &CreatePost) -> Result<Post, Error> {
        self.client.post("/posts", data).await?.json_as()
    }

    pub async fn update_post(&self, id: i64, data: &Post) -> Result<Post, Error> {
        self.client.put(&format!("/posts/{id}"), data).await?.json_as()
    }

    pub async fn delete_post(&self, id: i64) -> Result<ApiResponse, Error> {
        self.client.delete(&format!("/posts/{id}")).await
    }

    pub async fn posts_by_user(&self, user_id: i64) -> Result<Vec<Post>, Error> {
        self.client
            .get_query("/posts", &[("userId", user_id.to_string())])
            .await?
            .json_as()
    }

    // ─── Comments ─────────────────────────────────────────────────────────────

    pub async fn all_comments(&self) -> Result<Vec<Comment>, Error> {
        self.client.get("/comments").await?.json_as()
    }

    pub async fn comment_by_id(&self, id: i64) -> Result<Comment, Error> {
        self.client.get(&format!("/comments/{id}")).await?.json_as()
    }

    pub async fn create_comment(&self, data: &CreateComment) -> Result<Comment, Error> {
        self.client.post("/comments", data).await?.json_as()
    }

    pub async fn update_comment(&self, id: i64, data: &Comment) -> Result<Comment, Error> {
        self.client.put(&format!("/comments/{id}"), data).await?.json_as()
    }

    pub async fn delete_comment(&self, id: i64) -> Result<ApiResponse, Error> {
        self.client.delete(&format!("/comments/{id}")).await
    }

    pub async fn comments_by_post(&self, post_id: i64) -> Result<Vec<Comment>, Error> {
        self.client
            .get_query("/comments", &[("postId", post_id.to_string())])
            .await?
            .json_as()
    }

    // ─── Albums ───────────────────────────────────────────────────────────────

    pub async fn all_albums(&self) -> Result<Vec<Album>, Error> {
        self.client.get("/albums").await?.json_as()
    }

    pub async fn album_by_id(&self, id: i64) -> Result<Album, Error> {
        self.client.get(&format!("/albums/{id}")).await?.json_as()
    }

    pub async fn create_album(&self, data: &CreateAlbum) -> Result<Album, Error> {
        self.client.post("/albums", data).await?.json_as()
    }

    pub async fn update_album(&self, id: i64, data: &Album) -> Result<Album, Error> {
        self.client.put(&format!("/albums/{id}"), data).await?.json_as()
    }

    pub async fn delete_album(&self, id: i64) -> Result<ApiResponse, Error> {
        self.client.delete(&format!("/albums/{id}")).await
    }

    pub async fn albums_by_user(&self, user_id: i64) -> Result<Vec<Album>, Error> {
        self.client
            .get_query("/albums", &[("userId", user_id.to_string())])
            .await?
            .json_as()
    }

    // ─── Photos ───────────────────────────────────────────────────────────────

    pub async fn all_photos(&self) -> Result<Vec<Photo>, Error> {
        self.client.get("/photos").await?.json_as()
    }

    pub async fn photo_by_id(&self, id: i64) -> Result<Photo, Error> {
        self.client.get(&format!("/photos/{id}")).await?.json_as()
    }

    pub async fn create_photo(&self, data: &CreatePhoto) -> Result<Photo, Error> {
        self.client.post("/photos", data).await?.json_as()
    }

    pub async fn update_photo(&self, id: i64, data: &Photo) -> Result<Photo, Error> {
        self.client.put(&format!("/photos/{id}"), data).await?.json_as()
    }

    pub async fn delete_photo(&self, id: i64) -> Result<ApiResponse, Error> {
        self.client.delete(&format!("/photos/{id}")).await
    }

    pub async fn photos_by_album(&self, album_id: i64) -> Result<Vec<Photo>, Error> {
        self.client
            .get_query("/photos", &[("albumId", album_id.to_string())])
            .await?
            .json_as()
    }

    // ─── Todos ────────────────────────────────────────────────────────────────

    pub async fn all_todos(&self) -> Result<Vec<Todo>, Error> {
        self.client.get("/todos").await?.json_as()
    }

    pub async fn todo_by_id(&self, id: i64) -> Result<Todo, Error> {
        self.client.get(&format!("/todos/{id}")).await?.json_as()
    }

    pub async fn create_todo(&self, data: &CreateTodo) -> Result<Todo, Error> {
        self.client.post("/todos", data).await?.json_as()
    }

    pub async fn update_todo(&self, id: i64, data: &Todo) -> Result<Todo, Error> {
        self.client.put(&format!("/todos/{id}"), data).await?.json_as()
    }

    pub async fn delete_todo(&self, id: i64) -> Result<ApiResponse, Error> {
        self.client.delete(&format!("/todos/{id}")).await
    }

    pub async fn todos_by_user(&self, user_id: i64) -> Result<Vec<Todo>, Error> {
        self.client
            .get_query("/todos", &[("userId", user_id.to_string())])
            .await?
            .json_as()
    }

    pub async fn todos_by_completion(&self, completed: bool) -> Result<Vec<Todo>, Error> {
        self.client
            .get_query("/todos", &[("completed", completed.to_string())])
            .await?
            .json_as()
    }

    // ─── Users ────────────────────────────────────────────────────────────────

    pub async fn all_users(&self) -> Result<Vec<User>, Error> {
        self.client.get("/users").await?.json_as()
    }

    pub async fn user_by_id(&self, id: i64) -> Result<User, Error> {
        self.client.get(&format!("/users/{id}")).await?.json_as()
    }

    pub async fn create_user(&self, data: &CreateUser) -> Result<User, Error> {
        self.client.post("/users", data).await?.json_as()
    }

    pub async fn update_user(&self, id: i64, data: &User) -> Result<User, Error> {
        self.client.put(&format!("/users/{id}"), data).await?.json_as()
    }

    pub async fn delete_user(&self, id: i64) -> Result<ApiResponse, Error> {
        self.client.delete(&format!("/users/{id}")).await
    }
}
