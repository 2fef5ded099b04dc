//! Deterministic test payloads.
//!
//! One factory per resource kind returns a create-request value with fixed
//! defaults; any subset of fields can be replaced through the matching
//! overrides struct. An override always wins wholesale over the default —
//! there is no merging within a field. Empty strings and boundary ids are
//! ordinary override values.

use crate::domain::{CreateAlbum, CreateComment, CreatePhoto, CreatePost, CreateTodo, CreateUser};

/// Identity far past every collection's seeded range; a lookup with it is
/// expected to miss.
pub const INVALID_ID: i64 = 999_999;

/// Probe string for encoding round trips: ASCII punctuation plus accented
/// Latin letters and currency symbols.
pub fn special_characters() -> &'static str {
    "Special Characters: !@#$%^&*()_+-=[]{}|;:,.<>? áéíóú ñ ç ß € £ ¥"
}

/// A filler string of exactly `size` characters.
pub fn large_payload(size: usize) -> String {
    "A".repeat(size)
}

#[derive(Debug, Clone, Default)]
pub struct PostOverrides {
    pub title: Option<String>,
    pub body: Option<String>,
    pub user_id: Option<i64>,
}

pub fn test_post(overrides: PostOverrides) -> CreatePost {
    CreatePost {
        title: overrides.title.unwrap_or_else(|| "Test Post Title".to_string()),
        body: overrides.body.unwrap_or_else(|| "Test Post Body".to_string()),
        user_id: overrides.user_id.unwrap_or(1),
    }
}

#[derive(Debug, Clone, Default)]
pub struct CommentOverrides {
    pub post_id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub body: Option<String>,
}

pub fn test_comment(overrides: CommentOverrides) -> CreateComment {
    CreateComment {
        post_id: overrides.post_id.unwrap_or(1),
        name: overrides.name.unwrap_or_else(|| "Test Comment".to_string()),
        email: overrides.email.unwrap_or_else(|| "test@example.com".to_string()),
        body: overrides
            .body
            .unwrap_or_else(|| "This is a test comment".to_string()),
    }
}

#[derive(Debug, Clone, Default)]
pub struct AlbumOverrides {
    pub user_id: Option<i64>,
    pub title: Option<String>,
}

pub fn test_album(overrides: AlbumOverrides) -> CreateAlbum {
    CreateAlbum {
        user_id: overrides.user_id.unwrap_or(1),
        title: overrides.title.unwrap_or_else(|| "Test Album".to_string()),
    }
}

#[derive(Debug, Clone, Default)]
pub struct PhotoOverrides {
    pub album_id: Option<i64>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub thumbnail_url: Option<String>,
}

pub fn test_photo(overrides: PhotoOverrides) -> CreatePhoto {
    CreatePhoto {
        album_id: overrides.album_id.unwrap_or(1),
        title: overrides.title.unwrap_or_else(|| "Test Photo".to_string()),
        url: overrides
            .url
            .unwrap_or_else(|| "https://via.placeholder.com/600/92c952".to_string()),
        thumbnail_url: overrides
            .thumbnail_url
            .unwrap_or_else(|| "https://via.placeholder.com/150/92c952".to_string()),
    }
}

#[derive(Debug, Clone, Default)]
pub struct TodoOverrides {
    pub user_id: Option<i64>,
    pub title: Option<String>,
    pub completed: Option<bool>,
}

pub fn test_todo(overrides: TodoOverrides) -> CreateTodo {
    CreateTodo {
        user_id: overrides.user_id.unwrap_or(1),
        title: overrides.title.unwrap_or_else(|| "Test Todo".to_string()),
        completed: overrides.completed.unwrap_or(false),
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserOverrides {
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

pub fn test_user(overrides: UserOverrides) -> CreateUser {
    CreateUser {
        name: overrides.name.unwrap_or_else(|| "John Doe".to_string()),
        username: overrides.username.unwrap_or_else(|| "johndoe".to_string()),
        email: overrides
            .email
            .unwrap_or_else(|| "john.doe@example.com".to_string()),
        phone: overrides
            .phone
            .unwrap_or_else(|| "1-770-736-8031 x56442".to_string()),
        website: overrides.website.unwrap_or_else(|| "hildegard.org".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Resource;

    #[test]
    fn post_defaults_are_fixed() {
        let post = test_post(PostOverrides::default());
        assert_eq!(post.title, "Test Post Title");
        assert_eq!(post.body, "Test Post Body");
        assert_eq!(post.user_id, 1);
    }

    #[test]
    fn overrides_replace_only_named_fields() {
        let base = test_post(PostOverrides::default());
        let overridden = test_post(PostOverrides {
            title: Some("Custom".to_string()),
            ..Default::default()
        });
        assert_eq!(overridden.title, "Custom");
        assert_eq!(overridden.body, base.body);
        assert_eq!(overridden.user_id, base.user_id);
    }

    #[test]
    fn full_override_wins_on_every_field() {
        let todo = test_todo(TodoOverrides {
            user_id: Some(9),
            title: Some("Other".to_string()),
            completed: Some(true),
        });
        assert_eq!(todo.user_id, 9);
        assert_eq!(todo.title, "Other");
        assert!(todo.completed);
    }

    #[test]
    fn no_overrides_equals_defaults_for_every_kind() {
        assert_eq!(test_post(PostOverrides::default()), test_post(PostOverrides::default()));
        assert_eq!(
            test_comment(CommentOverrides::default()),
            test_comment(CommentOverrides::default())
        );
        assert_eq!(
            test_album(AlbumOverrides::default()),
            test_album(AlbumOverrides::default())
        );
        assert_eq!(
            test_photo(PhotoOverrides::default()),
            test_photo(PhotoOverrides::default())
        );
        assert_eq!(test_todo(TodoOverrides::default()), test_todo(TodoOverrides::default()));
        assert_eq!(test_user(UserOverrides::default()), test_user(UserOverrides::default()));
    }

    #[test]
    fn empty_string_is_a_legitimate_override() {
        let post = test_post(PostOverrides {
            title: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(post.title, "");
        assert_eq!(post.body, "Test Post Body");
    }

    #[test]
    fn boundary_ids_need_no_special_casing() {
        let first = test_todo(TodoOverrides {
            user_id: Some(1),
            ..Default::default()
        });
        let last = test_todo(TodoOverrides {
            user_id: Some(Resource::Users.collection_size()),
            ..Default::default()
        });
        assert_eq!(first.user_id, 1);
        assert_eq!(last.user_id, 10);
    }

    #[test]
    fn large_payload_has_exact_length() {
        assert_eq!(large_payload(0), "");
        assert_eq!(large_payload(1), "A");
        assert_eq!(large_payload(5000).len(), 5000);
        assert!(large_payload(1000).chars().all(|c| c == 'A'));
    }

    #[test]
    fn special_characters_cover_ascii_and_non_ascii() {
        let probe = special_characters();
        assert!(probe.contains("!@#$%^&*()_+-=[]{}|;:,.<>?"));
        assert!(probe.contains("áéíóú"));
        assert!(probe.contains('€'));
        assert!(probe.contains('ß'));
    }
}
