use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post author. Both names are always present together - there is no
/// partial author anywhere in the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// The API renders authors as a single display string.
impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// Post entity - a blog entry.
///
/// `id` and `created` are assigned once at creation and never change;
/// only `title` and `content` are mutable, via an explicit update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author: Author,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl Post {
    /// Create a new post with generated ID and creation timestamp.
    pub fn new(author: Author, title: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            author,
            title,
            content,
            created: Utc::now(),
        }
    }
}

/// A post-like input record, missing `id` and `created` - the store
/// assigns both on insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub author: Author,
    pub title: String,
    pub content: String,
}

impl From<NewPost> for Post {
    fn from(new: NewPost) -> Self {
        Post::new(new.author, new.title, new.content)
    }
}

/// Partial update to a post. Absent fields are left untouched;
/// `id`, `author` and `created` are never patched.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    /// Apply the patch in place.
    pub fn apply(&self, post: &mut Post) {
        if let Some(title) = &self.title {
            post.title = title.clone();
        }
        if let Some(content) = &self.content {
            post.content = content.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_post_assigns_id_and_created() {
        let before = Utc::now();
        let post = Post::new(Author::new("Ada", "Lovelace"), "T".into(), "C".into());
        assert!(!post.id.is_nil());
        assert!(post.created >= before);
    }

    #[test]
    fn distinct_posts_get_distinct_ids() {
        let a = Post::new(Author::new("A", "B"), "T".into(), "C".into());
        let b = Post::new(Author::new("A", "B"), "T".into(), "C".into());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn author_display_joins_names() {
        let author = Author::new("Ada", "Lovelace");
        assert_eq!(author.to_string(), "Ada Lovelace");
    }

    #[test]
    fn patch_preserves_identity_fields() {
        let mut post = Post::new(Author::new("Ada", "Lovelace"), "T".into(), "C".into());
        let (id, author, created) = (post.id, post.author.clone(), post.created);

        let patch = PostPatch {
            title: Some("New title".into()),
            content: None,
        };
        patch.apply(&mut post);

        assert_eq!(post.title, "New title");
        assert_eq!(post.content, "C");
        assert_eq!(post.id, id);
        assert_eq!(post.author, author);
        assert_eq!(post.created, created);
    }
}
