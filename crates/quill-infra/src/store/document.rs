//! Wire document for the MongoDB collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use quill_core::domain::{Author, Post};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorDocument {
    pub first_name: String,
    pub last_name: String,
}

/// A post as stored in the `posts` collection. The domain id is the
/// document `_id`, so uniqueness is enforced by the collection itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDocument {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub author: AuthorDocument,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl From<Post> for PostDocument {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            author: AuthorDocument {
                first_name: post.author.first_name,
                last_name: post.author.last_name,
            },
            title: post.title,
            content: post.content,
            created: post.created,
        }
    }
}

impl From<PostDocument> for Post {
    fn from(document: PostDocument) -> Self {
        Self {
            id: document.id,
            author: Author {
                first_name: document.author.first_name,
                last_name: document.author.last_name,
            },
            title: document.title,
            content: document.content,
            created: document.created,
        }
    }
}
