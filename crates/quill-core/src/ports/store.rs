use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewPost, Post, PostPatch};
use crate::error::RepoError;

/// Persistence port for posts.
///
/// The store owns identity assignment: callers hand it post-like records
/// without `id`/`created` and get back the stored entities. Operations are
/// atomic at single-post granularity; implementations surface failures as
/// `RepoError` rather than hang.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Persist a single new post, assigning `id` and `created`.
    async fn insert(&self, new: NewPost) -> Result<Post, RepoError>;

    /// Bulk-insert new posts, assigning each a unique `id` and `created`.
    /// Fixture seeding only - not part of the production create path.
    async fn insert_many(&self, news: Vec<NewPost>) -> Result<Vec<Post>, RepoError>;

    /// All posts, in a stable order (insertion order).
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// The post with the given id, if any.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// An arbitrary stored post, if the store is non-empty. Setup helper.
    async fn find_one(&self) -> Result<Option<Post>, RepoError>;

    /// Total number of stored posts.
    async fn count(&self) -> Result<u64, RepoError>;

    /// Apply a partial update in place, preserving `id`, `author` and
    /// `created`. Returns `None` when no post has the given id.
    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Option<Post>, RepoError>;

    /// Delete every stored post. Test teardown only - never reachable
    /// from the HTTP surface.
    async fn drop_all(&self) -> Result<(), RepoError>;
}
