//! In-memory post store - used as fallback when MongoDB is unavailable
//! and as the substrate for the black-box test suite.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{NewPost, Post, PostPatch};
use quill_core::error::RepoError;
use quill_core::ports::PostStore;

/// In-memory store over a vector guarded by an async RwLock.
///
/// Insertion order doubles as the list order. Note: data is lost on
/// process restart.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn insert(&self, new: NewPost) -> Result<Post, RepoError> {
        let post = Post::from(new);
        let mut posts = self.posts.write().await;
        posts.push(post.clone());
        Ok(post)
    }

    async fn insert_many(&self, news: Vec<NewPost>) -> Result<Vec<Post>, RepoError> {
        let stored: Vec<Post> = news.into_iter().map(Post::from).collect();
        let mut posts = self.posts.write().await;
        posts.extend(stored.iter().cloned());
        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_one(&self) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.first().cloned())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.len() as u64)
    }

    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Option<Post>, RepoError> {
        let mut posts = self.posts.write().await;
        match posts.iter_mut().find(|p| p.id == id) {
            Some(post) => {
                patch.apply(post);
                Ok(Some(post.clone()))
            }
            None => Ok(None),
        }
    }

    async fn drop_all(&self) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        posts.clear();
        Ok(())
    }
}
