//! MongoDB post store.

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::{Client, Collection};
use uuid::Uuid;

use quill_core::domain::{NewPost, Post, PostPatch};
use quill_core::error::RepoError;
use quill_core::ports::PostStore;

use super::MongoConfig;
use super::document::PostDocument;

const COLLECTION: &str = "posts";

/// MongoDB-backed post store over a single `posts` collection.
pub struct MongoPostStore {
    posts: Collection<PostDocument>,
}

impl MongoPostStore {
    /// Connect to MongoDB and bind the posts collection.
    pub async fn connect(config: &MongoConfig) -> Result<Self, RepoError> {
        let client = Client::with_uri_str(&config.url)
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;
        let db = client.database(&config.database);

        tracing::info!(database = %config.database, "Connected to MongoDB");

        Ok(Self {
            posts: db.collection(COLLECTION),
        })
    }
}

#[async_trait]
impl PostStore for MongoPostStore {
    async fn insert(&self, new: NewPost) -> Result<Post, RepoError> {
        let document = PostDocument::from(Post::from(new));
        self.posts
            .insert_one(&document)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;
        Ok(document.into())
    }

    async fn insert_many(&self, news: Vec<NewPost>) -> Result<Vec<Post>, RepoError> {
        let documents: Vec<PostDocument> = news
            .into_iter()
            .map(|new| PostDocument::from(Post::from(new)))
            .collect();

        if documents.is_empty() {
            return Ok(Vec::new());
        }

        self.posts
            .insert_many(&documents)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(documents.into_iter().map(Into::into).collect())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let mut cursor = self
            .posts
            .find(doc! {})
            .sort(doc! { "created": 1 })
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        let mut posts = Vec::new();
        while cursor
            .advance()
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?
        {
            let document = cursor
                .deserialize_current()
                .map_err(|e| RepoError::Query(e.to_string()))?;
            posts.push(Post::from(document));
        }

        Ok(posts)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let document = self
            .posts
            .find_one(doc! { "_id": id.to_string() })
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;
        Ok(document.map(Into::into))
    }

    async fn find_one(&self) -> Result<Option<Post>, RepoError> {
        let document = self
            .posts
            .find_one(doc! {})
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;
        Ok(document.map(Into::into))
    }

    async fn count(&self) -> Result<u64, RepoError> {
        self.posts
            .count_documents(doc! {})
            .await
            .map_err(|e| RepoError::Query(e.to_string()))
    }

    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Option<Post>, RepoError> {
        // An empty patch is a no-op read.
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }

        let PostPatch { title, content } = patch;
        let mut set = doc! {};
        if let Some(title) = title {
            set.insert("title", title);
        }
        if let Some(content) = content {
            set.insert("content", content);
        }

        let result = self
            .posts
            .update_one(doc! { "_id": id.to_string() }, doc! { "$set": set })
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if result.matched_count == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    async fn drop_all(&self) -> Result<(), RepoError> {
        self.posts
            .delete_many(doc! {})
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;
        Ok(())
    }
}
