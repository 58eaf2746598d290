//! Post CRUD handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::DomainError;
use quill_core::domain::{Author, NewPost, Post, PostPatch};
use quill_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Serialize a post for the API: author is flattened to a display string.
fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title,
        author: post.author.to_string(),
        content: post.content,
        created: post.created.to_rfc3339(),
    }
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound { id })?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate input before touching the store
    req.validate().map_err(DomainError::Validation)?;

    let post = state
        .posts
        .insert(NewPost {
            author: Author::new(req.author.first_name, req.author.last_name),
            title: req.title,
            content: req.content,
        })
        .await?;

    tracing::debug!(post_id = %post.id, "Created post");

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// PUT /posts/{id}
///
/// Partial update of `title` and/or `content`; everything else in the body
/// is ignored. The body `id` must match the path. Replies 201 with the
/// updated post - clients depend on the create status code here.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    if req.id != id {
        return Err(AppError::Validation(format!(
            "Request body id {} must match path id {}",
            req.id, id
        )));
    }

    let patch = PostPatch {
        title: req.title,
        content: req.content,
    };

    let post = state
        .posts
        .update(id, patch)
        .await?
        .ok_or(DomainError::NotFound { id })?;

    tracing::debug!(post_id = %post.id, "Updated post");

    Ok(HttpResponse::Created().json(to_response(post)))
}
