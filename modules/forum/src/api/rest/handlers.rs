use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::Json,
    Extension,
};
use tracing::{error, info};

use crate::api::rest::dto::{
    CreatePostReq, FeedQuery, ListPostsQuery, PostDto, PostFeedDto, PostPageDto,
};
use crate::domain::service::Service;

/// List posts by page number, with optional total count and author filter
pub async fn list_posts(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    Query(query): Query<ListPostsQuery>,
) -> Result<Json<PostPageDto>, StatusCode> {
    info!("Listing posts with query: {:?}", query);

    match svc.list_posts(query.into()).await {
        Ok((posts, meta)) => Ok(Json(PostPageDto {
            result: posts.into_iter().map(PostDto::from).collect(),
            meta,
        })),
        Err(e) => {
            error!("Failed to list posts: {}", e);
            Err(map_domain_error_to_status_code(&e))
        }
    }
}

/// Cursor feed over posts
pub async fn feed(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    Query(query): Query<FeedQuery>,
) -> Result<Json<PostFeedDto>, StatusCode> {
    info!("Feeding posts with query: {:?}", query);

    match svc.feed(query.into()).await {
        Ok((posts, meta)) => Ok(Json(PostFeedDto {
            result: posts.into_iter().map(PostDto::from).collect(),
            meta,
        })),
        Err(e) => {
            error!("Failed to feed posts: {}", e);
            Err(map_domain_error_to_status_code(&e))
        }
    }
}

/// Get a specific post by ID
pub async fn get_post(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    Path(id): Path<i64>,
) -> Result<Json<PostDto>, StatusCode> {
    info!("Getting post with id: {}", id);

    match svc.get_post(id).await {
        Ok(post) => Ok(Json(PostDto::from(post))),
        Err(e) => {
            error!("Failed to get post {}: {}", id, e);
            Err(map_domain_error_to_status_code(&e))
        }
    }
}

/// Create a new post
pub async fn create_post(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    Json(req): Json<CreatePostReq>,
) -> Result<(StatusCode, Json<PostDto>), StatusCode> {
    info!("Creating post: {:?}", req);

    match svc.create_post(req.into()).await {
        Ok(post) => Ok((StatusCode::CREATED, Json(PostDto::from(post)))),
        Err(e) => {
            error!("Failed to create post: {}", e);
            Err(map_domain_error_to_status_code(&e))
        }
    }
}

/// Map domain errors to HTTP status codes
fn map_domain_error_to_status_code(error: &crate::domain::error::DomainError) -> StatusCode {
    use crate::domain::error::DomainError;

    match error {
        DomainError::PostNotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::EmptyTitle
        | DomainError::InvalidPagination { .. }
        | DomainError::InvalidCursor { .. } => StatusCode::BAD_REQUEST,
        DomainError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
