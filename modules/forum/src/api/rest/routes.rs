use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use crate::api::rest::handlers;
use crate::domain::service::Service;

/// Build the module router. `/posts/feed` is registered before the
/// parameterized `/posts/{id}` so it is matched as a literal segment.
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/posts", get(handlers::list_posts).post(handlers::create_post))
        .route("/posts/feed", get(handlers::feed))
        .route("/posts/{id}", get(handlers::get_post))
        .layer(Extension(service))
}
