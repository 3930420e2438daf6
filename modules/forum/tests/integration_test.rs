use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use tower::ServiceExt;

use forum::{
    api::rest::dto::{CreatePostReq, PostDto},
    contract::model::{NewPost, PostFeedQuery, PostPageQuery},
    domain::service::{Service, ServiceConfig},
    infra::storage::migrations::Migrator,
};

/// Create a fresh test database for each test
async fn create_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to test database");

    // Run migrations
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create a test domain service
async fn create_test_service() -> Arc<Service> {
    let db = create_test_db().await;
    let config = ServiceConfig::default();
    Arc::new(Service::new(db, config))
}

/// Create a test HTTP router
async fn create_test_router() -> (Arc<Service>, Router) {
    let service = create_test_service().await;
    let router = forum::api::rest::routes::router(service.clone());
    (service, router)
}

/// Seed `n` posts, authors alternating between alice and bob
async fn seed_posts(service: &Service, n: i64) -> Result<()> {
    for i in 1..=n {
        let author = if i % 2 == 0 { "bob" } else { "alice" };
        service
            .create_post(NewPost {
                author: author.to_string(),
                title: format!("Post {}", i),
                body: format!("Body of post {}", i),
            })
            .await?;
    }
    Ok(())
}

#[tokio::test]
async fn test_domain_service_crud() -> Result<()> {
    let service = create_test_service().await;

    let created = service
        .create_post(NewPost {
            author: "alice".to_string(),
            title: "Hello".to_string(),
            body: "First post".to_string(),
        })
        .await?;
    assert_eq!(created.author, "alice");
    assert_eq!(created.title, "Hello");

    let retrieved = service.get_post(created.id).await?;
    assert_eq!(retrieved, created);

    let missing = service.get_post(created.id + 1).await;
    assert!(missing.is_err());

    Ok(())
}

#[tokio::test]
async fn test_domain_service_validation() -> Result<()> {
    let service = create_test_service().await;

    let result = service
        .create_post(NewPost {
            author: "alice".to_string(),
            title: "   ".to_string(),
            body: "No title".to_string(),
        })
        .await;
    assert!(result.is_err());

    Ok(())
}

#[tokio::test]
async fn test_page_listing_without_count() -> Result<()> {
    let service = create_test_service().await;
    seed_posts(&service, 23).await?;

    let (posts, meta) = service
        .list_posts(PostPageQuery {
            page: Some(2),
            limit: Some(10),
            include_total: false,
            author: None,
        })
        .await?;

    assert_eq!(posts.len(), 10);
    assert_eq!(posts[0].title, "Post 11");
    assert_eq!(meta.current_page, 2);
    assert_eq!(meta.previous_page, Some(1));
    assert_eq!(meta.next_page, Some(3));
    assert!(!meta.is_first_page);
    assert!(!meta.is_last_page);
    // Without a count pass the totals stay unknown
    assert_eq!(meta.page_count, None);
    assert_eq!(meta.total_count, None);

    Ok(())
}

#[tokio::test]
async fn test_page_listing_with_count() -> Result<()> {
    let service = create_test_service().await;
    seed_posts(&service, 23).await?;

    let (posts, meta) = service
        .list_posts(PostPageQuery {
            page: Some(3),
            limit: Some(10),
            include_total: true,
            author: None,
        })
        .await?;

    assert_eq!(posts.len(), 3);
    assert_eq!(meta.current_page, 3);
    assert_eq!(meta.next_page, None);
    assert!(meta.is_last_page);
    assert_eq!(meta.page_count, Some(3));
    assert_eq!(meta.total_count, Some(23));

    Ok(())
}

#[tokio::test]
async fn test_page_listing_author_filter() -> Result<()> {
    let service = create_test_service().await;
    seed_posts(&service, 23).await?;

    // Odd ids are alice: 12 of 23
    let (posts, meta) = service
        .list_posts(PostPageQuery {
            page: Some(1),
            limit: Some(10),
            include_total: true,
            author: Some("alice".to_string()),
        })
        .await?;

    assert_eq!(posts.len(), 10);
    assert!(posts.iter().all(|p| p.author == "alice"));
    assert_eq!(meta.total_count, Some(12));
    assert_eq!(meta.page_count, Some(2));

    Ok(())
}

#[tokio::test]
async fn test_cursor_feed_walk() -> Result<()> {
    let service = create_test_service().await;
    seed_posts(&service, 23).await?;

    // First slice
    let (posts, meta) = service
        .feed(PostFeedQuery {
            after: None,
            before: None,
            limit: Some(10),
            author: None,
        })
        .await?;
    assert_eq!(posts.len(), 10);
    assert_eq!(posts[0].title, "Post 1");
    assert!(meta.has_next_page);
    assert!(!meta.has_previous_page);
    let second_anchor = meta.end_cursor.clone().expect("end cursor");

    // Second slice
    let (posts, meta) = service
        .feed(PostFeedQuery {
            after: Some(second_anchor),
            before: None,
            limit: Some(10),
            author: None,
        })
        .await?;
    assert_eq!(posts.len(), 10);
    assert_eq!(posts[0].title, "Post 11");
    assert!(meta.has_next_page);
    assert!(meta.has_previous_page);
    let second_start = meta.start_cursor.clone().expect("start cursor");
    let third_anchor = meta.end_cursor.clone().expect("end cursor");

    // Final slice
    let (posts, meta) = service
        .feed(PostFeedQuery {
            after: Some(third_anchor),
            before: None,
            limit: Some(10),
            author: None,
        })
        .await?;
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[2].title, "Post 23");
    assert!(!meta.has_next_page);
    assert!(meta.has_previous_page);

    // Walk back from the start of the second slice: exactly the first ten
    // rows come back and no earlier page is reported
    let (posts, meta) = service
        .feed(PostFeedQuery {
            after: None,
            before: Some(second_start),
            limit: Some(10),
            author: None,
        })
        .await?;
    assert_eq!(posts.len(), 10);
    assert_eq!(posts[0].title, "Post 1");
    assert_eq!(posts[9].title, "Post 10");
    assert!(meta.has_next_page);
    assert!(!meta.has_previous_page);

    Ok(())
}

#[tokio::test]
async fn test_rest_api_create_post() -> Result<()> {
    let (_service, router) = create_test_router().await;

    let create_request = CreatePostReq {
        author: "alice".to_string(),
        title: "REST post".to_string(),
        body: "Posted over HTTP".to_string(),
    };

    let request = Request::builder()
        .method("POST")
        .uri("/posts")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&create_request)?))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let post: PostDto = serde_json::from_slice(&body)?;

    assert_eq!(post.author, "alice");
    assert_eq!(post.title, "REST post");

    Ok(())
}

#[tokio::test]
async fn test_rest_api_list_posts_flat_shape() -> Result<()> {
    let (service, router) = create_test_router().await;
    seed_posts(&service, 23).await?;

    let request = Request::builder()
        .method("GET")
        .uri("/posts?page=2&limit=10&count=true")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let json: serde_json::Value = serde_json::from_slice(&body)?;

    // Rows under "result", metadata flattened beside it
    assert_eq!(json["result"].as_array().map(Vec::len), Some(10));
    assert_eq!(json["current_page"], 2);
    assert_eq!(json["previous_page"], 1);
    assert_eq!(json["next_page"], 3);
    assert_eq!(json["is_first_page"], false);
    assert_eq!(json["is_last_page"], false);
    assert_eq!(json["page_count"], 3);
    assert_eq!(json["total_count"], 23);

    Ok(())
}

#[tokio::test]
async fn test_rest_api_feed_follows_cursor() -> Result<()> {
    let (service, router) = create_test_router().await;
    seed_posts(&service, 23).await?;

    let request = Request::builder()
        .method("GET")
        .uri("/posts/feed?limit=10")
        .body(Body::empty())
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let json: serde_json::Value = serde_json::from_slice(&body)?;

    assert_eq!(json["result"].as_array().map(Vec::len), Some(10));
    assert_eq!(json["has_next_page"], true);
    assert_eq!(json["has_previous_page"], false);
    let end_cursor = json["end_cursor"].as_str().expect("end cursor").to_string();

    let request = Request::builder()
        .method("GET")
        .uri(format!("/posts/feed?limit=10&after={}", end_cursor))
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let json: serde_json::Value = serde_json::from_slice(&body)?;

    assert_eq!(json["result"][0]["title"], "Post 11");
    assert_eq!(json["has_previous_page"], true);

    Ok(())
}

#[tokio::test]
async fn test_rest_api_rejects_bad_cursor() -> Result<()> {
    let (service, router) = create_test_router().await;
    seed_posts(&service, 3).await?;

    let request = Request::builder()
        .method("GET")
        .uri("/posts/feed?after=@@@@")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn test_rest_api_rejects_conflicting_cursors() -> Result<()> {
    let (service, router) = create_test_router().await;
    seed_posts(&service, 5).await?;

    let (_, meta) = service
        .feed(PostFeedQuery {
            after: None,
            before: None,
            limit: Some(2),
            author: None,
        })
        .await?;
    let cursor = meta.end_cursor.expect("end cursor");

    let request = Request::builder()
        .method("GET")
        .uri(format!("/posts/feed?after={c}&before={c}", c = cursor))
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn test_rest_api_rejects_unaddressable_page() -> Result<()> {
    let (service, router) = create_test_router().await;
    seed_posts(&service, 3).await?;

    // Page numbers are trusted, but one whose offset cannot be computed
    // is rejected rather than wrapped around.
    let request = Request::builder()
        .method("GET")
        .uri(format!("/posts?page={}&limit=10", u64::MAX))
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn test_rest_api_post_not_found() -> Result<()> {
    let (_service, router) = create_test_router().await;

    let request = Request::builder()
        .method("GET")
        .uri("/posts/999")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}
