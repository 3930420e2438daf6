use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pagekit_core::{CursorMeta, PageMeta};

use crate::contract::model::{NewPost, Post, PostFeedQuery, PostPageQuery};

/// REST DTO for post representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDto {
    pub id: i64,
    pub author: String,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// REST DTO for creating a new post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostReq {
    pub author: String,
    pub title: String,
    pub body: String,
}

/// Page-number list response: rows under `result`, page metadata flattened
/// alongside it into one object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPageDto {
    pub result: Vec<PostDto>,
    #[serde(flatten)]
    pub meta: PageMeta,
}

/// Cursor feed response, same flat shape with cursor metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostFeedDto {
    pub result: Vec<PostDto>,
    #[serde(flatten)]
    pub meta: CursorMeta,
}

/// REST DTO for page-number query parameters
#[derive(Debug, Clone, Deserialize)]
pub struct ListPostsQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    /// Also compute the total and page count (second query).
    #[serde(default)]
    pub count: bool,
    pub author: Option<String>,
}

/// REST DTO for cursor feed query parameters
#[derive(Debug, Clone, Deserialize)]
pub struct FeedQuery {
    pub after: Option<String>,
    pub before: Option<String>,
    pub limit: Option<u64>,
    pub author: Option<String>,
}

// Conversion implementations between REST DTOs and contract models

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            author: post.author,
            title: post.title,
            body: post.body,
            created_at: post.created_at,
        }
    }
}

impl From<CreatePostReq> for NewPost {
    fn from(req: CreatePostReq) -> Self {
        Self {
            author: req.author,
            title: req.title,
            body: req.body,
        }
    }
}

impl From<ListPostsQuery> for PostPageQuery {
    fn from(query: ListPostsQuery) -> Self {
        Self {
            page: query.page,
            limit: query.limit,
            include_total: query.count,
            author: query.author,
        }
    }
}

impl From<FeedQuery> for PostFeedQuery {
    fn from(query: FeedQuery) -> Self {
        Self {
            after: query.after,
            before: query.before,
            limit: query.limit,
            author: query.author,
        }
    }
}
