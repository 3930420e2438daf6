use chrono::{DateTime, Utc};

/// Domain representation of a forum post (intentionally serde-free; REST
/// DTOs own the wire shape).
#[derive(Clone, Debug, PartialEq)]
pub struct Post {
    pub id: i64,
    pub author: String,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Data required to publish a new post.
#[derive(Clone, Debug)]
pub struct NewPost {
    pub author: String,
    pub title: String,
    pub body: String,
}

/// Page-number listing request.
#[derive(Clone, Debug, Default)]
pub struct PostPageQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub include_total: bool,
    pub author: Option<String>,
}

/// Cursor feed request.
#[derive(Clone, Debug, Default)]
pub struct PostFeedQuery {
    pub after: Option<String>,
    pub before: Option<String>,
    pub limit: Option<u64>,
    pub author: Option<String>,
}
