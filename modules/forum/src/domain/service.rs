use chrono::Utc;
use sea_orm::DatabaseConnection;

use pagekit_core::{CursorArgs, CursorMeta, PageArgs, PageMeta};

use crate::contract::model::{NewPost, Post, PostFeedQuery, PostPageQuery};
use crate::domain::error::DomainError;
use crate::infra::storage::{entity, mapper::entity_to_contract};

/// Service configuration for limit policy
#[derive(Clone, Copy, Debug)]
pub struct ServiceConfig {
    pub default_limit: u64,
    pub max_limit: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_limit: 25,
            max_limit: 100,
        }
    }
}

/// Domain service for forum posts
pub struct Service {
    db: DatabaseConnection,
    config: ServiceConfig,
}

impl Service {
    pub fn new(db: DatabaseConnection, config: ServiceConfig) -> Self {
        Self { db, config }
    }

    /// Clamp a requested limit into the configured window. A zero request
    /// is bumped to one rather than rejected, matching the REST contract.
    fn clamp_limit(&self, requested: Option<u64>) -> u64 {
        let mut limit = requested.unwrap_or(self.config.default_limit);
        if limit == 0 {
            limit = 1;
        }
        if limit > self.config.max_limit {
            limit = self.config.max_limit;
        }
        limit
    }

    pub async fn create_post(&self, new_post: NewPost) -> Result<Post, DomainError> {
        if new_post.title.trim().is_empty() {
            return Err(DomainError::EmptyTitle);
        }

        let model = entity::create(
            &self.db,
            entity::NewPostEntity {
                author: new_post.author,
                title: new_post.title,
                body: new_post.body,
                created_at: Utc::now(),
            },
        )
        .await
        .map_err(|e| DomainError::database(e.to_string()))?;

        Ok(entity_to_contract(model))
    }

    pub async fn get_post(&self, id: i64) -> Result<Post, DomainError> {
        entity::find_by_id(&self.db, id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .map(entity_to_contract)
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    /// List posts by 1-indexed page number. The requested page is trusted
    /// as-is (only `page >= 1` is enforced downstream); the limit is
    /// clamped by the service config.
    pub async fn list_posts(
        &self,
        query: PostPageQuery,
    ) -> Result<(Vec<Post>, PageMeta), DomainError> {
        let mut args = PageArgs::new(query.page.unwrap_or(1), self.clamp_limit(query.limit));
        if query.include_total {
            args = args.count_total();
        }

        let (rows, meta) = entity::page(&self.db, query.author.as_deref(), args).await?;
        Ok((rows.into_iter().map(entity_to_contract).collect(), meta))
    }

    /// Cursor feed over posts, walking forward with `after` or backward
    /// with `before`.
    pub async fn feed(
        &self,
        query: PostFeedQuery,
    ) -> Result<(Vec<Post>, CursorMeta), DomainError> {
        let args = CursorArgs {
            after: query.after,
            before: query.before,
            limit: self.clamp_limit(query.limit),
        };

        let (rows, meta) = entity::feed(&self.db, query.author.as_deref(), args).await?;
        Ok((rows.into_iter().map(entity_to_contract).collect(), meta))
    }
}
