use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, NotSet, QueryFilter, Set};

use pagekit_core::{CursorArgs, CursorMeta, KeyCodec, PageArgs, PageMeta, PaginateError,
    PaginateExt};
use pagekit_db::KeySource;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub author: String,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Data for creating a new post entity
pub struct NewPostEntity {
    pub author: String,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Cursor codec shared by every call site that pages over posts.
pub fn post_cursor() -> KeyCodec<Model, i64> {
    KeyCodec::new(|m: &Model| m.id)
}

fn filtered(author: Option<&str>) -> Select<Entity> {
    let mut select = Entity::find();
    if let Some(author) = author {
        select = select.filter(Column::Author.eq(author));
    }
    select
}

/// Find a post by ID
pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id(id).one(db).await
}

/// Create a new post
pub async fn create(db: &DatabaseConnection, new_post: NewPostEntity) -> Result<Model, DbErr> {
    let active_model = ActiveModel {
        id: NotSet,
        author: Set(new_post.author),
        title: Set(new_post.title),
        body: Set(new_post.body),
        created_at: Set(new_post.created_at),
    };

    active_model.insert(db).await
}

/// Fetch one page of posts by 1-indexed page number, optionally filtered
/// by author.
pub async fn page(
    db: &DatabaseConnection,
    author: Option<&str>,
    args: PageArgs,
) -> Result<(Vec<Model>, PageMeta), PaginateError<DbErr>> {
    let source: KeySource<'_, _, Entity, i64> = KeySource::new(db, filtered(author), Column::Id);
    source.paginate().with_pages(args).await
}

/// Fetch one cursor-bounded slice of posts, optionally filtered by author.
pub async fn feed(
    db: &DatabaseConnection,
    author: Option<&str>,
    args: CursorArgs,
) -> Result<(Vec<Model>, CursorMeta), PaginateError<DbErr>> {
    KeySource::new(db, filtered(author), Column::Id)
        .paginate()
        .with_cursor(&post_cursor(), args)
        .await
}
