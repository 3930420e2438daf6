//! SeaORM binding for the pagekit pagination engine.
//!
//! A caller builds a normal `Select<E>` (filters and all), wraps it in a
//! [`KeySource`] anchored on a unique strictly ordered key column, and gets
//! a [`pagekit_core::Paginatable`] usable with both paginators:
//!
//! ```rust,ignore
//! use pagekit_core::{PageArgs, PaginateExt};
//! use pagekit_db::KeySource;
//!
//! let select = post::Entity::find().filter(post::Column::Author.eq("alice"));
//! let source = KeySource::new(&db, select, post::Column::Id);
//! let (rows, meta) = source.paginate().with_pages(PageArgs::new(1, 25)).await?;
//! ```

pub mod query;
pub mod source;

pub use query::{reset_ordering, reset_selection};
pub use source::KeySource;
