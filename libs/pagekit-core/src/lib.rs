//! Bidirectional pagination over an abstract row store.
//!
//! Two paginators share one source capability ([`Paginatable`]): a
//! page-number paginator addressed by a 1-indexed page and fixed page size,
//! and a cursor paginator anchored on opaque row-derived tokens. Both issue
//! at most two store queries per call (the slice plus a count or existence
//! probe, dispatched together) and assemble metadata describing where the
//! caller stands in the result set.
//!
//! This crate is store-agnostic; the `pagekit-db` crate binds it to SeaORM.

pub mod error;
pub mod page;
pub mod paginate;
pub mod scroll;
pub mod token;
pub mod window;

pub use error::{CursorError, PaginateError};
pub use page::{paginate_with_pages, PageArgs, PageMeta};
pub use paginate::PaginateExt;
pub use scroll::{paginate_with_cursor, CursorArgs, CursorMeta};
pub use token::{base64_url, CursorCodec, KeyCodec};
pub use window::{Paginatable, Take, Window};
