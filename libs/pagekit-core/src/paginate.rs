use crate::error::PaginateError;
use crate::page::{paginate_with_pages, PageArgs, PageMeta};
use crate::scroll::{paginate_with_cursor, CursorArgs, CursorMeta};
use crate::token::CursorCodec;
use crate::window::Paginatable;

/// Pending pagination over a source, produced by [`PaginateExt::paginate`].
#[derive(Clone, Copy)]
pub struct Paginate<'a, S> {
    source: &'a S,
}

impl<S: Paginatable> Paginate<'_, S> {
    pub async fn with_pages(
        self,
        args: PageArgs,
    ) -> Result<(Vec<S::Row>, PageMeta), PaginateError<S::Error>> {
        paginate_with_pages(self.source, args).await
    }

    pub async fn with_cursor<C>(
        self,
        codec: &C,
        args: CursorArgs,
    ) -> Result<(Vec<S::Row>, CursorMeta), PaginateError<S::Error>>
    where
        C: CursorCodec<Row = S::Row, Key = S::Key>,
    {
        paginate_with_cursor(self.source, codec, args).await
    }
}

/// Fluent entry point so call sites read as a pipeline:
/// `source.paginate().with_pages(..)` / `.with_cursor(..)`.
/// Pure dispatch over the two free functions, nothing more.
pub trait PaginateExt: Paginatable + Sized {
    fn paginate(&self) -> Paginate<'_, Self> {
        Paginate { source: self }
    }
}

impl<S: Paginatable + Sized> PaginateExt for S {}
