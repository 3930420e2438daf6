use serde::{Deserialize, Serialize};

use crate::error::PaginateError;
use crate::token::CursorCodec;
use crate::window::{Paginatable, Window};

/// Arguments for cursor pagination.
///
/// `after` and `before` are opaque tokens taken from a previous page's
/// `end_cursor` / `start_cursor`; at most one may be supplied. With neither,
/// the first page is fetched.
#[derive(Clone, Debug, Default)]
pub struct CursorArgs {
    pub after: Option<String>,
    pub before: Option<String>,
    pub limit: u64,
}

impl CursorArgs {
    pub fn first(limit: u64) -> Self {
        Self {
            after: None,
            before: None,
            limit,
        }
    }

    pub fn after(token: impl Into<String>, limit: u64) -> Self {
        Self {
            after: Some(token.into()),
            before: None,
            limit,
        }
    }

    pub fn before(token: impl Into<String>, limit: u64) -> Self {
        Self {
            after: None,
            before: Some(token.into()),
            limit,
        }
    }
}

#[cfg_attr(feature = "with-utoipa", derive(utoipa::ToSchema))]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorMeta {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

/// Fetch one cursor-bounded slice.
///
/// Anchored modes issue the primary window and an opposite-direction
/// existence probe together. The probe window is anchor-inclusive: the
/// anchor row itself belongs to the neighboring page, so its continued
/// existence is exactly what `has_previous_page` / `has_next_page` on that
/// side means. The primary window over-fetches one sentinel row to decide
/// whether the walk continues past this slice.
pub async fn paginate_with_cursor<S, C>(
    source: &S,
    codec: &C,
    args: CursorArgs,
) -> Result<(Vec<S::Row>, CursorMeta), PaginateError<S::Error>>
where
    S: Paginatable,
    C: CursorCodec<Row = S::Row, Key = S::Key>,
{
    if args.limit == 0 {
        return Err(PaginateError::InvalidLimit);
    }
    if args.after.is_some() && args.before.is_some() {
        return Err(PaginateError::ConflictingCursors);
    }
    // Sentinel over-fetch budget; a limit it cannot be computed for is
    // rejected up front.
    let over = args
        .limit
        .checked_add(1)
        .ok_or(PaginateError::InvalidLimit)?;
    let limit = args.limit as usize;

    let (rows, has_previous_page, has_next_page) = if let Some(token) = args.before.as_deref() {
        let anchor = codec.decode(token)?;
        let slice = source.fetch(Window::backward(over).anchored(anchor.clone()).skip(1));
        let next = source.exists(Window::forward(1).anchored(anchor));
        let (mut rows, has_next) = tokio::try_join!(slice, next).map_err(PaginateError::Store)?;

        let has_previous = rows.len() > limit;
        if has_previous {
            // Backward windows put the sentinel at the front.
            rows.remove(0);
        }
        (rows, has_previous, has_next)
    } else if let Some(token) = args.after.as_deref() {
        let anchor = codec.decode(token)?;
        let slice = source.fetch(Window::forward(over).anchored(anchor.clone()).skip(1));
        let previous = source.exists(Window::backward(1).anchored(anchor));
        let (mut rows, has_previous) =
            tokio::try_join!(slice, previous).map_err(PaginateError::Store)?;

        let has_next = rows.len() > limit;
        if has_next {
            rows.pop();
        }
        (rows, has_previous, has_next)
    } else {
        let mut rows = source
            .fetch(Window::forward(over))
            .await
            .map_err(PaginateError::Store)?;

        let has_next = rows.len() > limit;
        if has_next {
            rows.pop();
        }
        (rows, false, has_next)
    };

    let start_cursor = rows.first().map(|r| codec.encode(r));
    let end_cursor = rows.last().map(|r| codec.encode(r));

    Ok((
        rows,
        CursorMeta {
            has_next_page,
            has_previous_page,
            start_cursor,
            end_cursor,
        },
    ))
}
