use serde::{Deserialize, Serialize};

use crate::error::PaginateError;
use crate::window::{Paginatable, Window};

/// Arguments for page-number pagination. `page` is 1-indexed.
#[derive(Clone, Copy, Debug)]
pub struct PageArgs {
    pub page: u64,
    pub limit: u64,
    pub count_total: bool,
}

impl PageArgs {
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page,
            limit,
            count_total: false,
        }
    }

    /// Also compute `total_count` and `page_count` (costs a second query).
    #[must_use]
    pub fn count_total(mut self) -> Self {
        self.count_total = true;
        self
    }
}

#[cfg_attr(feature = "with-utoipa", derive(utoipa::ToSchema))]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: u64,
    pub previous_page: Option<u64>,
    pub next_page: Option<u64>,
    pub is_first_page: bool,
    pub is_last_page: bool,
    pub page_count: Option<u64>,
    pub total_count: Option<u64>,
}

/// Fetch one page addressed by a 1-indexed page number.
///
/// With `count_total` the slice and the total count are issued together and
/// awaited together; `page_count` and `next_page` derive from the count and
/// the slice is fetched at the exact limit. Without it, a single query
/// over-fetches one sentinel row: its presence decides `next_page` and it
/// is popped off before the rows are returned.
///
/// `previous_page` derives from the requested page number alone and is
/// never checked against the data; a request for a page past the end of the
/// result set still reports `page - 1`.
pub async fn paginate_with_pages<S: Paginatable>(
    source: &S,
    args: PageArgs,
) -> Result<(Vec<S::Row>, PageMeta), PaginateError<S::Error>> {
    if args.page == 0 {
        return Err(PaginateError::InvalidPage);
    }
    if args.limit == 0 {
        return Err(PaginateError::InvalidLimit);
    }

    // A page whose byte offset cannot be represented is as unservable as
    // page zero.
    let skip = (args.page - 1)
        .checked_mul(args.limit)
        .ok_or(PaginateError::InvalidPage)?;
    let previous_page = (args.page > 1).then(|| args.page - 1);

    let (rows, next_page, page_count, total_count) = if args.count_total {
        let slice = source.fetch(Window::forward(args.limit).skip(skip));
        let total = source.count();
        let (rows, total) = tokio::try_join!(slice, total).map_err(PaginateError::Store)?;

        let page_count = total.div_ceil(args.limit);
        let next_page = (args.page < page_count).then(|| args.page + 1);
        (rows, next_page, Some(page_count), Some(total))
    } else {
        let over = args
            .limit
            .checked_add(1)
            .ok_or(PaginateError::InvalidLimit)?;
        let mut rows = source
            .fetch(Window::forward(over).skip(skip))
            .await
            .map_err(PaginateError::Store)?;

        let next_page = if rows.len() as u64 > args.limit {
            rows.pop();
            Some(args.page + 1)
        } else {
            None
        };
        (rows, next_page, None, None)
    };

    let meta = PageMeta {
        current_page: args.page,
        previous_page,
        next_page,
        is_first_page: previous_page.is_none(),
        is_last_page: next_page.is_none(),
        page_count,
        total_count,
    };
    Ok((rows, meta))
}
