use thiserror::Error;

/// Cursor token decode failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CursorError {
    #[error("cursor is not valid base64")]
    InvalidBase64,

    #[error("cursor payload is not valid JSON")]
    InvalidJson,

    #[error("unsupported cursor version")]
    InvalidVersion,
}

/// Pagination failures.
///
/// Store errors pass through unmodified and are never caught, wrapped with
/// context, or retried here; converting them into HTTP responses is the
/// caller's job. Everything else is a precondition rejected before any
/// store query is issued.
#[derive(Debug, Error)]
pub enum PaginateError<E> {
    #[error("page number out of range (must be >= 1 and addressable)")]
    InvalidPage,

    #[error("limit out of range (must be >= 1 and addressable)")]
    InvalidLimit,

    #[error("`after` and `before` cursors are mutually exclusive")]
    ConflictingCursors,

    #[error(transparent)]
    Cursor(#[from] CursorError),

    #[error(transparent)]
    Store(E),
}
