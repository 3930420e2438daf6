use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Post not found: {id}")]
    PostNotFound { id: i64 },

    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Invalid pagination: {message}")]
    InvalidPagination { message: String },

    #[error("Invalid cursor: {message}")]
    InvalidCursor { message: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn post_not_found(id: i64) -> Self {
        Self::PostNotFound { id }
    }

    pub fn invalid_pagination(message: impl Into<String>) -> Self {
        Self::InvalidPagination {
            message: message.into(),
        }
    }

    pub fn invalid_cursor(message: impl Into<String>) -> Self {
        Self::InvalidCursor {
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

impl From<pagekit_core::PaginateError<sea_orm::DbErr>> for DomainError {
    fn from(err: pagekit_core::PaginateError<sea_orm::DbErr>) -> Self {
        use pagekit_core::PaginateError;

        match err {
            PaginateError::InvalidPage
            | PaginateError::InvalidLimit
            | PaginateError::ConflictingCursors => Self::invalid_pagination(err.to_string()),
            PaginateError::Cursor(cursor) => Self::invalid_cursor(cursor.to_string()),
            PaginateError::Store(db) => Self::database(db.to_string()),
        }
    }
}
