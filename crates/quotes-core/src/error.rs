//! Error types for the quotes service

use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuoteError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    #[error("no author or text fields required")]
    MissingFields,

    #[error("id can only be a number")]
    InvalidId,

    #[error("record not found")]
    RecordNotFound,

    #[error("no records")]
    NoQuotesAvailable,

    #[error("author not found")]
    AuthorNotFound,

    #[error("deadline exceeded")]
    DeadlineExceeded,

    #[error("quote id space exhausted")]
    IdsExhausted,
}
