use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid orderBy: {0}. expected one of fileName, size, lastModified")]
    InvalidSortKey(String),

    #[error("invalid orderByDirection: {0}. expected one of Ascending, Descending")]
    InvalidSortDirection(String),
}
