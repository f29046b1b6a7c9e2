//! Domain types shared by the storage engine and the HTTP layer.

pub mod domain;

pub use domain::{DomainError, ListOptions, SortDirection, SortKey};
