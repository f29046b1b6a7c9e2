mod error;
mod list_options;
mod sort;

pub use error::DomainError;
pub use list_options::ListOptions;
pub use sort::{SortDirection, SortKey};
