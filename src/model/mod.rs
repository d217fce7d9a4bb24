//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod comment;
pub mod error;
pub mod key_action;
pub mod page_size;
pub mod sort;
pub mod user;

// Re-export for convenience
pub use comment::Comment;
pub use error::{AppError, FetchError, StorageError};
pub use key_action::KeyAction;
pub use page_size::{InvalidPageSize, PageSize};
pub use sort::{InconsistentSortState, SortDirection, SortField, SortOrder, SortState};
pub use user::{initials_of, Address, Company, Geo, User};
