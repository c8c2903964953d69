//! Shared types for DRY compliance.

mod pagination;
mod response;

pub use pagination::{PageQuery, PageRequest, Paginated};
pub use response::{ApiResponse, EmptyObject};
