//! History Query Module
//!
//! Filter, ordering and result types for `GET /history`.

pub mod filters;
pub mod orderby;
pub mod projection;
pub mod result;

pub use filters::OperationFilter;
pub use orderby::{OrderBy, SortDirection, SortField};
pub use projection::HistoryProjection;
pub use result::{HistoryEntry, HistoryResponse, SumResponse};
