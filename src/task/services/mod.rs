//! Application services for task filtering and partial updates.

mod filter;
mod service;
mod update;
mod variables;

pub use filter::translate_filter;
pub use service::{DEFAULT_SORT_KEY, TaskQueryError, TaskQueryResult, TaskQueryService};
pub use update::apply_update;
pub use variables::translate_variables;
