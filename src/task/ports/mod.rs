//! Port contracts for task querying and updating.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod query;
pub mod store;

pub use query::{PredicateSink, ProcessVariableSink, TaskQuery, TaskVariableSink};
pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
