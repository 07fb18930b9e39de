//! Domain model for task filtering and partial updates.
//!
//! Request types arrive from the transport layer loosely typed; the domain
//! gives them closed types (`VariableValue`, `VariableOperation`,
//! `DelegationState`) and presence-aware fields (`Field`) so the services can
//! validate them deterministically.

mod delegation;
mod error;
mod field;
mod filter;
mod ids;
mod pagination;
mod sorting;
mod task;
mod update;
mod variable;

pub use delegation::{DelegationState, parse_delegation_state};
pub use error::InvalidArgument;
pub use field::Field;
pub use filter::FilterRequest;
pub use ids::TaskId;
pub use pagination::{DataPage, PageRequest, PaginationConfig, PaginationParams, SortOrder};
pub use sorting::{SortablePropertyRegistry, TaskQueryProperty, task_properties};
pub use task::Task;
pub use update::UpdateRequest;
pub use variable::{VariableOperation, VariablePredicate, VariableValue};
