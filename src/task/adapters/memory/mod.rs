//! In-memory task store and query criteria.

mod criteria;
mod like;
mod store;

pub use criteria::{TaskConstraint, TaskCriteria, VariableMatch, VariableScope};
pub use like::like_matches;
pub use store::InMemoryTaskStore;
