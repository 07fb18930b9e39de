//! Task filter: translation of task filter and update requests.
//!
//! This crate converts loosely-typed, optional-field task search requests
//! into fully specified task queries, and applies presence-aware partial
//! update requests onto task entities.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Request, predicate, and task types with no infrastructure
//!   dependencies
//! - **Ports**: Abstract query builder and task store traits
//! - **Adapters**: Concrete implementations of ports (in-memory store)
//!
//! # Modules
//!
//! - [`task`]: Filter translation, variable predicates, and partial updates

pub mod task;
