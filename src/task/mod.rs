//! Task filtering and partial update translation.
//!
//! This module turns loosely-typed filter requests into fully specified task
//! queries and applies presence-aware update requests onto task entities.
//! Variable predicates are validated once and dispatched to either the task
//! or the process variable namespace. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Translation and orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
