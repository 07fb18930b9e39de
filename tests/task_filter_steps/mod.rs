//! Step definitions for task filtering behaviour scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
