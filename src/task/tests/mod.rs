//! Unit tests for the task filter module.
