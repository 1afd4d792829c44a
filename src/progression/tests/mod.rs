//! Unit tests for skill-tree progression.

mod adapter_tests;
mod tree_tests;
mod unlock_tests;
