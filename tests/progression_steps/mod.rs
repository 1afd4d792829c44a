//! Step definitions for skill tree progression scenarios.

mod given;
mod then;
mod when;
pub mod world;
