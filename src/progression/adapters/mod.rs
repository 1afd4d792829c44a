//! Adapter implementations for progression ports.

pub mod bonus;
pub mod fs;
pub mod memory;
