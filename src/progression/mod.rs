//! Skill-tree progression for fund launch onboarding.
//!
//! Tasks are generated from a static catalog, grouped into categories and
//! linked by dependencies. One category may act as a gate that must be
//! finished before any other task unlocks. The module follows hexagonal
//! architecture:
//!
//! - Domain types and pure rules in [`domain`]
//! - Static task templates in [`catalog`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Generation, mutation and persistence in [`services`]

pub mod adapters;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
