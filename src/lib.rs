//! Fundlaunch: skill-tree progression engine for fund launch onboarding.
//!
//! This crate models the tasks a fund manager works through while launching
//! a fund. Tasks are generated per fund track, unlock as their prerequisites
//! complete, and are persisted between sessions.
//!
//! # Architecture
//!
//! Fundlaunch follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and randomness
//! - **Adapters**: Concrete implementations of ports (files, memory, RNG)
//!
//! # Modules
//!
//! - [`progression`]: Task catalog, unlock rules and the progression store

pub mod progression;
