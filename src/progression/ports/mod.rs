//! Port contracts for the progression store's outbound collaborators.

pub mod bonus;
pub mod slot;

pub use bonus::{MAX_POINT_BONUS, PointBonus};
pub use slot::{ProgressSlot, SlotError, SlotKey, SlotResult};
