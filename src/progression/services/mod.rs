//! Application services for generating, mutating and persisting progression.

mod generator;
mod onboarding;
mod shared;
mod snapshot;
mod store;

pub use generator::{BASE_POINTS, POINTS_PER_POSITION, TaskGenerator};
pub use onboarding::OnboardingFlag;
pub use shared::SharedProgressionStore;
pub use snapshot::{SNAPSHOT_VERSION, SavedProgress, SnapshotError};
pub use store::{ProgressionStore, StoreStatus};
