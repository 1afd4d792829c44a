//! Shared helpers for progression integration tests.

use std::sync::Arc;

use fundlaunch::progression::{
    adapters::bonus::FixedPointBonus,
    catalog::fund::{FundTrack, fund_launch_catalog},
    config::ProgressionConfig,
    domain::TaskId,
    ports::ProgressSlot,
    services::{ProgressionStore, TaskGenerator},
};
use mockable::DefaultClock;

/// Store over an arbitrary slot with a deterministic bonus.
pub type FundStore<S> = ProgressionStore<S, FixedPointBonus, DefaultClock>;

/// Opens a fund launch store over `slot` with the default configuration.
pub fn open_fund_store<S: ProgressSlot>(slot: &Arc<S>) -> FundStore<S> {
    let catalog = fund_launch_catalog().expect("built-in catalog should validate");
    ProgressionStore::open(
        Arc::clone(slot),
        TaskGenerator::new(catalog, FixedPointBonus(0)),
        Arc::new(DefaultClock),
        ProgressionConfig::default(),
    )
}

/// Opens a fund launch store and selects `track`.
pub fn open_fund_track<S: ProgressSlot>(slot: &Arc<S>, track: FundTrack) -> FundStore<S> {
    let mut store = open_fund_store(slot);
    let key = track.key().expect("valid track key");
    store.initialize(Some(&key));
    store
}

/// Repeatedly completes every unlocked, incomplete task.
///
/// Returns the completion order. Stops when no further task unlocks.
pub fn complete_everything<S: ProgressSlot>(store: &mut FundStore<S>) -> Vec<TaskId> {
    let mut order = Vec::new();
    loop {
        let ready: Vec<TaskId> = store
            .all_tasks()
            .into_iter()
            .filter(|task| !task.is_completed())
            .map(|task| task.id())
            .filter(|id| store.is_unlocked(*id))
            .collect();
        if ready.is_empty() {
            return order;
        }
        for id in ready {
            assert!(store.complete_task(id), "task {id} should complete");
            order.push(id);
        }
    }
}
