//! End-to-end completion of each fund track.

use std::sync::Arc;

use super::helpers::{complete_everything, open_fund_store, open_fund_track};
use fundlaunch::progression::{
    adapters::memory::InMemorySlot,
    catalog::fund::{FundTrack, ONBOARDING_CATEGORY},
    domain::{CategoryKey, TaskId},
};
use rstest::rstest;

#[rstest]
#[case(FundTrack::Sfr, 18)]
#[case(FundTrack::Commercial, 16)]
#[case(FundTrack::Specialty, 15)]
fn every_track_can_be_completed(#[case] track: FundTrack, #[case] total: usize) {
    let slot = Arc::new(InMemorySlot::new());
    let mut store = open_fund_track(&slot, track);

    let order = complete_everything(&mut store);

    let overall = store.overall_progress();
    assert_eq!(overall.total, total);
    assert_eq!(overall.completed, total);
    assert_eq!(overall.percent(), 100);
    assert_eq!(order.len(), total - 1);
}

#[rstest]
fn onboarding_finishes_before_any_track_task() {
    let slot = Arc::new(InMemorySlot::new());
    let mut store = open_fund_track(&slot, FundTrack::Commercial);

    let order = complete_everything(&mut store);

    let first_track_task = order
        .iter()
        .position(|id| id.value() >= 100)
        .expect("track tasks are completed");
    assert!(order.iter().take(first_track_task).all(|id| id.value() < 100));
    assert_eq!(first_track_task, 5);
}

#[rstest]
fn tasks_without_track_cover_only_onboarding() {
    let slot = Arc::new(InMemorySlot::new());
    let store = open_fund_store(&slot);

    let onboarding = CategoryKey::new(ONBOARDING_CATEGORY).expect("valid key");
    assert_eq!(store.all_tasks().len(), 6);
    assert_eq!(store.tasks_for(&onboarding).len(), 6);
    assert!(store.is_unlocked(TaskId::new(2)));
    assert!(!store.is_unlocked(TaskId::new(3)));
}

#[rstest]
fn switching_tracks_replaces_track_tasks() {
    let slot = Arc::new(InMemorySlot::new());
    let mut store = open_fund_track(&slot, FundTrack::Sfr);
    assert!(store.complete_task(TaskId::new(2)));

    let key = FundTrack::Commercial.key().expect("valid track key");
    store.initialize(Some(&key));

    assert!(store.task(TaskId::new(101)).is_none());
    assert!(store.task(TaskId::new(201)).is_some());
    assert_eq!(store.overall_progress().completed, 1);
}
