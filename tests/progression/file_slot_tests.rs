//! Persistence of progression state through the file-backed slot.

use std::sync::Arc;

use super::helpers::{open_fund_store, open_fund_track};
use camino::Utf8PathBuf;
use fundlaunch::progression::{
    adapters::fs::FileSlot,
    catalog::fund::FundTrack,
    domain::TaskId,
    ports::SlotKey,
    services::{OnboardingFlag, SavedProgress, StoreStatus},
};
use rstest::{fixture, rstest};
use tempfile::TempDir;

struct StateDir {
    _temp: TempDir,
    root: Utf8PathBuf,
}

impl StateDir {
    fn slot(&self) -> Arc<FileSlot> {
        Arc::new(FileSlot::open(&self.root).expect("open file slot"))
    }

    fn progress_file(&self) -> Utf8PathBuf {
        self.root.join(FileSlot::file_name(SlotKey::Progress))
    }
}

#[fixture]
fn state_dir() -> StateDir {
    let temp = TempDir::new().expect("temp dir");
    let root = Utf8PathBuf::from_path_buf(temp.path().join("skill-tree"))
        .expect("temp dir should be UTF-8");
    StateDir { _temp: temp, root }
}

#[rstest]
fn progress_survives_a_new_process(state_dir: StateDir) {
    let mut first = open_fund_track(&state_dir.slot(), FundTrack::Specialty);
    assert!(first.complete_task(TaskId::new(2)));
    assert!(first.complete_task(TaskId::new(3)));

    let second = open_fund_store(&state_dir.slot());

    assert_eq!(second.progression(), first.progression());
    assert_eq!(
        second
            .progression()
            .and_then(|progression| progression.track())
            .map(|track| track.as_str()),
        Some("specialty")
    );
}

#[rstest]
fn saved_file_is_a_versioned_snapshot(state_dir: StateDir) {
    let store = open_fund_track(&state_dir.slot(), FundTrack::Sfr);

    let payload = std::fs::read_to_string(state_dir.progress_file()).expect("progress file");
    let snapshot = SavedProgress::decode(&payload).expect("snapshot decodes");

    assert_eq!(snapshot.version(), 1);
    assert_eq!(Some(snapshot.progression()), store.progression());
}

#[rstest]
fn corrupt_file_is_replaced_with_fresh_state(state_dir: StateDir) {
    let slot = state_dir.slot();
    std::fs::write(state_dir.progress_file(), "{ truncated").expect("write corrupt file");

    let store = open_fund_store(&slot);

    assert_eq!(store.status(), StoreStatus::Ready);
    assert_eq!(store.overall_progress().completed, 1);
    let payload = std::fs::read_to_string(state_dir.progress_file()).expect("progress file");
    assert!(SavedProgress::decode(&payload).is_ok());
}

#[rstest]
fn onboarding_flag_lives_in_its_own_file(state_dir: StateDir) {
    let slot = state_dir.slot();
    let flag = OnboardingFlag::new(Arc::clone(&slot));
    flag.mark_complete().expect("mark onboarding complete");

    let mut store = open_fund_store(&slot);
    assert!(store.reset_category(None));

    assert!(flag.is_complete());
    assert!(
        state_dir
            .root
            .join(FileSlot::file_name(SlotKey::Onboarding))
            .is_file()
    );
}
