//! Tests for slot and point bonus adapters.

use crate::progression::{
    adapters::{
        bonus::{FixedPointBonus, RngPointBonus},
        fs::FileSlot,
        memory::InMemorySlot,
    },
    ports::{MAX_POINT_BONUS, PointBonus, ProgressSlot, SlotKey},
};
use camino::Utf8PathBuf;
use rstest::rstest;
use tempfile::TempDir;

fn utf8_root(dir: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().join("state")).expect("temp dir should be UTF-8")
}

#[rstest]
fn in_memory_slot_round_trips_and_clears() {
    let slot = InMemorySlot::new();

    assert_eq!(slot.load(SlotKey::Progress).expect("load"), None);
    slot.save(SlotKey::Progress, "{}").expect("save");
    assert_eq!(
        slot.load(SlotKey::Progress).expect("load"),
        Some("{}".to_owned())
    );
    assert_eq!(slot.load(SlotKey::Onboarding).expect("load"), None);

    slot.clear(SlotKey::Progress).expect("clear");
    assert_eq!(slot.load(SlotKey::Progress).expect("load"), None);
}

#[rstest]
fn in_memory_slot_clones_share_storage() {
    let slot = InMemorySlot::new();
    let other = slot.clone();

    slot.save(SlotKey::Onboarding, "true").expect("save");

    assert_eq!(
        other.load(SlotKey::Onboarding).expect("load"),
        Some("true".to_owned())
    );
}

#[rstest]
fn file_slot_creates_missing_directories() {
    let temp = TempDir::new().expect("temp dir");
    let root = utf8_root(&temp);

    let slot = FileSlot::open(&root).expect("open file slot");

    assert_eq!(slot.root(), root.as_path());
    assert!(root.is_dir());
}

#[rstest]
fn file_slot_round_trips_payloads() {
    let temp = TempDir::new().expect("temp dir");
    let root = utf8_root(&temp);
    let slot = FileSlot::open(&root).expect("open file slot");

    assert_eq!(slot.load(SlotKey::Progress).expect("load"), None);
    slot.save(SlotKey::Progress, r#"{"version":1}"#).expect("save");
    slot.save(SlotKey::Progress, r#"{"version":2}"#).expect("overwrite");

    assert_eq!(
        slot.load(SlotKey::Progress).expect("load"),
        Some(r#"{"version":2}"#.to_owned())
    );
    assert!(root.join("skill-tree-progress.json").is_file());
    assert!(!root.join("skill-tree-progress.json.tmp").exists());
}

#[rstest]
fn file_slot_clear_is_idempotent() {
    let temp = TempDir::new().expect("temp dir");
    let slot = FileSlot::open(utf8_root(&temp)).expect("open file slot");

    slot.save(SlotKey::Onboarding, "true").expect("save");
    slot.clear(SlotKey::Onboarding).expect("clear");
    slot.clear(SlotKey::Onboarding).expect("second clear");

    assert_eq!(slot.load(SlotKey::Onboarding).expect("load"), None);
}

#[rstest]
fn file_slot_reopens_existing_state() {
    let temp = TempDir::new().expect("temp dir");
    let root = utf8_root(&temp);
    FileSlot::open(&root)
        .expect("open file slot")
        .save(SlotKey::Progress, "saved")
        .expect("save");

    let reopened = FileSlot::open(&root).expect("reopen file slot");

    assert_eq!(
        reopened.load(SlotKey::Progress).expect("load"),
        Some("saved".to_owned())
    );
}

#[rstest]
fn seeded_bonus_is_reproducible_and_bounded() {
    let mut first = RngPointBonus::seeded(42);
    let mut second = RngPointBonus::seeded(42);

    let drawn: Vec<u32> = (0..64).map(|_| first.next_bonus()).collect();
    let repeated: Vec<u32> = (0..64).map(|_| second.next_bonus()).collect();

    assert_eq!(drawn, repeated);
    assert!(drawn.iter().all(|bonus| *bonus <= MAX_POINT_BONUS));
}

#[rstest]
fn fixed_bonus_repeats_its_value() {
    let mut bonus = FixedPointBonus(3);

    assert_eq!(bonus.next_bonus(), 3);
    assert_eq!(bonus.next_bonus(), 3);
}
