//! Progression store integration tests.
//!
//! Tests are organized into modules by functionality:
//! - `fund_journey_tests`: Completing the built-in fund catalog end to end
//! - `file_slot_tests`: Persistence through the file-backed slot

mod progression {
    pub mod helpers;

    mod file_slot_tests;
    mod fund_journey_tests;
}
