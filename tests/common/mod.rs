//! Shared test utilities for engine integration tests

use chrono::NaiveDate;
use tempfile::TempDir;

use hobbyverse::config::Settings;
use hobbyverse::profile::FinishedSetup;
use hobbyverse::store::SqliteStore;
use hobbyverse::{FixedClock, HobbyEngine, UserId};

pub type TestEngine = HobbyEngine<SqliteStore, FixedClock>;

pub const EMAIL: &str = "ada@example.com";

pub fn day(d: u32) -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2025, 9, d).expect("valid date"))
}

/// Opens (or reopens) the database inside `dir`
pub fn open_store(dir: &TempDir) -> SqliteStore {
    SqliteStore::open(&dir.path().join("hobbyverse.db")).expect("Failed to open store")
}

pub fn engine(dir: &TempDir, clock: FixedClock, seed: u64) -> TestEngine {
    HobbyEngine::with_seed(open_store(dir), clock, Settings::default(), seed)
}

/// Signs up a user and completes setup with the given hobbies
pub fn ready_user(engine: &TestEngine, hobbies: &[&str]) -> UserId {
    engine
        .signup("Ada", EMAIL, "secret")
        .expect("Failed to sign up");
    let user = UserId::new(EMAIL);
    engine
        .complete_setup(
            &user,
            FinishedSetup {
                avatar: "🦊".to_string(),
                hobbies: hobbies.iter().map(|h| h.to_string()).collect(),
                username: "foxy".to_string(),
            },
        )
        .expect("Failed to complete setup");
    user
}
