//! Hobbyverse - daily hobby challenges
//!
//! Users pick hobbies and get one small randomized set of challenges per
//! calendar day. Completing a challenge awards XP (carried over into levels),
//! bumps the completion count and streak, and a limited reroll lets the user
//! swap the day's set for a new one.
//!
//! ## Layout
//!
//! - [`catalog`]: hobbies, icons and challenge pools
//! - [`progression`]: the per-user record and level math
//! - [`daily`], [`resolution`], [`reroll`]: the rules applied to that record
//! - [`store`]: key-value persistence (SQLite or in-memory)
//! - [`profile`]: accounts and the profile setup wizard
//! - [`engine`]: the facade a front end calls into

pub mod catalog;
pub mod clock;
pub mod config;
pub mod daily;
pub mod engine;
pub mod error;
pub mod profile;
pub mod progression;
pub mod reroll;
pub mod resolution;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::{DailySetView, HobbyEngine, StatusView};
pub use error::{HobbyError, Result};
pub use profile::UserId;
