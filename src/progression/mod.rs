//! Progression: XP, levels, streaks and the stored daily set

mod levels;
mod record;

pub use levels::{
    lifetime_xp, normalize, progress_to_next, MAX_CHALLENGE_XP, MIN_CHALLENGE_XP, XP_PER_LEVEL,
};
pub use record::{ChallengeEntry, DailySet, ProgressionRecord};
