//! Persisted progression record
//!
//! Field names on disk follow the stored game layout
//! (`level, xp, completed, streak, rerollsLeft, lastDaily`).

use serde::{Deserialize, Serialize};

/// One concrete challenge in today's set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeEntry {
    pub hobby: String,
    pub icon: String,
    pub text: String,
    /// XP granted on completion, within 200..=300
    #[serde(rename = "xp")]
    pub experience_reward: u32,
}

/// The challenge set valid for one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySet {
    /// Day identifier ("YYYY-MM-DD")
    pub date: String,
    #[serde(rename = "challenges", default)]
    pub entries: Vec<ChallengeEntry>,
}

impl DailySet {
    pub fn is_for(&self, day: &str) -> bool {
        self.date == day
    }
}

/// Per-user gamification state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionRecord {
    #[serde(default = "default_level")]
    pub level: u32,

    /// XP inside the current level (kept below `XP_PER_LEVEL` between operations)
    #[serde(rename = "xp", default)]
    pub experience: u32,

    #[serde(rename = "completed", default)]
    pub completed_count: u32,

    /// Incremented once per completed challenge, never reset by missed days
    #[serde(default)]
    pub streak: u32,

    #[serde(rename = "rerollsLeft", default)]
    pub rerolls_remaining: u32,

    #[serde(rename = "lastDaily", default)]
    pub daily_set: Option<DailySet>,
}

fn default_level() -> u32 {
    1
}

impl ProgressionRecord {
    /// A fresh record as created by profile setup
    pub fn new(starting_rerolls: u32) -> Self {
        Self {
            level: 1,
            experience: 0,
            completed_count: 0,
            streak: 0,
            rerolls_remaining: starting_rerolls,
            daily_set: None,
        }
    }

    /// Entries left in the current daily set (empty if none was generated)
    pub fn entries(&self) -> &[ChallengeEntry] {
        self.daily_set
            .as_ref()
            .map(|set| set.entries.as_slice())
            .unwrap_or(&[])
    }

    /// Whether a daily set exists for the given day
    pub fn has_set_for(&self, day: &str) -> bool {
        self.daily_set.as_ref().is_some_and(|set| set.is_for(day))
    }
}

impl Default for ProgressionRecord {
    fn default() -> Self {
        Self::new(1)
    }
}
